//! Local network helpers

use std::net::{IpAddr, SocketAddr};

/// Get the non-loopback IP addresses of this machine
pub fn get_local_ips() -> Vec<IpAddr> {
    let mut ips = Vec::new();

    if let Ok(interfaces) = get_if_addrs::get_if_addrs() {
        for iface in interfaces {
            if !iface.is_loopback() {
                ips.push(iface.ip());
            }
        }
    }

    ips
}

/// URLs under which a server bound to `addr` can be reached.
///
/// A wildcard bind is expanded to localhost plus every IPv4 interface
/// address; a specific bind yields just that address.
pub fn access_urls(addr: SocketAddr) -> Vec<String> {
    if !addr.ip().is_unspecified() {
        return vec![url_for(addr)];
    }

    let port = addr.port();
    let mut urls = vec![format!("http://localhost:{}", port)];
    urls.extend(
        get_local_ips()
            .into_iter()
            .filter(IpAddr::is_ipv4)
            .map(|ip| url_for(SocketAddr::new(ip, port))),
    );
    urls
}

fn url_for(addr: SocketAddr) -> String {
    // SocketAddr's Display brackets IPv6 hosts
    format!("http://{}", addr)
}
