//! Serve command implementation.

use std::net::IpAddr;
use std::sync::Arc;

use msgscan_core::net::access_urls;
use msgscan_core::{Config, ContactService, ProviderKind, Server};

use crate::ui::print_banner;

/// Serve the contact page until Ctrl+C.
pub async fn serve(mut config: Config, port: Option<u16>, bind: Option<IpAddr>) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }

    print_banner();

    let server = Server::bind(config.socket_addr()).await?;
    let service = Arc::new(ContactService::new(config));

    println!("\x1b[1mContact:\x1b[0m  {}", service.phone_number());
    println!("\x1b[1mLink:\x1b[0m     {}", service.deep_link());
    println!("\x1b[1mQR:\x1b[0m       {}", service.provider_kind());
    if service.provider_kind() == ProviderKind::RemoteDelegation {
        println!("\x1b[1;33m!\x1b[0m The contact number is sent to the remote QR service on every page view.");
    }

    println!("\n\x1b[1;32m✓\x1b[0m You can now view the contact page in your browser:");
    for url in access_urls(server.local_addr()) {
        println!("    {}", url);
    }
    println!("\x1b[2mPress Ctrl+C to stop.\x1b[0m\n");

    // Handle Ctrl+C gracefully
    let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(1);
    ctrlc::set_handler(move || {
        let _ = tx.blocking_send(());
    })?;

    server
        .run(service, async move {
            rx.recv().await;
            println!("\n\x1b[1;33mShutting down...\x1b[0m");
        })
        .await?;

    Ok(())
}
