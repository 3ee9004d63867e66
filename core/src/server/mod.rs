//! HTTP server for the contact page

mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::constants::LOCAL_QR_ROUTE;
use crate::service::ContactService;
use crate::Result;

/// Build the router serving the page, its QR images and status endpoints
pub fn router(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/", get(routes::page))
        .route("/qr", get(routes::qr))
        .route(LOCAL_QR_ROUTE, get(routes::qr_png))
        .route("/qr.svg", get(routes::qr_svg))
        .route("/link", get(routes::link))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Bound HTTP server
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Server {
    /// Bind to an address and create the server
    pub async fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;

        tracing::info!("http server listening on {}", addr);

        Ok(Self { listener, addr })
    }

    /// Address actually bound, with the real port when 0 was requested
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run<F>(self, service: Arc<ContactService>, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, router(service))
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("http server on {} stopped", self.addr);
        Ok(())
    }
}
