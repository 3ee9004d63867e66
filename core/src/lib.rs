//! msgscan core - contact page for the message scanning project
//!
//! Builds the WhatsApp click-to-chat deep link for the configured contact
//! number, produces a QR image of it (locally or through a remote API) and
//! serves the page that shows both.

pub mod config;
pub mod constants;
pub mod contact;
pub mod net;
pub mod page;
pub mod qr;
pub mod server;
pub mod service;

mod error;

pub use error::{Error, Result};

// Re-export key types for convenience
pub use config::Config;
pub use contact::{build_deep_link, DeepLink, PhoneNumber};
pub use page::PageContent;
pub use qr::{LocalQrProvider, ProviderKind, QrImage, QrImageProvider, RemoteQrProvider};
pub use server::Server;
pub use service::ContactService;
