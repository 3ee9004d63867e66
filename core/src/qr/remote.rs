//! Strategy A: delegate QR rendering to a remote API

use super::{ProviderKind, QrImage, QrImageProvider};
use crate::constants::REMOTE_QR_ENDPOINT;
use crate::contact::DeepLink;
use crate::Result;

/// Builds image URLs on a third-party QR generation endpoint.
///
/// Nothing is fetched here. The browser requests the URL while rendering
/// the page, which sends the contact number to the third party each time.
#[derive(Debug, Clone)]
pub struct RemoteQrProvider {
    endpoint: String,
    size: u32,
}

impl RemoteQrProvider {
    pub fn new(size: u32) -> Self {
        Self::with_endpoint(REMOTE_QR_ENDPOINT, size)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, size: u32) -> Self {
        let endpoint = endpoint.into();
        tracing::warn!(
            "remote QR provider selected: the contact number is sent to {} on every render",
            endpoint
        );
        Self { endpoint, size }
    }

    /// Image URL encoding `link`
    pub fn image_url(&self, link: &DeepLink) -> String {
        format!(
            "{}?size={}x{}&data={}",
            self.endpoint,
            self.size,
            self.size,
            urlencoding::encode(link.as_str()),
        )
    }
}

impl QrImageProvider for RemoteQrProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::RemoteDelegation
    }

    fn provide(&self, link: &DeepLink) -> Result<QrImage> {
        Ok(QrImage::Remote(self.image_url(link)))
    }
}
