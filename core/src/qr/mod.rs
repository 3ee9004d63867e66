//! QR image providers for the contact deep link
//!
//! Two interchangeable strategies produce the image shown next to the
//! contact link:
//!
//! - [`RemoteQrProvider`] returns a URL on a third-party generation API;
//!   the browser fetches it at render time.
//! - [`LocalQrProvider`] encodes the link in-process and returns PNG bytes.
//!
//! Which one runs is chosen by [`ProviderKind`] in the configuration.

mod local;
mod remote;

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::constants::PNG_CONTENT_TYPE;
use crate::contact::DeepLink;
use crate::{Error, Result};

pub use local::LocalQrProvider;
pub use remote::RemoteQrProvider;

/// Image produced for a deep link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrImage {
    /// URL of an image generated by a remote service
    Remote(String),
    /// PNG bytes generated locally
    Png(Vec<u8>),
}

impl QrImage {
    pub fn is_remote(&self) -> bool {
        matches!(self, QrImage::Remote(_))
    }

    /// Value for an `<img src>`: the remote URL, or the PNG inlined as a
    /// base64 data URL.
    pub fn to_img_src(&self) -> String {
        match self {
            QrImage::Remote(url) => url.clone(),
            QrImage::Png(bytes) => format!("data:{};base64,{}", PNG_CONTENT_TYPE, BASE64.encode(bytes)),
        }
    }
}

/// Strategy used to source the QR image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Delegate to the remote generation endpoint
    #[serde(rename = "remote")]
    RemoteDelegation,
    /// Encode in-process
    #[default]
    #[serde(rename = "local")]
    LocalGeneration,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::RemoteDelegation => "remote",
            ProviderKind::LocalGeneration => "local",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(ProviderKind::RemoteDelegation),
            "local" => Ok(ProviderKind::LocalGeneration),
            other => Err(Error::Config(format!(
                "unknown QR provider {:?} (expected \"remote\" or \"local\")",
                other
            ))),
        }
    }
}

/// Turns a deep link into a displayable QR image.
pub trait QrImageProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn provide(&self, link: &DeepLink) -> Result<QrImage>;
}

/// Build the provider selected by `kind`, rendering images of `size` pixels.
pub fn provider_for(kind: ProviderKind, size: u32) -> Box<dyn QrImageProvider> {
    match kind {
        ProviderKind::RemoteDelegation => Box::new(RemoteQrProvider::new(size)),
        ProviderKind::LocalGeneration => Box::new(LocalQrProvider::new(size)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{build_deep_link, PhoneNumber};

    fn link() -> DeepLink {
        build_deep_link(&PhoneNumber::parse("+15551540430").unwrap())
    }

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!("remote".parse::<ProviderKind>().unwrap(), ProviderKind::RemoteDelegation);
        assert_eq!(" LOCAL ".parse::<ProviderKind>().unwrap(), ProviderKind::LocalGeneration);
        assert!("cloud".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_provider_kind_default_is_local() {
        assert_eq!(ProviderKind::default(), ProviderKind::LocalGeneration);
    }

    #[test]
    fn test_provider_for_selects_strategy() {
        let remote = provider_for(ProviderKind::RemoteDelegation, 200);
        assert_eq!(remote.kind(), ProviderKind::RemoteDelegation);
        assert!(remote.provide(&link()).unwrap().is_remote());

        let local = provider_for(ProviderKind::LocalGeneration, 200);
        assert_eq!(local.kind(), ProviderKind::LocalGeneration);
        let image = local.provide(&link()).unwrap();
        assert!(matches!(image, QrImage::Png(ref bytes) if !bytes.is_empty()));
    }

    #[test]
    fn test_img_src() {
        let remote = QrImage::Remote("https://example.com/qr.png".to_string());
        assert_eq!(remote.to_img_src(), "https://example.com/qr.png");

        let png = QrImage::Png(vec![0x89, b'P', b'N', b'G']);
        assert_eq!(png.to_img_src(), "data:image/png;base64,iVBORw==");
    }
}
