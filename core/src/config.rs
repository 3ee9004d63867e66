//! Deployment configuration
//!
//! Read from a TOML file, for example:
//!
//! ```toml
//! contact_phone_number = "+15551540430"
//! qr_provider = "local"   # or "remote"
//! qr_size = 200
//! bind_addr = "0.0.0.0"
//! port = 8501
//! ```
//!
//! Every key is optional. The contact number is validated while parsing,
//! so a malformed number stops startup instead of rendering a broken link.

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BIND_ADDR, DEFAULT_PORT, DEFAULT_QR_SIZE, MAX_QR_SIZE,
    MIN_QR_SIZE,
};
use crate::contact::PhoneNumber;
use crate::qr::ProviderKind;
use crate::{Error, Result};

/// Configuration for the contact page service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Destination of the contact link, E.164 format
    pub contact_phone_number: PhoneNumber,
    /// Strategy used to produce the QR image
    pub qr_provider: ProviderKind,
    /// Edge length of the QR image in pixels
    pub qr_size: u32,
    /// Address the HTTP server binds to
    pub bind_addr: IpAddr,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contact_phone_number: PhoneNumber::default(),
            qr_provider: ProviderKind::default(),
            qr_size: DEFAULT_QR_SIZE,
            bind_addr: IpAddr::from(DEFAULT_BIND_ADDR),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| Error::Config(format!("TOML parsing error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        tracing::info!("loading configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Load `path` if given, otherwise the per-user config file when it
    /// exists, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => {
                tracing::debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !(MIN_QR_SIZE..=MAX_QR_SIZE).contains(&self.qr_size) {
            return Err(Error::Config(format!(
                "qr_size must be between {} and {}, got {}",
                MIN_QR_SIZE, MAX_QR_SIZE, self.qr_size
            )));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// `<user config dir>/msgscan/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
