//! Contact service tying configuration, deep link and QR provider together

use std::time::{Duration, Instant};

use crate::config::Config;
use crate::contact::{build_deep_link, DeepLink, PhoneNumber};
use crate::page::{render_page, PageContent};
use crate::qr::{provider_for, LocalQrProvider, ProviderKind, QrImage, QrImageProvider};
use crate::Result;

/// Everything needed to render the contact page
pub struct ContactService {
    config: Config,
    content: PageContent,
    deep_link: DeepLink,
    provider: Box<dyn QrImageProvider>,
    local: LocalQrProvider,
    started_at: Instant,
}

impl ContactService {
    /// Create a service from a validated configuration
    pub fn new(config: Config) -> Self {
        Self::with_content(config, PageContent::default())
    }

    /// Create with custom page text
    pub fn with_content(config: Config, content: PageContent) -> Self {
        let deep_link = build_deep_link(&config.contact_phone_number);
        let provider = provider_for(config.qr_provider, config.qr_size);
        let local = LocalQrProvider::new(config.qr_size);

        tracing::info!(
            "contact service ready: {} via {} QR provider",
            deep_link,
            provider.kind()
        );

        Self {
            config,
            content,
            deep_link,
            provider,
            local,
            started_at: Instant::now(),
        }
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.config.contact_phone_number
    }

    pub fn deep_link(&self) -> &DeepLink {
        &self.deep_link
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    /// Time since the service was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// QR image from the configured provider
    pub fn qr_image(&self) -> Result<QrImage> {
        self.provider.provide(&self.deep_link)
    }

    /// Locally generated PNG, whatever provider is configured
    pub fn local_png(&self) -> Result<Vec<u8>> {
        self.local.render_png(&self.deep_link)
    }

    /// Locally generated SVG
    pub fn qr_svg(&self) -> Result<String> {
        self.local.render_svg(&self.deep_link)
    }

    /// Full HTML page
    pub fn render_page(&self) -> Result<String> {
        let image = self.qr_image()?;
        Ok(render_page(&self.content, &self.deep_link, &image, self.config.qr_size))
    }
}
