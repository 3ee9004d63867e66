//! Centralized constants
//!
//! Every fixed URL template, default and content type lives here so the
//! link builder, the QR providers and the HTTP surface agree on them.

/// Base of the WhatsApp click-to-chat deep link
pub const DEEP_LINK_BASE: &str = "https://wa.me/";

/// Remote QR image generation endpoint (Strategy A)
pub const REMOTE_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default edge length in pixels of the QR image
pub const DEFAULT_QR_SIZE: u32 = 200;

/// Smallest QR edge length accepted by configuration
pub const MIN_QR_SIZE: u32 = 32;

/// Largest QR edge length accepted by configuration
pub const MAX_QR_SIZE: u32 = 1000;

/// Contact number shipped with the page
pub const DEFAULT_CONTACT_PHONE_NUMBER: &str = "+15551540430";

/// E.164 caps a number at 15 digits
pub const MAX_PHONE_DIGITS: usize = 15;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8501;

/// Default bind address
pub const DEFAULT_BIND_ADDR: [u8; 4] = [0, 0, 0, 0];

/// Content type of locally generated QR images
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Content type of the SVG rendering
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Directory under the user config dir holding `CONFIG_FILE_NAME`
pub const CONFIG_DIR_NAME: &str = "msgscan";

/// Name of the TOML configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Route serving the locally generated PNG, also the remote fallback target
pub const LOCAL_QR_ROUTE: &str = "/qr.png";
