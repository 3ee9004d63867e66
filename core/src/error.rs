use thiserror::Error;

/// msgscan error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid phone number {input:?}: {reason}")]
    InvalidPhoneNumber { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("QR encoding failed: {0}")]
    QrEncode(#[from] qrcode::types::QrError),

    #[error("Image encoding failed: {0}")]
    ImageEncode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_phone(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidPhoneNumber {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
