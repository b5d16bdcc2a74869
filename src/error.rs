//! Error types for cc2olx operations.

use thiserror::Error;

/// Errors that can occur while converting a cartridge to OLX.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Content type \"{0}\" is not supported.")]
    UnsupportedContentType(String),

    #[error("Invalid {content_type} details: {message}")]
    InvalidDetails {
        content_type: String,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML writing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    pub(crate) fn invalid_details(content_type: &str, message: impl Into<String>) -> Self {
        Error::InvalidDetails {
            content_type: content_type.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
