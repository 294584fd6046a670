use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Event loop is gone")]
    EventLoopClosed,
}

/// Why a `/generate-ads` call produced no usable response.
///
/// Carries strings rather than source errors so it can travel inside
/// cloneable UI events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Could not reach the ad generator: {0}")]
    Transport(String),

    #[error("Ad generator returned HTTP {0}")]
    Status(u16),

    #[error("Ad generator sent an unreadable response: {0}")]
    InvalidBody(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard rejected the text: {0}")]
    Write(String),
}
