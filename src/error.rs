// Crate-wide error type. Event handlers in the controller never surface these
// to callers; they are logged and absorbed.

#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("webview error: {0}")]
    Webview(String),

    #[error("view state error: {0}")]
    ViewState(String),
}

pub type Result<T> = std::result::Result<T, BrowserError>;
