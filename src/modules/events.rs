//! Lifecycle events emitted by the embedded browser control.

use serde::{Deserialize, Serialize};

/// Raw loading signals as the webview reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadingPhase {
    /// `did-start-loading`: the tab's spinner should start.
    StartLoading,
    /// A network request is outstanding and no bytes have arrived yet.
    WaitingForResponse,
    /// First bytes of the response arrived.
    ResponseStarted,
    /// `did-frame-finish-load`: a frame (possibly a subframe) finished.
    FrameFinishLoad,
    /// `did-finish-load`.
    FinishLoad,
    /// `did-fail-load`.
    FailLoad,
    /// `did-stop-loading`.
    StopLoading,
}

impl LoadingPhase {
    /// Finish, fail and stop all settle the navigation.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::FinishLoad | Self::FailLoad | Self::StopLoading)
    }
}

/// Parameters of a `context-menu` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextMenuParams {
    pub x: i32,
    pub y: i32,
    /// Empty when the click was not on a link.
    #[serde(default, rename = "linkURL")]
    pub link_url: String,
    #[serde(default)]
    pub link_text: String,
}

/// Events emitted by an embedded browser instance.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEvent {
    /// `did-navigate` (`in_page == false`) or `did-navigate-in-page`.
    Navigated { url: String, in_page: bool },
    /// `page-title-updated`.
    TitleUpdated { title: String },
    /// `page-favicon-updated`, best candidate first.
    FaviconUpdated { favicons: Vec<String> },
    /// Any loading lifecycle signal.
    LoadingPhase { phase: LoadingPhase },
    /// `context-menu`.
    ContextMenu { params: ContextMenuParams },
}
