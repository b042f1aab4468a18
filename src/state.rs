// Shared state structs for a single browser tab.
// Used by the controller and the presentational shell; testable independently.

use serde::{Deserialize, Serialize};
use url::Url;

/// Coarse loading phase shown in the tab header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Loaded,
    Loading,
    /// Request issued, no response bytes yet. Displayed over `Loading`.
    Waiting,
}

/// Everything the tab knows about its page. Only `url` outlives the session.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub url: Url,
    pub title: String,
    pub favicon: Option<String>,
    pub status: LoadStatus,
}

impl NavigationState {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            title: String::new(),
            favicon: None,
            status: LoadStatus::Loaded,
        }
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            url: self.url.to_string(),
        }
    }
}

/// Back/forward button enablement, sampled from the webview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationFlags {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// The durable record of a tab: `{ "url": "<absolute URL>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub url: String,
}
