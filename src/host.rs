// Collaborators provided by the host application. The controller receives
// them through its constructor; nothing here is looked up globally.

use url::Url;

use crate::error::Result;
use crate::modules::tab_chrome::{ContainerId, TabIcon};
use crate::state::{NavigationFlags, ViewState};

/// The embedded webview control. Navigation, rendering and history live
/// entirely inside it; calls are fire-and-forget and completion is reported
/// later through `BrowserEvent`s.
pub trait EmbeddedBrowser {
    fn load_url(&mut self, url: &Url) -> Result<()>;
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn reload(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn zoom_factor(&self) -> f64;
    fn set_zoom_factor(&mut self, factor: f64);
    fn is_loading(&self) -> bool;
    fn is_waiting_for_response(&self) -> bool;
}

/// Host-persisted view state for one pane.
pub trait ViewStateStore {
    fn load(&self) -> Option<ViewState>;
    fn save(&mut self, state: &ViewState) -> Result<()>;
}

/// The host's tab header UI. Writes are best-effort: each returns `false`
/// when the anchor element is missing, and must never panic.
pub trait TabChrome {
    /// Whether `container` currently sits in the active workspace leaf.
    /// Queried fresh on every redraw.
    fn is_active_leaf(&self, container: &ContainerId) -> bool;
    fn set_icon(&mut self, container: &ContainerId, icon: &TabIcon) -> bool;
    fn set_title(&mut self, container: &ContainerId, title: &str) -> bool;
    fn set_navigation_buttons(&mut self, container: &ContainerId, flags: NavigationFlags) -> bool;
}
