// Pane Browser Library Entry Point
// A browser tab for a host editor: resolves address-bar input, keeps the tab's
// URL, title, favicon and loading status in sync with an embedded webview, and
// persists the URL as the pane's view state.

pub mod error;
pub mod host;
pub mod settings;
pub mod view_state;

// Shared state
pub mod state;

// Pure logic modules (no webview or host imports)
pub mod modules;

#[cfg(feature = "tauri")]
pub mod tauri_host;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{BrowserError, Result};
pub use modules::controller::NavigationController;
pub use modules::events::{BrowserEvent, ContextMenuParams, LoadingPhase};
pub use modules::navigation::resolve;
pub use settings::{SearchEngine, Settings};
pub use state::{LoadStatus, NavigationFlags, NavigationState, ViewState};
