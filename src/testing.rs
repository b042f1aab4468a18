// Host doubles shared by the unit tests.

use url::Url;

use crate::error::{BrowserError, Result};
use crate::host::{EmbeddedBrowser, TabChrome, ViewStateStore};
use crate::modules::tab_chrome::{ContainerId, TabIcon};
use crate::state::{NavigationFlags, ViewState};

#[derive(Debug)]
pub struct RecordingBrowser {
    pub loads: Vec<String>,
    pub back_calls: usize,
    pub forward_calls: usize,
    pub reloads: usize,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub zoom: f64,
    pub loading: bool,
    pub waiting: bool,
    pub fail_loads: bool,
}

impl Default for RecordingBrowser {
    fn default() -> Self {
        Self {
            loads: Vec::new(),
            back_calls: 0,
            forward_calls: 0,
            reloads: 0,
            can_go_back: false,
            can_go_forward: false,
            zoom: 1.0,
            loading: false,
            waiting: false,
            fail_loads: false,
        }
    }
}

impl EmbeddedBrowser for RecordingBrowser {
    fn load_url(&mut self, url: &Url) -> Result<()> {
        if self.fail_loads {
            return Err(BrowserError::Webview("load refused".to_string()));
        }
        self.loads.push(url.to_string());
        Ok(())
    }

    fn go_back(&mut self) {
        self.back_calls += 1;
    }

    fn go_forward(&mut self) {
        self.forward_calls += 1;
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }

    fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    fn can_go_forward(&self) -> bool {
        self.can_go_forward
    }

    fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    fn set_zoom_factor(&mut self, factor: f64) {
        self.zoom = factor;
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn is_waiting_for_response(&self) -> bool {
        self.waiting
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub initial: Option<ViewState>,
    pub saved: Vec<ViewState>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn seeded(url: &str) -> Self {
        Self {
            initial: Some(ViewState {
                url: url.to_string(),
            }),
            ..Default::default()
        }
    }
}

impl ViewStateStore for MemoryStore {
    fn load(&self) -> Option<ViewState> {
        self.saved.last().cloned().or_else(|| self.initial.clone())
    }

    fn save(&mut self, state: &ViewState) -> Result<()> {
        if self.fail {
            return Err(BrowserError::ViewState("disk full".to_string()));
        }
        self.saved.push(state.clone());
        Ok(())
    }
}

#[derive(Debug)]
pub struct RecordingChrome {
    pub active: Option<ContainerId>,
    pub has_header: bool,
    pub icons: Vec<TabIcon>,
    pub titles: Vec<String>,
    pub buttons: Vec<NavigationFlags>,
}

impl Default for RecordingChrome {
    fn default() -> Self {
        Self {
            active: None,
            has_header: true,
            icons: Vec::new(),
            titles: Vec::new(),
            buttons: Vec::new(),
        }
    }
}

impl RecordingChrome {
    pub fn active(container: &ContainerId) -> Self {
        Self {
            active: Some(container.clone()),
            ..Default::default()
        }
    }
}

impl TabChrome for RecordingChrome {
    fn is_active_leaf(&self, container: &ContainerId) -> bool {
        self.active.as_ref() == Some(container)
    }

    fn set_icon(&mut self, _container: &ContainerId, icon: &TabIcon) -> bool {
        if !self.has_header {
            return false;
        }
        self.icons.push(icon.clone());
        true
    }

    fn set_title(&mut self, _container: &ContainerId, title: &str) -> bool {
        if !self.has_header {
            return false;
        }
        self.titles.push(title.to_string());
        true
    }

    fn set_navigation_buttons(&mut self, _container: &ContainerId, flags: NavigationFlags) -> bool {
        self.buttons.push(flags);
        true
    }
}
