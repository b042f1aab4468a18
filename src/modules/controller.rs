// Navigation state controller: single owner of one tab's NavigationState.
//
// Inputs come from three places: the address bar (user edits and commits),
// the embedded browser (lifecycle events), and the host (open/close/activate).
// Outputs go to the webview (load/back/forward), the host view-state store
// (URL only) and the tab chrome (icon/title, active tab only).

use url::Url;

use crate::host::{EmbeddedBrowser, TabChrome, ViewStateStore};
use crate::modules::address_bar::AddressBar;
use crate::modules::events::{BrowserEvent, LoadingPhase};
use crate::modules::menu::{self, MenuAction, MenuEntry};
use crate::modules::navigation;
use crate::modules::tab_chrome::{self, ContainerId, RedrawOutcome};
use crate::settings::Settings;
use crate::state::{LoadStatus, NavigationFlags, NavigationState, ViewState};

pub const NEW_TAB_TITLE: &str = "New Browser Tab";

/// Zoom steps are in zoom levels; factor = 1.2 ^ level.
const ZOOM_LEVEL_STEP: f64 = 0.2;
const ZOOM_LEVEL_BASE: f64 = 1.2;

pub struct NavigationController<B, S, C> {
    container: ContainerId,
    settings: Settings,
    browser: B,
    store: S,
    chrome: C,
    state: NavigationState,
    address_bar: AddressBar,
    flags: NavigationFlags,
    last_persisted: Option<String>,
}

impl<B, S, C> NavigationController<B, S, C>
where
    B: EmbeddedBrowser,
    S: ViewStateStore,
    C: TabChrome,
{
    /// Seed the tab from the store's view state, or from `settings.home` when
    /// there is none. Nothing is loaded until `on_open`.
    pub fn new(container: ContainerId, settings: Settings, browser: B, store: S, chrome: C) -> Self {
        let restored = store.load();
        let seed = restored
            .as_ref()
            .map(|v| v.url.clone())
            .unwrap_or_else(|| settings.home.clone());
        let url = navigation::resolve(&seed, &settings.default_engine());

        log::debug!("[Navigation] {:?} seeded with {}", container.0, url);

        Self {
            address_bar: AddressBar::new(&url),
            last_persisted: restored.map(|_| url.to_string()),
            state: NavigationState::new(url),
            flags: NavigationFlags::default(),
            container,
            settings,
            browser,
            store,
            chrome,
        }
    }

    // --- host lifecycle ---

    pub fn on_open(&mut self) {
        let url = self.state.url.clone();
        if let Err(e) = self.browser.load_url(&url) {
            log::warn!("[Navigation] Initial load of {} failed: {}", url, e);
        }
        self.refresh_flags();
        self.redraw();
    }

    /// Flush the final view state and hand it back to the host.
    pub fn on_close(&mut self) -> ViewState {
        self.persist();
        self.state.view_state()
    }

    /// Inactive tabs skip redraws; catch up once the host activates us.
    pub fn on_activated(&mut self) {
        self.redraw();
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    // --- address bar ---

    pub fn begin_edit(&mut self) {
        self.address_bar.begin_edit();
    }

    pub fn set_address_text(&mut self, text: &str) {
        self.address_bar.set_text(text);
    }

    pub fn cancel_edit(&mut self) {
        self.address_bar.cancel_edit(&self.state.url);
    }

    /// Resolve `input` and start loading it. The resolved URL is shown and
    /// persisted right away; `on_did_navigate` later has the final word.
    pub fn commit_navigation(&mut self, input: &str) {
        let url = navigation::resolve(input, &self.settings.default_engine());
        log::info!("[Navigation] {:?} -> {}", input, url);

        self.set_status(LoadStatus::Waiting);
        if let Err(e) = self.browser.load_url(&url) {
            // Terminal for this attempt; nothing is retried.
            log::warn!("[Navigation] Load of {} failed: {}", url, e);
            self.set_status(LoadStatus::Loaded);
        }

        self.address_bar.show(&url);
        self.address_bar.end_edit();
        self.state.url = url;
        self.persist();
        self.refresh_flags();
    }

    // --- embedded browser events ---

    /// Dispatch a webview event. Returns the menu to show for `ContextMenu`.
    pub fn handle_event(&mut self, event: BrowserEvent) -> Option<Vec<MenuEntry>> {
        match event {
            BrowserEvent::Navigated { url, .. } => self.on_did_navigate(&url),
            BrowserEvent::TitleUpdated { title } => self.on_title_updated(&title),
            BrowserEvent::FaviconUpdated { favicons } => self.on_favicon_updated(&favicons),
            BrowserEvent::LoadingPhase { phase } => self.on_loading_phase_changed(phase),
            BrowserEvent::ContextMenu { params } => return Some(menu::context_menu(&params)),
        }
        None
    }

    /// The webview's reported URL always wins over the optimistic one.
    ///
    /// Events carry no navigation sequence number, so a late event from a
    /// superseded navigation overwrites a newer commit. Known race, kept.
    pub fn on_did_navigate(&mut self, url: &str) {
        let url = match Url::parse(url) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("[Navigation] Ignoring unparseable navigation {:?}: {}", url, e);
                return;
            }
        };

        log::debug!("[Navigation] did-navigate {}", url);
        self.address_bar.show(&url);
        self.state.url = url;
        self.persist();
        self.refresh_flags();
    }

    pub fn on_loading_phase_changed(&mut self, phase: LoadingPhase) {
        let status = match phase {
            LoadingPhase::StartLoading if self.browser.is_waiting_for_response() => {
                LoadStatus::Waiting
            }
            LoadingPhase::StartLoading | LoadingPhase::ResponseStarted => LoadStatus::Loading,
            LoadingPhase::WaitingForResponse => LoadStatus::Waiting,
            LoadingPhase::FrameFinishLoad => self.sample_status(),
            LoadingPhase::FinishLoad | LoadingPhase::FailLoad | LoadingPhase::StopLoading => {
                LoadStatus::Loaded
            }
        };
        self.set_status(status);
    }

    pub fn on_title_updated(&mut self, title: &str) {
        if self.state.title != title {
            self.state.title = title.to_string();
            self.redraw();
        }
    }

    pub fn on_favicon_updated(&mut self, favicons: &[String]) {
        let favicon = favicons.first().cloned();
        if self.state.favicon != favicon {
            self.state.favicon = favicon;
            self.redraw();
        }
    }

    // --- history ---

    /// Returns whether a back navigation was issued.
    pub fn navigate_back(&mut self) -> bool {
        let issued = self.browser.can_go_back();
        if issued {
            self.browser.go_back();
        }
        self.refresh_flags();
        issued
    }

    pub fn navigate_forward(&mut self) -> bool {
        let issued = self.browser.can_go_forward();
        if issued {
            self.browser.go_forward();
        }
        self.refresh_flags();
        issued
    }

    pub fn reload(&mut self) {
        self.browser.reload();
    }

    // --- zoom ---

    pub fn zoom_in(&mut self) {
        self.step_zoom(ZOOM_LEVEL_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.step_zoom(-ZOOM_LEVEL_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.browser.set_zoom_factor(1.0);
    }

    fn step_zoom(&mut self, delta: f64) {
        let factor = self.browser.zoom_factor();
        let level = if factor > 0.0 {
            factor.ln() / ZOOM_LEVEL_BASE.ln()
        } else {
            0.0
        };
        self.browser.set_zoom_factor(ZOOM_LEVEL_BASE.powf(level + delta));
    }

    // --- menus ---

    pub fn pane_menu(&self) -> Vec<MenuEntry> {
        menu::pane_menu()
    }

    /// Run a menu action. Zoom, reload and history actions are consumed;
    /// anything the host owns (new tabs, clipboard, devtools, preferences) is
    /// handed back.
    pub fn perform(&mut self, action: MenuAction) -> Option<MenuAction> {
        match action {
            MenuAction::ZoomIn => self.zoom_in(),
            MenuAction::ZoomOut => self.zoom_out(),
            MenuAction::ResetZoom => self.reset_zoom(),
            MenuAction::Reload => self.reload(),
            MenuAction::Back => {
                self.navigate_back();
            }
            MenuAction::Forward => {
                self.navigate_forward();
            }
            other => return Some(other),
        }
        None
    }

    // --- read access ---

    /// Durable part of the state: the URL and nothing else.
    pub fn persistable_state(&self) -> ViewState {
        self.state.view_state()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn address_bar(&self) -> &AddressBar {
        &self.address_bar
    }

    pub fn navigation_flags(&self) -> NavigationFlags {
        self.flags
    }

    pub fn display_text(&self) -> &str {
        if self.state.title.is_empty() {
            NEW_TAB_TITLE
        } else {
            &self.state.title
        }
    }

    pub fn container(&self) -> &ContainerId {
        &self.container
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut B {
        &mut self.browser
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn chrome_mut(&mut self) -> &mut C {
        &mut self.chrome
    }

    // --- internals ---

    fn sample_status(&self) -> LoadStatus {
        if self.browser.is_waiting_for_response() {
            LoadStatus::Waiting
        } else if self.browser.is_loading() {
            LoadStatus::Loading
        } else {
            LoadStatus::Loaded
        }
    }

    fn set_status(&mut self, status: LoadStatus) {
        if self.state.status != status {
            self.state.status = status;
            self.redraw();
        }
    }

    fn redraw(&mut self) -> RedrawOutcome {
        tab_chrome::redraw(&mut self.chrome, &self.container, &self.state)
    }

    fn refresh_flags(&mut self) {
        self.flags = NavigationFlags {
            can_go_back: self.browser.can_go_back(),
            can_go_forward: self.browser.can_go_forward(),
        };
        self.chrome.set_navigation_buttons(&self.container, self.flags);
    }

    /// Write-through of the URL; identical successive URLs are written once.
    fn persist(&mut self) {
        let view_state = self.state.view_state();
        if self.last_persisted.as_deref() == Some(view_state.url.as_str()) {
            return;
        }

        match self.store.save(&view_state) {
            Ok(()) => self.last_persisted = Some(view_state.url),
            Err(e) => log::warn!("[ViewState] Failed to persist {}: {}", view_state.url, e),
        }
    }
}
