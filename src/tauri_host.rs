// Tauri-backed embedded browser. Only compiled with the `tauri` feature.
//
// Tauri's webview exposes no history capability flags or loading state, so
// this adapter mirrors them from the events it forwards.

use std::sync::mpsc::Sender;

use tauri::webview::{PageLoadEvent, WebviewBuilder};
use tauri::{Runtime, Webview};
use url::Url;

use crate::error::{BrowserError, Result};
use crate::host::EmbeddedBrowser;
use crate::modules::events::{BrowserEvent, LoadingPhase};
use crate::modules::history_mirror::HistoryMirror;

pub struct TauriBrowser<R: Runtime> {
    webview: Webview<R>,
    history: HistoryMirror,
    zoom: f64,
    loading: bool,
}

impl<R: Runtime> TauriBrowser<R> {
    pub fn new(webview: Webview<R>) -> Self {
        Self {
            webview,
            history: HistoryMirror::new(),
            zoom: 1.0,
            loading: false,
        }
    }

    /// Feed every event through here before handing it to the controller so
    /// the mirrored history and loading flag stay current.
    pub fn observe(&mut self, event: &BrowserEvent) {
        match event {
            BrowserEvent::Navigated { url, .. } => self.history.record(url),
            BrowserEvent::LoadingPhase { phase } => match phase {
                LoadingPhase::StartLoading | LoadingPhase::ResponseStarted => self.loading = true,
                p if p.is_terminal() => self.loading = false,
                _ => {}
            },
            _ => {}
        }
    }

    fn eval(&self, js: &str) -> bool {
        match self.webview.eval(js) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[Webview] eval of {:?} failed: {}", js, e);
                false
            }
        }
    }
}

impl<R: Runtime> EmbeddedBrowser for TauriBrowser<R> {
    fn load_url(&mut self, url: &Url) -> Result<()> {
        self.webview
            .navigate(url.clone())
            .map_err(|e| BrowserError::Webview(e.to_string()))
    }

    fn go_back(&mut self) {
        if self.history.go_back().is_some() && !self.eval("window.history.back()") {
            self.history.cancel_last();
        }
    }

    fn go_forward(&mut self) {
        if self.history.go_forward().is_some() && !self.eval("window.history.forward()") {
            self.history.cancel_last();
        }
    }

    fn reload(&mut self) {
        self.eval("window.location.reload()");
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    fn set_zoom_factor(&mut self, factor: f64) {
        match self.webview.set_zoom(factor) {
            Ok(()) => self.zoom = factor,
            Err(e) => log::warn!("[Webview] set_zoom({}) failed: {}", factor, e),
        }
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    fn is_waiting_for_response(&self) -> bool {
        false
    }
}

/// Events a single page-load callback stands for. `Finished` is also the
/// only place Tauri reports the committed URL.
pub fn page_load_events(event: PageLoadEvent, url: &str) -> Vec<BrowserEvent> {
    match event {
        PageLoadEvent::Started => vec![BrowserEvent::LoadingPhase {
            phase: LoadingPhase::StartLoading,
        }],
        PageLoadEvent::Finished => vec![
            BrowserEvent::Navigated {
                url: url.to_string(),
                in_page: false,
            },
            BrowserEvent::LoadingPhase {
                phase: LoadingPhase::FinishLoad,
            },
        ],
    }
}

/// Forward the webview's page-load callbacks as `BrowserEvent`s.
pub fn with_event_sink<R: Runtime>(
    builder: WebviewBuilder<R>,
    sink: Sender<BrowserEvent>,
) -> WebviewBuilder<R> {
    builder.on_page_load(move |_webview, payload| {
        for event in page_load_events(payload.event(), payload.url().as_str()) {
            if sink.send(event).is_err() {
                log::debug!("[Webview] Event sink closed, dropping page-load event");
            }
        }
    })
}

/// Log backend for hosts embedding the Tauri browser.
pub fn log_plugin<R: Runtime>() -> tauri::plugin::TauriPlugin<R> {
    tauri_plugin_log::Builder::default()
        .level(log::LevelFilter::Info)
        .build()
}

#[cfg(all(test, feature = "tauri-test"))]
mod tests {
    use super::*;
    use tauri::test::{mock_app, MockRuntime};
    use tauri::{PhysicalPosition, PhysicalSize, WebviewUrl};

    fn mock_browser() -> (tauri::App<MockRuntime>, TauriBrowser<MockRuntime>) {
        let app = mock_app();
        let window = tauri::window::WindowBuilder::new(&app, "main")
            .build()
            .unwrap();
        let webview = window
            .add_child(
                WebviewBuilder::new("content", WebviewUrl::App("index.html".into())),
                PhysicalPosition::new(0, 0),
                PhysicalSize::new(800, 600),
            )
            .unwrap();
        (app, TauriBrowser::new(webview))
    }

    fn navigated(url: &str) -> BrowserEvent {
        BrowserEvent::Navigated {
            url: url.to_string(),
            in_page: false,
        }
    }

    fn phase(phase: LoadingPhase) -> BrowserEvent {
        BrowserEvent::LoadingPhase { phase }
    }

    #[test]
    fn loading_flag_follows_start_and_terminal_phases() {
        let (_app, mut browser) = mock_browser();
        assert!(!browser.is_loading());

        browser.observe(&phase(LoadingPhase::StartLoading));
        assert!(browser.is_loading());

        browser.observe(&phase(LoadingPhase::FrameFinishLoad));
        assert!(browser.is_loading());

        browser.observe(&phase(LoadingPhase::FailLoad));
        assert!(!browser.is_loading());

        browser.observe(&phase(LoadingPhase::ResponseStarted));
        browser.observe(&phase(LoadingPhase::StopLoading));
        assert!(!browser.is_loading());
    }

    #[test]
    fn capability_flags_follow_observed_navigations() {
        let (_app, mut browser) = mock_browser();
        assert!(!browser.can_go_back());

        browser.observe(&navigated("https://a.example/"));
        browser.observe(&navigated("https://b.example/"));
        assert!(browser.can_go_back());
        assert!(!browser.can_go_forward());

        browser.go_back();
        assert!(!browser.can_go_back());
        assert!(browser.can_go_forward());

        // The report for the back request does not truncate forward history
        browser.observe(&navigated("https://a.example/"));
        assert!(browser.can_go_forward());

        browser.go_forward();
        browser.observe(&navigated("https://b.example/"));
        assert!(browser.can_go_back());
        assert!(!browser.can_go_forward());
    }

    #[test]
    fn back_without_history_does_nothing() {
        let (_app, mut browser) = mock_browser();
        browser.observe(&navigated("https://a.example/"));
        browser.go_back();
        assert!(!browser.can_go_back());
        assert!(!browser.can_go_forward());
    }

    #[test]
    fn finished_page_load_reports_url_then_settles() {
        assert_eq!(
            page_load_events(PageLoadEvent::Finished, "https://a.example/"),
            vec![navigated("https://a.example/"), phase(LoadingPhase::FinishLoad)]
        );
        assert_eq!(
            page_load_events(PageLoadEvent::Started, "https://a.example/"),
            vec![phase(LoadingPhase::StartLoading)]
        );
    }
}
