// Tab header mirroring: which icon and title the active tab shows.

use serde::{Deserialize, Serialize};

use crate::host::TabChrome;
use crate::state::{LoadStatus, NavigationState};

/// Identifies the root container element a tab's view is mounted in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// What goes in the tab header's icon slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabIcon {
    /// Pulsing dots while waiting for the first response bytes.
    Waiting,
    /// Spinner while the page streams in.
    Loading,
    Favicon(String),
    /// Generic page glyph when no favicon is known.
    Page,
}

impl TabIcon {
    /// Waiting beats Loading beats the favicon beats the placeholder.
    pub fn for_state(state: &NavigationState) -> Self {
        match state.status {
            LoadStatus::Waiting => Self::Waiting,
            LoadStatus::Loading => Self::Loading,
            LoadStatus::Loaded => match &state.favicon {
                Some(src) if !src.is_empty() => Self::Favicon(src.clone()),
                _ => Self::Page,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawOutcome {
    Applied,
    /// The tab is not in the active leaf; re-apply on activation.
    Deferred,
    /// Header anchors were missing; nothing was written.
    MissingAnchor,
}

/// Push icon and title into the tab header if, and only if, `container` is
/// in the active leaf right now.
pub fn redraw<C: TabChrome + ?Sized>(
    chrome: &mut C,
    container: &ContainerId,
    state: &NavigationState,
) -> RedrawOutcome {
    if !chrome.is_active_leaf(container) {
        return RedrawOutcome::Deferred;
    }

    let icon_ok = chrome.set_icon(container, &TabIcon::for_state(state));
    let title_ok = chrome.set_title(container, &state.title);

    if icon_ok && title_ok {
        RedrawOutcome::Applied
    } else {
        log::debug!("[TabChrome] Header anchors missing for {:?}", container.0);
        RedrawOutcome::MissingAnchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingChrome;
    use rstest::rstest;
    use url::Url;

    fn state(status: LoadStatus, favicon: Option<&str>) -> NavigationState {
        let mut s = NavigationState::new(Url::parse("https://example.com/").unwrap());
        s.status = status;
        s.favicon = favicon.map(str::to_string);
        s.title = "Example".to_string();
        s
    }

    #[rstest]
    #[case(LoadStatus::Waiting, Some("f.ico"), TabIcon::Waiting)]
    #[case(LoadStatus::Loading, Some("f.ico"), TabIcon::Loading)]
    #[case(LoadStatus::Loaded, Some("f.ico"), TabIcon::Favicon("f.ico".to_string()))]
    #[case(LoadStatus::Loaded, Some(""), TabIcon::Page)]
    #[case(LoadStatus::Loaded, None, TabIcon::Page)]
    fn icon_precedence(
        #[case] status: LoadStatus,
        #[case] favicon: Option<&str>,
        #[case] expected: TabIcon,
    ) {
        assert_eq!(TabIcon::for_state(&state(status, favicon)), expected);
    }

    #[test]
    fn inactive_tab_is_not_redrawn() {
        let container = ContainerId::new("leaf-1");
        let mut chrome = RecordingChrome::default();

        let outcome = redraw(&mut chrome, &container, &state(LoadStatus::Loading, None));

        assert_eq!(outcome, RedrawOutcome::Deferred);
        assert!(chrome.icons.is_empty());
        assert!(chrome.titles.is_empty());
    }

    #[test]
    fn active_tab_gets_icon_and_title() {
        let container = ContainerId::new("leaf-1");
        let mut chrome = RecordingChrome::active(&container);

        let outcome = redraw(&mut chrome, &container, &state(LoadStatus::Loaded, Some("f.ico")));

        assert_eq!(outcome, RedrawOutcome::Applied);
        assert_eq!(chrome.icons, vec![TabIcon::Favicon("f.ico".to_string())]);
        assert_eq!(chrome.titles, vec!["Example".to_string()]);
    }

    #[test]
    fn missing_header_is_a_no_op() {
        let container = ContainerId::new("leaf-1");
        let mut chrome = RecordingChrome::active(&container);
        chrome.has_header = false;

        let outcome = redraw(&mut chrome, &container, &state(LoadStatus::Loaded, None));
        assert_eq!(outcome, RedrawOutcome::MissingAnchor);
    }
}
