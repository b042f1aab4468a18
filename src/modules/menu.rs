// Menus as data. The host turns these entries into native menu items and
// hands the chosen action back to `NavigationController::perform`.

use crate::modules::events::ContextMenuParams;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    OpenLinkInNewTab(String),
    CopyLinkText(String),
    CopyLinkUrl(String),
    OpenDevTools { x: i32, y: i32 },
    DuplicateTab,
    ZoomIn,
    ResetZoom,
    ZoomOut,
    OpenPreferences,
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Item { title: &'static str, action: MenuAction },
    Submenu { title: &'static str, items: Vec<MenuEntry> },
    Separator,
}

fn item(title: &'static str, action: MenuAction) -> MenuEntry {
    MenuEntry::Item { title, action }
}

/// Right-click menu inside the page.
pub fn context_menu(params: &ContextMenuParams) -> Vec<MenuEntry> {
    let mut entries = vec![
        item("Back", MenuAction::Back),
        item("Forward", MenuAction::Forward),
        item("Reload", MenuAction::Reload),
        MenuEntry::Separator,
    ];

    if !params.link_url.is_empty() {
        entries.push(item(
            "Open link in new tab",
            MenuAction::OpenLinkInNewTab(params.link_url.clone()),
        ));
        entries.push(MenuEntry::Submenu {
            title: "More link actions",
            items: vec![
                item("Copy link text", MenuAction::CopyLinkText(params.link_text.clone())),
                item("Copy link URL", MenuAction::CopyLinkUrl(params.link_url.clone())),
            ],
        });
        entries.push(MenuEntry::Separator);
    }

    entries.push(item(
        "Open Developer Tools",
        MenuAction::OpenDevTools {
            x: params.x,
            y: params.y,
        },
    ));

    entries
}

/// Entries appended to the host's pane ("more options" / tab header) menu.
pub fn pane_menu() -> Vec<MenuEntry> {
    vec![
        item("Duplicate Tab", MenuAction::DuplicateTab),
        MenuEntry::Separator,
        item("Zoom In", MenuAction::ZoomIn),
        item("Reset Zoom", MenuAction::ResetZoom),
        item("Zoom Out", MenuAction::ZoomOut),
        MenuEntry::Separator,
        item("Browser Preferences", MenuAction::OpenPreferences),
    ]
}
