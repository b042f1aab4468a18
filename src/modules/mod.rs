// Module exports for pure logic
pub mod navigation;          // Address-bar input -> URL
pub mod events;              // Webview lifecycle events
pub mod controller;          // Per-tab navigation state owner
pub mod address_bar;
pub mod tab_chrome;          // Tab header icon/title mirroring
pub mod menu;
pub mod history_mirror;
