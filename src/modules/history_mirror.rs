// Back/forward stack mirrored from observed navigations, for webview
// controls that cannot report `canGoBack`/`canGoForward` themselves.

use std::collections::VecDeque;

/// A requested traversal the webview has not reported yet.
#[derive(Debug, Clone, Copy)]
struct Traversal {
    target: usize,
    from: usize,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryMirror {
    entries: Vec<String>,
    index: usize,
    /// Back/forward requests in issue order, each awaiting its report.
    pending: VecDeque<Traversal>,
}

impl HistoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Record a navigation the webview reported.
    ///
    /// A report that answers a pending traversal lands on that traversal's
    /// entry, replacing it if the page redirected; the forward stack stays.
    pub fn record(&mut self, url: &str) {
        if let Some(traversal) = self.pending.pop_front() {
            if let Some(entry) = self.entries.get_mut(traversal.target) {
                if entry.as_str() != url {
                    *entry = url.to_string();
                }
            }
            return;
        }

        if self.current() == Some(url) {
            return;
        }

        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
    }

    /// Step back; returns the URL to expect, or `None` at the start.
    pub fn go_back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.step_to(self.index - 1)
    }

    pub fn go_forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.step_to(self.index + 1)
    }

    /// Undo the most recent back/forward request, e.g. when the webview
    /// refused to run it.
    pub fn cancel_last(&mut self) {
        if let Some(traversal) = self.pending.pop_back() {
            self.index = traversal.from;
        }
    }

    fn step_to(&mut self, target: usize) -> Option<&str> {
        self.pending.push_back(Traversal {
            target,
            from: self.index,
        });
        self.index = target;
        self.current()
    }
}
