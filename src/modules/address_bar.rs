// Address bar model: the input's text, edit mode, and the "pretty" split of
// the current URL shown while not editing.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Scheme without the trailing `:`.
    pub protocol: String,
    /// Host plus `:port` when present.
    pub host: String,
    pub path: String,
    /// Query without the leading `?`.
    pub query: String,
    /// Fragment without the leading `#`.
    pub hash: String,
}

impl From<&Url> for UrlParts {
    fn from(url: &Url) -> Self {
        let host = match (url.host_str(), url.port()) {
            (Some(h), Some(p)) => format!("{}:{}", h, p),
            (Some(h), None) => h.to_string(),
            _ => String::new(),
        };

        Self {
            protocol: url.scheme().to_string(),
            host,
            path: url.path().to_string(),
            query: url.query().unwrap_or_default().to_string(),
            hash: url.fragment().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBar {
    editing: bool,
    text: String,
    parts: UrlParts,
}

impl AddressBar {
    pub fn new(url: &Url) -> Self {
        Self {
            editing: false,
            text: url.to_string(),
            parts: UrlParts::from(url),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Current contents of the input element.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parts(&self) -> &UrlParts {
        &self.parts
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Keystrokes while editing.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Blur without committing: drop the typed text.
    pub fn cancel_edit(&mut self, url: &Url) {
        self.editing = false;
        self.text = url.to_string();
    }

    /// Mirror `url` into both the input and the pretty display.
    pub fn show(&mut self, url: &Url) {
        self.text = url.to_string();
        self.parts = UrlParts::from(url);
    }

    pub fn end_edit(&mut self) {
        self.editing = false;
    }
}
