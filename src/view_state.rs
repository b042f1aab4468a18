use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::host::ViewStateStore;
use crate::state::ViewState;

/// Persists one pane's `{ "url": ... }` record as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonViewStateStore {
    path: PathBuf,
}

impl JsonViewStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/view-state/<pane_id>.json`
    pub fn for_pane(data_dir: &Path, pane_id: &str) -> Self {
        Self::new(data_dir.join("view-state").join(format!("{}.json", pane_id)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ViewStateStore for JsonViewStateStore {
    fn load(&self) -> Option<ViewState> {
        if !self.path.exists() {
            return None;
        }

        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(state) => Some(state),
                Err(e) => {
                    log::warn!("[ViewState] Failed to parse {:?}: {}", self.path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("[ViewState] Failed to read {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn save(&mut self, state: &ViewState) -> Result<()> {
        let tmp_path = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(state)?;

        // Atomic write: tmp + rename (same as Settings::save)
        fs::write(&tmp_path, json)?;
        fs::rename(tmp_path, &self.path)?;

        Ok(())
    }
}
