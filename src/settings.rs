use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const SETTINGS_FILE: &str = "settings.json";

/// A search provider: `href` is the base URL, `query` the name of the
/// parameter that receives the user's text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchEngine {
    pub name: String,
    pub href: String,
    pub query: String,
}

impl SearchEngine {
    pub fn new(name: &str, href: &str, query: &str) -> Self {
        Self {
            name: name.to_string(),
            href: href.to_string(),
            query: query.to_string(),
        }
    }

    pub fn duckduckgo() -> Self {
        Self::new("DuckDuckGo", "https://duckduckgo.com", "q")
    }

    pub fn builtin() -> Vec<Self> {
        vec![
            Self::duckduckgo(),
            Self::new("Google", "https://www.google.com/search", "q"),
            Self::new("Bing", "https://www.bing.com/search", "q"),
            Self::new("Brave", "https://search.brave.com/search", "q"),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub home: String,
    pub search_engines: Vec<SearchEngine>,
    pub default_search_engine: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            home: "https://start.duckduckgo.com".to_string(),
            search_engines: SearchEngine::builtin(),
            default_search_engine: "DuckDuckGo".to_string(),
        }
    }
}

impl Settings {
    /// The engine named by `default_search_engine`, else the first configured
    /// engine, else DuckDuckGo.
    pub fn default_engine(&self) -> SearchEngine {
        self.search_engines
            .iter()
            .find(|e| e.name == self.default_search_engine)
            .or_else(|| self.search_engines.first())
            .cloned()
            .unwrap_or_else(SearchEngine::duckduckgo)
    }

    pub fn get_path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE)
    }

    /// Missing fields take their defaults; an unreadable or corrupt file
    /// yields `Settings::default()`.
    pub fn load(data_dir: &Path) -> Self {
        let path = Self::get_path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("[Settings] Failed to parse settings: {}, returning defaults", e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("[Settings] Failed to read file: {}, returning defaults", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let path = Self::get_path(data_dir);
        let tmp_path = path.with_extension("tmp");

        fs::create_dir_all(data_dir)?;

        let json = serde_json::to_string_pretty(self)?;

        // tmp + rename so a crash never leaves a half-written file
        fs::write(&tmp_path, json)?;
        fs::rename(tmp_path, path)?;

        Ok(())
    }
}
