//! The child-lock browser configuration document
//!
//! This is the JSON document the editor produces. It is uploaded verbatim
//! (pretty-printed) to the remote store and consumed by the restricted browser.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::defaults;

/// A bookmark pushed to the browser's cloud folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    #[serde(default = "default_bookmark_folder")]
    pub folder: String,
}

impl Bookmark {
    /// Create a bookmark in the default cloud folder
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            folder: default_bookmark_folder(),
        }
    }
}

/// A site reachable while whitelist mode is on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedSite {
    pub url: String,
    /// Daily time limit in minutes; `None` means unlimited
    #[serde(default)]
    pub time_limit: Option<u32>,
}

/// Top-level configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub homepage: String,
    pub blocked_sites: Vec<String>,
    pub browser_title: String,
    pub cloud_bookmarks: Vec<Bookmark>,

    // Whitelist settings were added after the first documents were published
    #[serde(default)]
    pub whitelist_mode: bool,
    #[serde(default)]
    pub allowed_sites: Vec<AllowedSite>,
}

fn default_bookmark_folder() -> String {
    defaults::BOOKMARK_FOLDER.to_string()
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            homepage: defaults::HOMEPAGE.to_string(),
            blocked_sites: defaults::BLOCKED_SITES
                .iter()
                .map(|site| site.to_string())
                .collect(),
            browser_title: defaults::BROWSER_TITLE.to_string(),
            cloud_bookmarks: defaults::BOOKMARKS
                .iter()
                .map(|(title, url)| Bookmark::new(*title, *url))
                .collect(),
            whitelist_mode: defaults::WHITELIST_MODE,
            allowed_sites: Vec::new(),
        }
    }
}

impl ConfigDocument {
    /// Serialize as two-space indented JSON, the format shown in the preview
    /// and stored remotely
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config document to JSON")
    }

    /// Parse a document previously produced by [`ConfigDocument::to_pretty_json`]
    /// or by an older editor
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}
