//! User intents and the mutations they perform on the document
//!
//! Every form action maps to one [`EditorIntent`]. [`apply`] is the dispatch
//! table: it mutates the document and reports whether anything changed. It
//! performs no I/O and knows nothing about the view.

use crate::config::{AllowedSite, Bookmark, ConfigDocument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorIntent {
    SetTitle(String),
    SetHomepage(String),
    AddBlockedSite(String),
    DeleteBlockedSite(usize),
    AddBookmark { title: String, url: String },
    DeleteBookmark(usize),
    SetWhitelistMode(bool),
    /// `time_limit` is the raw text typed by the user
    AddAllowedSite { url: String, time_limit: String },
    DeleteAllowedSite(usize),
}

/// Parse a time limit field. Blank or unparseable text means "no limit".
pub fn parse_time_limit(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

/// Apply an intent to the document, returning `true` if it was modified
pub fn apply(doc: &mut ConfigDocument, intent: EditorIntent) -> bool {
    match intent {
        EditorIntent::SetTitle(title) => {
            doc.browser_title = title;
            true
        }
        EditorIntent::SetHomepage(homepage) => {
            doc.homepage = homepage;
            true
        }
        EditorIntent::AddBlockedSite(site) => {
            let site = site.trim();
            if site.is_empty() {
                return false;
            }
            doc.blocked_sites.push(site.to_string());
            true
        }
        EditorIntent::DeleteBlockedSite(idx) => remove_at(&mut doc.blocked_sites, idx),
        EditorIntent::AddBookmark { title, url } => {
            let (title, url) = (title.trim(), url.trim());
            if title.is_empty() || url.is_empty() {
                return false;
            }
            doc.cloud_bookmarks.push(Bookmark::new(title, url));
            true
        }
        EditorIntent::DeleteBookmark(idx) => remove_at(&mut doc.cloud_bookmarks, idx),
        EditorIntent::SetWhitelistMode(enabled) => {
            doc.whitelist_mode = enabled;
            true
        }
        EditorIntent::AddAllowedSite { url, time_limit } => {
            let url = url.trim();
            if url.is_empty() {
                return false;
            }
            doc.allowed_sites.push(AllowedSite {
                url: url.to_string(),
                time_limit: parse_time_limit(&time_limit),
            });
            true
        }
        EditorIntent::DeleteAllowedSite(idx) => remove_at(&mut doc.allowed_sites, idx),
    }
}

fn remove_at<T>(list: &mut Vec<T>, idx: usize) -> bool {
    if idx < list.len() {
        list.remove(idx);
        true
    } else {
        false
    }
}
