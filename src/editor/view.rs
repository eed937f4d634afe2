//! Read-only projection of the document into list rows and preview text

use crate::config::ConfigDocument;

/// One rendered list entry. `index` is passed back with the delete intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub index: usize,
    pub primary: String,
    pub secondary: Option<String>,
}

pub fn blocked_rows(doc: &ConfigDocument) -> Vec<ListRow> {
    doc.blocked_sites
        .iter()
        .enumerate()
        .map(|(index, site)| ListRow {
            index,
            primary: site.clone(),
            secondary: None,
        })
        .collect()
}

pub fn bookmark_rows(doc: &ConfigDocument) -> Vec<ListRow> {
    doc.cloud_bookmarks
        .iter()
        .enumerate()
        .map(|(index, bookmark)| ListRow {
            index,
            primary: bookmark.title.clone(),
            secondary: Some(bookmark.url.clone()),
        })
        .collect()
}

pub fn allowed_rows(doc: &ConfigDocument) -> Vec<ListRow> {
    doc.allowed_sites
        .iter()
        .enumerate()
        .map(|(index, site)| ListRow {
            index,
            primary: site.url.clone(),
            secondary: Some(format_time_limit(site.time_limit)),
        })
        .collect()
}

pub fn format_time_limit(limit: Option<u32>) -> String {
    match limit {
        Some(minutes) => format!("{minutes} min"),
        None => "No limit".to_string(),
    }
}

/// JSON preview text; falls back to the error message if serialization fails
pub fn preview(doc: &ConfigDocument) -> String {
    doc.to_pretty_json()
        .unwrap_or_else(|err| format!("// preview unavailable: {err}"))
}
