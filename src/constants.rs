//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Remote document store (GitHub Gist API) constants
pub mod gist {
    /// Default API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Collection path for creating gists
    pub const COLLECTION_PATH: &str = "/gists";

    /// Filename of the configuration document inside the gist
    pub const FILENAME: &str = "config.json";

    /// Description attached to every saved gist
    pub const DESCRIPTION: &str = "Child Lock Browser Configuration";

    /// Accept header value for the GitHub REST API
    pub const ACCEPT: &str = "application/vnd.github+json";

    /// Hint appended to errors that usually mean the token lacks the gist scope
    pub const SCOPE_HINT: &str = "check that the token has the 'gist' scope";
}

/// Local key-value storage
pub mod storage {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "childlock-config-editor";

    /// Storage filename
    pub const FILENAME: &str = "storage.json";

    /// Key holding the API token
    pub const TOKEN_KEY: &str = "gh_token";

    /// Key holding the remote document identifier
    pub const GIST_ID_KEY: &str = "gist_id";
}

/// Default document values used at editor start
pub mod defaults {
    pub const HOMEPAGE: &str = "https://edu.google.com";

    pub const BROWSER_TITLE: &str = "School Protected Browser";

    pub const BLOCKED_SITES: &[&str] = &["youtube.com", "facebook.com"];

    /// Folder assigned to every bookmark created in the editor
    pub const BOOKMARK_FOLDER: &str = "Cloud";

    /// Seed bookmarks as (title, url)
    pub const BOOKMARKS: &[(&str, &str)] = &[("Google Classroom", "https://classroom.google.com")];

    pub const WHITELIST_MODE: bool = false;
}

/// User-facing labels for remote operation triggers
pub mod labels {
    pub const SAVE_IDLE: &str = "Save to Cloud & Sync";
    pub const SAVE_BUSY: &str = "Saving...";
    pub const LOAD_IDLE: &str = "Load from Cloud";
    pub const LOAD_BUSY: &str = "Loading...";
}

/// GUI-specific constants (egui editor window)
pub mod gui {
    use egui;

    /// Editor window dimensions
    pub const WINDOW_WIDTH: f32 = 1020.0;
    pub const WINDOW_HEIGHT: f32 = 770.0;
    pub const WINDOW_MIN_WIDTH: f32 = 720.0;
    pub const WINDOW_MIN_HEIGHT: f32 = 540.0;

    /// Layout spacing
    pub const SECTION_SPACING: f32 = 15.0;
    pub const ITEM_SPACING: f32 = 8.0;

    /// Maximum height of each list widget before it scrolls
    pub const LIST_MAX_HEIGHT: f32 = 160.0;

    /// Width of single-line inputs in the add rows
    pub const INPUT_WIDTH: f32 = 220.0;

    /// Connection status colors
    pub const STATUS_ONLINE: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);
    pub const STATUS_UNKNOWN: egui::Color32 = egui::Color32::from_rgb(160, 160, 160);
    pub const STATUS_OFFLINE: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

    /// Alert level colors
    pub const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(100, 200, 100); // Green - success messages
    pub const COLOR_WARNING: egui::Color32 = egui::Color32::from_rgb(255, 200, 0); // Yellow - missing input
    pub const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 100, 100); // Red - failures
}
