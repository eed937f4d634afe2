use tracing::{error, info, warn};

use crate::cloud::{CloudError, CloudRequest, CloudResponse};
use crate::config::{ConfigDocument, LocalStore};
use crate::constants::gui::*;
use crate::constants::labels;

use super::intent::{EditorIntent, apply};
use super::view;

/// How the remote document is addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierMode {
    /// Always update this gist; only the token is remembered locally
    Fixed(String),
    /// Create a gist on first save and remember its id
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Unknown,
    Connected,
    Errored,
}

impl ConnectionStatus {
    pub fn color(&self) -> egui::Color32 {
        match self {
            ConnectionStatus::Connected => STATUS_ONLINE,
            ConnectionStatus::Unknown => STATUS_UNKNOWN,
            ConnectionStatus::Errored => STATUS_OFFLINE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Unknown => "Not connected",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Errored => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub color: egui::Color32,
}

/// Text typed into the "add" rows but not yet committed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drafts {
    pub blocked_site: String,
    pub bookmark_title: String,
    pub bookmark_url: String,
    pub allowed_url: String,
    pub allowed_time_limit: String,
}

/// The editor session: owns the only live document plus all form state
pub struct EditorState {
    document: ConfigDocument,
    preview: String,
    identifier_mode: IdentifierMode,

    pub drafts: Drafts,
    pub token_input: String,
    /// Only shown and used in [`IdentifierMode::Dynamic`]
    pub gist_id_input: String,

    saving: bool,
    loading: bool,
    connection: ConnectionStatus,
    raw_url: Option<String>,
    notice: Option<StatusMessage>,

    restored_token: bool,
    startup_done: bool,
}

impl EditorState {
    pub fn new(identifier_mode: IdentifierMode, store: &LocalStore) -> Self {
        let document = ConfigDocument::default();
        let preview = view::preview(&document);
        let token_input = store.token().unwrap_or_default().to_string();
        let gist_id_input = match identifier_mode {
            IdentifierMode::Dynamic => store.gist_id().unwrap_or_default().to_string(),
            IdentifierMode::Fixed(_) => String::new(),
        };

        Self {
            document,
            preview,
            identifier_mode,
            drafts: Drafts::default(),
            restored_token: !token_input.is_empty(),
            token_input,
            gist_id_input,
            saving: false,
            loading: false,
            connection: ConnectionStatus::Unknown,
            raw_url: None,
            notice: None,
            startup_done: false,
        }
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn identifier_mode(&self) -> &IdentifierMode {
        &self.identifier_mode
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn connection(&self) -> ConnectionStatus {
        self.connection
    }

    pub fn raw_url(&self) -> Option<&str> {
        self.raw_url.as_deref()
    }

    pub fn notice(&self) -> Option<&StatusMessage> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn save_label(&self) -> &'static str {
        if self.saving {
            labels::SAVE_BUSY
        } else {
            labels::SAVE_IDLE
        }
    }

    pub fn load_label(&self) -> &'static str {
        if self.loading {
            labels::LOAD_BUSY
        } else {
            labels::LOAD_IDLE
        }
    }

    /// Apply an intent and refresh the preview if the document changed
    pub fn dispatch(&mut self, intent: EditorIntent) -> bool {
        let changed = apply(&mut self.document, intent);
        if changed {
            self.preview = view::preview(&self.document);
        }
        changed
    }

    pub fn add_blocked_site(&mut self) -> bool {
        let intent = EditorIntent::AddBlockedSite(self.drafts.blocked_site.clone());
        let added = self.dispatch(intent);
        if added {
            self.drafts.blocked_site.clear();
        }
        added
    }

    pub fn add_bookmark(&mut self) -> bool {
        let intent = EditorIntent::AddBookmark {
            title: self.drafts.bookmark_title.clone(),
            url: self.drafts.bookmark_url.clone(),
        };
        let added = self.dispatch(intent);
        if added {
            self.drafts.bookmark_title.clear();
            self.drafts.bookmark_url.clear();
        }
        added
    }

    pub fn add_allowed_site(&mut self) -> bool {
        let intent = EditorIntent::AddAllowedSite {
            url: self.drafts.allowed_url.clone(),
            time_limit: self.drafts.allowed_time_limit.clone(),
        };
        let added = self.dispatch(intent);
        if added {
            self.drafts.allowed_url.clear();
            self.drafts.allowed_time_limit.clear();
        }
        added
    }

    fn resolved_gist_id(&self) -> Option<String> {
        match &self.identifier_mode {
            IdentifierMode::Fixed(id) => Some(id.clone()),
            IdentifierMode::Dynamic => {
                let id = self.gist_id_input.trim();
                (!id.is_empty()).then(|| id.to_string())
            }
        }
    }

    fn warn_user(&mut self, err: CloudError) {
        self.notice = Some(StatusMessage {
            text: err.to_string(),
            color: COLOR_WARNING,
        });
    }

    /// Start a save. Returns `None` without touching the network when the
    /// token is missing or a save is already running.
    pub fn request_save(&mut self) -> Option<CloudRequest> {
        if self.saving {
            return None;
        }

        let token = self.token_input.trim().to_string();
        if token.is_empty() {
            self.warn_user(CloudError::MissingToken);
            return None;
        }

        let content = match self.document.to_pretty_json() {
            Ok(content) => content,
            Err(err) => {
                error!(error = ?err, "Failed to serialize document for upload");
                self.notice = Some(StatusMessage {
                    text: format!("Save failed: {err}"),
                    color: COLOR_ERROR,
                });
                return None;
            }
        };

        let gist_id = self.resolved_gist_id();
        info!(
            gist_id = gist_id.as_deref().unwrap_or("<new>"),
            "Saving configuration to cloud"
        );

        self.saving = true;
        Some(CloudRequest::Save {
            token,
            gist_id,
            content,
        })
    }

    /// Start a load. Returns `None` when the token or gist id is missing or a
    /// load is already running.
    pub fn request_load(&mut self) -> Option<CloudRequest> {
        if self.loading {
            return None;
        }

        let token = self.token_input.trim().to_string();
        if token.is_empty() {
            self.warn_user(CloudError::MissingToken);
            return None;
        }
        let Some(gist_id) = self.resolved_gist_id() else {
            self.warn_user(CloudError::MissingGistId);
            return None;
        };

        info!(gist_id = %gist_id, "Loading configuration from cloud");
        self.loading = true;
        Some(CloudRequest::Load { token, gist_id })
    }

    /// One-shot load at startup in fixed mode when a token was remembered
    /// from a previous session
    pub fn startup_request(&mut self) -> Option<CloudRequest> {
        if self.startup_done {
            return None;
        }
        self.startup_done = true;

        if !self.restored_token || !matches!(self.identifier_mode, IdentifierMode::Fixed(_)) {
            return None;
        }

        info!("Stored credentials found, loading configuration automatically");
        self.request_load()
    }

    /// Apply a finished remote operation
    pub fn complete(&mut self, response: CloudResponse, store: &mut LocalStore) {
        match response {
            CloudResponse::Saved { token, result } => {
                self.saving = false;
                match result {
                    Ok(saved) => {
                        let remembered_id = match self.identifier_mode {
                            IdentifierMode::Dynamic => {
                                self.gist_id_input = saved.id.clone();
                                Some(saved.id.as_str())
                            }
                            IdentifierMode::Fixed(_) => None,
                        };

                        self.notice = Some(
                            match store.remember_credentials(&token, remembered_id) {
                                Ok(()) => StatusMessage {
                                    text: "Saved to cloud! Use the raw URL in your browser config."
                                        .to_string(),
                                    color: COLOR_SUCCESS,
                                },
                                Err(err) => {
                                    error!(error = ?err, "Failed to remember credentials");
                                    StatusMessage {
                                        text: format!(
                                            "Saved to cloud, but credentials were not stored: {err}"
                                        ),
                                        color: COLOR_WARNING,
                                    }
                                }
                            },
                        );

                        info!(gist_id = %saved.id, "Configuration saved to cloud");
                        self.raw_url = Some(saved.raw_url);
                        self.connection = ConnectionStatus::Connected;
                    }
                    Err(err) => self.fail("Save failed", err),
                }
            }
            CloudResponse::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(loaded) => {
                        info!(gist_id = %loaded.id, "Configuration loaded from cloud");
                        self.document = loaded.document;
                        self.preview = view::preview(&self.document);
                        self.raw_url = Some(loaded.raw_url);
                        self.connection = ConnectionStatus::Connected;
                        self.notice = Some(StatusMessage {
                            text: "Configuration loaded from cloud".to_string(),
                            color: COLOR_SUCCESS,
                        });
                    }
                    Err(err) => self.fail("Load failed", err),
                }
            }
        }
    }

    fn fail(&mut self, action: &str, err: CloudError) {
        warn!(error = %err, "{action}");
        self.connection = ConnectionStatus::Errored;
        self.notice = Some(StatusMessage {
            text: format!("{action}: {err}"),
            color: COLOR_ERROR,
        });
    }

    /// Text to place on the clipboard, if the raw URL panel is visible
    pub fn copy_raw_url(&mut self) -> Option<String> {
        let url = self.raw_url.clone()?;
        self.notice = Some(StatusMessage {
            text: "URL copied to clipboard".to_string(),
            color: COLOR_SUCCESS,
        });
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::worker::{LoadedGist, SavedGist};
    use crate::constants::storage::{GIST_ID_KEY, TOKEN_KEY};
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> LocalStore {
        LocalStore::open(dir.path().join("storage.json")).unwrap()
    }

    fn not_found() -> CloudError {
        CloudError::from_response(404, r#"{"message":"Not Found"}"#)
    }

    #[test]
    fn test_new_state_restores_credentials() {
        let mut store = LocalStore::default();
        store.set(TOKEN_KEY, "ghp_saved");
        store.set(GIST_ID_KEY, "abc");

        let dynamic = EditorState::new(IdentifierMode::Dynamic, &store);
        assert_eq!(dynamic.token_input, "ghp_saved");
        assert_eq!(dynamic.gist_id_input, "abc");

        let fixed = EditorState::new(IdentifierMode::Fixed("fixed".to_string()), &store);
        assert_eq!(fixed.token_input, "ghp_saved");
        assert!(fixed.gist_id_input.is_empty());
        assert_eq!(fixed.connection(), ConnectionStatus::Unknown);
    }

    #[test]
    fn test_add_clears_drafts_only_on_success() {
        let mut state = EditorState::new(IdentifierMode::Dynamic, &LocalStore::default());

        state.drafts.blocked_site = "   ".to_string();
        assert!(!state.add_blocked_site());
        assert_eq!(state.drafts.blocked_site, "   ");
        assert_eq!(state.document().blocked_sites.len(), 2);

        state.drafts.blocked_site = "twitch.tv".to_string();
        assert!(state.add_blocked_site());
        assert!(state.drafts.blocked_site.is_empty());
        assert!(state.preview().contains("\"twitch.tv\""));

        state.drafts.bookmark_title = "Docs".to_string();
        assert!(!state.add_bookmark());
        assert_eq!(state.drafts.bookmark_title, "Docs");

        state.drafts.bookmark_url = "https://docs.example".to_string();
        assert!(state.add_bookmark());
        assert!(state.drafts.bookmark_title.is_empty());
        assert!(state.drafts.bookmark_url.is_empty());

        state.drafts.allowed_url = "code.org".to_string();
        state.drafts.allowed_time_limit = "x".to_string();
        assert!(state.add_allowed_site());
        assert_eq!(state.document().allowed_sites[0].time_limit, None);
        assert!(state.drafts.allowed_time_limit.is_empty());
    }

    #[test]
    fn test_preview_follows_every_mutation() {
        let mut state = EditorState::new(IdentifierMode::Dynamic, &LocalStore::default());
        state.dispatch(EditorIntent::SetTitle("Homework Mode".to_string()));
        state.dispatch(EditorIntent::SetWhitelistMode(true));

        assert_eq!(state.preview(), state.document().to_pretty_json().unwrap());
        assert!(state.preview().contains("\"browser_title\": \"Homework Mode\""));
    }

    #[test]
    fn test_save_without_token_makes_no_request() {
        let mut state = EditorState::new(IdentifierMode::Dynamic, &LocalStore::default());
        state.token_input = "   ".to_string();

        assert!(state.request_save().is_none());
        assert!(!state.is_saving());
        assert_eq!(state.save_label(), "Save to Cloud & Sync");
        assert_eq!(
            state.notice().map(|n| n.text.as_str()),
            Some("Please enter a GitHub token")
        );
        assert_eq!(state.connection(), ConnectionStatus::Unknown);
    }

    #[test]
    fn test_load_requires_token_and_id() {
        let mut state = EditorState::new(IdentifierMode::Dynamic, &LocalStore::default());
        assert!(state.request_load().is_none());

        state.token_input = "t".to_string();
        assert!(state.request_load().is_none());
        assert_eq!(
            state.notice().map(|n| n.text.as_str()),
            Some("Need token and gist id to load")
        );
        assert!(!state.is_loading());
    }

    #[test]
    fn test_save_request_targets() {
        let mut state = EditorState::new(IdentifierMode::Dynamic, &LocalStore::default());
        state.token_input = " ghp_x ".to_string();

        match state.request_save() {
            Some(CloudRequest::Save {
                token,
                gist_id,
                content,
            }) => {
                assert_eq!(token, "ghp_x");
                assert_eq!(gist_id, None);
                assert_eq!(content, state.preview());
            }
            other => panic!("unexpected request: {other:?}"),
        }
        assert!(state.is_saving());
        assert_eq!(state.save_label(), "Saving...");
        // Trigger stays disabled while busy
        assert!(state.request_save().is_none());

        let mut fixed = EditorState::new(
            IdentifierMode::Fixed("deadbeef".to_string()),
            &LocalStore::default(),
        );
        fixed.token_input = "ghp_x".to_string();
        fixed.gist_id_input = "ignored".to_string();
        assert!(matches!(
            fixed.request_save(),
            Some(CloudRequest::Save { gist_id: Some(id), .. }) if id == "deadbeef"
        ));
    }

    #[test]
    fn test_successful_save_dynamic_remembers_id() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let mut state = EditorState::new(IdentifierMode::Dynamic, &store);
        state.token_input = "ghp_x".to_string();
        state.request_save().unwrap();

        state.complete(
            CloudResponse::Saved {
                token: "ghp_x".to_string(),
                result: Ok(SavedGist {
                    id: "new-id".to_string(),
                    raw_url: "https://gist.example/raw/config.json".to_string(),
                }),
            },
            &mut store,
        );

        assert!(!state.is_saving());
        assert_eq!(state.gist_id_input, "new-id");
        assert_eq!(state.raw_url(), Some("https://gist.example/raw/config.json"));
        assert_eq!(state.connection(), ConnectionStatus::Connected);

        let reopened = LocalStore::open(store.path()).unwrap();
        assert_eq!(reopened.token(), Some("ghp_x"));
        assert_eq!(reopened.gist_id(), Some("new-id"));
    }

    #[test]
    fn test_successful_save_fixed_remembers_token_only() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let mut state = EditorState::new(IdentifierMode::Fixed("fixed".to_string()), &store);
        state.token_input = "ghp_x".to_string();
        state.request_save().unwrap();

        state.complete(
            CloudResponse::Saved {
                token: "ghp_x".to_string(),
                result: Ok(SavedGist {
                    id: "fixed".to_string(),
                    raw_url: "raw".to_string(),
                }),
            },
            &mut store,
        );

        let reopened = LocalStore::open(store.path()).unwrap();
        assert_eq!(reopened.token(), Some("ghp_x"));
        assert_eq!(reopened.gist_id(), None);
        assert!(state.gist_id_input.is_empty());
    }

    #[test]
    fn test_failed_save_leaves_document_and_store() {
        let dir = TempDir::new().unwrap();
        let mut store = temp_store(&dir);
        let mut state = EditorState::new(IdentifierMode::Dynamic, &store);
        state.token_input = "ghp_x".to_string();
        let before = state.document().clone();
        state.request_save().unwrap();

        state.complete(
            CloudResponse::Saved {
                token: "ghp_x".to_string(),
                result: Err(CloudError::from_response(403, "")),
            },
            &mut store,
        );

        assert!(!state.is_saving());
        assert_eq!(state.document(), &before);
        assert_eq!(state.connection(), ConnectionStatus::Errored);
        assert!(state.raw_url().is_none());
        assert_eq!(
            state.notice().map(|n| n.text.as_str()),
            Some("Save failed: API Error: 403 (check that the token has the 'gist' scope)")
        );
        assert!(!store.path().exists());
    }

    #[test]
    fn test_load_not_found_keeps_document() {
        let mut store = LocalStore::default();
        let mut state = EditorState::new(IdentifierMode::Fixed("gone".to_string()), &store);
        state.token_input = "ghp_x".to_string();
        state.dispatch(EditorIntent::AddBlockedSite("twitch.tv".to_string()));
        let before = state.document().clone();

        state.request_load().unwrap();
        assert_eq!(state.load_label(), "Loading...");

        state.complete(CloudResponse::Loaded(Err(not_found())), &mut store);

        assert_eq!(state.document(), &before);
        assert_eq!(state.connection(), ConnectionStatus::Errored);
        assert!(!state.is_loading());
        assert_eq!(state.load_label(), "Load from Cloud");
    }

    #[test]
    fn test_load_replaces_whole_document() {
        let mut store = LocalStore::default();
        let mut state = EditorState::new(IdentifierMode::Fixed("abc".to_string()), &store);
        state.token_input = "ghp_x".to_string();
        state.request_load().unwrap();

        let remote = ConfigDocument {
            homepage: "https://remote.example".to_string(),
            blocked_sites: vec!["remote.com".to_string()],
            browser_title: "Remote".to_string(),
            cloud_bookmarks: Vec::new(),
            whitelist_mode: true,
            allowed_sites: Vec::new(),
        };
        state.complete(
            CloudResponse::Loaded(Ok(LoadedGist {
                id: "abc".to_string(),
                raw_url: "raw".to_string(),
                document: remote.clone(),
            })),
            &mut store,
        );

        assert_eq!(state.document(), &remote);
        assert_eq!(state.preview(), remote.to_pretty_json().unwrap());
        assert_eq!(state.raw_url(), Some("raw"));
        assert_eq!(state.connection(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_startup_load_fires_once_with_stored_token() {
        let mut store = LocalStore::default();
        store.set(TOKEN_KEY, "ghp_saved");

        let mut state = EditorState::new(IdentifierMode::Fixed("abc".to_string()), &store);
        assert!(matches!(
            state.startup_request(),
            Some(CloudRequest::Load { gist_id, .. }) if gist_id == "abc"
        ));
        assert!(state.startup_request().is_none());

        // Dynamic mode never loads on its own, even with a remembered id
        let mut dynamic = EditorState::new(IdentifierMode::Dynamic, &store);
        assert!(dynamic.startup_request().is_none());
        assert!(dynamic.notice().is_none());

        store.set(GIST_ID_KEY, "abc");
        let mut remembered = EditorState::new(IdentifierMode::Dynamic, &store);
        assert_eq!(remembered.gist_id_input, "abc");
        assert!(remembered.startup_request().is_none());
        assert!(!remembered.is_loading());

        // A token typed this session does not trigger the startup load
        let mut fresh = EditorState::new(
            IdentifierMode::Fixed("abc".to_string()),
            &LocalStore::default(),
        );
        fresh.token_input = "typed".to_string();
        assert!(fresh.startup_request().is_none());
    }

    #[test]
    fn test_copy_raw_url() {
        let mut store = LocalStore::default();
        let mut state = EditorState::new(IdentifierMode::Fixed("abc".to_string()), &store);
        assert!(state.copy_raw_url().is_none());

        state.token_input = "t".to_string();
        state.request_load().unwrap();
        state.complete(
            CloudResponse::Loaded(Ok(LoadedGist {
                id: "abc".to_string(),
                raw_url: "https://gist.example/raw".to_string(),
                document: ConfigDocument::default(),
            })),
            &mut store,
        );

        assert_eq!(
            state.copy_raw_url().as_deref(),
            Some("https://gist.example/raw")
        );
        assert_eq!(
            state.notice().map(|n| n.text.as_str()),
            Some("URL copied to clipboard")
        );
    }
}
