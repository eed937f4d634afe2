//! GitHub Gist client for the remote configuration document
//!
//! The document lives in a single private gist file. Saving creates the gist
//! when no identifier is known and updates it otherwise.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::gist;

#[derive(Debug, Error)]
pub enum CloudError {
    #[error("Please enter a GitHub token")]
    MissingToken,
    #[error("Need token and gist id to load")]
    MissingGistId,
    #[error("{message}{}", hint_suffix(.scope_hint))]
    Api {
        status: u16,
        message: String,
        scope_hint: Option<&'static str>,
    },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gist does not contain {}", gist::FILENAME)]
    MissingFile,
    #[error("cloud sync is unavailable")]
    Unavailable,
}

fn hint_suffix(hint: &Option<&'static str>) -> String {
    hint.map(|h| format!(" ({h})")).unwrap_or_default()
}

impl CloudError {
    /// Build an API error from a non-2xx status and its response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("API Error: {status}"));

        // GitHub answers 404 rather than 403 when the token cannot see or write gists
        let scope_hint = matches!(status, 403 | 404).then_some(gist::SCOPE_HINT);

        CloudError::Api {
            status,
            message,
            scope_hint,
        }
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Serialize)]
struct GistPayload<'a> {
    description: &'a str,
    public: bool,
    files: HashMap<&'a str, FileContent<'a>>,
}

#[derive(Serialize)]
struct FileContent<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct GistResponse {
    id: String,
    #[serde(default)]
    files: HashMap<String, GistFileResponse>,
}

#[derive(Deserialize)]
struct GistFileResponse {
    #[serde(default)]
    raw_url: String,
    #[serde(default)]
    content: String,
}

/// The configuration file as stored in a gist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistFile {
    pub id: String,
    pub raw_url: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct GistClient {
    http: Client,
    api_base: String,
}

impl GistClient {
    pub fn new(api_base: impl Into<String>) -> Result<Self, CloudError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.api_base, gist::COLLECTION_PATH)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.api_base, gist::COLLECTION_PATH, id)
    }

    /// Create a new private gist holding `content`
    pub async fn create(&self, token: &str, content: &str) -> Result<GistFile, CloudError> {
        self.send(Method::POST, self.collection_url(), token, Some(content))
            .await
    }

    /// Replace the content of an existing gist
    pub async fn update(&self, token: &str, id: &str, content: &str) -> Result<GistFile, CloudError> {
        self.send(Method::PATCH, self.item_url(id), token, Some(content))
            .await
    }

    pub async fn fetch(&self, token: &str, id: &str) -> Result<GistFile, CloudError> {
        self.send(Method::GET, self.item_url(id), token, None).await
    }

    /// Create when `id` is `None`, update otherwise
    pub async fn save(
        &self,
        token: &str,
        id: Option<&str>,
        content: &str,
    ) -> Result<GistFile, CloudError> {
        match id {
            Some(id) => self.update(token, id, content).await,
            None => self.create(token, content).await,
        }
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        token: &str,
        content: Option<&str>,
    ) -> Result<GistFile, CloudError> {
        if token.trim().is_empty() {
            return Err(CloudError::MissingToken);
        }

        debug!(method = %method, url = %url, "Sending gist request");

        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", token.trim()))
            .header(ACCEPT, gist::ACCEPT);

        if let Some(content) = content {
            let payload = GistPayload {
                description: gist::DESCRIPTION,
                public: false,
                files: HashMap::from([(gist::FILENAME, FileContent { content })]),
            };
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&payload)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = CloudError::from_response(status.as_u16(), &body);
            warn!(status = status.as_u16(), error = %err, "Gist API rejected request");
            return Err(err);
        }

        let mut gist: GistResponse = serde_json::from_str(&body)?;
        let file = gist
            .files
            .remove(gist::FILENAME)
            .ok_or(CloudError::MissingFile)?;

        Ok(GistFile {
            id: gist.id,
            raw_url: file.raw_url,
            content: file.content,
        })
    }
}
