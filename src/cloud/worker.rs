//! Background executor for remote operations
//!
//! Requests are submitted from the UI thread and run on a dedicated
//! current-thread Tokio runtime, one task per request. Finished operations are
//! queued on a std channel that the UI drains each frame.

use std::sync::Arc;
use std::sync::mpsc;

use anyhow::{Context, Result};
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tracing::{debug, info};

use super::gist::{CloudError, GistClient};
use crate::config::ConfigDocument;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloudRequest {
    Save {
        token: String,
        /// `None` creates a new gist
        gist_id: Option<String>,
        content: String,
    },
    Load {
        token: String,
        gist_id: String,
    },
}

impl CloudRequest {
    /// The response reporting this request as failed with `err`
    pub fn into_failure(self, err: CloudError) -> CloudResponse {
        match self {
            CloudRequest::Save { token, .. } => CloudResponse::Saved {
                token,
                result: Err(err),
            },
            CloudRequest::Load { .. } => CloudResponse::Loaded(Err(err)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGist {
    pub id: String,
    pub raw_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedGist {
    pub id: String,
    pub raw_url: String,
    pub document: ConfigDocument,
}

#[derive(Debug)]
pub enum CloudResponse {
    /// `token` is the credential the save was made with
    Saved {
        token: String,
        result: Result<SavedGist, CloudError>,
    },
    Loaded(Result<LoadedGist, CloudError>),
}

/// Run a single request to completion
pub async fn execute(client: &GistClient, request: CloudRequest) -> CloudResponse {
    match request {
        CloudRequest::Save {
            token,
            gist_id,
            content,
        } => {
            let result = client
                .save(&token, gist_id.as_deref(), &content)
                .await
                .map(|file| SavedGist {
                    id: file.id,
                    raw_url: file.raw_url,
                });
            CloudResponse::Saved { token, result }
        }
        CloudRequest::Load { token, gist_id } => {
            CloudResponse::Loaded(load(client, &token, &gist_id).await)
        }
    }
}

async fn load(client: &GistClient, token: &str, gist_id: &str) -> Result<LoadedGist, CloudError> {
    let file = client.fetch(token, gist_id).await?;
    let document = ConfigDocument::from_json(&file.content)?;
    Ok(LoadedGist {
        id: file.id,
        raw_url: file.raw_url,
        document,
    })
}

pub struct CloudWorker {
    request_tx: UnboundedSender<CloudRequest>,
    response_rx: mpsc::Receiver<CloudResponse>,
}

impl CloudWorker {
    /// Start the worker thread. `notify` is called after each response is
    /// queued so the caller can wake its event loop.
    pub fn spawn<F>(client: GistClient, notify: F) -> Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let (request_tx, mut request_rx) = unbounded_channel::<CloudRequest>();
        let (response_tx, response_rx) = mpsc::channel();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build Tokio runtime for cloud sync")?;

        let client = Arc::new(client);
        let notify = Arc::new(notify);

        std::thread::Builder::new()
            .name("cloud-sync".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    info!(api_base = %client.api_base(), "Cloud sync worker started");
                    while let Some(request) = request_rx.recv().await {
                        let client = client.clone();
                        let response_tx = response_tx.clone();
                        let notify = notify.clone();

                        tokio::spawn(async move {
                            let response = execute(&client, request).await;
                            if response_tx.send(response).is_err() {
                                debug!("Editor gone, dropping cloud response");
                                return;
                            }
                            notify();
                        });
                    }
                    debug!("Cloud request channel closed, worker exiting");
                });
            })
            .context("Failed to spawn cloud sync thread")?;

        Ok(Self {
            request_tx,
            response_rx,
        })
    }

    /// Queue a request. Hands the request back if the worker has stopped.
    pub fn submit(&self, request: CloudRequest) -> Result<(), CloudRequest> {
        self.request_tx.send(request).map_err(|err| err.0)
    }

    /// Drain every finished response without blocking
    pub fn poll(&self) -> Vec<CloudResponse> {
        self.response_rx.try_iter().collect()
    }
}
