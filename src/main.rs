#![deny(unsafe_code)]

mod cloud;
mod config;
mod constants;
mod editor;
mod gui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level as TraceLevel;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::config::LocalStore;
use crate::editor::IdentifierMode;
use crate::gui::EditorOptions;

#[derive(Parser)]
#[command(name = "childlock-config-editor")]
#[command(version)]
#[command(about = "Configuration editor for the child-lock browser profile", long_about = None)]
struct Cli {
    /// Always save to and load from this gist instead of creating one on first save
    #[arg(long)]
    gist_id: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = constants::gist::API_BASE)]
    api_url: String,

    /// Path of the local storage file holding the token and gist id
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn identifier_mode(&self) -> IdentifierMode {
        match self.gist_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => IdentifierMode::Fixed(id.to_string()),
            _ => IdentifierMode::Dynamic,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.debug {
        TraceLevel::DEBUG
    } else {
        TraceLevel::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let options = EditorOptions {
        identifier_mode: cli.identifier_mode(),
        api_base: cli.api_url.clone(),
        storage_path: cli.storage.clone().unwrap_or_else(LocalStore::default_path),
    };
    info!(
        mode = ?options.identifier_mode,
        storage = ?options.storage_path,
        "Starting config editor"
    );

    gui::run_gui(options)
}
