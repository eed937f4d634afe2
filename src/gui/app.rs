//! Editor window implemented with egui/eframe

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use eframe::{NativeOptions, egui};
use tracing::{debug, error, info};

use super::components;
use super::components::cloud_sync::CloudAction;
use crate::cloud::{CloudError, CloudRequest, CloudWorker, GistClient};
use crate::config::LocalStore;
use crate::constants::gui::*;
use crate::editor::{EditorState, IdentifierMode};

/// Launch-time options gathered from the command line
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub identifier_mode: IdentifierMode,
    pub api_base: String,
    pub storage_path: PathBuf,
}

struct EditorApp {
    state: EditorState,
    store: LocalStore,
    worker: CloudWorker,
}

impl EditorApp {
    fn new(cc: &eframe::CreationContext<'_>, options: EditorOptions) -> Result<Self> {
        info!("Initializing egui editor");

        let store = LocalStore::open_or_empty(&options.storage_path);
        debug!(path = ?store.path(), has_token = store.token().is_some(), "Local storage ready");
        let state = EditorState::new(options.identifier_mode, &store);

        let client = GistClient::new(&options.api_base).context("Failed to build HTTP client")?;
        let ctx = cc.egui_ctx.clone();
        let worker = CloudWorker::spawn(client, move || ctx.request_repaint())?;

        let mut app = Self {
            state,
            store,
            worker,
        };

        if let Some(request) = app.state.startup_request() {
            app.submit(request);
        }

        Ok(app)
    }

    fn submit(&mut self, request: CloudRequest) {
        if let Err(request) = self.worker.submit(request) {
            error!("Cloud sync worker stopped, request dropped");
            self.state
                .complete(request.into_failure(CloudError::Unavailable), &mut self.store);
        }
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: CloudAction) {
        match action {
            CloudAction::Save => {
                if let Some(request) = self.state.request_save() {
                    self.submit(request);
                }
            }
            CloudAction::Load => {
                if let Some(request) = self.state.request_load() {
                    self.submit(request);
                }
            }
            CloudAction::CopyRawUrl => {
                if let Some(url) = self.state.copy_raw_url() {
                    ctx.copy_text(url);
                }
            }
            CloudAction::None => {}
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for response in self.worker.poll() {
            self.state.complete(response, &mut self.store);
        }

        let mut action = CloudAction::None;

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            components::status_bar::render(ui, &mut self.state);
        });

        egui::SidePanel::right("cloud_panel")
            .resizable(true)
            .default_width(WINDOW_WIDTH * 0.4)
            .show(ctx, |ui| {
                ui.add_space(ITEM_SPACING);
                action = components::cloud_sync::ui(ui, &mut self.state);
                ui.add_space(SECTION_SPACING);
                components::preview::ui(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                components::general::ui(ui, &mut self.state);
                ui.add_space(SECTION_SPACING);
                components::blocked_sites::ui(ui, &mut self.state);
                ui.add_space(SECTION_SPACING);
                components::bookmarks::ui(ui, &mut self.state);
                ui.add_space(SECTION_SPACING);
                components::whitelist::ui(ui, &mut self.state);
            });
        });

        self.handle_action(ctx, action);
    }
}

pub fn run_gui(options: EditorOptions) -> Result<()> {
    let title = format!("Child Lock Config Editor - v{}", env!("CARGO_PKG_VERSION"));

    let viewport_builder = egui::ViewportBuilder::default()
        .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
        .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
        .with_title(title.clone());

    let native_options = NativeOptions {
        viewport: viewport_builder,
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            let app = EditorApp::new(cc, options).map_err(|err| {
                error!(error = ?err, "Failed to initialize editor");
                Box::<dyn std::error::Error + Send + Sync>::from(format!("{err:#}"))
            })?;
            Ok(Box::new(app) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|err| anyhow!("Failed to launch egui editor: {err}"))
}
