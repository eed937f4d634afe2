//! Cloud sync panel: credentials, save/load triggers, status and raw URL

use eframe::egui;

use crate::constants::gui::*;
use crate::editor::{EditorState, IdentifierMode};

/// Remote actions requested from the panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudAction {
    None,
    Save,
    Load,
    CopyRawUrl,
}

pub fn ui(ui: &mut egui::Ui, state: &mut EditorState) -> CloudAction {
    let mut action = CloudAction::None;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Cloud Sync").strong());
        ui.label(
            egui::RichText::new("Stored as a private GitHub gist")
                .small()
                .weak(),
        );
        ui.add_space(ITEM_SPACING);

        egui::Grid::new("cloud_sync_grid")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("GitHub Token:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.token_input)
                        .password(true)
                        .hint_text("ghp_...")
                        .desired_width(f32::INFINITY),
                );
                ui.end_row();

                ui.label("Gist ID:");
                let fixed_id = match state.identifier_mode() {
                    IdentifierMode::Fixed(id) => Some(id.clone()),
                    IdentifierMode::Dynamic => None,
                };
                match fixed_id {
                    Some(id) => {
                        ui.label(egui::RichText::new(id).monospace());
                    }
                    None => {
                        ui.add(
                            egui::TextEdit::singleline(&mut state.gist_id_input)
                                .hint_text("Created on first save")
                                .desired_width(f32::INFINITY),
                        );
                    }
                }
                ui.end_row();
            });

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!state.is_saving(), egui::Button::new(state.save_label()))
                .clicked()
            {
                action = CloudAction::Save;
            }
            if ui
                .add_enabled(!state.is_loading(), egui::Button::new(state.load_label()))
                .clicked()
            {
                action = CloudAction::Load;
            }
            if state.is_saving() || state.is_loading() {
                ui.spinner();
            }
        });

        ui.add_space(ITEM_SPACING);
        ui.horizontal(|ui| {
            ui.label("Status:");
            let status = state.connection();
            ui.colored_label(status.color(), status.label());
        });

        if let Some(raw_url) = state.raw_url() {
            ui.add_space(ITEM_SPACING);
            ui.separator();
            ui.label("Raw URL for the browser config:");
            ui.horizontal(|ui| {
                let mut text = raw_url;
                ui.add(
                    egui::TextEdit::singleline(&mut text)
                        .desired_width(ui.available_width() - 70.0),
                );
                if ui.button("📋 Copy").clicked() {
                    action = CloudAction::CopyRawUrl;
                }
            });
        }
    });

    action
}
