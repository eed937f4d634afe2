//! Whitelist mode toggle and the allowed-sites list

use eframe::egui;

use crate::constants::gui::*;
use crate::editor::view::allowed_rows;
use crate::editor::{EditorIntent, EditorState};
use crate::gui::utils::{list_rows, submit_field};

pub fn ui(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("Whitelist Mode").strong());
        ui.add_space(ITEM_SPACING);

        let mut enabled = state.document().whitelist_mode;
        if ui
            .checkbox(&mut enabled, "Only allow the sites listed below")
            .changed()
        {
            state.dispatch(EditorIntent::SetWhitelistMode(enabled));
        }
        ui.label(
            egui::RichText::new("Blocked sites are ignored while whitelist mode is on")
                .small()
                .weak(),
        );
        ui.add_space(ITEM_SPACING);

        // Entries are kept while disabled so toggling back restores them
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal(|ui| {
                let url_submitted =
                    submit_field(ui, &mut state.drafts.allowed_url, "khanacademy.org", INPUT_WIDTH);
                let limit_submitted = submit_field(
                    ui,
                    &mut state.drafts.allowed_time_limit,
                    "Minutes (optional)",
                    INPUT_WIDTH / 2.0,
                );
                if ui.button("➕ Add").clicked() || url_submitted || limit_submitted {
                    state.add_allowed_site();
                }
            });
            ui.add_space(ITEM_SPACING);

            let rows = allowed_rows(state.document());
            if let Some(idx) = list_rows(ui, "allowed_sites_list", &rows, "No allowed sites.") {
                state.dispatch(EditorIntent::DeleteAllowedSite(idx));
            }
        });
    });
}
