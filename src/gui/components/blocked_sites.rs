use eframe::egui;

use crate::constants::gui::*;
use crate::editor::view::blocked_rows;
use crate::editor::{EditorIntent, EditorState};
use crate::gui::utils::{list_rows, submit_field};

pub fn ui(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("Blocked Sites").strong());
        ui.label(
            egui::RichText::new("Domains the browser refuses to open")
                .small()
                .weak(),
        );
        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            let submitted = submit_field(ui, &mut state.drafts.blocked_site, "example.com", INPUT_WIDTH);
            if ui.button("➕ Add").clicked() || submitted {
                state.add_blocked_site();
            }
        });
        ui.add_space(ITEM_SPACING);

        let rows = blocked_rows(state.document());
        if let Some(idx) = list_rows(ui, "blocked_sites_list", &rows, "No blocked sites.") {
            state.dispatch(EditorIntent::DeleteBlockedSite(idx));
        }
    });
}
