use eframe::egui;

use crate::constants::gui::*;
use crate::editor::view::bookmark_rows;
use crate::editor::{EditorIntent, EditorState};
use crate::gui::utils::{list_rows, submit_field};

pub fn ui(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("Cloud Bookmarks").strong());
        ui.label(
            egui::RichText::new("Pushed into the browser's \"Cloud\" bookmark folder")
                .small()
                .weak(),
        );
        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            let title_submitted =
                submit_field(ui, &mut state.drafts.bookmark_title, "Title", INPUT_WIDTH / 2.0);
            let url_submitted =
                submit_field(ui, &mut state.drafts.bookmark_url, "https://", INPUT_WIDTH);
            if ui.button("➕ Add").clicked() || title_submitted || url_submitted {
                state.add_bookmark();
            }
        });
        ui.add_space(ITEM_SPACING);

        let rows = bookmark_rows(state.document());
        if let Some(idx) = list_rows(ui, "bookmarks_list", &rows, "No bookmarks.") {
            state.dispatch(EditorIntent::DeleteBookmark(idx));
        }
    });
}
