use eframe::egui;

use crate::constants::gui::*;
use crate::editor::EditorState;

/// Read-only JSON preview of the current document
pub fn ui(ui: &mut egui::Ui, state: &EditorState) {
    ui.label(egui::RichText::new("JSON Preview").strong());
    ui.add_space(ITEM_SPACING);

    egui::ScrollArea::both()
        .id_salt("json_preview")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let mut text = state.preview();
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );
        });
}
