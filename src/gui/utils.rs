use eframe::egui;

use crate::constants::gui::*;
use crate::editor::view::ListRow;

/// Render list rows with a delete button each. Returns the index whose delete
/// button was clicked this frame.
pub fn list_rows(ui: &mut egui::Ui, id_salt: &str, rows: &[ListRow], empty_text: &str) -> Option<usize> {
    let mut remove_idx = None;

    egui::ScrollArea::vertical()
        .id_salt(id_salt)
        .max_height(LIST_MAX_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            if rows.is_empty() {
                ui.label(egui::RichText::new(empty_text).weak());
            }

            for row in rows {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&row.primary).strong());
                        if let Some(secondary) = &row.secondary {
                            ui.label(egui::RichText::new(secondary).small().weak());
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("🗑").on_hover_text("Delete").clicked() {
                            remove_idx = Some(row.index);
                        }
                    });
                });
                ui.separator();
            }
        });

    remove_idx
}

/// Single-line input that reports whether Enter was pressed in it
pub fn submit_field(ui: &mut egui::Ui, text: &mut String, hint: &str, width: f32) -> bool {
    let response = ui.add(
        egui::TextEdit::singleline(text)
            .hint_text(hint)
            .desired_width(width),
    );
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
