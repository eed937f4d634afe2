//! General settings: browser title and homepage

use eframe::egui;

use crate::constants::gui::*;
use crate::editor::{EditorIntent, EditorState};

pub fn ui(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.group(|ui| {
        ui.label(egui::RichText::new("General").strong());
        ui.add_space(ITEM_SPACING);

        egui::Grid::new("general_settings_grid")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Browser Title:");
                let mut title = state.document().browser_title.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut title).desired_width(f32::INFINITY))
                    .changed()
                {
                    state.dispatch(EditorIntent::SetTitle(title));
                }
                ui.end_row();

                ui.label("Homepage:");
                let mut homepage = state.document().homepage.clone();
                if ui
                    .add(
                        egui::TextEdit::singleline(&mut homepage)
                            .hint_text("https://")
                            .desired_width(f32::INFINITY),
                    )
                    .changed()
                {
                    state.dispatch(EditorIntent::SetHomepage(homepage));
                }
                ui.end_row();
            });
    });
}
