use eframe::egui;

use crate::editor::EditorState;

/// Bottom bar showing the latest notice, dismissable
pub fn render(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.horizontal(|ui| {
        ui.set_min_height(24.0);

        let mut dismiss = false;
        match state.notice() {
            Some(message) => {
                ui.colored_label(message.color, &message.text);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                        dismiss = true;
                    }
                });
            }
            None => {
                ui.label(egui::RichText::new("Ready").weak());
            }
        }

        if dismiss {
            state.dismiss_notice();
        }
    });
}
