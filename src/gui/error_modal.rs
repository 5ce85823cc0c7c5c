use eframe::egui;

pub struct ErrorModal {
    error: Option<(String, String)>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { error: None }
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error = Some((title.into(), message.into()));
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some((title, message)) = self.error.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(egui::Color32::RED));
                ui.label(egui::RichText::new(&title).size(17.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&message);
            ui.add_space(12.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.error = None;
        }
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}
