use std::path::PathBuf;

use eframe::egui::{
    self,
    containers,
};

pub enum TopBarAction {
    ImportStudy(PathBuf),
    ReloadCatalog,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, portal_connected: bool) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Import Study...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Study archives", &["zip", "tar", "gz", "json", "txt"])
                            .pick_file()
                        {
                            action = Some(TopBarAction::ImportStudy(path));
                        }
                    }
                    if ui.button("Reload Catalog").clicked() {
                        action = Some(TopBarAction::ReloadCatalog);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicator(ui, portal_connected);
                });
            });
        });

        action
    }

    fn show_status_indicator(ui: &mut egui::Ui, portal_connected: bool) {
        let color = if portal_connected {
            egui::Color32::from_rgb(0, 200, 0)
        } else {
            egui::Color32::from_rgb(200, 80, 80)
        };

        let tooltip = if portal_connected {
            "Connected to study portal"
        } else {
            "Not connected to study portal"
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Portal").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });
    }
}
