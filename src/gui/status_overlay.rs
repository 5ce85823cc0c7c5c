use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

const TOAST_DISMISS: Duration = Duration::from_secs(2);

const COLOR_SUCCESS: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
const COLOR_ERROR: egui::Color32 = egui::Color32::from_rgb(255, 100, 100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Progress,
    Success,
    Error,
}

struct Toast {
    message: String,
    kind: ToastKind,
    expires_at: Option<Instant>,
}

/// Blocking loading overlay plus a transient corner toast for upload and
/// filter-service outcomes.
pub struct StatusOverlay {
    loading: Option<String>,
    toast: Option<Toast>,
}

impl StatusOverlay {
    pub fn new() -> Self {
        Self { loading: Some("Connecting to portal...".to_string()), toast: None }
    }

    pub fn set_loading(&mut self, message: impl Into<String>) {
        self.loading = Some(message.into());
    }

    pub fn clear_loading(&mut self) {
        self.loading = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Shows until replaced; used while an upload is in flight.
    pub fn show_progress(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind: ToastKind::Progress,
            expires_at: None,
        });
    }

    /// Auto-dismissed after two seconds.
    pub fn flash(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            expires_at: Some(Instant::now() + TOAST_DISMISS),
        });
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let expired = self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at.is_some_and(|at| Instant::now() >= at));
        if expired {
            self.toast = None;
        }

        if let Some(message) = &self.loading {
            egui::Area::new(egui::Id::new("status_overlay"))
                .order(egui::Order::Foreground)
                .fixed_pos(egui::Pos2::new(0.0, 0.0))
                .show(ctx, |ui| {
                    let screen_size = ui.ctx().screen_rect().size();
                    ui.allocate_space(screen_size);
                    ui.painter().rect_filled(
                        ui.ctx().screen_rect(),
                        0.0,
                        egui::Color32::from_black_alpha(120),
                    );
                });

            egui::Window::new("status_box")
                .order(egui::Order::Foreground)
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .fixed_size(egui::Vec2::new(220.0, 100.0))
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.add(egui::Spinner::new());
                        ui.label(message);
                    });
                });
        }

        if let Some(toast) = &self.toast {
            egui::Window::new("status_toast")
                .order(egui::Order::Foreground)
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .anchor(egui::Align2::CENTER_BOTTOM, egui::Vec2::new(0.0, -24.0))
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        match toast.kind {
                            ToastKind::Progress => {
                                ui.add(egui::Spinner::new());
                            }
                            ToastKind::Success => {
                                ui.label(egui::RichText::new("✔").color(COLOR_SUCCESS));
                            }
                            ToastKind::Error => {
                                ui.label(egui::RichText::new("⚠").color(COLOR_ERROR));
                            }
                        }
                        ui.label(&toast.message);
                    });
                });
            // Keep repainting so the toast disappears without user input.
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

impl Default for StatusOverlay {
    fn default() -> Self {
        Self::new()
    }
}
