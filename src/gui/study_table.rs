use eframe::egui::{
    self,
    Ui,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::app::StudyScopeApp;

const ROW_HEIGHT: f32 = 24.0;

pub enum StudyTableAction {
    ToggleStudy(String),
    ToggleAllShown,
    QuickSelect(Vec<String>),
    SetPage(usize),
}

/// The study list: select-all/quick-select row, paged table of shown
/// studies, and the no-matches empty state.
pub fn study_table(ui: &mut Ui, app: &StudyScopeApp) -> Vec<StudyTableAction> {
    let mut actions = Vec::new();

    let report = app.study_list.selection_report();
    let total = app.study_list.studies().len();
    let shown = &report.shown;

    if shown.is_empty() {
        if app.catalog_loaded {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label("There are no studies matching your filter.");
            });
        }
        return actions;
    }

    let all_shown_selected = report.shown_and_selected.len() == shown.len();

    ui.horizontal(|ui| {
        if !app.study_list.is_filtered() && !app.settings.quick_select_buttons.is_empty() {
            ui.label("Quick select:");
            for button in &app.settings.quick_select_buttons {
                if ui.button(&button.label).clicked() {
                    actions.push(StudyTableAction::QuickSelect(button.matches.clone()));
                }
            }
        } else {
            let mut checked = all_shown_selected;
            let qualifier = if shown.len() < total { " matching filter" } else { "" };
            let label = if all_shown_selected {
                format!("Deselect all listed studies{} ({})", qualifier, shown.len())
            } else {
                format!("Select all listed studies{} ({})", qualifier, shown.len())
            };
            if ui.checkbox(&mut checked, label).clicked() {
                actions.push(StudyTableAction::ToggleAllShown);
            }
        }
    });

    ui.add_space(4.0);

    let rows_per_page = app.rows_per_page.max(1);
    let page_count = shown.len().div_ceil(rows_per_page);
    let page = app.page.min(page_count.saturating_sub(1));
    let start = page * rows_per_page;
    let page_rows = &shown[start..(start + rows_per_page).min(shown.len())];

    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(24.0))
        .column(Column::remainder())
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(70.0))
        .header(25.0, |mut header| {
            header.col(|_ui| {});
            header.col(|ui| {
                ui.strong("Study");
            });
            header.col(|ui| {
                ui.strong("Cancer Type");
            });
            header.col(|ui| {
                ui.strong("Samples");
            });
        })
        .body(|mut body| {
            body.rows(text_height.max(ROW_HEIGHT), page_rows.len(), |mut row| {
                let study = page_rows[row.index()];
                row.col(|ui| {
                    let mut checked = app.study_list.is_selected(&study.study_id);
                    if ui.checkbox(&mut checked, "").clicked() {
                        actions.push(StudyTableAction::ToggleStudy(study.study_id.clone()));
                    }
                });
                row.col(|ui| {
                    ui.label(&study.name).on_hover_ui(|ui| {
                        ui.label(&study.study_id);
                        if let Some(description) = &study.description {
                            ui.weak(description);
                        }
                    });
                });
                row.col(|ui| {
                    ui.label(&study.cancer_type_id);
                });
                row.col(|ui| {
                    ui.label(study.all_sample_count.to_string());
                });
            });
        });

    if page_count > 1 {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(page > 0, egui::Button::new("◀")).clicked() {
                actions.push(StudyTableAction::SetPage(page - 1));
            }
            ui.label(format!("Page {} of {}", page + 1, page_count));
            if ui.add_enabled(page + 1 < page_count, egui::Button::new("▶")).clicked() {
                actions.push(StudyTableAction::SetPage(page + 1));
            }
        });
    }

    actions
}
