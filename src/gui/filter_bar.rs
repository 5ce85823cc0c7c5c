use eframe::egui::{
    self,
    TextEdit,
    Ui,
};

use super::{
    app::StudyScopeApp,
    dropdown::multi_select_dropdown,
};
use crate::core::{
    dropdown::DropdownEvent,
    facets::DataFacet,
    FilterAxis,
};

pub enum FilterBarAction {
    SearchChanged(String),
    AxisChanged { axis: FilterAxis, selection: Vec<String> },
    AxisCleared(FilterAxis),
}

/// Search box, remote filter dropdowns, and the data availability menu.
pub fn filter_bar(ui: &mut Ui, app: &mut StudyScopeApp) -> Vec<FilterBarAction> {
    let mut actions = Vec::new();
    let facet_counts = app.study_list.facet_counts();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let response = ui.add_sized(
            [260.0, ui.spacing().interact_size.y],
            TextEdit::singleline(&mut app.search_input).hint_text("Search studies..."),
        );
        if response.changed() {
            actions.push(FilterBarAction::SearchChanged(app.search_input.clone()));
        }
        if !app.search_input.is_empty() {
            let clear = ui.small_button("✕").on_hover_text("Clear search");
            if clear.clicked() {
                app.search_input.clear();
                actions.push(FilterBarAction::SearchChanged(String::new()));
            }
        }

        ui.separator();

        let source_site_events =
            multi_select_dropdown(ui, "Source Site", &mut app.source_site_filter);
        actions.extend(axis_actions(FilterAxis::SourceSite, source_site_events));

        let treatment_events = multi_select_dropdown(ui, "Treatment", &mut app.treatment_filter);
        actions.extend(axis_actions(FilterAxis::Treatment, treatment_events));

        ui.separator();

        ui.menu_button("Data availability", |ui| {
            ui.set_min_width(320.0);
            for facet in DataFacet::ALL {
                let counts = facet_counts.get(&facet).copied().unwrap_or_default();
                ui.horizontal(|ui| {
                    ui.label(facet.display_name());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(format!(
                            "{} samples in {} studies",
                            counts.samples, counts.studies
                        ));
                    });
                });
            }
        });
    });

    let selected = app.study_list.selected_studies();
    if !selected.is_empty() {
        let sample_total: u64 = selected.iter().map(|s| s.all_sample_count as u64).sum();
        ui.label(format!("{} studies selected ({} samples)", selected.len(), sample_total));
    }

    actions
}

fn axis_actions(axis: FilterAxis, events: Vec<DropdownEvent>) -> Vec<FilterBarAction> {
    events
        .into_iter()
        .filter_map(|event| match event {
            DropdownEvent::Changed(selection) if selection.is_empty() => {
                Some(FilterBarAction::AxisCleared(axis))
            }
            DropdownEvent::Changed(selection) => {
                Some(FilterBarAction::AxisChanged { axis, selection })
            }
            // `Changed(empty)` precedes `Reset` and already cleared the axis.
            DropdownEvent::Reset => None,
        })
        .collect()
}
