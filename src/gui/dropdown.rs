use eframe::egui::{
    self,
    Ui,
};

use crate::core::dropdown::{
    DropdownEvent,
    MultiSelectFilter,
    SingleSelectFilter,
};

/// Menu-button rendering of a multi-choice filter. Interactions are
/// returned as the events the underlying state raised this frame.
pub fn multi_select_dropdown(
    ui: &mut Ui,
    button_text: &str,
    filter: &mut MultiSelectFilter,
) -> Vec<DropdownEvent> {
    let mut events = Vec::new();

    let label = if filter.selected().is_empty() {
        button_text.to_string()
    } else {
        format!("{} ({} selected)", button_text, filter.selected().len())
    };

    ui.menu_button(label, |ui| {
        ui.set_min_width(220.0);

        if filter.items().is_empty() {
            ui.weak("No values available");
            return;
        }

        egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
            let items: Vec<String> = filter.items().to_vec();
            for item in items {
                let mut checked = filter.is_selected(&item);
                if ui.checkbox(&mut checked, &item).clicked() {
                    events.extend(filter.select(&item));
                }
            }
        });
    });

    if !filter.selected().is_empty() {
        let clear = ui.small_button("✕").on_hover_text("Clear selection");
        if clear.clicked() {
            events.extend(filter.clear());
        }
    }

    events
}

/// Single-choice variant; a pick replaces the current one and closes the
/// menu.
pub fn single_select_dropdown(
    ui: &mut Ui,
    button_text: &str,
    filter: &mut SingleSelectFilter,
) -> Vec<DropdownEvent> {
    let mut events = Vec::new();

    let label = match filter.selected() {
        Some(selected) => format!("{}: {}", button_text, selected),
        None => button_text.to_string(),
    };

    ui.menu_button(label, |ui| {
        ui.set_min_width(180.0);

        if filter.items().is_empty() {
            ui.weak("No values available");
            return;
        }

        let items: Vec<String> = filter.items().to_vec();
        for item in items {
            if ui.selectable_label(filter.selected() == Some(item.as_str()), &item).clicked() {
                events.extend(filter.select(&item));
                ui.close();
            }
        }
    });

    if filter.selected().is_some() {
        let clear = ui.small_button("✕").on_hover_text("Clear selection");
        if clear.clicked() {
            events.extend(filter.clear());
        }
    }

    events
}
