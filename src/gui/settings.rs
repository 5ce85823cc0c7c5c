use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";

/// One configurable quick-select entry. A single `*pattern*` item selects
/// by substring, anything else is an exact study id list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickSelectButton {
    pub label: String,
    pub matches: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SettingsData {
    pub portal_base_url: String,
    pub page_size_hint: usize,
    pub quick_select_buttons: Vec<QuickSelectButton>,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            portal_base_url: "http://localhost:8080".to_string(),
            page_size_hint: 25,
            quick_select_buttons: vec![QuickSelectButton {
                label: "TCGA PanCancer Atlas".to_string(),
                matches: vec!["*pan_can_atlas*".to_string()],
            }],
        }
    }
}
