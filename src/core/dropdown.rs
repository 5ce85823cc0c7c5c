/// Notifications raised by a dropdown filter, in the order they fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    Changed(Vec<String>),
    Reset,
}

/// Local selection state for one multi-choice facet. Holds no reference to
/// the ledger or the network; consumers react to the returned events.
#[derive(Debug, Default)]
pub struct MultiSelectFilter {
    items: Vec<String>,
    selected: Vec<String>,
}

impl MultiSelectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, item: &str) -> bool {
        self.selected.iter().any(|s| s == item)
    }

    /// Toggles membership: present is removed, absent is appended.
    pub fn select(&mut self, item: &str) -> Vec<DropdownEvent> {
        if let Some(pos) = self.selected.iter().position(|s| s == item) {
            self.selected.remove(pos);
        } else {
            self.selected.push(item.to_string());
        }
        vec![DropdownEvent::Changed(self.selected.clone())]
    }

    /// Empties the selection. Always fires `Changed(empty)` then `Reset`,
    /// once each, even when nothing was selected.
    pub fn clear(&mut self) -> Vec<DropdownEvent> {
        self.selected.clear();
        vec![DropdownEvent::Changed(Vec::new()), DropdownEvent::Reset]
    }
}

/// Single-choice variant: a new pick replaces the current one.
#[derive(Debug, Default)]
pub struct SingleSelectFilter {
    items: Vec<String>,
    selected: Option<String>,
}

impl SingleSelectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, item: &str) -> Vec<DropdownEvent> {
        self.selected = Some(item.to_string());
        vec![DropdownEvent::Changed(vec![item.to_string()])]
    }

    pub fn clear(&mut self) -> Vec<DropdownEvent> {
        self.selected = None;
        vec![DropdownEvent::Changed(Vec::new()), DropdownEvent::Reset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_select_toggles_membership() {
        let mut filter = MultiSelectFilter::new();
        filter.set_items(vec!["Cisplatin".to_string(), "Tamoxifen".to_string()]);

        let events = filter.select("Cisplatin");
        assert_eq!(events, vec![DropdownEvent::Changed(vec!["Cisplatin".to_string()])]);

        filter.select("Tamoxifen");
        let events = filter.select("Cisplatin");
        assert_eq!(events, vec![DropdownEvent::Changed(vec!["Tamoxifen".to_string()])]);
    }

    #[test]
    fn test_single_select_replaces() {
        let mut filter = SingleSelectFilter::new();
        filter.set_items(vec!["MSK".to_string(), "MGH".to_string()]);

        filter.select("MSK");
        let events = filter.select("MGH");
        assert_eq!(events, vec![DropdownEvent::Changed(vec!["MGH".to_string()])]);
        assert_eq!(filter.selected(), Some("MGH"));
    }

    #[test]
    fn test_clear_fires_change_then_reset() {
        let mut filter = MultiSelectFilter::new();
        filter.select("Cisplatin");

        let events = filter.clear();
        assert_eq!(
            events,
            vec![DropdownEvent::Changed(Vec::new()), DropdownEvent::Reset]
        );
        assert!(filter.selected().is_empty());
    }

    #[test]
    fn test_clear_without_selection_still_notifies_once() {
        let mut filter = SingleSelectFilter::new();
        let events = filter.clear();
        assert_eq!(
            events,
            vec![DropdownEvent::Changed(Vec::new()), DropdownEvent::Reset]
        );
    }
}
