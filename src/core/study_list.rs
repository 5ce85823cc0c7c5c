use std::collections::{
    HashMap,
    HashSet,
};

use regex::Regex;

use crate::core::{
    facets::{
        sample_counts_per_facet,
        study_counts_per_facet,
        DataFacet,
    },
    Study,
};

/// Which remote lookup produced the current id restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAxis {
    Treatment,
    SourceSite,
}

impl FilterAxis {
    pub fn label(&self) -> &'static str {
        match self {
            FilterAxis::Treatment => "Treatment",
            FilterAxis::SourceSite => "Source Site",
        }
    }
}

/// Visibility filter over the study catalog. Exactly one variant is active,
/// so text search and remote id restrictions can never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyFilter {
    None,
    Search(String),
    Remote { axis: FilterAxis, ids: HashSet<String> },
}

pub struct SelectionReport<'a> {
    pub shown: Vec<&'a Study>,
    pub shown_and_selected: Vec<&'a Study>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMatch<'a> {
    Substring(&'a str),
    Ids(&'a [String]),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacetCounts {
    pub samples: u64,
    pub studies: u32,
}

/// Selection and visibility state over the loaded study catalog.
///
/// Selection is a plain id set, independent of the active filter: filtering
/// changes what is shown, never what is selected.
pub struct StudyListState {
    studies: Vec<Study>,
    selected: HashSet<String>,
    filter: StudyFilter,
    revision: u64,
}

impl Default for StudyListState {
    fn default() -> Self {
        Self {
            studies: Vec::new(),
            selected: HashSet::new(),
            filter: StudyFilter::None,
            revision: 0,
        }
    }
}

impl StudyListState {
    pub fn set_studies(&mut self, studies: Vec<Study>) {
        let known: HashSet<&str> = studies.iter().map(|s| s.study_id.as_str()).collect();
        self.selected.retain(|id| known.contains(id.as_str()));
        self.studies = studies;
        self.touch();
    }

    pub fn studies(&self) -> &[Study] {
        &self.studies
    }

    /// Bumped on every mutation; immediate-mode consumers compare it to
    /// detect changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn filter(&self) -> &StudyFilter {
        &self.filter
    }

    pub fn search_text(&self) -> &str {
        match &self.filter {
            StudyFilter::Search(text) => text,
            _ => "",
        }
    }

    pub fn is_text_filtered(&self) -> bool {
        matches!(self.filter, StudyFilter::Search(_))
    }

    pub fn is_remote_filtered(&self) -> bool {
        matches!(self.filter, StudyFilter::Remote { .. })
    }

    pub fn is_filtered(&self) -> bool {
        self.filter != StudyFilter::None
    }

    /// Empty (after trimming) clears the filter; any other text replaces
    /// whatever filter was active, including a remote one.
    pub fn set_search_text(&mut self, text: &str) {
        let trimmed = text.trim();
        self.filter = if trimmed.is_empty() {
            StudyFilter::None
        } else {
            StudyFilter::Search(text.to_string())
        };
        self.touch();
    }

    /// Restrict the shown set to `ids ∩ catalog`. Replaces any text search.
    pub fn apply_remote_filter(&mut self, axis: FilterAxis, ids: Vec<String>) {
        let known: HashSet<&str> = self.studies.iter().map(|s| s.study_id.as_str()).collect();
        let ids = ids.into_iter().filter(|id| known.contains(id.as_str())).collect();
        self.filter = StudyFilter::Remote { axis, ids };
        self.touch();
    }

    pub fn reset_filter(&mut self) {
        self.filter = StudyFilter::None;
        self.touch();
    }

    pub fn is_selected(&self, study_id: &str) -> bool {
        self.selected.contains(study_id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn select(&mut self, study_id: &str) {
        if self.studies.iter().any(|s| s.study_id == study_id) {
            self.selected.insert(study_id.to_string());
            self.touch();
        }
    }

    pub fn deselect(&mut self, study_id: &str) {
        if self.selected.remove(study_id) {
            self.touch();
        }
    }

    pub fn toggle(&mut self, study_id: &str) {
        if self.selected.contains(study_id) {
            self.deselect(study_id);
        } else {
            self.select(study_id);
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.studies.iter().map(|s| s.study_id.clone()).collect();
        self.touch();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
        self.touch();
    }

    /// If every shown study is already selected, deselect the shown set;
    /// otherwise select it. Calling twice with no other change restores the
    /// original selection.
    pub fn toggle_all_shown(&mut self) {
        let (shown_ids, all_shown_selected) = {
            let report = self.selection_report();
            let ids: Vec<String> = report.shown.iter().map(|s| s.study_id.clone()).collect();
            let all_selected = report.shown_and_selected.len() == report.shown.len();
            (ids, all_selected)
        };
        if all_shown_selected {
            for id in &shown_ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(shown_ids);
        }
        self.touch();
    }

    /// Additive: matched ids join the current selection. Ids not in the
    /// catalog are ignored.
    pub fn select_all_matching(&mut self, matches: StudyMatch<'_>) {
        let matched: Vec<String> = match matches {
            StudyMatch::Substring(pattern) => {
                let needle = pattern.to_lowercase();
                self.studies
                    .iter()
                    .filter(|study| {
                        study.name.to_lowercase().contains(&needle)
                            || study.study_id.to_lowercase().contains(&needle)
                    })
                    .map(|study| study.study_id.clone())
                    .collect()
            }
            StudyMatch::Ids(ids) => self
                .studies
                .iter()
                .filter(|study| ids.contains(&study.study_id))
                .map(|study| study.study_id.clone())
                .collect(),
        };
        self.selected.extend(matched);
        self.touch();
    }

    /// Quick-select button entry point: a single `*pattern*` item is a
    /// substring match with the markers stripped, anything else an exact
    /// id list.
    pub fn quick_select(&mut self, matches: &[String]) {
        if matches.is_empty() {
            return;
        }
        let wildcard = Regex::new(r"^\*.*\*$").unwrap();
        if matches.len() == 1 && wildcard.is_match(&matches[0]) {
            let pattern = matches[0].replace('*', "");
            self.select_all_matching(StudyMatch::Substring(&pattern));
        } else {
            self.select_all_matching(StudyMatch::Ids(matches));
        }
    }

    /// Recomputed on demand from the current filter and selection.
    /// `shown_and_selected ⊆ shown ⊆ catalog` always holds.
    pub fn selection_report(&self) -> SelectionReport<'_> {
        let shown: Vec<&Study> = self
            .studies
            .iter()
            .filter(|study| self.shows(study))
            .collect();
        let shown_and_selected = shown
            .iter()
            .copied()
            .filter(|study| self.selected.contains(&study.study_id))
            .collect();
        SelectionReport { shown, shown_and_selected }
    }

    pub fn selected_studies(&self) -> Vec<&Study> {
        self.studies.iter().filter(|s| self.selected.contains(&s.study_id)).collect()
    }

    /// Per-facet sample sums and study counts over the shown set. When the
    /// filter hides nothing the counts are taken over the whole catalog
    /// directly.
    pub fn facet_counts(&self) -> HashMap<DataFacet, FacetCounts> {
        let shown = self.selection_report().shown;
        let studies: Vec<&Study> = if shown.len() == self.studies.len() {
            self.studies.iter().collect()
        } else {
            shown
        };
        let samples = sample_counts_per_facet(&DataFacet::ALL, &studies);
        let counts = study_counts_per_facet(&DataFacet::ALL, &studies);
        DataFacet::ALL
            .iter()
            .map(|facet| {
                (
                    *facet,
                    FacetCounts {
                        samples: samples.get(facet).copied().unwrap_or(0),
                        studies: counts.get(facet).copied().unwrap_or(0),
                    },
                )
            })
            .collect()
    }

    fn shows(&self, study: &Study) -> bool {
        match &self.filter {
            StudyFilter::None => true,
            StudyFilter::Search(text) => matches_search(study, text),
            StudyFilter::Remote { ids, .. } => ids.contains(&study.study_id),
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

pub fn matches_search(study: &Study, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    study.name.to_lowercase().contains(&needle)
        || study.study_id.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Study> {
        vec![
            Study::stub("lusc_tcga", "Lung Squamous Cell Carcinoma"),
            Study::stub("luad_tcga", "Lung Adenocarcinoma"),
            Study::stub("brca_tcga", "Breast Invasive Carcinoma"),
        ]
    }

    fn state() -> StudyListState {
        let mut state = StudyListState::default();
        state.set_studies(catalog());
        state
    }

    #[test]
    fn test_filter_modes_are_exclusive() {
        let mut state = state();

        state.apply_remote_filter(FilterAxis::Treatment, vec!["brca_tcga".to_string()]);
        assert!(state.is_remote_filtered());
        assert!(!state.is_text_filtered());

        state.set_search_text("lung");
        assert!(state.is_text_filtered());
        assert!(!state.is_remote_filtered());

        state.set_search_text("   ");
        assert!(!state.is_filtered());
    }

    #[test]
    fn test_toggle_all_shown_pairs_back_to_original() {
        let mut state = state();
        state.select("brca_tcga");
        state.set_search_text("lung");

        state.toggle_all_shown();
        let report = state.selection_report();
        assert_eq!(report.shown_and_selected.len(), report.shown.len());

        state.toggle_all_shown();
        assert!(state.is_selected("brca_tcga"));
        assert!(!state.is_selected("lusc_tcga"));
        assert!(!state.is_selected("luad_tcga"));
    }

    #[test]
    fn test_report_subset_invariant() {
        let mut state = state();
        state.select("lusc_tcga");
        state.select("brca_tcga");
        state.set_search_text("lung");

        let report = state.selection_report();
        let shown: HashSet<&str> = report.shown.iter().map(|s| s.study_id.as_str()).collect();
        for study in &report.shown_and_selected {
            assert!(shown.contains(study.study_id.as_str()));
        }
        assert!(report.shown.len() <= state.studies().len());
    }

    #[test]
    fn test_wildcard_matching() {
        let mut state = StudyListState::default();
        state.set_studies(vec![
            Study::stub("a1", "A1"),
            Study::stub("a2", "A2"),
            Study::stub("b1", "B1"),
        ]);

        state.quick_select(&["*A*".to_string()]);
        assert!(state.is_selected("a1"));
        assert!(state.is_selected("a2"));
        assert!(!state.is_selected("b1"));
    }

    #[test]
    fn test_exact_list_matching_is_additive() {
        let mut state = StudyListState::default();
        state.set_studies(vec![
            Study::stub("a1", "A1"),
            Study::stub("b1", "B1"),
        ]);
        state.select("a1");

        state.select_all_matching(StudyMatch::Ids(&["b1".to_string()]));
        assert!(state.is_selected("a1"));
        assert!(state.is_selected("b1"));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut state = state();
        state.select_all_matching(StudyMatch::Ids(&["nonexistent".to_string()]));
        assert_eq!(state.selected_count(), 0);

        state.select("nonexistent");
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn test_remote_filter_intersects_catalog() {
        let mut state = state();
        state.apply_remote_filter(
            FilterAxis::SourceSite,
            vec!["brca_tcga".to_string(), "not_loaded".to_string()],
        );
        let report = state.selection_report();
        assert_eq!(report.shown.len(), 1);
        assert_eq!(report.shown[0].study_id, "brca_tcga");
    }

    #[test]
    fn test_facet_counts_follow_shown_set() {
        let mut studies = catalog();
        studies[0].sequenced_sample_count = 5;
        studies[1].sequenced_sample_count = 3;
        studies[2].sequenced_sample_count = 7;
        let mut state = StudyListState::default();
        state.set_studies(studies);

        let counts = state.facet_counts();
        assert_eq!(counts[&DataFacet::Mutations], FacetCounts { samples: 15, studies: 3 });

        state.set_search_text("lung");
        let counts = state.facet_counts();
        assert_eq!(counts[&DataFacet::Mutations], FacetCounts { samples: 8, studies: 2 });
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let mut state = state();

        state.set_search_text("lung");
        state.toggle_all_shown();
        {
            let report = state.selection_report();
            assert_eq!(report.shown_and_selected.len(), report.shown.len());
        }

        state.set_search_text("");
        assert!(!state.is_filtered());
        let report = state.selection_report();
        assert_eq!(report.shown.len(), 3);
        assert!(state.is_selected("lusc_tcga"));
        assert!(state.is_selected("luad_tcga"));
        assert!(!state.is_selected("brca_tcga"));
    }

    #[test]
    fn test_set_studies_prunes_stale_selection() {
        let mut state = state();
        state.select("brca_tcga");
        state.set_studies(vec![Study::stub("lusc_tcga", "Lung Squamous Cell Carcinoma")]);
        assert_eq!(state.selected_count(), 0);
    }
}
