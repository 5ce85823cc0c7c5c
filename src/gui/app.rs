use std::{
    mem,
    path::PathBuf,
    time::{
        Duration,
        Instant,
    },
};

use eframe::egui;

use super::{
    cancer_type_tree::CancerTypeTree,
    error_modal::ErrorModal,
    filter_bar::{
        filter_bar,
        FilterBarAction,
    },
    settings::{
        SettingsData,
        SETTINGS_FILE,
    },
    status_overlay::{
        StatusOverlay,
        ToastKind,
    },
    study_table::{
        study_table,
        StudyTableAction,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        debounce::Debouncer,
        deep_link::{
            CaseRef,
            DeepLink,
        },
        dropdown::MultiSelectFilter,
        tasks::{
            RequestSeq,
            TaskManager,
            TaskResult,
        },
        CancerType,
        FilterAxis,
        StudyMatch,
        StudyListState,
        StudyScopeError,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

const PORTAL_CHECK_SECS: u64 = 30;
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);
const MIN_LIST_HEIGHT: f32 = 200.0;
const ROW_HEIGHT: f32 = 24.0;
// Vertical space taken by the top bar, filter bar, table header and pager.
const LIST_CHROME: f32 = 170.0;

pub struct StudyScopeApp {
    pub settings: SettingsData,
    pub study_list: StudyListState,
    pub cancer_types: Vec<CancerType>,
    pub catalog_loaded: bool,

    pub search_input: String,
    pub treatment_filter: MultiSelectFilter,
    pub source_site_filter: MultiSelectFilter,

    pub rows_per_page: usize,
    pub page: usize,

    pub portal_connected: bool,
    pub status: StatusOverlay,
    pub error_modal: ErrorModal,
    page_error: Option<String>,

    tree: CancerTypeTree,
    resolve_seq: RequestSeq,
    resize_debounce: Debouncer,
    last_window_height: f32,
    last_portal_check: Option<Instant>,
    deep_link: Option<DeepLink>,
    task_manager: TaskManager,
}

impl StudyScopeApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        deep_link: Option<Result<DeepLink, StudyScopeError>>,
    ) -> Self {
        let task_manager = TaskManager::new();

        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        if let Err(e) = save_json(&settings, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }

        task_manager.load_catalog(settings.portal_base_url.clone());
        task_manager.fetch_vocabularies(settings.portal_base_url.clone());

        let (deep_link, page_error) = match deep_link {
            Some(Ok(link)) => (Some(link), None),
            Some(Err(e)) => (None, Some(e.to_string())),
            None => (None, None),
        };

        let rows_per_page = settings.page_size_hint;

        Self {
            settings,
            study_list: StudyListState::default(),
            cancer_types: Vec::new(),
            catalog_loaded: false,

            search_input: String::new(),
            treatment_filter: MultiSelectFilter::new(),
            source_site_filter: MultiSelectFilter::new(),

            rows_per_page,
            page: 0,

            portal_connected: false,
            status: StatusOverlay::new(),
            error_modal: ErrorModal::new(),
            page_error,

            tree: CancerTypeTree::new(),
            resolve_seq: RequestSeq::default(),
            resize_debounce: Debouncer::new(RESIZE_DEBOUNCE),
            last_window_height: 0.0,
            last_portal_check: None,
            deep_link,
            task_manager,
        }
    }
}

impl eframe::App for StudyScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();
        for result in task_results {
            self.handle_task_result(result);
        }

        self.update_portal_status();
        self.handle_file_drops(ctx);
        self.handle_resize(ctx);

        if let Some(action) = TopBar::show(ctx, self.portal_connected) {
            match action {
                TopBarAction::ImportStudy(path) => self.import_study(path),
                TopBarAction::ReloadCatalog => {
                    self.task_manager.load_catalog(self.settings.portal_base_url.clone());
                }
            }
        }

        if let Some(message) = &self.page_error {
            let message = message.clone();
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_space(60.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Invalid page link")
                            .size(24.0)
                            .color(egui::Color32::RED),
                    );
                    ui.add_space(8.0);
                    ui.label(message);
                });
            });
            self.status.show(ctx);
            return;
        }

        let mut picked_type_studies: Option<Vec<String>> = None;
        {
            let Self { tree, study_list, cancer_types, .. } = &mut *self;
            let shown = study_list.selection_report().shown;
            egui::SidePanel::left("cancer_type_panel").default_width(240.0).show(ctx, |ui| {
                ui.heading("Cancer Types");
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    picked_type_studies = tree.show(ui, cancer_types, &shown);
                });
            });
        }
        if let Some(ids) = picked_type_studies {
            self.study_list.select_all_matching(StudyMatch::Ids(&ids));
        }

        let mut filter_actions = Vec::new();
        let mut table_actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Select Studies for Visualization & Analysis");
            ui.add_space(4.0);
            filter_actions = filter_bar(ui, self);
            ui.separator();
            table_actions = study_table(ui, self);
        });

        for action in filter_actions {
            self.apply_filter_action(action);
        }
        for action in table_actions {
            self.apply_table_action(action);
        }

        self.status.show(ctx);
        self.error_modal.show(ctx);
    }
}

impl StudyScopeApp {
    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::CatalogLoaded(result) => {
                self.status.clear_loading();
                match result {
                    Ok((studies, cancer_types)) => {
                        println!("Loaded {} studies", studies.len());
                        self.study_list.set_studies(studies);
                        self.cancer_types = cancer_types;
                        self.catalog_loaded = true;
                        self.page = 0;
                        self.apply_deep_link();
                    }
                    Err(error_msg) => {
                        eprintln!("Failed to load study catalog: {}", error_msg);
                        self.error_modal.show_error(
                            "Catalog Load Error",
                            format!("Unable to load the study catalog: {}", error_msg),
                        );
                    }
                }
            }

            TaskResult::VocabularyLoaded { axis, values } => match axis {
                FilterAxis::Treatment => self.treatment_filter.set_items(values),
                FilterAxis::SourceSite => self.source_site_filter.set_items(values),
            },

            TaskResult::FiltersResolved { axis, seq, result } => {
                if !self.resolve_seq.is_current(seq) {
                    println!("Discarding stale {} filter resolution", axis.label());
                    return;
                }
                match result {
                    Ok(ids) => {
                        self.study_list.apply_remote_filter(axis, ids);
                        self.search_input.clear();
                        self.page = 0;
                    }
                    Err(error_msg) => {
                        eprintln!("Filter resolution failed: {}", error_msg);
                        self.status.flash(
                            ToastKind::Error,
                            "Filter service unavailable. Please try again.",
                        );
                    }
                }
            }

            TaskResult::UploadFinished(result) => match result {
                Ok(()) => {
                    self.status.flash(ToastKind::Success, "Import completed successfully");
                    self.task_manager.load_catalog(self.settings.portal_base_url.clone());
                }
                Err(error_msg) => {
                    eprintln!("Study upload failed: {}", error_msg);
                    self.status.flash(ToastKind::Error, "File upload failed. Please try again.");
                }
            },

            TaskResult::PortalConnection(connected) => {
                self.portal_connected = connected;
            }

            TaskResult::LoadingMessage(message) => {
                self.status.set_loading(message);
            }
        }
    }

    fn apply_filter_action(&mut self, action: FilterBarAction) {
        match action {
            FilterBarAction::SearchChanged(text) => self.set_search(&text),
            FilterBarAction::AxisChanged { axis, selection } => {
                self.activate_remote_filter(axis, selection);
            }
            FilterBarAction::AxisCleared(axis) => self.clear_remote_filter(axis),
        }
    }

    fn apply_table_action(&mut self, action: StudyTableAction) {
        match action {
            StudyTableAction::ToggleStudy(study_id) => self.study_list.toggle(&study_id),
            StudyTableAction::ToggleAllShown => self.study_list.toggle_all_shown(),
            StudyTableAction::QuickSelect(matches) => self.study_list.quick_select(&matches),
            StudyTableAction::SetPage(page) => self.page = page,
        }
    }

    /// Entering a text search takes over from any remote filter: the
    /// dropdowns lose their local selections and in-flight resolutions are
    /// invalidated.
    fn set_search(&mut self, text: &str) {
        let remote_active = self.study_list.is_remote_filtered()
            || !self.treatment_filter.selected().is_empty()
            || !self.source_site_filter.selected().is_empty();
        if remote_active {
            self.treatment_filter.clear();
            self.source_site_filter.clear();
            self.resolve_seq.issue();
        }

        self.study_list.set_search_text(text);
        self.page = 0;
    }

    /// One remote axis active at a time: activating this one clears the
    /// other dropdown before the resolution is requested.
    fn activate_remote_filter(&mut self, axis: FilterAxis, selection: Vec<String>) {
        match axis {
            FilterAxis::Treatment => {
                if !self.source_site_filter.selected().is_empty() {
                    self.source_site_filter.clear();
                }
            }
            FilterAxis::SourceSite => {
                if !self.treatment_filter.selected().is_empty() {
                    self.treatment_filter.clear();
                }
            }
        }
        self.search_input.clear();

        let seq = self.resolve_seq.issue();
        let (treatment, source_site) = match axis {
            FilterAxis::Treatment => (Some(selection), None),
            FilterAxis::SourceSite => (None, Some(selection)),
        };
        self.task_manager.resolve_filters(
            self.settings.portal_base_url.clone(),
            seq,
            axis,
            treatment,
            source_site,
        );
    }

    fn clear_remote_filter(&mut self, _axis: FilterAxis) {
        self.resolve_seq.issue();
        if self.study_list.is_remote_filtered() {
            self.study_list.reset_filter();
            self.page = 0;
        }
    }

    fn apply_deep_link(&mut self) {
        let Some(link) = self.deep_link.take() else {
            return;
        };

        if self.study_list.studies().iter().any(|s| s.study_id == link.study_id) {
            self.study_list.select(&link.study_id);
            self.search_input = link.study_id.clone();
            self.study_list.set_search_text(&link.study_id);
            let case = match &link.case {
                CaseRef::CaseId(id) => id,
                CaseRef::SampleId(id) => id,
            };
            self.status
                .flash(ToastKind::Success, format!("Opened {} ({})", link.study_id, case));
        } else {
            self.error_modal.show_error(
                "Unknown Study",
                format!("The linked study '{}' is not in the catalog.", link.study_id),
            );
        }
    }

    fn import_study(&mut self, path: PathBuf) {
        println!("Importing study file: {}", path.display());
        self.status.show_progress("Import in progress. Please wait…");
        self.task_manager.upload_study(self.settings.portal_base_url.clone(), path);
    }

    fn update_portal_status(&mut self) {
        let now = Instant::now();
        let should_check = match self.last_portal_check {
            None => true,
            Some(last_check) => now.duration_since(last_check).as_secs() >= PORTAL_CHECK_SECS,
        };

        if should_check {
            self.task_manager.check_portal_connection(self.settings.portal_base_url.clone());
            self.last_portal_check = Some(now);
        }
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input_mut(|i| mem::take(&mut i.raw.dropped_files));
        if let Some(path) = dropped.into_iter().filter_map(|f| f.path).next() {
            self.import_study(path);
        }
    }

    /// Window resizes recompute the page height through a single replaced
    /// debounce slot, so a resize drag triggers one recomputation.
    fn handle_resize(&mut self, ctx: &egui::Context) {
        let height = ctx.screen_rect().height();
        if (height - self.last_window_height).abs() > 1.0 {
            self.last_window_height = height;
            self.resize_debounce.schedule();
        }

        if self.resize_debounce.fire() {
            let list_height = (height - LIST_CHROME).max(MIN_LIST_HEIGHT);
            self.rows_per_page = ((list_height / ROW_HEIGHT).floor() as usize).max(5);
        }

        if self.resize_debounce.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
