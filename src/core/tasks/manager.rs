use std::{
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    api,
    core::FilterAxis,
};

/// Runs portal requests off the UI thread and funnels their outcomes back
/// through a channel drained once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_catalog(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Loading study catalog...".to_string()));

            let result = runtime.block_on(async {
                let studies =
                    api::studies::fetch_studies(&base_url).await.map_err(|e| e.to_string())?;
                let cancer_types =
                    api::studies::fetch_cancer_types(&base_url).await.map_err(|e| e.to_string())?;
                Ok::<_, String>((studies, cancer_types))
            });

            let _ = sender.send(TaskResult::CatalogLoaded(result));
        });
    }

    /// Vocabulary fetch failures degrade to an empty list so the dropdowns
    /// simply render empty; the error is only logged.
    pub fn fetch_vocabularies(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            for axis in [FilterAxis::Treatment, FilterAxis::SourceSite] {
                let values = runtime
                    .block_on(api::filters::fetch_filter_vocabulary(&base_url, axis))
                    .unwrap_or_else(|e| {
                        eprintln!("Failed to fetch {} vocabulary: {}", axis.label(), e);
                        Vec::new()
                    });

                let _ = sender.send(TaskResult::VocabularyLoaded { axis, values });
            }
        });
    }

    pub fn resolve_filters(
        &self,
        base_url: String,
        seq: u64,
        axis: FilterAxis,
        treatment: Option<Vec<String>>,
        source_site: Option<Vec<String>>,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(api::filters::apply_filters(
                    &base_url,
                    treatment.as_deref(),
                    source_site.as_deref(),
                ))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::FiltersResolved { axis, seq, result });
        });
    }

    pub fn upload_study(&self, base_url: String, path: PathBuf) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(api::upload::upload_study(&base_url, &path))
                .map_err(|e| e.to_string());

            let _ = sender.send(TaskResult::UploadFinished(result));
        });
    }

    pub fn check_portal_connection(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let connected = runtime.block_on(api::ping(&base_url));

            let _ = sender.send(TaskResult::PortalConnection(connected));
        });
    }
}
