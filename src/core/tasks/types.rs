use crate::core::{
    CancerType,
    FilterAxis,
    Study,
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    CatalogLoaded(Result<(Vec<Study>, Vec<CancerType>), String>),
    VocabularyLoaded { axis: FilterAxis, values: Vec<String> },
    FiltersResolved { axis: FilterAxis, seq: u64, result: Result<Vec<String>, String> },
    UploadFinished(Result<(), String>),
    PortalConnection(bool),
    LoadingMessage(String),
}

/// Monotonic token for in-flight filter resolutions. A response is applied
/// only while its token is still the latest issued, which makes the shown
/// set last-issued-wins instead of last-settled-wins.
#[derive(Debug, Default)]
pub struct RequestSeq {
    current: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let mut seq = RequestSeq::default();
        let first = seq.issue();
        let second = seq.issue();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_no_request_outstanding() {
        let seq = RequestSeq::default();
        assert!(!seq.is_current(1));
    }
}
