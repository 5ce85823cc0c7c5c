pub mod debounce;
pub mod deep_link;
pub mod dropdown;
pub mod errors;
pub mod facets;
pub mod models;
pub mod study_list;
pub mod tasks;

pub use errors::StudyScopeError;
pub use models::{
    CancerType,
    Study,
};
pub use study_list::{
    FilterAxis,
    SelectionReport,
    StudyFilter,
    StudyListState,
    StudyMatch,
};
