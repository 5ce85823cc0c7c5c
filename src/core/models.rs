use chrono::{
    DateTime,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    pub study_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub cancer_type_id: String,
    #[serde(default)]
    pub pmid: Option<String>,
    #[serde(default)]
    pub import_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub all_sample_count: u32,
    #[serde(default)]
    pub sequenced_sample_count: u32,
    #[serde(default)]
    pub cna_sample_count: u32,
    #[serde(default)]
    pub mrna_rna_seq_v2_sample_count: u32,
    #[serde(default)]
    pub mrna_microarray_sample_count: u32,
    #[serde(default)]
    pub mi_rna_sample_count: u32,
    #[serde(default)]
    pub rppa_sample_count: u32,
    #[serde(default)]
    pub mass_spectrometry_sample_count: u32,
    #[serde(default)]
    pub treatment_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancerType {
    pub cancer_type_id: String,
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
}

#[cfg(test)]
impl Study {
    pub fn stub(study_id: &str, name: &str) -> Self {
        Study {
            study_id: study_id.to_string(),
            name: name.to_string(),
            description: None,
            cancer_type_id: "mixed".to_string(),
            pmid: None,
            import_date: None,
            all_sample_count: 0,
            sequenced_sample_count: 0,
            cna_sample_count: 0,
            mrna_rna_seq_v2_sample_count: 0,
            mrna_microarray_sample_count: 0,
            mi_rna_sample_count: 0,
            rppa_sample_count: 0,
            mass_spectrometry_sample_count: 0,
            treatment_count: 0,
        }
    }
}
