use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use super::ApiEnvelope;
use crate::core::{
    FilterAxis,
    StudyScopeError,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterVocabulary {
    #[serde(default)]
    treatment: Vec<String>,
    #[serde(default)]
    source_site: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplyFiltersBody<'a> {
    treatment: Option<&'a [String]>,
    source_site: Option<&'a [String]>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedStudy {
    study_id: String,
}

/// Lists the selectable values for one filter axis.
pub async fn fetch_filter_vocabulary(
    base_url: &str,
    axis: FilterAxis,
) -> Result<Vec<String>, StudyScopeError> {
    let filter_type = match axis {
        FilterAxis::Treatment => "byTreatment",
        FilterAxis::SourceSite => "bySourceSite",
    };

    let envelope: ApiEnvelope<FilterVocabulary> = Client::new()
        .get(format!("{}/api/studies/get-filters", base_url))
        .query(&[("filterType", filter_type)])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(match axis {
        FilterAxis::Treatment => envelope.data.treatment,
        FilterAxis::SourceSite => envelope.data.source_site,
    })
}

/// Resolves the selected treatment/source-site values to matching study
/// ids. An empty `Ok` means no study matched; transport and status errors
/// stay errors so the caller can tell the two apart.
pub async fn apply_filters(
    base_url: &str,
    treatment: Option<&[String]>,
    source_site: Option<&[String]>,
) -> Result<Vec<String>, StudyScopeError> {
    let body = ApplyFiltersBody { treatment, source_site };

    let envelope: ApiEnvelope<Vec<MatchedStudy>> = Client::new()
        .post(format!("{}/api/studies/apply-filters", base_url))
        .json(&body)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(envelope.data.into_iter().map(|matched| matched.study_id).collect())
}
