use reqwest::Client;

use crate::core::{
    CancerType,
    Study,
    StudyScopeError,
};

pub async fn fetch_studies(base_url: &str) -> Result<Vec<Study>, StudyScopeError> {
    let studies = Client::new()
        .get(format!("{}/api/studies", base_url))
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<Study>>()
        .await?;

    Ok(studies)
}

pub async fn fetch_cancer_types(base_url: &str) -> Result<Vec<CancerType>, StudyScopeError> {
    let cancer_types = Client::new()
        .get(format!("{}/api/cancer-types", base_url))
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<CancerType>>()
        .await?;

    Ok(cancer_types)
}
