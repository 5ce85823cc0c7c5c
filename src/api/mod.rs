pub mod filters;
pub mod studies;
pub mod upload;

use reqwest::Client;
use serde::Deserialize;

/// Wrapper the portal puts around filter endpoint payloads.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Cheap reachability probe; any successful status counts as connected.
pub async fn ping(base_url: &str) -> bool {
    match Client::new().get(format!("{}/api/studies", base_url)).send().await {
        Ok(response) => response.status().is_success(),
        Err(_) => false,
    }
}
