use std::path::Path;

use reqwest::{
    multipart,
    Client,
};

use crate::core::StudyScopeError;

/// Imports a study archive as a multipart form with a single `file` field.
pub async fn upload_study(base_url: &str, path: &Path) -> Result<(), StudyScopeError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("study-upload")
        .to_string();

    let bytes = tokio::fs::read(path).await?;
    let form =
        multipart::Form::new().part("file", multipart::Part::bytes(bytes).file_name(file_name));

    Client::new()
        .post(format!("{}/api/studies/upload", base_url))
        .multipart(form)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}
