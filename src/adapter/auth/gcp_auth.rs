//! GCP Authentication
//!
//! Google Cloud Platform認証機能

use anyhow::{bail, Context, Result};
use google_cloud_auth::credentials::{self, service_account, user_account, Credentials};
use log::info;

/// Expands tilde in path and returns the full path
pub fn expand_key_path(key_path: &str) -> String {
    shellexpand::tilde(key_path).to_string()
}

/// Builds credentials from a key file, or Application Default Credentials when no file is given
///
/// The project id, when known, becomes the quota project. Tokens are not fetched here.
pub fn build_credentials(
    key_path: Option<&str>,
    quota_project_id: Option<&str>,
) -> Result<Credentials> {
    let Some(key_path) = key_path else {
        info!("Using Application Default Credentials");
        let mut builder = credentials::Builder::default();
        if let Some(project_id) = quota_project_id {
            builder = builder.with_quota_project_id(project_id);
        }
        return builder
            .build()
            .context("Failed to load Application Default Credentials");
    };

    let expanded_path = expand_key_path(key_path);
    let content = std::fs::read_to_string(&expanded_path)
        .with_context(|| format!("Failed to read credentials file: {}", expanded_path))?;
    let key: serde_json::Value =
        serde_json::from_str(&content).context("Credentials file is not valid JSON")?;

    let kind = key
        .get("type")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    info!("Using {} credentials from {}", kind, expanded_path);

    match kind.as_str() {
        "service_account" => {
            let mut builder = service_account::Builder::new(key);
            if let Some(project_id) = quota_project_id {
                builder = builder.with_quota_project_id(project_id);
            }
            builder
                .build()
                .context("Failed to authenticate with service account")
        }
        "authorized_user" => {
            let mut builder = user_account::Builder::new(key);
            if let Some(project_id) = quota_project_id {
                builder = builder.with_quota_project_id(project_id);
            }
            builder
                .build()
                .context("Failed to authenticate with user credentials")
        }
        other => bail!("Unsupported credentials type: {:?}", other),
    }
}
