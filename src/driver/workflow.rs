//! Workflow Orchestration
//!
//! 引数解析 → 入力取得 → 検証・整形 → 宛先決定 → アップロード の一本道

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use crate::adapter::config::Config;
use crate::adapter::repositories::gcs_object_repository::GcsObjectRepository;
use crate::adapter::repositories::stdio_input_repository::StdioInputRepository;
use crate::adapter::storage::client::{RealClientFactory, StorageClientFactory};
use crate::application::dto::upload_settings::UploadSettings;
use crate::application::use_cases::resolve_input::ResolveInputUseCase;
use crate::application::use_cases::upload_document::{
    UploadDocumentUseCase, UploadOutcome, UploadRequest,
};
use crate::domain::entities::options::{OptionMap, OptionName};
use crate::domain::entities::upload_target::UploadTarget;
use crate::domain::errors::UploadError;
use crate::domain::repositories::input_repository::InputRepository;
use crate::domain::services::destination::resolve_destination;
use crate::domain::services::payload_formatter::PayloadFormatter;

use super::cli::{parse_options, usage};

/// Environment variables consulted for the project id, in order
pub const PROJECT_ENV_VARS: [&str; 2] = ["GOOGLE_CLOUD_PROJECT", "GCLOUD_PROJECT"];

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Merge command-line options, config file and environment into UploadSettings
///
/// Command line beats config file, config file beats environment.
pub fn build_upload_settings<F>(
    options: &OptionMap,
    config: &Config,
    env: F,
) -> Result<UploadSettings, UploadError>
where
    F: Fn(&str) -> Option<String>,
{
    let text = |name: OptionName| options.text(name).map(str::to_string);

    if let (Some(cli), Some(file)) = (options.text(OptionName::Bucket), &config.bucket) {
        if cli != file.as_str() {
            warn!("--bucket {} overrides config file bucket {}", cli, file);
        }
    }

    let bucket = text(OptionName::Bucket)
        .or_else(|| config.bucket.clone())
        .filter(|bucket| !bucket.is_empty())
        .ok_or(UploadError::MissingBucket)?;

    let project_id = text(OptionName::Project)
        .or_else(|| config.project_id.clone())
        .or_else(|| {
            PROJECT_ENV_VARS
                .iter()
                .find_map(|key| env(*key).filter(|value| !value.is_empty()))
        });

    Ok(UploadSettings {
        bucket,
        destination: text(OptionName::Destination),
        input: text(OptionName::Input),
        project_id,
        credentials: text(OptionName::Credentials).or_else(|| config.credentials.clone()),
        cache_control: text(OptionName::CacheControl).or_else(|| config.cache_control.clone()),
        compact: options.is_set(OptionName::Compact) || config.compact.unwrap_or(false),
        dry_run: options.is_set(OptionName::DryRun),
        stdin_timeout: config.stdin_timeout_secs.map(Duration::from_secs),
    })
}

/// JSON Upload Workflow
pub struct JsonUploadWorkflow<R: InputRepository> {
    input_repository: Arc<R>,
    client_factory: Option<Arc<dyn StorageClientFactory>>,
    env: fn(&str) -> Option<String>,
}

impl JsonUploadWorkflow<StdioInputRepository> {
    /// Workflow wired to the process stdin, the filesystem and Cloud Storage
    pub fn new() -> Self {
        Self::with_input_repository(Arc::new(StdioInputRepository::new()))
    }
}

impl Default for JsonUploadWorkflow<StdioInputRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: InputRepository> JsonUploadWorkflow<R> {
    pub fn with_input_repository(input_repository: Arc<R>) -> Self {
        Self {
            input_repository,
            client_factory: None,
            env: process_env,
        }
    }

    /// Replace the storage client factory built from the settings
    pub fn with_client_factory(mut self, factory: Arc<dyn StorageClientFactory>) -> Self {
        self.client_factory = Some(factory);
        self
    }

    pub fn with_env(mut self, env: fn(&str) -> Option<String>) -> Self {
        self.env = env;
        self
    }

    /// Execute the upload workflow
    ///
    /// Status lines and help text go to `out`; errors are returned to the caller.
    pub async fn execute<S, W>(&self, args: &[S], out: &mut W) -> Result<()>
    where
        S: AsRef<str>,
        W: Write,
    {
        let options = parse_options(args);
        info!("Parsed {} options", options.len());

        if options.is_set(OptionName::Help) {
            write!(out, "{}", usage())?;
            return Ok(());
        }

        let config = match options.text(OptionName::Config) {
            Some(path) => {
                info!("Loading config file: {}", path);
                Config::load(path)?
            }
            None => Config::default(),
        };

        let settings = match build_upload_settings(&options, &config, self.env) {
            Ok(settings) => settings,
            Err(e) => {
                write!(out, "{}", usage())?;
                return Err(e.into());
            }
        };
        info!("Dry run: {}", settings.dry_run);

        let raw = ResolveInputUseCase::new(self.input_repository.clone())
            .execute(&options, settings.stdin_timeout)
            .await?;

        let payload = PayloadFormatter::prepare(&raw, settings.compact)?;
        info!(
            "Prepared {} payload: {} bytes",
            if settings.compact { "compact" } else { "pretty" },
            payload.byte_len()
        );

        let object = resolve_destination(
            settings.destination.as_deref(),
            settings.input.as_deref(),
            Utc::now(),
        );
        let target = UploadTarget::new(settings.bucket.clone(), object);
        info!("Target: {}", target);

        // Building the factory does no I/O; the client is created on upload
        let factory: Arc<dyn StorageClientFactory> = match &self.client_factory {
            Some(factory) => factory.clone(),
            None => Arc::new(RealClientFactory::new(
                settings.credentials.clone(),
                settings.project_id.clone(),
            )),
        };
        let upload_use_case =
            UploadDocumentUseCase::new(Arc::new(GcsObjectRepository::new(factory)));

        let outcome = upload_use_case
            .execute(UploadRequest {
                target,
                payload,
                cache_control: settings.cache_control.clone(),
                dry_run: settings.dry_run,
            })
            .await?;

        match &outcome {
            UploadOutcome::DryRun { target, byte_len } => {
                writeln!(out, "Dry run: would upload {} bytes to {}", byte_len, target)?;
            }
            UploadOutcome::Uploaded { target, byte_len } => {
                writeln!(out, "✓ Uploaded {} bytes to {}", byte_len, target)?;
            }
        }

        Ok(())
    }
}
