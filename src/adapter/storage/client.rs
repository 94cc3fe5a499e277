//! Cloud Storage Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use google_cloud_storage::client::Storage;
use log::debug;

#[cfg(test)]
use mockall::automock;

use crate::adapter::auth::build_credentials;

/// A single object write, resolved down to what the Storage API needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    /// `projects/_/buckets/{bucket}`
    pub bucket_resource: String,
    pub object: String,
    pub body: String,
    pub content_type: String,
    pub cache_control: Option<String>,
}

/// Trait for Cloud Storage write operations
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectWriter: Send + Sync {
    /// Write one object in a single, non-resumable request
    async fn write(&self, request: &WriteRequest) -> Result<()>;
}

/// Cloud Storage client that owns the Storage instance
pub struct GcsObjectWriter {
    client: Storage,
}

impl GcsObjectWriter {
    pub fn new(client: Storage) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl ObjectWriter for GcsObjectWriter {
    async fn write(&self, request: &WriteRequest) -> Result<()> {
        let mut write = self
            .client
            .write_object(
                request.bucket_resource.clone(),
                request.object.clone(),
                Bytes::from(request.body.clone()),
            )
            .set_content_type(request.content_type.clone());

        if let Some(cache_control) = &request.cache_control {
            write = write.set_cache_control(cache_control.clone());
        }

        let object = write
            .send_unbuffered()
            .await
            .context("Cloud Storage write failed")?;

        debug!(
            "Stored {} (generation {}, {} bytes)",
            object.name, object.generation, object.size
        );
        Ok(())
    }
}

/// Factory for creating Cloud Storage clients
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StorageClientFactory: Send + Sync {
    async fn create_client(&self) -> Result<Box<dyn ObjectWriter>>;
}

/// Production implementation of StorageClientFactory
///
/// Construction does no I/O; credentials are loaded when the client is created.
pub struct RealClientFactory {
    key_path: Option<String>,
    project_id: Option<String>,
}

impl RealClientFactory {
    pub fn new(key_path: Option<String>, project_id: Option<String>) -> Self {
        Self {
            key_path,
            project_id,
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl StorageClientFactory for RealClientFactory {
    async fn create_client(&self) -> Result<Box<dyn ObjectWriter>> {
        let credentials = build_credentials(self.key_path.as_deref(), self.project_id.as_deref())?;

        let client = Storage::builder()
            .with_credentials(credentials)
            .build()
            .await
            .context("Failed to create Cloud Storage client")?;

        Ok(Box::new(GcsObjectWriter::new(client)))
    }
}
