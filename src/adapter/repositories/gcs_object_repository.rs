//! Cloud Storage Object Repository Implementation
//!
//! ObjectRepositoryのCloud Storage実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::adapter::storage::client::{StorageClientFactory, WriteRequest};
use crate::domain::entities::payload::Payload;
use crate::domain::entities::upload_target::UploadTarget;
use crate::domain::repositories::object_repository::{ObjectRepository, JSON_CONTENT_TYPE};

/// Cloud Storageオブジェクトリポジトリ
pub struct GcsObjectRepository {
    factory: Arc<dyn StorageClientFactory>,
}

impl GcsObjectRepository {
    /// 新しいリポジトリを作成
    pub fn new(factory: Arc<dyn StorageClientFactory>) -> Self {
        Self { factory }
    }

    /// Domain の値から書き込み要求を組み立てる
    fn to_write_request(
        target: &UploadTarget,
        payload: &Payload,
        cache_control: Option<&str>,
    ) -> WriteRequest {
        WriteRequest {
            bucket_resource: target.bucket_resource(),
            object: target.object().to_string(),
            body: payload.body().to_string(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            cache_control: cache_control.map(str::to_string),
        }
    }
}

#[async_trait]
impl ObjectRepository for GcsObjectRepository {
    async fn put_object(
        &self,
        target: &UploadTarget,
        payload: &Payload,
        cache_control: Option<&str>,
    ) -> Result<()> {
        let request = Self::to_write_request(target, payload, cache_control);

        // クライアントは最初のアップロード時に作成
        let client = self.factory.create_client().await?;

        info!("Uploading {} bytes to {}", payload.byte_len(), target);
        client
            .write(&request)
            .await
            .with_context(|| format!("Failed to upload {}", target))?;
        info!("Upload to {} finished", target);

        Ok(())
    }
}
