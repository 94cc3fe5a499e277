//! # Upload Document Use Case
//!
//! 整形済みJSONをオブジェクトとして保存するユースケース

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::domain::entities::payload::Payload;
use crate::domain::entities::upload_target::UploadTarget;
use crate::domain::repositories::object_repository::ObjectRepository;

/// アップロード要求
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub target: UploadTarget,
    pub payload: Payload,
    pub cache_control: Option<String>,
    pub dry_run: bool,
}

/// アップロード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// dry-run のため転送していない
    DryRun { target: UploadTarget, byte_len: usize },
    /// 転送完了
    Uploaded { target: UploadTarget, byte_len: usize },
}

impl UploadOutcome {
    pub fn target(&self) -> &UploadTarget {
        match self {
            UploadOutcome::DryRun { target, .. } | UploadOutcome::Uploaded { target, .. } => {
                target
            }
        }
    }

    pub fn byte_len(&self) -> usize {
        match self {
            UploadOutcome::DryRun { byte_len, .. } | UploadOutcome::Uploaded { byte_len, .. } => {
                *byte_len
            }
        }
    }
}

/// ドキュメントアップロードユースケース
///
/// dry-run の場合はリポジトリを呼ばずに結果だけを返す
pub struct UploadDocumentUseCase<O: ObjectRepository> {
    object_repository: Arc<O>,
}

impl<O: ObjectRepository> UploadDocumentUseCase<O> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `object_repository` - オブジェクトリポジトリ
    pub fn new(object_repository: Arc<O>) -> Self {
        Self { object_repository }
    }

    /// アップロードを実行
    ///
    /// # Errors
    ///
    /// 転送に失敗した場合、リポジトリのエラーをそのまま返す
    pub async fn execute(&self, request: UploadRequest) -> Result<UploadOutcome> {
        let byte_len = request.payload.byte_len();

        if request.dry_run {
            info!("Dry run: skipping upload of {} bytes to {}", byte_len, request.target);
            return Ok(UploadOutcome::DryRun {
                target: request.target,
                byte_len,
            });
        }

        self.object_repository
            .put_object(
                &request.target,
                &request.payload,
                request.cache_control.as_deref(),
            )
            .await?;

        Ok(UploadOutcome::Uploaded {
            target: request.target,
            byte_len,
        })
    }
}
