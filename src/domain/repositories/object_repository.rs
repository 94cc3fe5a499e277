//! # Object Repository Trait
//!
//! オブジェクトストレージへの書き込みを抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::payload::Payload;
use crate::domain::entities::upload_target::UploadTarget;

/// Content-Type は常に JSON
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// オブジェクトリポジトリ
#[async_trait]
pub trait ObjectRepository: Send + Sync {
    /// ペイロードを1回の非レジューム転送で保存する
    ///
    /// # Arguments
    ///
    /// * `target` - バケットとオブジェクトパス
    /// * `payload` - 整形済みJSON
    /// * `cache_control` - 指定された場合はオブジェクトメタデータに付与
    ///
    /// # Errors
    ///
    /// 転送に失敗した場合。リトライはしない
    async fn put_object(
        &self,
        target: &UploadTarget,
        payload: &Payload,
        cache_control: Option<&str>,
    ) -> Result<()>;
}
