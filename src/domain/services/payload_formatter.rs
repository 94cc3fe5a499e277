//! # Payload Formatter
//!
//! JSONの検証と再シリアライズ

use crate::domain::entities::payload::Payload;
use crate::domain::errors::UploadError;

/// ペイロード整形サービス
///
/// 正しいJSONだけがアップロードされることを保証する唯一の検証ステップ
pub struct PayloadFormatter;

impl PayloadFormatter {
    /// 生テキストをJSONとしてパースし、整形したペイロードを返す
    ///
    /// # Arguments
    ///
    /// * `raw` - 入力テキスト
    /// * `compact` - `true` なら空白なし、`false` なら2スペースインデント
    ///
    /// # Errors
    ///
    /// JSONとしてパースできない場合に `UploadError::InvalidJson`
    pub fn prepare(raw: &str, compact: bool) -> Result<Payload, UploadError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| UploadError::InvalidJson(e.to_string()))?;

        let body = if compact {
            serde_json::to_string(&value)
        } else {
            serde_json::to_string_pretty(&value)
        }
        .map_err(|e| UploadError::InvalidJson(e.to_string()))?;

        Ok(Payload::new(body))
    }
}
