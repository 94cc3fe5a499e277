//! # Upload Settings DTO
//!
//! 1回のアップロードに必要な設定のData Transfer Object

use std::time::Duration;

/// アップロード設定
///
/// CLIオプション、設定ファイル、環境変数をマージした結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSettings {
    /// アップロード先バケット名
    pub bucket: String,
    /// 明示的なオブジェクトパス
    pub destination: Option<String>,
    /// 入力ファイルパス
    pub input: Option<String>,
    /// GCPプロジェクトID
    pub project_id: Option<String>,
    /// 認証情報ファイルのパス
    pub credentials: Option<String>,
    /// Cache-Control メタデータ
    pub cache_control: Option<String>,
    /// 空白なしで整形するかどうか
    pub compact: bool,
    /// 実際にはアップロードしない
    pub dry_run: bool,
    /// 標準入力の読み取りタイムアウト
    pub stdin_timeout: Option<Duration>,
}

impl UploadSettings {
    /// バケット名だけを指定して作成します。その他は既定値です。
    ///
    /// # 例
    ///
    /// ```
    /// use gcs_json_uploader::application::dto::upload_settings::UploadSettings;
    ///
    /// let settings = UploadSettings::new("my-bucket");
    ///
    /// assert_eq!(settings.bucket, "my-bucket");
    /// assert!(!settings.compact);
    /// assert!(!settings.dry_run);
    /// assert!(settings.project_id.is_none());
    /// ```
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }
}
