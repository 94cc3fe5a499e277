//! # UploadTarget Value Object
//!
//! アップロード先（バケット名, オブジェクトパス）の組

use std::fmt;

/// アップロード先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    bucket: String,
    object: String,
}

impl UploadTarget {
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    /// Storage API のバケットリソース名（`projects/_/buckets/{bucket}`）
    pub fn bucket_resource(&self) -> String {
        format!("projects/_/buckets/{}", self.bucket)
    }
}

/// `gs://bucket/object` 形式で表示
impl fmt::Display for UploadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gs://{}/{}", self.bucket, self.object)
    }
}
