//! Stdio Input Repository Implementation
//!
//! InputRepositoryのファイルシステム・標準入力実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::io::IsTerminal;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::domain::errors::UploadError;
use crate::domain::repositories::input_repository::InputRepository;

/// プロセスの標準入力とファイルシステムを使う入力リポジトリ
pub struct StdioInputRepository;

impl StdioInputRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdioInputRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// ストリームをEOFまで読み、UTF-8テキストとして返す
///
/// `timeout` が指定された場合、その時間内にEOFに達しなければ `UploadError::StdinTimeout`
pub async fn read_stream_to_end<R>(mut reader: R, timeout: Option<Duration>) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();

    let result = match timeout {
        Some(limit) => tokio::time::timeout(limit, reader.read_to_end(&mut buf))
            .await
            .map_err(|_| UploadError::StdinTimeout(limit))?,
        None => reader.read_to_end(&mut buf).await,
    };
    let bytes_read = result.context("Failed to read from stdin")?;
    info!("Read {} bytes from stdin", bytes_read);

    String::from_utf8(buf).map_err(|_| UploadError::StdinNotUtf8.into())
}

#[async_trait]
impl InputRepository for StdioInputRepository {
    async fn read_file(&self, path: &str) -> Result<String> {
        let expanded = shellexpand::tilde(path).to_string();
        tokio::fs::read_to_string(&expanded)
            .await
            .map_err(|source| {
                UploadError::InputFile {
                    path: path.to_string(),
                    source,
                }
                .into()
            })
    }

    async fn read_stdin(&self, timeout: Option<Duration>) -> Result<String> {
        read_stream_to_end(tokio::io::stdin(), timeout).await
    }

    fn stdin_is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }
}
