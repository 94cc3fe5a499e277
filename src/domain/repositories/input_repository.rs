//! # Input Repository Trait
//!
//! 入力元（ファイル、標準入力）へのアクセスを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 入力リポジトリ
///
/// プロセス全体の標準入力を直接参照せず、このトレイト経由で読む
#[async_trait]
pub trait InputRepository: Send + Sync {
    /// ファイル全体をテキストとして読む
    ///
    /// # Errors
    ///
    /// ファイルが存在しない、または読み取れない場合
    async fn read_file(&self, path: &str) -> Result<String>;

    /// 標準入力をEOFまで読む
    ///
    /// # Arguments
    ///
    /// * `timeout` - 指定された場合、この時間内にEOFに達しなければエラー
    async fn read_stdin(&self, timeout: Option<Duration>) -> Result<String>;

    /// 標準入力が対話端末かどうか
    fn stdin_is_terminal(&self) -> bool;
}
