//! # Upload Errors
//!
//! パイプラインの各段階で発生するエラー種別

use std::time::Duration;

use thiserror::Error;

/// アップロード処理のエラー
///
/// どのエラーもリトライされず、そのままトップレベルまで伝播する
#[derive(Debug, Error)]
pub enum UploadError {
    /// 入力がJSONとしてパースできない
    #[error("Input is not valid JSON: {0}")]
    InvalidJson(String),

    /// 入力ファイルが存在しない、または読み取れない
    #[error("Failed to read input file {path}")]
    InputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 標準入力が空
    #[error("Empty input: nothing was received on stdin")]
    EmptyInput,

    /// 入力元が一つも指定されていない
    #[error("No input provided. Use --input <file>, --data '<json>', or pipe JSON via --stdin")]
    NoInput,

    /// --bucket が指定されていない
    #[error("Missing required --bucket option")]
    MissingBucket,

    /// 標準入力の読み取りがタイムアウトした
    #[error("Timed out after {0:?} waiting for stdin")]
    StdinTimeout(Duration),

    /// 標準入力がUTF-8ではない
    #[error("stdin did not contain valid UTF-8 text")]
    StdinNotUtf8,
}
