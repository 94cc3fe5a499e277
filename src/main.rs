//! gcs-json-upload - JSON Document Uploader
//!
//! JSONを検証・整形して Cloud Storage バケットにアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::process::ExitCode;

use gcs_json_uploader::driver::JsonUploadWorkflow;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let workflow = JsonUploadWorkflow::new();
    let mut stdout = std::io::stdout();

    match workflow.execute(&args, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
