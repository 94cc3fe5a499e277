//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ResolveInputUseCase**: 入力元の決定と読み込み
//! - **UploadDocumentUseCase**: ドキュメントのアップロード（dry-run対応）

pub mod resolve_input;
pub mod upload_document;
