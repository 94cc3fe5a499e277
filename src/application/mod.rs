//! # Application Layer
//!
//! アップロード処理のフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてフローを実現
//! - Repository traitに依存（Cloud Storage や標準入力の実装には依存しない）
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object（UploadSettings）
//! - **use_cases**: 入力解決、アップロード

pub mod dto;
pub mod use_cases;
