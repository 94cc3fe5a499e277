//! # Domain Entities
//!
//! 1回の実行の間だけ存在するバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **OptionMap**: 正規化済みCLIオプション
//! - **Payload**: 整形済みJSONとバイト長
//! - **UploadTarget**: バケットとオブジェクトパスの組

pub mod options;
pub mod payload;
pub mod upload_target;
