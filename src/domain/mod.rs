//! # Domain Layer
//!
//! このモジュールはアップロード処理の核心的なルールと値を定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - Cloud Storage や標準入力について何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: バリューオブジェクト（OptionMap, Payload, UploadTarget）
//! - **errors**: エラー種別
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（正規化、整形、パス決定）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
