//! Adapter Layer
//!
//! 外部システム（Cloud Storage, ファイルシステム, 標準入力）との統合

pub mod auth;
pub mod config;
pub mod repositories;
pub mod storage;
