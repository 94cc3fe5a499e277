//! # Domain Services
//!
//! 外部に依存しない純粋関数群
//!
//! - **option_normalizer**: フラグ名の正規化
//! - **payload_formatter**: JSONの検証と整形
//! - **destination**: オブジェクトパスの決定

pub mod destination;
pub mod option_normalizer;
pub mod payload_formatter;
