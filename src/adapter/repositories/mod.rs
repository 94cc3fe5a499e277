//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod gcs_object_repository;
pub mod stdio_input_repository;
