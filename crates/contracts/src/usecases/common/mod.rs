//! Common types and traits for all UseCases

pub mod selected_file;
pub mod usecase_metadata;
pub mod usecase_result;

// Re-exports
pub use selected_file::{FileSlot, SelectedFile};
pub use usecase_metadata::UseCaseMetadata;
pub use usecase_result::{UseCaseError, UseCaseResult};
