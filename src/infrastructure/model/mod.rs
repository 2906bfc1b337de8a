//! Model repository implementations

mod file_repository;

pub use file_repository::{FileModelRepository, DEFAULT_MODEL_PATH};
