//! Storage trait abstraction.

use async_trait::async_trait;
use sensei_core::{Student, StudentId};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Storage abstraction for student profiles.
///
/// The roadmap engine never touches this; callers load a profile, write a
/// plan summary into it and save it back.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Save a student (create or update).
    async fn save_student(&mut self, student: &Student) -> Result<()>;

    /// Load a student by ID.
    async fn load_student(&self, id: StudentId) -> Result<Option<Student>>;

    /// List all students, oldest first.
    async fn list_students(&self) -> Result<Vec<Student>>;

    /// Delete a student.
    async fn delete_student(&mut self, id: StudentId) -> Result<()>;
}
