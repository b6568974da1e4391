//! JSON file storage implementation.
//!
//! Stores one pretty-printed JSON file per student under
//! `<root>/students/`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sensei_core::{Student, StudentId};
use tokio::fs;
use tracing::{debug, info};

use super::{ProfileStore, Result, StorageError};

/// File-based JSON profile store.
pub struct JsonProfileStore {
    root: PathBuf,
}

impl JsonProfileStore {
    /// Open the store, creating `students/` under `root` if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("students")).await?;
        Ok(Self { root })
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn student_path(&self, id: StudentId) -> PathBuf {
        self.root.join("students").join(format!("{}.json", id))
    }
}

#[async_trait]
impl ProfileStore for JsonProfileStore {
    async fn save_student(&mut self, student: &Student) -> Result<()> {
        let json = serde_json::to_string_pretty(student)?;
        fs::write(self.student_path(student.id), json).await?;
        info!(student = %student.id, "Saved student profile");
        Ok(())
    }

    async fn load_student(&self, id: StudentId) -> Result<Option<Student>> {
        read_json(&self.student_path(id)).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        let mut students: Vec<Student> = list_dir(&self.root.join("students")).await?;
        students.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(students)
    }

    async fn delete_student(&mut self, id: StudentId) -> Result<()> {
        match fs::remove_file(self.student_path(id)).await {
            Ok(()) => {
                info!(student = %id, "Deleted student profile");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(format!("student {}", id)))
            }
            Err(e) => Err(e.into()),
        }
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        match read_json(&entry.path()).await {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(e) => debug!(path = %entry.path().display(), error = %e, "Skipping unreadable file"),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonProfileStore::new(dir.path()).await.unwrap();

        let mut student = Student::new("Alex", Utc::now());
        student.nationality = Some("Canada".to_string());
        store.save_student(&student).await.unwrap();

        let loaded = store.load_student(student.id).await.unwrap().unwrap();
        assert_eq!(loaded, student);
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProfileStore::new(dir.path()).await.unwrap();
        assert!(store.load_student(StudentId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_sorted_and_skips_junk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonProfileStore::new(dir.path()).await.unwrap();

        let now = Utc::now();
        let newer = Student::new("Newer", now);
        let older = Student::new("Older", now - Duration::days(3));
        store.save_student(&newer).await.unwrap();
        store.save_student(&older).await.unwrap();
        fs::write(dir.path().join("students").join("broken.json"), "{not json")
            .await
            .unwrap();
        fs::write(dir.path().join("students").join("notes.txt"), "hello")
            .await
            .unwrap();

        let names: Vec<_> = store
            .list_students()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Older".to_string(), "Newer".to_string()]);
    }

    #[tokio::test]
    async fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonProfileStore::new(dir.path()).await.unwrap();
        let student = Student::new("Kim", Utc::now());
        store.save_student(&student).await.unwrap();

        store.delete_student(student.id).await.unwrap();
        assert!(store.load_student(student.id).await.unwrap().is_none());
        assert!(matches!(
            store.delete_student(student.id).await,
            Err(StorageError::NotFound(_))
        ));
    }
}
