//! Student profile record.

use serde::{Deserialize, Serialize};
use crate::id::StudentId;
use crate::Time;

/// A tutored student as kept by the profile store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier
    pub id: StudentId,

    /// When created
    pub created_at: Time,

    /// Display name
    pub name: String,

    /// Nationality
    pub nationality: Option<String>,

    /// Certified or self-reported JLPT level
    pub jlpt_level: Option<String>,

    /// Goal line shown on the profile
    pub goal_text: Option<String>,

    /// Current textbook
    pub textbook: Option<String>,

    /// Current plan phase
    pub current_phase: Option<String>,

    /// Free-form notes, newest appended last
    pub memo: Option<String>,
}

impl Student {
    /// Create a student with only a name.
    pub fn new(name: impl Into<String>, created_at: Time) -> Self {
        Self {
            id: StudentId::new(),
            created_at,
            name: name.into(),
            nationality: None,
            jlpt_level: None,
            goal_text: None,
            textbook: None,
            current_phase: None,
            memo: None,
        }
    }

    /// Append a block to the memo, separated from earlier notes by a blank line.
    pub fn append_memo(&mut self, block: &str) {
        self.memo = Some(match self.memo.take() {
            Some(existing) if !existing.is_empty() => format!("{existing}\n\n{block}"),
            _ => block.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_append_memo_to_empty() {
        let mut student = Student::new("Alex", Utc::now());
        student.append_memo("first");
        assert_eq!(student.memo.as_deref(), Some("first"));
    }

    #[test]
    fn test_append_memo_separates_blocks() {
        let mut student = Student::new("Alex", Utc::now());
        student.memo = Some("likes ghibli".to_string());
        student.append_memo("plan");
        assert_eq!(student.memo.as_deref(), Some("likes ghibli\n\nplan"));
    }
}
