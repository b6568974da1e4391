//! Lesson types and their percentage split.

use serde::{Deserialize, Serialize};

/// Skill category a lesson concentrates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonType {
    /// Grammar
    Grammar,
    /// Vocabulary and kanji
    Vocabulary,
    /// Speaking practice
    Conversation,
    /// Reading
    Reading,
    /// Listening
    Listening,
}

impl LessonType {
    /// All lesson types in display order.
    pub const ALL: [LessonType; 5] = [
        LessonType::Grammar,
        LessonType::Vocabulary,
        LessonType::Conversation,
        LessonType::Reading,
        LessonType::Listening,
    ];

    /// Stable string key.
    pub fn key(self) -> &'static str {
        match self {
            LessonType::Grammar => "grammar",
            LessonType::Vocabulary => "vocabulary",
            LessonType::Conversation => "conversation",
            LessonType::Reading => "reading",
            LessonType::Listening => "listening",
        }
    }

    /// Position in [`LessonType::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Chart color.
    pub fn color(self) -> &'static str {
        match self {
            LessonType::Grammar => "#3b82f6",
            LessonType::Vocabulary => "#8b5cf6",
            LessonType::Conversation => "#10b981",
            LessonType::Reading => "#f59e0b",
            LessonType::Listening => "#ec4899",
        }
    }
}

/// Percentage of lesson time per lesson type.
///
/// Values come straight from lookup tables and are not normalized, so
/// the total may differ from 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonTypeDistribution {
    /// Grammar share
    pub grammar: u8,
    /// Vocabulary share
    pub vocabulary: u8,
    /// Conversation share
    pub conversation: u8,
    /// Reading share
    pub reading: u8,
    /// Listening share
    pub listening: u8,
}

impl LessonTypeDistribution {
    /// Build from values in [`LessonType::ALL`] order.
    pub const fn new(grammar: u8, vocabulary: u8, conversation: u8, reading: u8, listening: u8) -> Self {
        Self { grammar, vocabulary, conversation, reading, listening }
    }

    /// Share for one lesson type.
    pub fn get(&self, lesson_type: LessonType) -> u8 {
        match lesson_type {
            LessonType::Grammar => self.grammar,
            LessonType::Vocabulary => self.vocabulary,
            LessonType::Conversation => self.conversation,
            LessonType::Reading => self.reading,
            LessonType::Listening => self.listening,
        }
    }

    /// `(type, share)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (LessonType, u8)> + '_ {
        LessonType::ALL.into_iter().map(move |t| (t, self.get(t)))
    }

    /// Sum of all shares.
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, share)| share as u32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_iter_order() {
        let dist = LessonTypeDistribution::new(20, 30, 30, 10, 10);
        let pairs: Vec<_> = dist.iter().collect();
        assert_eq!(pairs[0], (LessonType::Grammar, 20));
        assert_eq!(pairs[2], (LessonType::Conversation, 30));
        assert_eq!(dist.get(LessonType::Listening), 10);
        assert_eq!(dist.total(), 100);
    }

    #[test]
    fn test_total_not_forced_to_hundred() {
        let dist = LessonTypeDistribution::new(20, 20, 25, 17, 17);
        assert_eq!(dist.total(), 99);
    }
}
