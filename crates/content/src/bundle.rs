//! Shape of a localized text bundle.

use sensei_core::{LessonType, LevelTier, Locale, Purpose};

/// Number of score buckets used by monthly content and narratives.
pub const CONTENT_BUCKETS: usize = 7;

/// Recommended content for one score bucket of one purpose.
#[derive(Debug, Clone, Copy)]
pub struct MonthlyContent {
    /// Topics to concentrate on
    pub focus: &'static [&'static str],
    /// Abilities gained
    pub skills: &'static [&'static str],
    /// Why this content fits the level
    pub rationale: &'static str,
    /// Suggested textbooks
    pub textbooks: &'static [&'static str],
    /// Prompt for an AI tutor
    pub ai_prompt: &'static str,
}

impl MonthlyContent {
    /// Const constructor so bundles stay plain statics.
    pub const fn new(
        focus: &'static [&'static str],
        skills: &'static [&'static str],
        rationale: &'static str,
        textbooks: &'static [&'static str],
        ai_prompt: &'static str,
    ) -> Self {
        Self { focus, skills, rationale, textbooks, ai_prompt }
    }
}

/// All text for one purpose.
#[derive(Debug, Clone, Copy)]
pub struct PurposeText {
    /// Short label
    pub label: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Lesson balance explanation below score 40
    pub reason_beginner: &'static str,
    /// Lesson balance explanation from score 40
    pub reason_advanced: &'static str,
    /// "What you can do now" narrative per bucket
    pub milestones: [&'static str; CONTENT_BUCKETS],
    /// Monthly content per bucket
    pub monthly: [MonthlyContent; CONTENT_BUCKETS],
}

/// Every string a roadmap render needs, for one locale.
#[derive(Debug)]
pub struct TextBundle {
    /// Locale of this bundle
    pub locale: Locale,
    /// Label of the first chart point
    pub now: &'static str,
    /// Appended to a month number on chart labels
    pub months_later: &'static str,
    /// Unit for month counts in captions
    pub month_unit: &'static str,
    /// Level descriptions in [`LevelTier::ALL`] order
    pub level_descriptions: [&'static str; 6],
    /// Lesson type names in [`LessonType::ALL`] order
    pub lesson_types: [&'static str; 5],
    /// Purpose texts in [`Purpose::ALL`] order
    pub purposes: [PurposeText; 9],
}

impl TextBundle {
    /// Texts for a purpose.
    pub fn purpose(&self, purpose: Purpose) -> &PurposeText {
        &self.purposes[purpose.index()]
    }

    /// Description of a level tier.
    pub fn level_description(&self, tier: LevelTier) -> &'static str {
        self.level_descriptions[tier.index()]
    }

    /// Display name of a lesson type.
    pub fn lesson_type(&self, lesson_type: LessonType) -> &'static str {
        self.lesson_types[lesson_type.index()]
    }

    /// Chart label for a month index; 0 is "now".
    pub fn month_label(&self, month: u32) -> String {
        if month == 0 {
            self.now.to_string()
        } else {
            format!("{}{}", month, self.months_later)
        }
    }
}
