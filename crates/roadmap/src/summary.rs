//! Save payload for writing a plan into a student profile.

use chrono::NaiveDate;
use sensei_content::TextBundle;
use sensei_core::{RoadmapProjection, Student};

use crate::request::RoadmapRequest;

/// Profile fields derived from a generated plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    /// Goal line, e.g. `Goal: Lv.70 (Travel)`
    pub goal_text: String,

    /// Phase line, e.g. `Plan: 6 Months`
    pub current_phase: String,

    /// Memo block appended to the profile notes
    pub memo: String,
}

impl PlanSummary {
    /// Build the summary from the inputs and the first milestone's focus.
    pub fn build(
        request: &RoadmapRequest,
        projection: &RoadmapProjection,
        purpose_label: &str,
        created_on: NaiveDate,
    ) -> Self {
        let key_focus = projection
            .milestones
            .first()
            .map(|m| m.focus_topics.join(", "))
            .filter(|focus| !focus.is_empty())
            .unwrap_or_else(|| "General".to_string());

        let memo = [
            format!("【New Roadmap Created: {}】", created_on.format("%Y-%m-%d")),
            format!(
                "Current: Lv.{} -> Goal: Lv.{}",
                request.current_score, request.target_score
            ),
            format!("Period: {} Months", request.months),
            format!("Purpose: {}", purpose_label),
            format!("Key Focus: {}", key_focus),
        ]
        .join("\n");

        Self {
            goal_text: format!("Goal: Lv.{} ({})", request.target_score, purpose_label),
            current_phase: format!("Plan: {} Months", request.months),
            memo,
        }
    }

    /// Write into a student: goal and phase are replaced, the memo is appended.
    pub fn apply_to(&self, student: &mut Student) {
        student.goal_text = Some(self.goal_text.clone());
        student.current_phase = Some(self.current_phase.clone());
        student.append_memo(&self.memo);
    }
}

/// Short caption for sharing an exported plan, e.g. `6 months +50Lv`.
pub fn share_caption(request: &RoadmapRequest, bundle: &TextBundle) -> String {
    format!("{}{} +{}Lv", request.months, bundle.month_unit, request.gain())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoadmapEngine;
    use crate::EngineConfig;
    use chrono::Utc;
    use sensei_core::{Locale, Purpose};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
    }

    #[test]
    fn test_build_summary() {
        let engine = RoadmapEngine::new().with_config(EngineConfig { locale: Locale::En });
        let request = RoadmapRequest::new(20.0, 70.0, Purpose::Travel, 6);
        let projection = engine.project(&request);
        let summary = PlanSummary::build(&request, &projection, "Travel", date());

        assert_eq!(summary.goal_text, "Goal: Lv.70 (Travel)");
        assert_eq!(summary.current_phase, "Plan: 6 Months");

        let focus = projection.milestones[0].focus_topics.join(", ");
        let expected = format!(
            "【New Roadmap Created: 2026-04-01】\nCurrent: Lv.20 -> Goal: Lv.70\nPeriod: 6 Months\nPurpose: Travel\nKey Focus: {}",
            focus
        );
        assert_eq!(summary.memo, expected);
    }

    #[test]
    fn test_summary_without_milestones_says_general() {
        let engine = RoadmapEngine::new();
        let request = RoadmapRequest::new(20.0, 70.0, Purpose::Other, 0);
        let projection = engine.project(&request);
        let summary = PlanSummary::build(&request, &projection, "Other", date());
        assert!(summary.memo.ends_with("Key Focus: General"));
    }

    #[test]
    fn test_apply_to_student() {
        let engine = RoadmapEngine::new();
        let request = RoadmapRequest::new(30.0, 55.0, Purpose::Work, 4);
        let projection = engine.project(&request);
        let summary = PlanSummary::build(&request, &projection, "Work", date());

        let mut student = Student::new("Mina", Utc::now());
        student.memo = Some("prefers evenings".to_string());
        student.goal_text = Some("old goal".to_string());
        summary.apply_to(&mut student);

        assert_eq!(student.goal_text.as_deref(), Some("Goal: Lv.55 (Work)"));
        assert_eq!(student.current_phase.as_deref(), Some("Plan: 4 Months"));
        let memo = student.memo.unwrap();
        assert!(memo.starts_with("prefers evenings\n\n【New Roadmap Created"));
    }

    #[test]
    fn test_share_caption() {
        let request = RoadmapRequest::new(20.0, 70.0, Purpose::Travel, 6);
        assert_eq!(share_caption(&request, sensei_content::bundle(Locale::En)), "6 months +50Lv");
        assert_eq!(share_caption(&request, sensei_content::bundle(Locale::Ja)), "6ヶ月 +50Lv");
    }
}
