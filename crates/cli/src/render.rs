//! Plain-text rendering of projections and profiles.

use std::fmt::Write;

use sensei_content::TextBundle;
use sensei_core::{RoadmapProjection, Student};
use sensei_roadmap::RoadmapRequest;

/// Render a projection as a terminal report.
pub fn render_projection(
    request: &RoadmapRequest,
    projection: &RoadmapProjection,
    bundle: &TextBundle,
) -> String {
    let mut out = String::new();
    let purpose = bundle.purpose(projection.purpose);

    let _ = writeln!(
        out,
        "Roadmap: {} (Lv.{} -> Lv.{}, {}{})",
        purpose.label, request.current_score, request.target_score, request.months, bundle.month_unit
    );
    let _ = writeln!(out, "  {} [{}]", purpose.description, projection.purpose.color());
    let _ = writeln!(out, "  {}", projection.level_description);
    let pace = projection.pace();
    let _ = writeln!(
        out,
        "Study time: {}h total, {} h/week, {} h/day",
        projection.total_estimated_hours, pace.hours_per_week, pace.hours_per_day
    );

    let _ = writeln!(out, "\nLesson balance:");
    for (lesson_type, share) in projection.lesson_type_distribution.iter() {
        let _ = writeln!(
            out,
            "  {:<14} {:>3}% [{}]",
            bundle.lesson_type(lesson_type),
            share,
            lesson_type.color()
        );
    }
    let _ = writeln!(out, "  {}", projection.distribution_reason);

    let _ = writeln!(out, "\nMilestones:");
    for m in &projection.milestones {
        let _ = writeln!(
            out,
            "  [{}] Lv.{} {} - {} lessons",
            bundle.month_label(m.month),
            m.projected_score,
            m.band_name,
            m.lessons_needed
        );
        let _ = writeln!(out, "    {}", m.purpose_milestone);
        let _ = writeln!(out, "    Focus: {}", m.focus_topics.join(", "));
        let _ = writeln!(out, "    Skills: {}", m.skills_gained.join(", "));
        let _ = writeln!(out, "    Why: {}", m.rationale);
        let _ = writeln!(out, "    Textbooks: {}", m.recommended_textbooks.join(", "));
        let _ = writeln!(out, "    AI prompt: \"{}\"", m.ai_prompt);
    }

    let _ = writeln!(out, "\nTrajectory:");
    for point in &projection.trajectory_points {
        let _ = writeln!(out, "  {:<10} {:>5.1}", point.label, point.score);
    }

    out
}

/// One-line listing of a student.
pub fn render_student_line(student: &Student) -> String {
    format!(
        "{} | {} | {}",
        student.id,
        student.name,
        student.goal_text.as_deref().unwrap_or("-")
    )
}

/// Full profile view.
pub fn render_student(student: &Student) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let mut out = String::new();
    let _ = writeln!(out, "Student: {}", student.id);
    let _ = writeln!(out, "  Name: {}", student.name);
    let _ = writeln!(out, "  Nationality: {}", field(&student.nationality));
    let _ = writeln!(out, "  JLPT: {}", field(&student.jlpt_level));
    let _ = writeln!(out, "  Goal: {}", field(&student.goal_text));
    let _ = writeln!(out, "  Textbook: {}", field(&student.textbook));
    let _ = writeln!(out, "  Phase: {}", field(&student.current_phase));
    let _ = writeln!(out, "  Created: {}", student.created_at);
    if let Some(memo) = &student.memo {
        let _ = writeln!(out, "  Memo:");
        for line in memo.lines() {
            let _ = writeln!(out, "    {}", line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sensei_core::{LessonType, Locale, Purpose};
    use sensei_roadmap::{EngineConfig, RoadmapEngine};

    #[test]
    fn test_render_projection_sections() {
        let engine = RoadmapEngine::new().with_config(EngineConfig { locale: Locale::En });
        let request = RoadmapRequest::new(20.0, 70.0, Purpose::Travel, 6);
        let projection = engine.project(&request);
        let text = render_projection(&request, &projection, engine.bundle());

        assert!(text.starts_with("Roadmap: Travel (Lv.20 -> Lv.70, 6 months)"));
        assert!(text.contains("Study time: 1050h total, 43.8 h/week, 5.8 h/day"));
        assert!(text.contains("[1 mo] Lv.28 N4 - 16 lessons"));
        assert!(text.contains("[6 mo] Lv.70 N2 - 16 lessons"));
        assert!(text.contains("Now"));
    }

    #[test]
    fn test_render_projection_shows_purpose_and_colors() {
        let engine = RoadmapEngine::new().with_config(EngineConfig { locale: Locale::En });
        let request = RoadmapRequest::new(20.0, 70.0, Purpose::Travel, 6);
        let projection = engine.project(&request);
        let text = render_projection(&request, &projection, engine.bundle());

        let description = engine.bundle().purpose(Purpose::Travel).description;
        assert!(text.contains(&format!("  {} [{}]", description, Purpose::Travel.color())));
        assert!(text.contains(&format!("35% [{}]", LessonType::Conversation.color())));
    }

    #[test]
    fn test_render_student() {
        let mut student = Student::new("Mina", Utc::now());
        student.memo = Some("line one\nline two".to_string());
        let text = render_student(&student);
        assert!(text.contains("  Name: Mina"));
        assert!(text.contains("  Goal: -"));
        assert!(text.contains("    line two"));
        assert!(render_student_line(&student).ends_with("| Mina | -"));
    }
}
