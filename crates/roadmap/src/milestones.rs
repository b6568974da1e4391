//! Month-by-month milestones along a linear score path.

use sensei_content::{TextBundle, CONTENT_BUCKETS};
use sensei_core::{band_for_score, Milestone, Purpose};

/// Upper bounds of the content buckets.
const CONTENT_THRESHOLDS: [f64; CONTENT_BUCKETS] = [15.0, 25.0, 40.0, 55.0, 70.0, 85.0, 100.0];

/// Content bucket for a score: the first threshold the score does not
/// exceed, or the last bucket above 100.
pub fn content_index(score: f64) -> usize {
    CONTENT_THRESHOLDS
        .iter()
        .position(|threshold| score <= *threshold)
        .unwrap_or(CONTENT_BUCKETS - 1)
}

/// Score gained per month.
pub fn per_month_delta(current_score: f64, target_score: f64, months: u32) -> f64 {
    (target_score - current_score) / months as f64
}

/// Projected score after `month` months of a `months`-long plan.
///
/// Month 0 is the current score and the last month is the target itself,
/// so milestones and chart points agree at both ends.
pub fn projected_score(current_score: f64, target_score: f64, months: u32, month: u32) -> f64 {
    if month == 0 {
        current_score
    } else if month == months {
        target_score
    } else {
        current_score + per_month_delta(current_score, target_score, months) * month as f64
    }
}

/// JavaScript-style rounding (halves toward positive infinity).
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// One milestone per month, in month order 1..=months.
///
/// Lessons per month scale with the monthly score gain and the purpose
/// multiplier. A zero-month plan has no milestones.
pub fn generate_milestones(
    current_score: f64,
    target_score: f64,
    months: u32,
    purpose: Purpose,
    bundle: &TextBundle,
) -> Vec<Milestone> {
    let delta = per_month_delta(current_score, target_score, months);
    let lessons_needed = (delta * 2.0 * purpose.lesson_multiplier()).ceil() as i32;
    let text = bundle.purpose(purpose);

    (1..=months)
        .map(|month| {
            let score = projected_score(current_score, target_score, months, month);
            let band = band_for_score(score);
            let bucket = content_index(score);
            let content = &text.monthly[bucket];

            Milestone {
                month,
                projected_score: round_half_up(score) as i32,
                band_name: band.name.to_string(),
                band_color: band.color.to_string(),
                focus_topics: to_owned_list(content.focus),
                skills_gained: to_owned_list(content.skills),
                rationale: content.rationale.to_string(),
                recommended_textbooks: to_owned_list(content.textbooks),
                ai_prompt: content.ai_prompt.to_string(),
                purpose_milestone: text.milestones[bucket].to_string(),
                lessons_needed,
            }
        })
        .collect()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sensei_core::Locale;

    fn en() -> &'static TextBundle {
        sensei_content::bundle(Locale::En)
    }

    #[test]
    fn test_content_index_thresholds() {
        assert_eq!(content_index(0.0), 0);
        assert_eq!(content_index(15.0), 0);
        assert_eq!(content_index(15.1), 1);
        assert_eq!(content_index(25.0), 1);
        assert_eq!(content_index(40.0), 2);
        assert_eq!(content_index(55.0), 3);
        assert_eq!(content_index(70.0), 4);
        assert_eq!(content_index(85.0), 5);
        assert_eq!(content_index(100.0), 6);
        assert_eq!(content_index(120.0), 6);
        assert_eq!(content_index(-3.0), 0);
    }

    #[test]
    fn test_travel_scenario() {
        let milestones = generate_milestones(20.0, 70.0, 6, Purpose::Travel, en());
        assert_eq!(milestones.len(), 6);

        let first = &milestones[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.projected_score, 28);
        assert_eq!(first.band_name, "N4");
        assert_eq!(first.band_color, "#84cc16");
        // 28.3 falls in the third content bucket (25, 40]
        let travel = en().purpose(Purpose::Travel);
        assert_eq!(first.rationale, travel.monthly[2].rationale);
        assert_eq!(first.purpose_milestone, travel.milestones[2]);

        let last = &milestones[5];
        assert_eq!(last.month, 6);
        assert_eq!(last.projected_score, 70);
        assert_eq!(last.band_name, "N2");
        assert_eq!(last.purpose_milestone, travel.milestones[4]);

        // ceil(50 / 6 * 2 * 0.9)
        assert!(milestones.iter().all(|m| m.lessons_needed == 16));
    }

    #[test]
    fn test_lessons_scale_with_purpose() {
        let work = generate_milestones(20.0, 70.0, 6, Purpose::Work, en());
        let beauty = generate_milestones(20.0, 70.0, 6, Purpose::Beauty, en());
        assert_eq!(work[0].lessons_needed, 20);
        assert_eq!(beauty[0].lessons_needed, 14);
    }

    #[test]
    fn test_top_of_scale_uses_last_band() {
        let milestones = generate_milestones(90.0, 100.0, 2, Purpose::Challenge, en());
        assert_eq!(milestones[1].projected_score, 100);
        assert_eq!(milestones[1].band_name, "N1");
        assert_eq!(milestones[1].purpose_milestone, en().purpose(Purpose::Challenge).milestones[6]);
    }

    #[test]
    fn test_zero_months_yields_nothing() {
        assert!(generate_milestones(10.0, 50.0, 0, Purpose::Other, en()).is_empty());
    }

    #[test]
    fn test_content_is_localized() {
        let ja = sensei_content::bundle(Locale::Ja);
        let milestones = generate_milestones(0.0, 10.0, 1, Purpose::Anime, ja);
        assert_eq!(milestones[0].focus_topics[0], ja.purpose(Purpose::Anime).monthly[0].focus[0]);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(27.5), 28.0);
        assert_eq!(round_half_up(28.33), 28.0);
        assert_eq!(round_half_up(-0.5), 0.0);
    }

    proptest! {
        #[test]
        fn prop_milestones_cover_every_month(
            current in 0u32..=100,
            target in 0u32..=100,
            months in 1u32..=36,
        ) {
            let milestones = generate_milestones(current as f64, target as f64, months, Purpose::Other, en());
            prop_assert_eq!(milestones.len(), months as usize);
            for (i, milestone) in milestones.iter().enumerate() {
                prop_assert_eq!(milestone.month, i as u32 + 1);
            }
            prop_assert_eq!(milestones[months as usize - 1].projected_score, target as i32);
        }
    }
}
