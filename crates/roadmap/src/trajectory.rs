//! Chart-ready score trajectory.

use sensei_content::TextBundle;
use sensei_core::TrajectoryPoint;
use crate::hours::round_tenth;
use crate::milestones::projected_score;

/// `months + 1` points from "now" to the target, one decimal each.
///
/// Uses the same interpolation as the milestones, so both series agree at
/// every month boundary.
pub fn build_trajectory_points(
    current_score: f64,
    target_score: f64,
    months: u32,
    bundle: &TextBundle,
) -> Vec<TrajectoryPoint> {
    (0..=months)
        .map(|month| TrajectoryPoint {
            label: bundle.month_label(month),
            score: round_tenth(projected_score(current_score, target_score, months, month)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sensei_core::Locale;

    #[test]
    fn test_twelve_months_gives_thirteen_points() {
        let bundle = sensei_content::bundle(Locale::En);
        let points = build_trajectory_points(10.0, 80.0, 12, bundle);
        assert_eq!(points.len(), 13);
        assert_eq!(points[0].label, bundle.now);
        assert_eq!(points[0].score, 10.0);
        assert_eq!(points[1].score, 15.8);
        assert_eq!(points[3].score, 27.5);
        assert_eq!(points[12].score, 80.0);
        assert_eq!(points[12].label, format!("12{}", bundle.months_later));
    }

    #[test]
    fn test_japanese_labels() {
        let bundle = sensei_content::bundle(Locale::Ja);
        let points = build_trajectory_points(20.0, 70.0, 2, bundle);
        assert_eq!(points[0].label, "現在");
        assert_eq!(points[2].label, "2ヶ月後");
    }

    #[test]
    fn test_zero_months_is_just_now() {
        let bundle = sensei_content::bundle(Locale::En);
        let points = build_trajectory_points(42.0, 80.0, 0, bundle);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].score, 42.0);
    }

    proptest! {
        #[test]
        fn prop_endpoints_match_inputs(
            current in 0u32..=100,
            target in 0u32..=100,
            months in 1u32..=36,
        ) {
            let bundle = sensei_content::bundle(Locale::En);
            let points = build_trajectory_points(current as f64, target as f64, months, bundle);
            prop_assert_eq!(points.len(), months as usize + 1);
            prop_assert_eq!(points[0].score, current as f64);
            prop_assert_eq!(points[months as usize].score, target as f64);
        }
    }
}
