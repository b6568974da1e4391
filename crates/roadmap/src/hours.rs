//! Study hour budget and weekly/daily pace.

use sensei_core::{Pace, BANDS};

/// Total study hours to move from `current_score` to `target_score`.
///
/// Each band contributes its hours in proportion to how much of
/// `[min_score, max_score)` the range `[current_score, target_score)`
/// covers, so the result is the integral of a per-point hour rate.
/// Bands with no overlap contribute nothing; a target at or below the
/// current score yields 0.
pub fn compute_total_hours(current_score: f64, target_score: f64) -> u32 {
    let total: f64 = BANDS
        .iter()
        .map(|band| {
            let overlap_start = current_score.max(band.min_score);
            let overlap_end = target_score.min(band.max_score);
            if overlap_start < overlap_end {
                band.hours * (overlap_end - overlap_start) / band.width()
            } else {
                0.0
            }
        })
        .sum();

    total.round() as u32
}

/// Pace needed to study `total_hours` over `months`.
///
/// A month counts as 4 weeks or 30 days. `months` must be at least 1;
/// with 0 the result is not finite.
pub fn derive_pace(total_hours: u32, months: u32) -> Pace {
    let hours = total_hours as f64;
    let months = months as f64;
    Pace {
        hours_per_week: round_tenth(hours / (months * 4.0)),
        hours_per_day: round_tenth(hours / (months * 30.0)),
    }
}

/// Round to one decimal place, halves away from zero.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_equal_scores_cost_nothing() {
        assert_eq!(compute_total_hours(35.0, 35.0), 0);
        assert_eq!(compute_total_hours(0.0, 0.0), 0);
    }

    #[test]
    fn test_full_band_matches_declared_hours() {
        for band in BANDS.iter() {
            assert_eq!(
                compute_total_hours(band.min_score, band.max_score),
                band.hours as u32,
                "band {}",
                band.name
            );
        }
    }

    #[test]
    fn test_whole_scale() {
        assert_eq!(compute_total_hours(0.0, 100.0), 150 + 300 + 450 + 600 + 900);
    }

    #[test]
    fn test_partial_bands() {
        // N4 full (300) + N3 full (450) + half of N2 (300)
        assert_eq!(compute_total_hours(20.0, 70.0), 1050);
        // a quarter of N5
        assert_eq!(compute_total_hours(0.0, 5.0), 38);
    }

    #[test]
    fn test_reversed_range_is_zero() {
        assert_eq!(compute_total_hours(70.0, 20.0), 0);
    }

    #[test]
    fn test_out_of_scale_inputs_degrade() {
        assert_eq!(compute_total_hours(-50.0, 0.0), 0);
        assert_eq!(compute_total_hours(80.0, 150.0), 900);
    }

    #[test]
    fn test_derive_pace() {
        let pace = derive_pace(1050, 6);
        assert_eq!(pace.hours_per_week, 43.8);
        assert_eq!(pace.hours_per_day, 5.8);

        let pace = derive_pace(0, 3);
        assert_eq!(pace.hours_per_week, 0.0);
        assert_eq!(pace.hours_per_day, 0.0);
    }

    proptest! {
        #[test]
        fn prop_hours_monotonic_in_target(
            current in 0u32..=100,
            target in 0u32..100,
        ) {
            let lower = compute_total_hours(current as f64, target as f64);
            let higher = compute_total_hours(current as f64, (target + 1) as f64);
            prop_assert!(higher >= lower, "{} -> {} vs {}", current, lower, higher);
        }

        #[test]
        fn prop_hours_bounded_by_scale(current in 0.0f64..100.0, target in 0.0f64..100.0) {
            prop_assert!(compute_total_hours(current, target) <= 2400);
        }

        #[test]
        fn prop_pace_never_negative(hours in 0u32..5000, months in 1u32..=36) {
            let pace = derive_pace(hours, months);
            prop_assert!(pace.hours_per_week >= 0.0);
            prop_assert!(pace.hours_per_day <= pace.hours_per_week);
        }
    }
}
