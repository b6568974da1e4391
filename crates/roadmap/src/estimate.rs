//! Suggested plan length from the band gap.

use sensei_core::band_index;

/// Months allowed per band crossed.
pub const MONTHS_PER_LEVEL: u32 = 6;

/// Band index of a score clamped onto the 0-100 scale. NaN counts as 0.
fn band_step(score: f64) -> u32 {
    let score = if score.is_nan() { 0.0 } else { score.clamp(0.0, 100.0) };
    band_index(score) as u32
}

/// Rough plan length for moving between two scores, 0 when the target
/// sits in the same band as the current score or below it.
pub fn estimate_months(current_score: f64, target_score: f64) -> u32 {
    band_step(target_score).saturating_sub(band_step(current_score)) * MONTHS_PER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_months() {
        assert_eq!(estimate_months(0.0, 100.0), 24);
        assert_eq!(estimate_months(20.0, 80.0), 18);
        assert_eq!(estimate_months(25.0, 39.0), 0);
        assert_eq!(estimate_months(60.0, 20.0), 0);
        assert_eq!(estimate_months(-10.0, 150.0), 24);
        assert_eq!(estimate_months(f64::NAN, 45.0), 12);
    }

    #[test]
    fn test_top_band_includes_perfect_score() {
        assert_eq!(estimate_months(80.0, 100.0), 0);
        assert_eq!(estimate_months(79.0, 100.0), 6);
    }
}
