//! Lesson-type balance by purpose and starting level.

use sensei_content::TextBundle;
use sensei_core::{LessonTypeDistribution as D, Purpose};

/// Per-purpose distributions for score buckets <20, <40, <60 and the rest,
/// indexed by [`Purpose::index`].
///
/// Rows are kept exactly as authored; some do not add up to 100.
const DISTRIBUTIONS: [[D; 4]; 9] = [
    // anime
    [
        D::new(25, 25, 10, 15, 25),
        D::new(20, 20, 15, 15, 30),
        D::new(15, 20, 15, 20, 30),
        D::new(10, 15, 20, 25, 30),
    ],
    // friends
    [
        D::new(25, 20, 30, 10, 15),
        D::new(20, 15, 35, 10, 20),
        D::new(15, 15, 40, 10, 20),
        D::new(10, 10, 45, 10, 25),
    ],
    // travel
    [
        D::new(20, 30, 30, 10, 10),
        D::new(15, 25, 35, 10, 15),
        D::new(15, 20, 35, 15, 15),
        D::new(10, 20, 35, 15, 20),
    ],
    // culture
    [
        D::new(25, 25, 15, 25, 10),
        D::new(20, 20, 15, 30, 15),
        D::new(20, 20, 15, 30, 15),
        D::new(15, 15, 20, 30, 20),
    ],
    // live
    [
        D::new(25, 25, 25, 15, 10),
        D::new(20, 25, 25, 15, 15),
        D::new(20, 20, 25, 20, 15),
        D::new(15, 20, 25, 20, 20),
    ],
    // work
    [
        D::new(30, 25, 20, 15, 10),
        D::new(25, 20, 25, 15, 15),
        D::new(20, 20, 25, 20, 15),
        D::new(20, 15, 25, 20, 20),
    ],
    // beauty
    [
        D::new(25, 30, 10, 25, 10),
        D::new(20, 30, 10, 25, 15),
        D::new(20, 25, 15, 25, 15),
        D::new(15, 25, 15, 25, 20),
    ],
    // challenge
    [
        D::new(25, 25, 20, 15, 15),
        D::new(25, 25, 20, 15, 15),
        D::new(20, 20, 20, 20, 20),
        D::new(20, 20, 20, 20, 20),
    ],
    // other
    [
        D::new(25, 25, 20, 15, 15),
        D::new(20, 20, 25, 17, 18),
        D::new(20, 20, 25, 17, 18),
        D::new(15, 15, 30, 20, 20),
    ],
];

fn level_bucket(current_score: f64) -> usize {
    if current_score < 20.0 {
        0
    } else if current_score < 40.0 {
        1
    } else if current_score < 60.0 {
        2
    } else {
        3
    }
}

/// Lesson-type split for a purpose at the learner's current score.
///
/// Values are returned as stored, without normalization.
pub fn select_lesson_type_distribution(current_score: f64, purpose: Purpose) -> D {
    DISTRIBUTIONS[purpose.index()][level_bucket(current_score)]
}

/// Same as [`select_lesson_type_distribution`] for a raw purpose key.
///
/// Unknown keys use the table of [`Purpose::DEFAULT`].
pub fn select_lesson_type_distribution_for_key(current_score: f64, purpose_key: &str) -> D {
    select_lesson_type_distribution(current_score, Purpose::from_key_or_default(purpose_key))
}

/// Why the split looks the way it does; beginner wording below score 40.
pub fn distribution_reason(purpose: Purpose, current_score: f64, bundle: &TextBundle) -> &'static str {
    let text = bundle.purpose(purpose);
    if current_score < 40.0 {
        text.reason_beginner
    } else {
        text.reason_advanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensei_core::Locale;

    #[test]
    fn test_bucket_thresholds() {
        let travel = |score| select_lesson_type_distribution(score, Purpose::Travel);
        assert_eq!(travel(0.0), D::new(20, 30, 30, 10, 10));
        assert_eq!(travel(19.9), D::new(20, 30, 30, 10, 10));
        assert_eq!(travel(20.0), D::new(15, 25, 35, 10, 15));
        assert_eq!(travel(40.0), D::new(15, 20, 35, 15, 15));
        assert_eq!(travel(60.0), D::new(10, 20, 35, 15, 20));
        assert_eq!(travel(100.0), D::new(10, 20, 35, 15, 20));
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        for score in [0.0, 25.0, 45.0, 90.0] {
            assert_eq!(
                select_lesson_type_distribution_for_key(score, "knitting"),
                select_lesson_type_distribution(score, Purpose::DEFAULT)
            );
        }
        assert_eq!(
            select_lesson_type_distribution_for_key(10.0, "work"),
            D::new(30, 25, 20, 15, 10)
        );
    }

    #[test]
    fn test_other_keeps_uneven_shares() {
        let other = select_lesson_type_distribution(30.0, Purpose::Other);
        assert_eq!(other.total(), 100);
        assert_eq!(other.reading, 17);
        assert_eq!(other.listening, 18);
    }

    #[test]
    fn test_every_row_is_near_hundred() {
        for rows in DISTRIBUTIONS.iter() {
            for row in rows {
                let total = row.total();
                assert!((95..=105).contains(&total), "total {}", total);
            }
        }
    }

    #[test]
    fn test_distribution_reason_switches_at_forty() {
        let bundle = sensei_content::bundle(Locale::En);
        let text = bundle.purpose(Purpose::Work);
        assert_eq!(distribution_reason(Purpose::Work, 39.0, bundle), text.reason_beginner);
        assert_eq!(distribution_reason(Purpose::Work, 40.0, bundle), text.reason_advanced);
    }
}
