//! Client-side rating aggregation.
//!
//! Given a list of raw review records this computes the per-category
//! arithmetic means and the 1-5 star histogram used to render a summary
//! card. The aggregation is pure: no running state, same input always
//! produces the same output.

use std::collections::BTreeMap;

use crate::core::models::PostedReview;

/// Category key the overall star rating is aggregated under.
pub const OVERALL: &str = "overall";

/// A record the aggregator can consume.
pub trait Rated {
    /// Overall 1-5 star value. Counted into the histogram only when it
    /// falls inside 1..=5.
    fn overall(&self) -> i64;

    /// Per-category values this record carries. A record contributes to
    /// a category mean only when the value is present.
    fn categories(&self) -> Vec<(&'static str, Option<i64>)>;
}

impl Rated for PostedReview {
    fn overall(&self) -> i64 {
        self.rating
    }

    fn categories(&self) -> Vec<(&'static str, Option<i64>)> {
        vec![
            ("difficulty", self.difficulty),
            ("usefulness", self.usefulness),
            ("workload", self.workload),
            ("teaching", self.teaching),
            ("helpfulness", self.helpfulness),
            ("clarity", self.clarity),
        ]
    }
}

/// Aggregated ratings for one course or professor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RatingSummary {
    /// Mean per category, rounded to one decimal. Categories no record
    /// carried are absent; [`RatingSummary::mean`] reads them as 0.
    pub means: BTreeMap<&'static str, f64>,

    /// Review counts per overall star value, index 0 holding 1-star.
    /// Out-of-range overall values are dropped, so the bucket total may
    /// be below [`RatingSummary::count`].
    pub histogram: [u32; 5],

    /// Number of input records.
    pub count: usize,
}

impl RatingSummary {
    /// Mean for one category; 0 when nothing contributed to it.
    #[must_use]
    pub fn mean(&self, category: &str) -> f64 {
        self.means.get(category).copied().unwrap_or(0.0)
    }

    /// Histogram count for one star bucket; 0 outside 1..=5.
    #[must_use]
    pub fn stars(&self, bucket: u8) -> u32 {
        match bucket {
            1..=5 => self.histogram[usize::from(bucket) - 1],
            _ => 0,
        }
    }
}

/// Compute means, histogram and count over a list of review records.
///
/// An empty list yields zero means and an all-zero histogram rather
/// than a division-by-zero error.
#[must_use]
pub fn aggregate<R: Rated>(reviews: &[R]) -> RatingSummary {
    let mut sums: BTreeMap<&'static str, (i64, usize)> = BTreeMap::new();
    let mut histogram = [0u32; 5];

    for review in reviews {
        let overall = review.overall();
        if (1..=5).contains(&overall) {
            histogram[usize::try_from(overall - 1).unwrap_or(0)] += 1;
        }

        let entry = sums.entry(OVERALL).or_insert((0, 0));
        entry.0 += overall;
        entry.1 += 1;

        for (category, value) in review.categories() {
            if let Some(value) = value {
                let entry = sums.entry(category).or_insert((0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }
    }

    let means = sums
        .into_iter()
        .map(|(category, (sum, contributors))| {
            #[allow(clippy::cast_precision_loss)]
            let mean = sum as f64 / contributors as f64;
            (category, round_to_one_decimal(mean))
        })
        .collect();

    RatingSummary {
        means,
        histogram,
        count: reviews.len(),
    }
}

/// Round a mean to one decimal place for display.
#[must_use]
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Proportional bar for one histogram bucket, `width` cells wide at
/// 100%. Display-only.
#[must_use]
pub fn star_bar(count: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return String::new();
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((f64::from(count) / f64::from(total)) * width as f64).round() as usize;
    "#".repeat(filled.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: i64, difficulty: Option<i64>, helpfulness: Option<i64>) -> PostedReview {
        PostedReview {
            rating,
            difficulty,
            helpfulness,
            ..PostedReview::default()
        }
    }

    #[test]
    fn empty_list_yields_zero_means_and_zero_histogram() {
        let summary = aggregate::<PostedReview>(&[]);

        assert_eq!(summary.count, 0);
        assert_eq!(summary.histogram, [0; 5]);
        assert!(summary.mean(OVERALL).abs() < f64::EPSILON);
        assert!(summary.mean("difficulty").abs() < f64::EPSILON);
    }

    #[test]
    fn means_average_only_contributing_records() {
        let reviews = vec![
            review(5, Some(3), Some(5)),
            review(4, Some(4), None),
            review(5, None, Some(4)),
        ];

        let summary = aggregate(&reviews);

        // difficulty: (3 + 4) / 2, helpfulness: (5 + 4) / 2
        assert!((summary.mean("difficulty") - 3.5).abs() < f64::EPSILON);
        assert!((summary.mean("helpfulness") - 4.5).abs() < f64::EPSILON);
        // overall: (5 + 4 + 5) / 3 = 4.666... -> 4.7
        assert!((summary.mean(OVERALL) - 4.7).abs() < f64::EPSILON);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn histogram_counts_only_in_range_overall_values() {
        let reviews = vec![
            review(5, None, None),
            review(5, None, None),
            review(1, None, None),
            review(0, None, None),
            review(9, None, None),
        ];

        let summary = aggregate(&reviews);

        assert_eq!(summary.stars(5), 2);
        assert_eq!(summary.stars(1), 1);
        assert_eq!(summary.count, 5);
        let bucket_total: u32 = summary.histogram.iter().sum();
        assert!(bucket_total as usize <= summary.count);
        assert_eq!(bucket_total, 3);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let reviews = vec![review(4, Some(2), Some(4)), review(3, Some(5), Some(3))];

        assert_eq!(aggregate(&reviews), aggregate(&reviews));
    }

    #[test]
    fn means_round_to_one_decimal() {
        let reviews = vec![
            review(4, Some(1), None),
            review(4, Some(1), None),
            review(4, Some(2), None),
        ];

        let summary = aggregate(&reviews);
        // 4/3 = 1.333... -> 1.3
        assert!((summary.mean("difficulty") - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn stars_rejects_out_of_range_buckets() {
        let summary = aggregate(&[review(3, None, None)]);
        assert_eq!(summary.stars(0), 0);
        assert_eq!(summary.stars(6), 0);
        assert_eq!(summary.stars(3), 1);
    }

    #[test]
    fn star_bar_scales_with_share_of_total() {
        assert_eq!(star_bar(10, 10, 20), "#".repeat(20));
        assert_eq!(star_bar(5, 10, 20), "#".repeat(10));
        assert_eq!(star_bar(0, 10, 20), "");
        assert_eq!(star_bar(3, 0, 20), "");
    }
}
