//! Posted-review and review-author models

use serde::{Deserialize, Serialize};

/// A single review as echoed back by the backend inside a course or
/// professor detail payload.
///
/// Course and professor reviews share this shape; the per-entity rating
/// categories (`usefulness`/`workload`/`teaching` vs.
/// `helpfulness`/`clarity`) are optional and absent fields simply do not
/// contribute to aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostedReview {
    /// Course code the review is about, when the backend includes it
    /// (professor reviews carry the course they were taken in).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    /// Academic term the review refers to (e.g. "Fall 2024")
    #[serde(default)]
    pub term: String,

    /// Overall 1-5 star rating
    #[serde(default, alias = "overallRating")]
    pub rating: i64,

    /// Difficulty 1-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i64>,

    /// Usefulness 1-5 (course reviews)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usefulness: Option<i64>,

    /// Workload 1-5 (course reviews)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload: Option<i64>,

    /// Teaching quality 1-5 (course reviews)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching: Option<i64>,

    /// Helpfulness 1-5 (professor reviews)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helpfulness: Option<i64>,

    /// Clarity 1-5 (professor reviews)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarity: Option<i64>,

    /// Would-take-again flag, 0 or 1 (professor reviews)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub would_take_again: Option<i64>,

    /// Free-text review body
    #[serde(default)]
    pub comment: String,

    /// "Was this helpful?" yes votes
    #[serde(default)]
    pub helpful: u32,

    /// "Was this helpful?" no votes
    #[serde(default)]
    pub not_helpful: u32,

    /// Submission date as provided by the backend (e.g. "2024-04-20")
    #[serde(default)]
    pub date: String,
}

/// Per-star review counts as served in detail payloads.
///
/// The JSON keys are the five allowed star values themselves
/// (`"1"`..`"5"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RatingDistribution {
    /// Count of 1-star reviews
    #[serde(rename = "1", default)]
    pub one: u32,
    /// Count of 2-star reviews
    #[serde(rename = "2", default)]
    pub two: u32,
    /// Count of 3-star reviews
    #[serde(rename = "3", default)]
    pub three: u32,
    /// Count of 4-star reviews
    #[serde(rename = "4", default)]
    pub four: u32,
    /// Count of 5-star reviews
    #[serde(rename = "5", default)]
    pub five: u32,
}

impl RatingDistribution {
    /// Count for one star bucket; 0 for anything outside 1..=5.
    #[must_use]
    pub const fn bucket(&self, stars: u8) -> u32 {
        match stars {
            1 => self.one,
            2 => self.two,
            3 => self.three,
            4 => self.four,
            5 => self.five,
            _ => 0,
        }
    }

    /// Total number of counted reviews across all buckets.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.one + self.two + self.three + self.four + self.five
    }
}

/// Review author as attached to submission payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Display name shown next to the review
    pub name: String,
    /// Opaque user identifier
    pub user_id: String,
}

impl Author {
    /// The anonymous author the web client attaches to submissions.
    /// The backend does not attribute reviews to accounts yet.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            name: "Anonymous".to_string(),
            user_id: "guest-123".to_string(),
        }
    }
}
