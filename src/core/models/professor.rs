//! Professor models

use serde::{Deserialize, Serialize};

use super::review::PostedReview;

/// A professor as listed by `GET /api/v1/professors`.
///
/// The display name doubles as the lookup key for review searches.
/// Names are not guaranteed unique; two professors sharing one are
/// indistinguishable to this client (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorSummary {
    /// Display name (e.g. "Dr. Sarah Johnson")
    pub name: String,

    /// Department or faculty
    pub department: String,

    /// Mean overall rating across all reviews
    pub rating: f64,

    /// Mean difficulty rating
    pub difficulty: f64,

    /// Mean helpfulness rating
    pub helpfulness: f64,

    /// Mean clarity rating
    pub clarity: f64,

    /// Number of reviews behind the means
    #[serde(default)]
    pub review_count: u32,

    /// Freeform descriptive tags (e.g. "Fair Grading")
    #[serde(default)]
    pub tags: Vec<String>,

    /// Codes of the courses this professor teaches
    #[serde(default)]
    pub courses: Vec<String>,
}

/// One element of the `GET /api/v1/professor-reviews/search` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorReviewHit {
    /// Department the review was filed under
    #[serde(default)]
    pub department: String,

    /// The review itself
    pub review: PostedReview,
}
