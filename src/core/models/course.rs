//! Course models

use serde::{Deserialize, Serialize};

use super::review::{PostedReview, RatingDistribution};

/// A course as listed by `GET /api/v1/courses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    /// Course code, unique within the catalogue (e.g. "COMP 102")
    pub code: String,

    /// Full course name (e.g. "Introduction to Computing")
    pub name: String,

    /// Department offering the course
    pub department: String,

    /// Primary instructor's display name
    pub instructor: String,

    /// Mean overall rating across all reviews
    pub rating: f64,

    /// Mean difficulty rating
    pub difficulty: f64,

    /// Mean usefulness rating
    pub usefulness: f64,

    /// Mean workload rating
    pub workload: f64,

    /// Number of reviews behind the means
    #[serde(default)]
    pub review_count: u32,

    /// Freeform descriptive tags (e.g. "beginner-friendly")
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Per-category mean ratings nested in a course detail payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseRatings {
    /// Mean overall rating
    pub overall: f64,
    /// Mean difficulty rating
    pub difficulty: f64,
    /// Mean usefulness rating
    pub usefulness: f64,
    /// Mean workload rating
    pub workload: f64,
    /// Mean teaching-quality rating
    pub teaching: f64,
}

/// A single course as returned by `GET /api/v1/courses/{id}`, with its
/// aggregate ratings, star distribution and review history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    /// Course code (e.g. "COMP 102")
    pub code: String,

    /// Full course name
    pub name: String,

    /// Department offering the course
    #[serde(default)]
    pub department: String,

    /// Calendar description
    #[serde(default)]
    pub description: String,

    /// Credit weight
    #[serde(default)]
    pub credits: f64,

    /// Prerequisite course codes
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Freeform descriptive tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Pre-computed per-category means
    #[serde(default)]
    pub ratings: CourseRatings,

    /// Star histogram over all reviews
    #[serde(default)]
    pub rating_distribution: RatingDistribution,

    /// Total number of reviews
    #[serde(default)]
    pub total_reviews: u32,

    /// The reviews themselves, newest first as served
    #[serde(default)]
    pub reviews: Vec<PostedReview>,
}
