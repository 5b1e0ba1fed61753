//! Data models for the `qRate` client.
//!
//! Wire shapes mirror the backend's JSON (camelCase keys). Everything
//! here is backend-owned; the client reads and displays it, except for
//! the review payloads in [`crate::core::review`] which it produces.

pub mod course;
pub mod professor;
pub mod review;

pub use course::{CourseDetail, CourseRatings, CourseSummary};
pub use professor::{ProfessorReviewHit, ProfessorSummary};
pub use review::{Author, PostedReview, RatingDistribution};
