//! Review drafting, validation and submission.
//!
//! A draft holds two parallel tracks, one per review kind, selected by
//! [`ReviewKind`]. Switching kinds never clears the inactive track, so
//! a user can toggle back and forth without losing work. Validation
//! runs on submit: required fields first, then the minimum comment
//! length; the gateway is only reached once both gates pass.

use serde::Serialize;

use crate::core::error::{ReviewFormError, SubmitError};
use crate::core::gateway::ApiClient;
use crate::core::models::Author;

/// Minimum trimmed comment length accepted on submission.
pub const MIN_COMMENT_LEN: usize = 50;

/// Which review track a draft currently targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewKind {
    /// Reviewing a course
    #[default]
    Course,
    /// Reviewing a professor
    Professor,
}

/// Form state for a course review.
///
/// Slider fields default to the midline values the web client starts
/// its sliders at; [`CourseReviewForm::reset`] restores them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseReviewForm {
    /// Course code being reviewed (required)
    pub course_code: String,
    /// Full course name (optional, sent along for display)
    pub course_name: String,
    /// Instructor who taught the offering (required)
    pub instructor: String,
    /// Academic term, e.g. "Fall 2024" (required)
    pub term: String,
    /// Overall rating slider, 1-5
    pub overall_rating: u8,
    /// Difficulty slider, 1-5
    pub difficulty: u8,
    /// Usefulness slider, 1-5
    pub usefulness: u8,
    /// Workload slider, 1-5
    pub workload: u8,
    /// Teaching-quality slider, 1-5
    pub teaching: u8,
    /// Free-text review body (required, >= 50 chars trimmed)
    pub comment: String,
}

impl Default for CourseReviewForm {
    fn default() -> Self {
        Self {
            course_code: String::new(),
            course_name: String::new(),
            instructor: String::new(),
            term: String::new(),
            overall_rating: 4,
            difficulty: 3,
            usefulness: 4,
            workload: 3,
            teaching: 4,
            comment: String::new(),
        }
    }
}

impl CourseReviewForm {
    /// Run the submission gates in order: required fields, then the
    /// minimum comment length.
    ///
    /// # Errors
    /// [`ReviewFormError::MissingFields`] naming every blank required
    /// field, or [`ReviewFormError::CommentTooShort`] once all required
    /// fields are present.
    pub fn validate(&self) -> Result<(), ReviewFormError> {
        let mut fields = Vec::new();
        if self.course_code.trim().is_empty() {
            fields.push("course code");
        }
        if self.instructor.trim().is_empty() {
            fields.push("instructor");
        }
        if self.term.trim().is_empty() {
            fields.push("term");
        }
        if self.comment.trim().is_empty() {
            fields.push("comment");
        }
        if !fields.is_empty() {
            return Err(ReviewFormError::MissingFields { fields });
        }

        let length = self.comment.trim().chars().count();
        if length < MIN_COMMENT_LEN {
            return Err(ReviewFormError::CommentTooShort { length });
        }
        Ok(())
    }

    /// Flatten the form into the wire payload, stamped with the author.
    #[must_use]
    pub fn to_payload(&self, author: &Author) -> CourseReviewPayload {
        CourseReviewPayload {
            course_code: self.course_code.clone(),
            course_name: self.course_name.clone(),
            instructor: self.instructor.clone(),
            term: self.term.clone(),
            overall_rating: self.overall_rating,
            difficulty: self.difficulty,
            usefulness: self.usefulness,
            workload: self.workload,
            teaching: self.teaching,
            comment: self.comment.clone(),
            user: author.clone(),
        }
    }

    /// Restore every field to its documented default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Form state for a professor review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessorReviewForm {
    /// Professor's display name (required)
    pub professor_name: String,
    /// Department the professor teaches in (required)
    pub department: String,
    /// Course the review refers to (optional)
    pub course_code: String,
    /// Academic term (required)
    pub term: String,
    /// Overall rating slider, 1-5
    pub overall_rating: u8,
    /// Difficulty slider, 1-5
    pub difficulty: u8,
    /// Helpfulness slider, 1-5
    pub helpfulness: u8,
    /// Clarity slider, 1-5
    pub clarity: u8,
    /// Whether the reviewer would take this professor again
    pub would_take_again: bool,
    /// Free-text review body (required, >= 50 chars trimmed)
    pub comment: String,
}

impl Default for ProfessorReviewForm {
    fn default() -> Self {
        Self {
            professor_name: String::new(),
            department: String::new(),
            course_code: String::new(),
            term: String::new(),
            overall_rating: 4,
            difficulty: 3,
            helpfulness: 4,
            clarity: 4,
            would_take_again: true,
            comment: String::new(),
        }
    }
}

impl ProfessorReviewForm {
    /// Run the submission gates in order, mirroring
    /// [`CourseReviewForm::validate`].
    ///
    /// # Errors
    /// [`ReviewFormError::MissingFields`] or
    /// [`ReviewFormError::CommentTooShort`].
    pub fn validate(&self) -> Result<(), ReviewFormError> {
        let mut fields = Vec::new();
        if self.professor_name.trim().is_empty() {
            fields.push("professor name");
        }
        if self.department.trim().is_empty() {
            fields.push("department");
        }
        if self.term.trim().is_empty() {
            fields.push("term");
        }
        if self.comment.trim().is_empty() {
            fields.push("comment");
        }
        if !fields.is_empty() {
            return Err(ReviewFormError::MissingFields { fields });
        }

        let length = self.comment.trim().chars().count();
        if length < MIN_COMMENT_LEN {
            return Err(ReviewFormError::CommentTooShort { length });
        }
        Ok(())
    }

    /// Flatten the form into the wire payload, stamped with the author.
    #[must_use]
    pub fn to_payload(&self, author: &Author) -> ProfessorReviewPayload {
        ProfessorReviewPayload {
            professor_name: self.professor_name.clone(),
            department: self.department.clone(),
            course_code: if self.course_code.trim().is_empty() {
                None
            } else {
                Some(self.course_code.clone())
            },
            term: self.term.clone(),
            overall_rating: self.overall_rating,
            difficulty: self.difficulty,
            helpfulness: self.helpfulness,
            clarity: self.clarity,
            would_take_again: u8::from(self.would_take_again),
            comment: self.comment.clone(),
            user: author.clone(),
        }
    }

    /// Restore every field to its documented default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Wire payload for `POST /api/v1/reviews/new`. Slider values are bare
/// integers, never arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseReviewPayload {
    /// Course code
    pub course_code: String,
    /// Course name
    pub course_name: String,
    /// Instructor name
    pub instructor: String,
    /// Academic term
    pub term: String,
    /// Overall rating, 1-5
    pub overall_rating: u8,
    /// Difficulty, 1-5
    pub difficulty: u8,
    /// Usefulness, 1-5
    pub usefulness: u8,
    /// Workload, 1-5
    pub workload: u8,
    /// Teaching quality, 1-5
    pub teaching: u8,
    /// Review body
    pub comment: String,
    /// Submitting user
    pub user: Author,
}

/// Wire payload for `POST /api/v1/professor-reviews/new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorReviewPayload {
    /// Professor's display name
    pub professor_name: String,
    /// Department
    pub department: String,
    /// Course the review refers to, omitted when not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    /// Academic term
    pub term: String,
    /// Overall rating, 1-5
    pub overall_rating: u8,
    /// Difficulty, 1-5
    pub difficulty: u8,
    /// Helpfulness, 1-5
    pub helpfulness: u8,
    /// Clarity, 1-5
    pub clarity: u8,
    /// 1 = yes, 0 = no
    pub would_take_again: u8,
    /// Review body
    pub comment: String,
    /// Submitting user
    pub user: Author,
}

/// A two-track review draft plus the active-track selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewDraft {
    kind: ReviewKind,
    /// Course-review track
    pub course: CourseReviewForm,
    /// Professor-review track
    pub professor: ProfessorReviewForm,
}

impl ReviewDraft {
    /// Start a draft on the given track.
    #[must_use]
    pub fn new(kind: ReviewKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// The currently active track.
    #[must_use]
    pub const fn kind(&self) -> ReviewKind {
        self.kind
    }

    /// Switch tracks. The inactive track keeps its in-progress state.
    pub fn set_kind(&mut self, kind: ReviewKind) {
        self.kind = kind;
    }

    /// Validate the active track without touching the gateway.
    ///
    /// # Errors
    /// Propagates the active form's [`ReviewFormError`].
    pub fn validate(&self) -> Result<(), ReviewFormError> {
        match self.kind {
            ReviewKind::Course => self.course.validate(),
            ReviewKind::Professor => self.professor.validate(),
        }
    }

    /// Validate, serialize and submit the active track.
    ///
    /// On success the active track resets to its defaults; the inactive
    /// track is untouched. On any failure both tracks keep every
    /// entered value so nothing is lost.
    ///
    /// # Errors
    /// [`SubmitError::Form`] when validation fails (the gateway is not
    /// called), [`SubmitError::Gateway`] when the backend rejects the
    /// payload or the request fails.
    pub async fn submit(&mut self, api: &ApiClient, author: &Author) -> Result<(), SubmitError> {
        self.validate()?;

        match self.kind {
            ReviewKind::Course => {
                api.submit_course_review(&self.course.to_payload(author)).await?;
                self.course.reset();
            }
            ReviewKind::Professor => {
                api.submit_professor_review(&self.professor.to_payload(author)).await?;
                self.professor.reset();
            }
        }
        Ok(())
    }
}

/// Display label for one slider value. `difficulty` and `workload` use
/// the effort scale, `would_take_again` maps 0/1 to No/Yes, every other
/// category uses the quality scale. Values outside the scale have no
/// label. Display-only; never persisted.
#[must_use]
pub fn rating_label(category: &str, value: u8) -> Option<&'static str> {
    const EFFORT: [&str; 5] = ["Very Easy", "Easy", "Moderate", "Hard", "Very Hard"];
    const QUALITY: [&str; 5] = ["Very Poor", "Poor", "Average", "Good", "Excellent"];

    match category {
        "would_take_again" | "wouldTakeAgain" => match value {
            0 => Some("No"),
            1 => Some("Yes"),
            _ => None,
        },
        "difficulty" | "workload" => usize::from(value)
            .checked_sub(1)
            .and_then(|idx| EFFORT.get(idx))
            .copied(),
        _ => usize::from(value)
            .checked_sub(1)
            .and_then(|idx| QUALITY.get(idx))
            .copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_course_form(comment: &str) -> CourseReviewForm {
        CourseReviewForm {
            course_code: "COMP 102".to_string(),
            course_name: "Introduction to Computing".to_string(),
            instructor: "Dr. Smith".to_string(),
            term: "Fall 2024".to_string(),
            comment: comment.to_string(),
            ..CourseReviewForm::default()
        }
    }

    fn long_comment() -> String {
        "The lectures were well paced and the assignments built on each other nicely.".to_string()
    }

    #[test]
    fn course_defaults_match_the_documented_sliders() {
        let form = CourseReviewForm::default();
        assert_eq!(form.overall_rating, 4);
        assert_eq!(form.difficulty, 3);
        assert_eq!(form.usefulness, 4);
        assert_eq!(form.workload, 3);
        assert_eq!(form.teaching, 4);
        assert!(form.comment.is_empty());
    }

    #[test]
    fn professor_defaults_match_the_documented_sliders() {
        let form = ProfessorReviewForm::default();
        assert_eq!(form.overall_rating, 4);
        assert_eq!(form.difficulty, 3);
        assert_eq!(form.helpfulness, 4);
        assert_eq!(form.clarity, 4);
        assert!(form.would_take_again);
    }

    #[test]
    fn missing_fields_reported_before_comment_length() {
        let form = CourseReviewForm {
            comment: "short".to_string(),
            ..CourseReviewForm::default()
        };

        match form.validate() {
            Err(ReviewFormError::MissingFields { fields }) => {
                assert_eq!(fields, vec!["course code", "instructor", "term"]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn comment_of_49_chars_is_rejected() {
        let comment = "x".repeat(49);
        let form = filled_course_form(&comment);

        assert_eq!(
            form.validate(),
            Err(ReviewFormError::CommentTooShort { length: 49 })
        );
    }

    #[test]
    fn comment_of_50_chars_passes_the_length_gate() {
        let comment = "y".repeat(50);
        let form = filled_course_form(&comment);

        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn comment_length_is_measured_after_trimming() {
        let padded = format!("   {}   ", "z".repeat(49));
        let form = filled_course_form(&padded);

        assert_eq!(
            form.validate(),
            Err(ReviewFormError::CommentTooShort { length: 49 })
        );
    }

    #[test]
    fn blank_comment_is_a_missing_field_not_a_short_comment() {
        let form = CourseReviewForm {
            course_code: "COMP 102".to_string(),
            instructor: "Dr. Smith".to_string(),
            term: "Fall 2024".to_string(),
            comment: "   ".to_string(),
            ..CourseReviewForm::default()
        };

        assert_eq!(
            form.validate(),
            Err(ReviewFormError::MissingFields {
                fields: vec!["comment"]
            })
        );
    }

    #[test]
    fn course_payload_serializes_bare_integers_and_camel_case() {
        let form = filled_course_form(&long_comment());
        let payload = form.to_payload(&Author::anonymous());
        let json = serde_json::to_value(&payload).expect("serialize payload");

        assert_eq!(json["courseCode"], "COMP 102");
        assert_eq!(json["overallRating"], 4);
        assert!(json["overallRating"].is_u64());
        assert_eq!(json["comment"], long_comment());
        assert_eq!(json["user"]["userId"], "guest-123");
    }

    #[test]
    fn professor_payload_encodes_would_take_again_as_integer() {
        let mut form = ProfessorReviewForm {
            professor_name: "Dr. Sarah Johnson".to_string(),
            department: "Computing".to_string(),
            term: "Fall 2024".to_string(),
            comment: long_comment(),
            ..ProfessorReviewForm::default()
        };

        let yes = serde_json::to_value(form.to_payload(&Author::anonymous())).expect("serialize");
        assert_eq!(yes["wouldTakeAgain"], 1);
        assert!(yes.get("courseCode").is_none());

        form.would_take_again = false;
        form.course_code = "COMP 102".to_string();
        let no = serde_json::to_value(form.to_payload(&Author::anonymous())).expect("serialize");
        assert_eq!(no["wouldTakeAgain"], 0);
        assert_eq!(no["courseCode"], "COMP 102");
    }

    #[test]
    fn switching_tracks_preserves_both_forms() {
        let mut draft = ReviewDraft::new(ReviewKind::Course);
        draft.course.course_code = "COMP 102".to_string();
        draft.course.comment = "half-written thoughts".to_string();

        draft.set_kind(ReviewKind::Professor);
        draft.professor.professor_name = "Dr. Sarah Johnson".to_string();

        draft.set_kind(ReviewKind::Course);
        assert_eq!(draft.course.course_code, "COMP 102");
        assert_eq!(draft.course.comment, "half-written thoughts");
        assert_eq!(draft.professor.professor_name, "Dr. Sarah Johnson");
    }

    #[test]
    fn reset_restores_defaults_for_one_track_only() {
        let mut draft = ReviewDraft::new(ReviewKind::Course);
        draft.course = filled_course_form(&long_comment());
        draft.professor.professor_name = "Dr. Sarah Johnson".to_string();

        draft.course.reset();

        assert_eq!(draft.course, CourseReviewForm::default());
        assert_eq!(draft.professor.professor_name, "Dr. Sarah Johnson");
    }

    #[test]
    fn draft_validates_only_the_active_track() {
        let mut draft = ReviewDraft::new(ReviewKind::Professor);
        // Course track is blank, professor track is complete.
        draft.professor = ProfessorReviewForm {
            professor_name: "Dr. Sarah Johnson".to_string(),
            department: "Computing".to_string(),
            term: "Fall 2024".to_string(),
            comment: long_comment(),
            ..ProfessorReviewForm::default()
        };

        assert_eq!(draft.validate(), Ok(()));

        draft.set_kind(ReviewKind::Course);
        assert!(matches!(
            draft.validate(),
            Err(ReviewFormError::MissingFields { .. })
        ));
    }

    #[test]
    fn effort_categories_use_the_effort_scale() {
        assert_eq!(rating_label("difficulty", 1), Some("Very Easy"));
        assert_eq!(rating_label("workload", 5), Some("Very Hard"));
        assert_eq!(rating_label("difficulty", 3), Some("Moderate"));
    }

    #[test]
    fn other_categories_use_the_quality_scale() {
        assert_eq!(rating_label("overall_rating", 1), Some("Very Poor"));
        assert_eq!(rating_label("teaching", 4), Some("Good"));
        assert_eq!(rating_label("helpfulness", 5), Some("Excellent"));
    }

    #[test]
    fn would_take_again_maps_zero_one_to_no_yes() {
        assert_eq!(rating_label("would_take_again", 0), Some("No"));
        assert_eq!(rating_label("would_take_again", 1), Some("Yes"));
        assert_eq!(rating_label("would_take_again", 2), None);
    }

    #[test]
    fn out_of_range_values_have_no_label() {
        assert_eq!(rating_label("difficulty", 0), None);
        assert_eq!(rating_label("teaching", 6), None);
    }
}
