//! Review submission command handler

use qrate::core::gateway::ApiClient;
use qrate::core::models::Author;
use qrate::core::review::{
    CourseReviewForm, ProfessorReviewForm, ReviewDraft, ReviewKind,
};
use qrate::core::session::SessionStore;
use tracing::info;

use crate::args::ReviewTarget;

/// Run the review command. Requires a signed-in session; the gateway is
/// never reached otherwise.
pub async fn run(api: &ApiClient, session: &SessionStore, target: ReviewTarget) {
    if let Err(e) = session.require() {
        eprintln!("✗ {e}");
        eprintln!("Run `qrate login --email you@queensu.ca --password ...` first.");
        std::process::exit(1);
    }

    let mut draft = ReviewDraft::default();

    match target {
        ReviewTarget::Course {
            course_code,
            course_name,
            instructor,
            term,
            overall,
            difficulty,
            usefulness,
            workload,
            teaching,
            comment,
        } => {
            draft.set_kind(ReviewKind::Course);
            draft.course = CourseReviewForm {
                course_code,
                course_name,
                instructor,
                term,
                overall_rating: overall,
                difficulty,
                usefulness,
                workload,
                teaching,
                comment,
            };
        }
        ReviewTarget::Professor {
            name,
            department,
            course_code,
            term,
            overall,
            difficulty,
            helpfulness,
            clarity,
            would_take_again,
            comment,
        } => {
            draft.set_kind(ReviewKind::Professor);
            draft.professor = ProfessorReviewForm {
                professor_name: name,
                department,
                course_code: course_code.unwrap_or_default(),
                term,
                overall_rating: overall,
                difficulty,
                helpfulness,
                clarity,
                would_take_again,
                comment,
            };
        }
    }

    match draft.submit(api, &Author::anonymous()).await {
        Ok(()) => {
            info!("Review submitted");
            println!("✓ Review submitted! Your feedback will help other students.");
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}
