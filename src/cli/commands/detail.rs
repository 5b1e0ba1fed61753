//! Detail command handlers: one course or one professor

use qrate::core::gateway::ApiClient;
use qrate::core::models::{CourseDetail, PostedReview};
use qrate::core::ratings::{self, RatingSummary};
use tracing::error;

const BAR_WIDTH: usize = 20;

/// Run the course detail command. The backend pre-computes the means
/// and distribution for courses; the client only renders them.
pub async fn course(api: &ApiClient, id: &str) {
    let course = match api.course_detail(id).await {
        Ok(course) => course,
        Err(e) => {
            error!("Course detail fetch failed for {id}: {e}");
            eprintln!("✗ Failed to load course {id}: {e}");
            std::process::exit(1);
        }
    };

    render_course(&course);
}

/// Run the professor detail command. Reviews are fetched by display
/// name and aggregated client-side.
pub async fn professor(api: &ApiClient, name: &str) {
    let hits = match api.search_professor_reviews(name).await {
        Ok(hits) => hits,
        Err(e) => {
            error!("Professor review search failed for {name}: {e}");
            eprintln!("✗ Failed to load reviews for {name}: {e}");
            std::process::exit(1);
        }
    };

    let department = hits.first().map(|hit| hit.department.clone());
    let reviews: Vec<PostedReview> = hits.into_iter().map(|hit| hit.review).collect();
    let summary = ratings::aggregate(&reviews);

    println!("\n=== {name} ===");
    if let Some(department) = department {
        println!("{department}");
    }

    println!("\nRatings Overview");
    println!("  Overall     {:.1}", summary.mean(ratings::OVERALL));
    println!("  Difficulty  {:.1}", summary.mean("difficulty"));
    println!("  Helpfulness {:.1}", summary.mean("helpfulness"));
    println!("  Clarity     {:.1}", summary.mean("clarity"));
    println!("  {} total ratings", summary.count);

    render_distribution(&summary);

    if reviews.is_empty() {
        println!("\nNo reviews yet. Be the first to review {name}.");
    } else {
        println!("\nStudent Reviews");
        for review in &reviews {
            render_review(review);
        }
    }
}

fn render_course(course: &CourseDetail) {
    println!("\n=== {}  {} ===", course.code, course.name);
    if !course.department.is_empty() {
        println!("{}", course.department);
    }
    if course.credits > 0.0 {
        println!("{} credits", course.credits);
    }
    if !course.description.is_empty() {
        println!("\n{}", course.description);
    }
    if !course.prerequisites.is_empty() {
        println!("Prerequisites: {}", course.prerequisites.join(", "));
    }
    if !course.tags.is_empty() {
        println!("[{}]", course.tags.join("] ["));
    }

    println!("\nRatings Overview");
    println!("  Overall     {:.1}", course.ratings.overall);
    println!("  Difficulty  {:.1}", course.ratings.difficulty);
    println!("  Usefulness  {:.1}", course.ratings.usefulness);
    println!("  Workload    {:.1}", course.ratings.workload);
    println!("  Teaching    {:.1}", course.ratings.teaching);
    println!("  {} total ratings", course.total_reviews);

    let total = course.rating_distribution.total();
    println!("\nRating Distribution");
    for stars in (1..=5).rev() {
        let count = course.rating_distribution.bucket(stars);
        println!(
            "  {stars}★ {:<width$} {count}",
            ratings::star_bar(count, total, BAR_WIDTH),
            width = BAR_WIDTH
        );
    }

    if course.reviews.is_empty() {
        println!("\nNo reviews yet. Be the first to review {}.", course.code);
    } else {
        println!("\nStudent Reviews");
        for review in &course.reviews {
            render_review(review);
        }
    }
}

fn render_distribution(summary: &RatingSummary) {
    let total: u32 = summary.histogram.iter().sum();
    println!("\nRating Distribution");
    for stars in (1..=5).rev() {
        let count = summary.stars(stars);
        println!(
            "  {stars}★ {:<width$} {count}",
            ratings::star_bar(count, total, BAR_WIDTH),
            width = BAR_WIDTH
        );
    }
}

fn render_review(review: &PostedReview) {
    println!("\n  {}★  {}  {}", review.rating, review.term, review.date);
    if let Some(course) = &review.course {
        println!("  Course: {course}");
    }

    let mut categories = Vec::new();
    for (label, value) in [
        ("Difficulty", review.difficulty),
        ("Usefulness", review.usefulness),
        ("Workload", review.workload),
        ("Teaching", review.teaching),
        ("Helpfulness", review.helpfulness),
        ("Clarity", review.clarity),
    ] {
        if let Some(value) = value {
            categories.push(format!("{label} {value}/5"));
        }
    }
    if !categories.is_empty() {
        println!("  {}", categories.join("   "));
    }

    if !review.comment.is_empty() {
        println!("  {}", review.comment);
    }
    println!(
        "  Was this helpful?  Yes ({})  No ({})",
        review.helpful, review.not_helpful
    );
}
