//! Browse command handlers for courses and professors

use qrate::core::filter::{self, BrowseFilter};
use qrate::core::gateway::ApiClient;
use qrate::core::models::{CourseSummary, ProfessorSummary};
use tracing::error;

/// Run the course browse command: fetch, filter client-side, render.
pub async fn courses(
    api: &ApiClient,
    search: &str,
    department: Option<&str>,
    rating: Option<&str>,
    verbose: bool,
) {
    let filter = build_filter(search, department, rating);

    let all = match api.list_courses().await {
        Ok(courses) => courses,
        Err(e) => {
            error!("Course fetch failed: {e}");
            eprintln!("✗ Failed to load courses: {e}");
            std::process::exit(1);
        }
    };

    if verbose {
        println!("✓ Loaded {} courses from {}", all.len(), api.base_url());
    }

    let shown = filter::apply(&all, &filter);

    println!("Showing {} of {} courses", shown.len(), all.len());
    // The web client renders this label without wiring it to a
    // comparator; reproduced as-is.
    println!("Sort by: Most Reviews");

    for course in &shown {
        render_course(course);
    }

    if shown.is_empty() {
        println!("\nNo courses found");
        println!("Try adjusting your search criteria or filters.");
    }
}

/// Run the professor browse command.
pub async fn professors(
    api: &ApiClient,
    search: &str,
    department: Option<&str>,
    rating: Option<&str>,
    verbose: bool,
) {
    let filter = build_filter(search, department, rating);

    let all = match api.list_professors().await {
        Ok(professors) => professors,
        Err(e) => {
            error!("Professor fetch failed: {e}");
            eprintln!("✗ Failed to load professors: {e}");
            std::process::exit(1);
        }
    };

    if verbose {
        println!("✓ Loaded {} professors from {}", all.len(), api.base_url());
    }

    let shown = filter::apply(&all, &filter);

    println!("Showing {} of {} professors", shown.len(), all.len());
    println!("Sort by: Most Reviews");

    for professor in &shown {
        render_professor(professor);
    }

    if shown.is_empty() {
        println!("\nNo professors found");
        println!("Try adjusting your search criteria or filters.");
    }
}

fn build_filter(search: &str, department: Option<&str>, rating: Option<&str>) -> BrowseFilter {
    let min_rating = match filter::parse_rating_filter(rating.unwrap_or_default()) {
        Ok(floor) => floor,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    BrowseFilter {
        search: search.to_string(),
        department: filter::parse_department_filter(department.unwrap_or_default()),
        min_rating,
    }
}

fn render_course(course: &CourseSummary) {
    println!("\n{}  {}", course.code, course.name);
    println!("  {} • {}", course.instructor, course.department);
    println!(
        "  ★ {:.1}  ({} reviews)",
        course.rating, course.review_count
    );
    println!(
        "  Difficulty {:.1}   Usefulness {:.1}   Workload {:.1}",
        course.difficulty, course.usefulness, course.workload
    );
    if !course.tags.is_empty() {
        println!("  [{}]", course.tags.join("] ["));
    }
}

fn render_professor(professor: &ProfessorSummary) {
    println!("\n{}", professor.name);
    println!("  {}", professor.department);
    println!(
        "  ★ {:.1}  ({} reviews)",
        professor.rating, professor.review_count
    );
    println!(
        "  Difficulty {:.1}   Helpfulness {:.1}   Clarity {:.1}",
        professor.difficulty, professor.helpfulness, professor.clarity
    );
    if !professor.courses.is_empty() {
        println!("  Courses: {}", professor.courses.join(", "));
    }
    if !professor.tags.is_empty() {
        println!("  [{}]", professor.tags.join("] ["));
    }
}
