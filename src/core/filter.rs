//! Browse filters shared by the course and professor listings.
//!
//! Three independent predicates, AND-combined: a case-insensitive
//! substring search over an entity's declared fields, an exact
//! department match, and an inclusive minimum mean rating. A predicate
//! left unset matches everything, so the all-inert filter is the
//! identity over the input list.

use std::str::FromStr;

use crate::core::models::{CourseSummary, ProfessorSummary};

/// Minimum mean rating selectable in the browse filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFloor {
    /// Mean rating of at least 2.0
    TwoPlus,
    /// Mean rating of at least 3.0
    ThreePlus,
    /// Mean rating of at least 4.0
    FourPlus,
}

impl RatingFloor {
    /// Inclusive lower bound this floor represents.
    #[must_use]
    pub const fn floor(self) -> f64 {
        match self {
            Self::TwoPlus => 2.0,
            Self::ThreePlus => 3.0,
            Self::FourPlus => 4.0,
        }
    }
}

impl FromStr for RatingFloor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2+" => Ok(Self::TwoPlus),
            "3+" => Ok(Self::ThreePlus),
            "4+" => Ok(Self::FourPlus),
            other => Err(format!(
                "Unknown rating filter: '{other}' (expected 2+, 3+ or 4+)"
            )),
        }
    }
}

/// Parse the rating filter as entered on the command line.
///
/// The web client uses `"all"` (or an unselected control) as a
/// wildcard; both map to `None` here rather than a sentinel value.
///
/// # Errors
/// Returns a message naming the rejected value when it is neither a
/// wildcard nor one of `2+`, `3+`, `4+`.
pub fn parse_rating_filter(raw: &str) -> Result<Option<RatingFloor>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Parse the department filter, mapping the `"all"` wildcard and the
/// empty string to `None`.
#[must_use]
pub fn parse_department_filter(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// An entity the browse filter knows how to inspect.
pub trait Browsable {
    /// Fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// The category (department) the exact-match filter compares to.
    fn category(&self) -> &str;

    /// Pre-computed mean overall rating.
    fn mean_rating(&self) -> f64;
}

impl Browsable for CourseSummary {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.code, &self.name, &self.instructor]
    }

    fn category(&self) -> &str {
        &self.department
    }

    fn mean_rating(&self) -> f64 {
        self.rating
    }
}

impl Browsable for ProfessorSummary {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.department.as_str()];
        fields.extend(self.courses.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> &str {
        &self.department
    }

    fn mean_rating(&self) -> f64 {
        self.rating
    }
}

/// The three browse predicates. `None` disables a predicate.
#[derive(Debug, Clone, Default)]
pub struct BrowseFilter {
    /// Substring matched case-insensitively against
    /// [`Browsable::search_fields`]; empty matches everything.
    pub search: String,

    /// Exact (case-insensitive) department to keep.
    pub department: Option<String>,

    /// Inclusive minimum mean rating to keep.
    pub min_rating: Option<RatingFloor>,
}

impl BrowseFilter {
    /// Whether one item passes all three predicates.
    #[must_use]
    pub fn matches<T: Browsable>(&self, item: &T) -> bool {
        self.matches_search(item) && self.matches_department(item) && self.matches_rating(item)
    }

    fn matches_search<T: Browsable>(&self, item: &T) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_department<T: Browsable>(&self, item: &T) -> bool {
        self.department
            .as_ref()
            .is_none_or(|dept| item.category().eq_ignore_ascii_case(dept))
    }

    fn matches_rating<T: Browsable>(&self, item: &T) -> bool {
        self.min_rating
            .is_none_or(|floor| item.mean_rating() >= floor.floor())
    }
}

/// Apply a filter over an in-memory list, preserving input order.
#[must_use]
pub fn apply<'a, T: Browsable>(items: &'a [T], filter: &BrowseFilter) -> Vec<&'a T> {
    items.iter().filter(|item| filter.matches(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, name: &str, instructor: &str, department: &str, rating: f64) -> CourseSummary {
        CourseSummary {
            code: code.to_string(),
            name: name.to_string(),
            department: department.to_string(),
            instructor: instructor.to_string(),
            rating,
            difficulty: 3.0,
            usefulness: 4.0,
            workload: 3.0,
            review_count: 10,
            tags: Vec::new(),
        }
    }

    fn sample_courses() -> Vec<CourseSummary> {
        vec![
            course("COMP 102", "Introduction to Computing", "Dr. Smith", "Computing", 4.2),
            course("ELEC 221", "Electric Circuits", "Prof. Johnson", "Electrical Engineering", 3.8),
            course("MATH 120", "Differential and Integral Calculus", "Dr. Wilson", "Mathematics", 3.5),
            course("PSYC 100", "Introduction to Psychology", "Prof. Davis", "Psychology", 2.5),
        ]
    }

    #[test]
    fn inert_filter_is_identity() {
        let courses = sample_courses();
        let filter = BrowseFilter::default();

        let shown = apply(&courses, &filter);

        assert_eq!(shown.len(), courses.len());
        for (kept, original) in shown.iter().zip(&courses) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let courses = sample_courses();
        let lower = BrowseFilter {
            search: "comp".to_string(),
            ..BrowseFilter::default()
        };
        let upper = BrowseFilter {
            search: "COMP".to_string(),
            ..BrowseFilter::default()
        };

        assert_eq!(apply(&courses, &lower), apply(&courses, &upper));
        assert_eq!(apply(&courses, &lower).len(), 1);
    }

    #[test]
    fn search_matches_instructor_field() {
        let courses = sample_courses();
        let filter = BrowseFilter {
            search: "wilson".to_string(),
            ..BrowseFilter::default()
        };

        let shown = apply(&courses, &filter);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].code, "MATH 120");
    }

    #[test]
    fn department_match_is_exact_and_case_insensitive() {
        let courses = sample_courses();
        let filter = BrowseFilter {
            department: Some("computing".to_string()),
            ..BrowseFilter::default()
        };

        let shown = apply(&courses, &filter);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].code, "COMP 102");
    }

    #[test]
    fn rating_floor_is_inclusive() {
        let courses = sample_courses();
        let filter = BrowseFilter {
            min_rating: Some(RatingFloor::ThreePlus),
            ..BrowseFilter::default()
        };

        let shown = apply(&courses, &filter);
        // 3.5 is kept, 2.5 dropped
        assert_eq!(shown.len(), 3);
        assert!(shown.iter().all(|c| c.rating >= 3.0));
    }

    #[test]
    fn predicates_are_and_combined() {
        let courses = sample_courses();
        let filter = BrowseFilter {
            search: "introduction".to_string(),
            department: Some("Psychology".to_string()),
            min_rating: Some(RatingFloor::TwoPlus),
        };

        let shown = apply(&courses, &filter);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].code, "PSYC 100");
    }

    #[test]
    fn professor_search_covers_taught_courses() {
        let professor = ProfessorSummary {
            name: "Dr. Sarah Johnson".to_string(),
            department: "Computing".to_string(),
            rating: 4.5,
            difficulty: 3.2,
            helpfulness: 4.7,
            clarity: 4.3,
            review_count: 124,
            tags: Vec::new(),
            courses: vec!["COMP 102".to_string(), "COMP 202".to_string()],
        };
        let filter = BrowseFilter {
            search: "comp 202".to_string(),
            ..BrowseFilter::default()
        };

        assert!(filter.matches(&professor));
    }

    #[test]
    fn parse_rating_filter_handles_wildcards_and_values() {
        assert_eq!(parse_rating_filter("").expect("empty"), None);
        assert_eq!(parse_rating_filter("all").expect("all"), None);
        assert_eq!(parse_rating_filter("ALL").expect("ALL"), None);
        assert_eq!(
            parse_rating_filter("4+").expect("4+"),
            Some(RatingFloor::FourPlus)
        );
        assert!(parse_rating_filter("5+").is_err());
    }

    #[test]
    fn parse_department_filter_handles_wildcards() {
        assert_eq!(parse_department_filter(""), None);
        assert_eq!(parse_department_filter("all"), None);
        assert_eq!(
            parse_department_filter("Computing"),
            Some("Computing".to_string())
        );
    }
}
