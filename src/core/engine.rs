//! GPA engine
//!
//! Pure computation: filter a course list down to the GPA-eligible set,
//! order it by academic priority, accumulate credits up to the policy cap
//! (splitting the course that crosses it), and produce both the rounded
//! GPA and a breakdown explaining what was counted and why.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::models::Course;
use crate::core::policy::GpaPolicy;

/// Level at or above which a course is treated as upper-level in priority ordering
const UPPER_LEVEL: u8 = 5;
/// The base level that upper-level electives outrank
const BASE_LEVEL: u8 = 4;

/// How much of a selected course's credits counted toward the GPA
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountStatus {
    /// All of the course's credits counted
    Full,
    /// Only the credits remaining under the cap counted
    Partial,
}

/// One counted course in the breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCourse {
    /// The course record as it appeared on the transcript
    pub course: Course,
    /// Grade-point value of the course's grade (0.0 for unknown tokens)
    pub grade_point: f64,
    /// Credits of this course that counted (equals `course.credits` when full)
    pub credits_used: f64,
    /// `credits_used * grade_point`
    pub weighted_points: f64,
    /// Whether the course counted in full or was split at the cap
    pub status: CountStatus,
}

/// Structured explanation of a GPA calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Every course that passed the eligibility filter, in transcript order
    pub eligible_courses: Vec<Course>,
    /// The counted subset, in priority order
    pub selected_courses: Vec<SelectedCourse>,
    /// Total credits counted; never exceeds the policy's credit cap
    pub total_credits_used: f64,
    /// Sum of `weighted_points` over `selected_courses` only
    pub total_weighted_points: f64,
    /// Points earned by the over-cap portion of a split course
    ///
    /// Counted in the GPA numerator but attached to no course entry, so the
    /// numerator is `total_weighted_points + excess_points`. Zero unless a
    /// partial split occurred.
    pub excess_points: f64,
}

impl Breakdown {
    /// The numerator actually used for the GPA value
    #[must_use]
    pub fn numerator(&self) -> f64 {
        self.total_weighted_points + self.excess_points
    }
}

/// A computed GPA together with its breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaResult {
    /// The GPA on the policy's grade scale, rounded to 2 decimal places
    pub gpa: f64,
    /// Explanation of which courses counted, at what weight, and why
    pub breakdown: Breakdown,
}

/// Priority comparator for eligible courses.
///
/// Not a total order: upper-level compulsory courses rank first, then
/// upper-level electives ahead of level-4 courses; every other pair is
/// Equal, so a stable sort keeps those in transcript order. Do not
/// totalize this ordering, as that would change output on tie cases.
fn priority_order(a: &Course, b: &Course) -> Ordering {
    let a_upper_compulsory = a.level >= UPPER_LEVEL && a.is_compulsory;
    let b_upper_compulsory = b.level >= UPPER_LEVEL && b.is_compulsory;
    if a_upper_compulsory && !b_upper_compulsory {
        return Ordering::Less;
    }
    if b_upper_compulsory && !a_upper_compulsory {
        return Ordering::Greater;
    }
    if a.level >= UPPER_LEVEL && !a.is_compulsory && b.level == BASE_LEVEL {
        return Ordering::Less;
    }
    if b.level >= UPPER_LEVEL && !b.is_compulsory && a.level == BASE_LEVEL {
        return Ordering::Greater;
    }
    Ordering::Equal
}

/// Round to 2 decimal places, half away from zero
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the weighted GPA for `courses` under `policy`.
///
/// Total over any well-typed input: an empty or entirely ineligible course
/// list yields a GPA of 0.0 with an empty breakdown, unknown grade tokens
/// score 0.0 points, and zero or negative credits pass through
/// arithmetically. The GPA denominator is the credit cap itself, not the
/// credits actually accumulated.
#[must_use]
pub fn compute_gpa(courses: &[Course], policy: &GpaPolicy) -> GpaResult {
    let eligible_courses: Vec<Course> = courses
        .iter()
        .filter(|c| policy.is_eligible(c))
        .cloned()
        .collect();

    // Stable sort: unordered pairs stay in transcript order, so repeated
    // runs on the same input are deterministic.
    let mut ordered = eligible_courses.clone();
    ordered.sort_by(priority_order);

    let mut selected_courses = Vec::new();
    let mut total_credits_used = 0.0_f64;
    let mut total_weighted_points = 0.0_f64;
    let mut excess_points = 0.0_f64;

    for course in ordered {
        let grade_point = policy.grade_scale.points(&course.grade);

        if total_credits_used + course.credits <= policy.credit_cap {
            let weighted_points = course.credits * grade_point;
            total_weighted_points += weighted_points;
            total_credits_used += course.credits;
            selected_courses.push(SelectedCourse {
                grade_point,
                credits_used: course.credits,
                weighted_points,
                status: CountStatus::Full,
                course,
            });
        } else if total_credits_used < policy.credit_cap {
            // The course crosses the cap: count the remaining room at this
            // grade, and carry the over-cap portion's points separately.
            let remaining = policy.credit_cap - total_credits_used;
            let weighted_points = remaining * grade_point;
            total_weighted_points += weighted_points;
            excess_points += (course.credits - remaining) * grade_point;
            selected_courses.push(SelectedCourse {
                grade_point,
                credits_used: remaining,
                weighted_points,
                status: CountStatus::Partial,
                course,
            });
            total_credits_used = policy.credit_cap;
            break;
        } else {
            // Cap hit exactly on a previous iteration
            break;
        }
    }

    let gpa = if policy.credit_cap > 0.0 {
        round2((total_weighted_points + excess_points) / policy.credit_cap)
    } else {
        0.0
    };

    GpaResult {
        gpa,
        breakdown: Breakdown {
            eligible_courses,
            selected_courses,
            total_credits_used,
            total_weighted_points,
            excess_points,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, grade: &str, level: u8, credits: f64, compulsory: bool) -> Course {
        Course::new(
            code.to_string(),
            format!("Course {code}"),
            grade.to_string(),
            level,
        )
        .with_credits(credits)
        .with_compulsory(compulsory)
    }

    #[test]
    fn test_priority_order_upper_compulsory_first() {
        let a = course("IT4010", "A", 6, 3.0, true);
        let b = course("IT2020", "A", 4, 3.0, true);

        assert_eq!(priority_order(&a, &b), Ordering::Less);
        assert_eq!(priority_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_priority_order_upper_elective_before_level_four() {
        let elective = course("IT5040", "B", 5, 3.0, false);
        let base = course("IT2020", "A", 4, 3.0, true);

        assert_eq!(priority_order(&elective, &base), Ordering::Less);
        assert_eq!(priority_order(&base, &elective), Ordering::Greater);
    }

    #[test]
    fn test_priority_order_leaves_ties_unordered() {
        let a = course("IT2020", "A", 4, 3.0, true);
        let b = course("IT2030", "B", 4, 3.0, false);

        assert_eq!(priority_order(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert!((round2(3.666_666) - 3.67).abs() < f64::EPSILON);
        assert!((round2(3.664_999) - 3.66).abs() < f64::EPSILON);
        assert!((round2(-3.666_666) + 3.67).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_credit_course_contributes_nothing_but_is_selected() {
        let policy = GpaPolicy::default();
        let courses = vec![course("IT4000", "A", 5, 0.0, true)];

        let result = compute_gpa(&courses, &policy);

        assert_eq!(result.breakdown.selected_courses.len(), 1);
        assert!(result.breakdown.total_credits_used.abs() < f64::EPSILON);
        assert!(result.gpa.abs() < f64::EPSILON);
    }

    #[test]
    fn test_denominator_is_the_cap_not_accumulated_credits() {
        // 45 credits of straight A against a 90-credit cap: half the scale.
        let policy = GpaPolicy::default();
        let courses = vec![course("IT4010", "A", 5, 45.0, true)];

        let result = compute_gpa(&courses, &policy);

        assert!((result.gpa - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakdown_numerator_reconciles() {
        let policy = GpaPolicy::default();
        let courses = vec![
            course("IT4010", "A", 5, 88.0, true),
            course("IT5040", "A", 5, 6.0, true),
        ];

        let result = compute_gpa(&courses, &policy);
        let b = &result.breakdown;

        assert!((b.numerator() - (b.total_weighted_points + b.excess_points)).abs() < 1e-9);
        assert!((result.gpa - round2(b.numerator() / policy.credit_cap)).abs() < f64::EPSILON);
    }
}
