//! # Fitness Evaluator
//!
//! Scores how *imbalanced* a single group is. Three normalized terms are
//! computed and averaged into a composite score on a nominal 0–100 scale:
//!
//! - CGPA spread: sample variance of CGPA over [`CGPA_VARIANCE_NORMALIZER`],
//!   clamped to at most 1.
//! - Gender spread: sample variance of the female indicator over
//!   [`GENDER_VARIANCE_NORMALIZER`], not clamped.
//! - School diversity: distinct schools over [`SCHOOL_DIVERSITY_NORMALIZER`],
//!   not clamped.
//!
//! Higher scores mean a *wider* mix. The selection operator and the
//! evolution loop treat the highest score as "most fit", so the search breeds
//! toward spread rather than away from it.
//!
//! ## Example
//!
//! ```rust
//! use balanced_groups::fitness::evaluate;
//! use balanced_groups::group::Group;
//! use balanced_groups::student::{Gender, Student};
//!
//! let group = Group::new(vec![
//!     Student::new("T1", "1", "SCSE", "Ann", Gender::Female, 3.5),
//!     Student::new("T1", "2", "SCSE", "Ben", Gender::Male, 3.5),
//! ]);
//!
//! let breakdown = evaluate(&group).unwrap();
//! assert_eq!(breakdown.cgpa, 0.0);
//! ```

use std::collections::HashSet;

use crate::error::{GroupingError, Result};
use crate::group::Group;

/// Empirical CGPA variance at which the CGPA term saturates.
pub const CGPA_VARIANCE_NORMALIZER: f64 = 0.177656;

/// Realistic upper bound for the variance of a 0/1 gender indicator.
pub const GENDER_VARIANCE_NORMALIZER: f64 = 0.24;

/// Number of distinct schools that maps to a diversity term of 1.
pub const SCHOOL_DIVERSITY_NORMALIZER: f64 = 5.0;

/// The three normalized components of a group's score.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessBreakdown {
    pub cgpa: f64,
    pub gender: f64,
    pub school: f64,
}

impl FitnessBreakdown {
    /// Mean of the three terms scaled to 0–100.
    pub fn composite(&self) -> f64 {
        ((self.cgpa + self.gender + self.school) / 3.0) * 100.0
    }
}

/// Unbiased sample variance (divides by `n - 1`).
///
/// # Errors
///
/// `EmptyGroup` for no values, `GroupTooSmall` for a single value.
pub fn sample_variance(values: &[f64]) -> Result<f64> {
    let n = values.len();
    match n {
        0 => return Err(GroupingError::EmptyGroup),
        1 => return Err(GroupingError::GroupTooSmall { size: 1 }),
        _ => {}
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let sum_sq: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    Ok(sum_sq / (n - 1) as f64)
}

/// Normalized CGPA spread, clamped to at most 1.
///
/// A NaN spread (from a NaN or infinite CGPA) is passed through unclamped.
pub fn cgpa_score(group: &Group) -> Result<f64> {
    let values: Vec<f64> = group.iter().map(|s| s.cgpa).collect();
    let normalized = sample_variance(&values)? / CGPA_VARIANCE_NORMALIZER;
    Ok(if normalized > 1.0 { 1.0 } else { normalized })
}

/// Normalized gender spread. Not clamped.
pub fn gender_score(group: &Group) -> Result<f64> {
    let values: Vec<f64> = group.iter().map(|s| s.gender.indicator()).collect();
    let variance = sample_variance(&values)?;
    Ok(variance / GENDER_VARIANCE_NORMALIZER)
}

/// Distinct schools over the normalizer. Not clamped.
pub fn school_score(group: &Group) -> Result<f64> {
    if group.is_empty() {
        return Err(GroupingError::EmptyGroup);
    }
    let schools: HashSet<&str> = group.iter().map(|s| s.school.as_str()).collect();
    Ok(schools.len() as f64 / SCHOOL_DIVERSITY_NORMALIZER)
}

/// Computes all three terms for `group`.
///
/// # Errors
///
/// Requires at least two members: `EmptyGroup` for none, `GroupTooSmall` for one.
pub fn evaluate(group: &Group) -> Result<FitnessBreakdown> {
    Ok(FitnessBreakdown {
        cgpa: cgpa_score(group)?,
        gender: gender_score(group)?,
        school: school_score(group)?,
    })
}

/// Composite score of `group`, see [`FitnessBreakdown::composite`].
pub fn composite(group: &Group) -> Result<f64> {
    evaluate(group).map(|b| b.composite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::{Gender, Student};

    fn student(id: &str, school: &str, gender: Gender, cgpa: f64) -> Student {
        Student::new("T1", id, school, format!("Name{}", id), gender, cgpa)
    }

    fn mixed_group() -> Group {
        Group::new(vec![
            student("1", "SCSE", Gender::Female, 3.0),
            student("2", "EEE", Gender::Male, 4.0),
            student("3", "MAE", Gender::Female, 3.5),
            student("4", "SCSE", Gender::Male, 2.5),
            student("5", "NBS", Gender::Male, 4.5),
        ])
    }

    #[test]
    fn test_sample_variance() {
        let v = sample_variance(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((v - 1.666_666_666_666_666_7).abs() < 1e-12);
    }

    #[test]
    fn test_sample_variance_degenerate() {
        assert!(matches!(sample_variance(&[]), Err(GroupingError::EmptyGroup)));
        assert!(matches!(
            sample_variance(&[3.0]),
            Err(GroupingError::GroupTooSmall { size: 1 })
        ));
    }

    #[test]
    fn test_identical_cgpa_scores_zero() {
        let group = Group::new(vec![
            student("1", "A", Gender::Female, 3.2),
            student("2", "B", Gender::Male, 3.2),
            student("3", "C", Gender::Male, 3.2),
        ]);
        assert_eq!(cgpa_score(&group).unwrap(), 0.0);
    }

    #[test]
    fn test_single_gender_scores_zero() {
        let group = Group::new(vec![
            student("1", "A", Gender::Male, 3.0),
            student("2", "B", Gender::Male, 4.0),
            student("3", "C", Gender::Male, 2.0),
        ]);
        assert_eq!(gender_score(&group).unwrap(), 0.0);
    }

    #[test]
    fn test_cgpa_term_is_clamped() {
        let group = Group::new(vec![
            student("1", "A", Gender::Male, 0.0),
            student("2", "B", Gender::Male, 5.0),
        ]);
        assert_eq!(cgpa_score(&group).unwrap(), 1.0);
    }

    #[test]
    fn test_nan_cgpa_is_not_clamped_away() {
        let group = Group::new(vec![
            student("1", "A", Gender::Female, f64::NAN),
            student("2", "B", Gender::Male, 3.0),
            student("3", "C", Gender::Male, 2.0),
        ]);
        assert!(cgpa_score(&group).unwrap().is_nan());
        assert!(composite(&group).unwrap().is_nan());
    }

    #[test]
    fn test_infinite_cgpa_is_not_clamped_away() {
        let group = Group::new(vec![
            student("1", "A", Gender::Female, f64::INFINITY),
            student("2", "B", Gender::Male, 3.0),
        ]);
        assert!(!composite(&group).unwrap().is_finite());
    }

    #[test]
    fn test_school_term_not_clamped() {
        let group = Group::new(
            (0..6)
                .map(|i| student(&i.to_string(), &format!("S{}", i), Gender::Male, 3.0))
                .collect(),
        );
        assert!((school_score(&group).unwrap() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_hand_computed_breakdown() {
        let breakdown = evaluate(&mixed_group()).unwrap();

        // CGPA: mean 3.5, squared deviations sum 2.5, variance 0.625 -> clamped to 1
        assert_eq!(breakdown.cgpa, 1.0);
        // Gender: indicators [1,0,1,0,0], variance 0.3 -> 0.3 / 0.24 = 1.25
        assert!((breakdown.gender - 1.25).abs() < 1e-12);
        // Schools: 4 distinct -> 0.8
        assert!((breakdown.school - 0.8).abs() < 1e-12);

        let expected = (1.0 + 1.25 + 0.8) / 3.0 * 100.0;
        assert!((breakdown.composite() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let group = mixed_group();
        let a = composite(&group).unwrap();
        let b = composite(&group).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_order_independent() {
        let group = mixed_group();
        let mut reversed = group.clone().into_members();
        reversed.reverse();
        let reversed = Group::new(reversed);

        let a = evaluate(&group).unwrap();
        let b = evaluate(&reversed).unwrap();
        assert!((a.cgpa - b.cgpa).abs() < 1e-12);
        assert!((a.gender - b.gender).abs() < 1e-12);
        assert_eq!(a.school, b.school);
        assert!((a.composite() - b.composite()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_singleton_groups_fail() {
        assert!(matches!(
            evaluate(&Group::new(Vec::new())),
            Err(GroupingError::EmptyGroup)
        ));
        assert!(matches!(
            evaluate(&Group::new(vec![student("1", "A", Gender::Male, 3.0)])),
            Err(GroupingError::GroupTooSmall { size: 1 })
        ));
    }
}
