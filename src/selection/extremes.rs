use std::cmp::Ordering;

use crate::error::{GroupingError, OptionExt, Result};
use crate::group::Group;
use crate::selection::selection_strategy::{ParentPair, SelectionStrategy};

/// Pairs the highest-scoring group with the lowest-scoring one.
///
/// Groups are sorted by fitness ascending with a stable sort; the first entry
/// is the least fit and the last is the most fit. Among equal scores the
/// input order decides, so a population of identical scores pairs its first
/// and last groups.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ExtremesSelection;

impl ExtremesSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for ExtremesSelection {
    fn select(&self, population: &[Group], fitness: &[f64]) -> Result<ParentPair> {
        if population.len() < 2 {
            return Err(GroupingError::InsufficientPopulation {
                groups: population.len(),
            });
        }

        if fitness.len() != population.len() {
            return Err(GroupingError::FitnessMismatch {
                groups: population.len(),
                scores: fitness.len(),
            });
        }

        let mut order: Vec<usize> = (0..fitness.len()).collect();
        order.sort_by(|&a, &b| {
            fitness[a].partial_cmp(&fitness[b]).unwrap_or_else(|| {
                // NaN sorts below every real score
                if fitness[a].is_nan() && !fitness[b].is_nan() {
                    Ordering::Less
                } else if fitness[b].is_nan() && !fitness[a].is_nan() {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
        });

        let insufficient = || GroupingError::InsufficientPopulation {
            groups: population.len(),
        };
        Ok(ParentPair {
            most_fit: order.last().copied().ok_or_else_grouping(insufficient)?,
            least_fit: order.first().copied().ok_or_else_grouping(insufficient)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::composite;
    use crate::student::{Gender, Student};

    fn group(tag: &str, specs: &[(&str, Gender, f64)]) -> Group {
        Group::new(
            specs
                .iter()
                .enumerate()
                .map(|(i, (school, gender, cgpa))| {
                    Student::new("T1", format!("{}{}", tag, i), *school, "n", *gender, *cgpa)
                })
                .collect(),
        )
    }

    #[test]
    fn test_two_groups_hand_computed() {
        // Uniform group: zero CGPA and gender spread, one school -> (0 + 0 + 0.2) / 3 * 100
        let uniform = group(
            "u",
            &[
                ("A", Gender::Male, 3.0),
                ("A", Gender::Male, 3.0),
                ("A", Gender::Male, 3.0),
            ],
        );
        // Mixed group: clamped CGPA term, gender 1/3 / 0.24, three schools
        let mixed = group(
            "m",
            &[
                ("A", Gender::Female, 2.0),
                ("B", Gender::Male, 4.0),
                ("C", Gender::Male, 3.0),
            ],
        );
        let population = vec![uniform, mixed];
        let fitness: Vec<f64> = population.iter().map(|g| composite(g).unwrap()).collect();

        assert!((fitness[0] - 20.0 / 3.0).abs() < 1e-9);
        let expected_mixed = (1.0 + (1.0 / 3.0) / 0.24 + 0.6) / 3.0 * 100.0;
        assert!((fitness[1] - expected_mixed).abs() < 1e-9);

        let pair = ExtremesSelection::new().select(&population, &fitness).unwrap();
        assert_eq!(pair.most_fit, 1);
        assert_eq!(pair.least_fit, 0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let population: Vec<Group> = (0..4)
            .map(|i| group(&i.to_string(), &[("A", Gender::Male, 3.0), ("A", Gender::Male, 3.0)]))
            .collect();
        let fitness = vec![5.0; 4];

        let pair = ExtremesSelection::new().select(&population, &fitness).unwrap();
        assert_eq!(pair.least_fit, 0);
        assert_eq!(pair.most_fit, 3);
    }

    #[test]
    fn test_nan_sorts_lowest() {
        let population: Vec<Group> = (0..3)
            .map(|i| group(&i.to_string(), &[("A", Gender::Male, 3.0), ("A", Gender::Male, 3.0)]))
            .collect();
        let fitness = vec![10.0, f64::NAN, 20.0];

        let pair = ExtremesSelection::new().select(&population, &fitness).unwrap();
        assert_eq!(pair.least_fit, 1);
        assert_eq!(pair.most_fit, 2);
    }

    #[test]
    fn test_insufficient_population() {
        let single = vec![group("s", &[("A", Gender::Male, 3.0), ("B", Gender::Male, 2.0)])];
        let err = ExtremesSelection::new().select(&single, &[1.0]).unwrap_err();
        assert!(matches!(err, GroupingError::InsufficientPopulation { groups: 1 }));

        let err = ExtremesSelection::new().select(&[], &[]).unwrap_err();
        assert!(matches!(err, GroupingError::InsufficientPopulation { groups: 0 }));
    }

    #[test]
    fn test_fitness_length_mismatch() {
        let population: Vec<Group> = (0..2)
            .map(|i| group(&i.to_string(), &[("A", Gender::Male, 3.0), ("A", Gender::Male, 3.0)]))
            .collect();
        let err = ExtremesSelection::new().select(&population, &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            GroupingError::FitnessMismatch { groups: 2, scores: 1 }
        ));
    }
}
