use std::fmt::Debug;

use crate::error::Result;
use crate::group::Group;

/// The two parents picked for one crossover, as indices into the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentPair {
    /// Index of the group with the highest composite score.
    pub most_fit: usize,
    /// Index of the group with the lowest composite score.
    pub least_fit: usize,
}

/// Trait for parent selection in the evolution loop.
///
/// A selection strategy looks at the working population and its fitness
/// scores and names the two groups that will be recombined next.
///
/// # Examples
///
/// ```
/// use balanced_groups::group::Group;
/// use balanced_groups::selection::{ExtremesSelection, SelectionStrategy};
/// use balanced_groups::student::{Gender, Student};
///
/// let groups = vec![
///     Group::new(vec![Student::new("T1", "1", "A", "a", Gender::Male, 3.0)]),
///     Group::new(vec![Student::new("T1", "2", "B", "b", Gender::Male, 3.0)]),
///     Group::new(vec![Student::new("T1", "3", "C", "c", Gender::Male, 3.0)]),
/// ];
/// let fitness = vec![40.0, 90.0, 10.0];
///
/// let pair = ExtremesSelection::default().select(&groups, &fitness).unwrap();
/// assert_eq!(pair.most_fit, 1);
/// assert_eq!(pair.least_fit, 2);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Picks two distinct groups of `population`.
    ///
    /// # Arguments
    ///
    /// * `population` - The current working population.
    /// * `fitness` - The composite score of each group, index-aligned with `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population holds fewer than two groups
    /// - The fitness vector length doesn't match the population length
    fn select(&self, population: &[Group], fitness: &[f64]) -> Result<ParentPair>;
}
