//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for crossover operators that
//! recombine two parent groups into two children of the same size.
pub mod sort_swap;

use std::fmt::Debug;

use crate::{error::Result, group::Group};

/// # BreedStrategy
///
/// Recombines two parent groups. Implementations must return two children
/// whose combined members are exactly the combined members of the parents.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds two children from `first` and `second`.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The parents have different sizes
    /// - A parent is too small to be scored
    fn breed(&self, first: &Group, second: &Group) -> Result<(Group, Group)>;
}

pub use sort_swap::{SortKey, SortSwapCrossover};
