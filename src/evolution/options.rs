//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the knobs of one evolution run: the
//! size of every group, how many groups each cohort is cut into, and the fixed
//! generation budget.
//!
//! ## Example
//!
//! ```rust
//! use balanced_groups::evolution::options::EvolutionOptions;
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(4, 6, 200);
//!
//! // Defaults: groups of 5, 10 groups per cohort, 1000 generations
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_group_size(), 5);
//! ```

use crate::error::{GroupingError, Result};

pub const DEFAULT_GROUP_SIZE: usize = 5;
pub const DEFAULT_TARGET_GROUPS: usize = 10;
pub const DEFAULT_NUM_GENERATIONS: usize = 1000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionOptions {
    group_size: usize,
    target_groups: usize,
    num_generations: usize,
}

impl EvolutionOptions {
    pub fn new(group_size: usize, target_groups: usize, num_generations: usize) -> Self {
        Self {
            group_size,
            target_groups,
            num_generations,
        }
    }

    pub fn get_group_size(&self) -> usize {
        self.group_size
    }

    pub fn get_target_groups(&self) -> usize {
        self.target_groups
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    /// Sets the number of students per group.
    pub fn set_group_size(&mut self, group_size: usize) {
        self.group_size = group_size;
    }

    /// Sets the number of groups formed per cohort.
    pub fn set_target_groups(&mut self, target_groups: usize) {
        self.target_groups = target_groups;
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Checks that the options describe a runnable search.
    ///
    /// # Errors
    ///
    /// `Configuration` when groups have fewer than two members (the variance
    /// terms are undefined) or when no groups are requested.
    pub fn validate(&self) -> Result<()> {
        if self.group_size < 2 {
            return Err(GroupingError::Configuration(format!(
                "Group size must be at least 2, got {}",
                self.group_size
            )));
        }

        if self.target_groups == 0 {
            return Err(GroupingError::Configuration(
                "Target group count cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use balanced_groups::evolution::options::EvolutionOptions;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .group_size(4)
    ///     .target_groups(8)
    ///     .num_generations(50)
    ///     .build();
    ///
    /// assert_eq!(options.get_target_groups(), 8);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            target_groups: DEFAULT_TARGET_GROUPS,
            num_generations: DEFAULT_NUM_GENERATIONS,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    group_size: Option<usize>,
    target_groups: Option<usize>,
    num_generations: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn group_size(mut self, value: usize) -> Self {
        self.group_size = Some(value);
        self
    }

    pub fn target_groups(mut self, value: usize) -> Self {
        self.target_groups = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance, filling unset fields with defaults.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            group_size: self.group_size.unwrap_or(DEFAULT_GROUP_SIZE),
            target_groups: self.target_groups.unwrap_or(DEFAULT_TARGET_GROUPS),
            num_generations: self.num_generations.unwrap_or(DEFAULT_NUM_GENERATIONS),
        }
    }
}
