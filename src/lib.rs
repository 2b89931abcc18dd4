//! Balanced group formation for tutorial cohorts.
//!
//! Each cohort's roster is shuffled into fixed-size groups, then improved by
//! a selection + crossover loop scored on CGPA spread, gender mix and school
//! diversity. See [`cohort::CohortOrchestrator`] for the entry point.
pub mod cohort;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod group;
pub mod population;
pub mod rng;
pub mod roster;
pub mod selection;
pub mod strategy;
pub mod student;

// Re-export commonly used types for convenience
pub use cohort::{CohortOrchestrator, CohortOutcome, GroupingReport};
pub use error::{GroupingError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions};
pub use group::Group;
pub use student::{Gender, Student};
