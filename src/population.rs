//! # Population Initializer
//!
//! Builds the starting population for one cohort: shuffle the roster with the
//! caller's generator, cut it into consecutive chunks of `group_size`, keep
//! only full chunks and stop at `target_groups`.
//!
//! ## Example
//!
//! ```rust
//! use balanced_groups::population::initialize;
//! use balanced_groups::rng::RandomNumberGenerator;
//! use balanced_groups::student::{Gender, Student};
//!
//! let roster: Vec<Student> = (0..12)
//!     .map(|i| Student::new("T1", i.to_string(), "SCSE", "n", Gender::Male, 3.0))
//!     .collect();
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let population = initialize(&roster, 5, 10, &mut rng);
//!
//! // 12 students only fill two groups of five; the rest are dropped.
//! assert_eq!(population.len(), 2);
//! ```

use tracing::warn;

use crate::group::Group;
use crate::rng::RandomNumberGenerator;
use crate::student::Student;

/// The candidate groups of one cohort in one generation.
pub type Population = Vec<Group>;

/// Total number of students across every group of `population`.
pub fn member_count(population: &[Group]) -> usize {
    population.iter().map(Group::len).sum()
}

/// Randomly partitions `students` into at most `target_groups` full groups.
///
/// Returns fewer groups than requested when the roster is too short. Any
/// students beyond `group_size * target_groups`, and any partial trailing
/// chunk, are discarded.
pub fn initialize(
    students: &[Student],
    group_size: usize,
    target_groups: usize,
    rng: &mut RandomNumberGenerator,
) -> Population {
    if group_size == 0 || target_groups == 0 {
        return Vec::new();
    }

    let mut shuffled = students.to_vec();
    rng.shuffle(&mut shuffled);

    let population: Population = shuffled
        .chunks_exact(group_size)
        .take(target_groups)
        .map(|chunk| Group::new(chunk.to_vec()))
        .collect();

    let dropped = students.len() - member_count(&population);
    if dropped > 0 {
        warn!(
            dropped,
            groups = population.len(),
            "Students left out of the initial population"
        );
    }

    population
}
