use std::cmp::Ordering;

use super::BreedStrategy;
use crate::error::{GroupingError, Result};
use crate::fitness::{cgpa_score, gender_score};
use crate::group::Group;
use crate::student::Student;

/// Attribute the parents are sorted by before members are exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Cgpa,
    Gender,
}

impl SortKey {
    /// Picks the key from the first parent's spread: CGPA when its gender
    /// term is strictly smaller than its CGPA term, gender otherwise.
    pub fn for_parent(parent: &Group) -> Result<Self> {
        let cgpa = cgpa_score(parent)?;
        let gender = gender_score(parent)?;
        Ok(if gender < cgpa {
            SortKey::Cgpa
        } else {
            SortKey::Gender
        })
    }

    fn compare(self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortKey::Cgpa => a.cgpa.total_cmp(&b.cgpa),
            SortKey::Gender => a.gender.cmp(&b.gender),
        }
    }
}

/// # SortSwapCrossover
///
/// Sorts the first parent ascending and the second descending by a key chosen
/// from the first parent's spread (see [`SortKey::for_parent`]), then swaps the
/// members at every even position (0, 2, 4, ...). Odd positions stay with
/// their own sorted parent.
///
/// Both sorts are stable. No deduplication is done: disjoint parents give
/// disjoint children.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SortSwapCrossover;

impl SortSwapCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl BreedStrategy for SortSwapCrossover {
    fn breed(&self, first: &Group, second: &Group) -> Result<(Group, Group)> {
        if first.len() != second.len() {
            return Err(GroupingError::ParentSizeMismatch {
                left: first.len(),
                right: second.len(),
            });
        }

        let key = SortKey::for_parent(first)?;

        let mut child1 = first.members().to_vec();
        let mut child2 = second.members().to_vec();
        child1.sort_by(|a, b| key.compare(a, b));
        child2.sort_by(|a, b| key.compare(b, a));

        for i in (0..child1.len()).step_by(2) {
            std::mem::swap(&mut child1[i], &mut child2[i]);
        }

        Ok((Group::new(child1), Group::new(child2)))
    }
}
