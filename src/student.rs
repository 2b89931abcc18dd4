//! # Student
//!
//! The immutable record loaded from the roster. Students are value objects:
//! groups hold clones, nothing ever mutates one after parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::GroupingError;

/// The two gender categories observed in the roster.
///
/// Variant order matters: `Female` sorts before `Male`, which is the order
/// the crossover operator uses when it sorts a group by gender.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Binary indicator used by the gender-balance term: 1 for `Female`, 0 otherwise.
    pub fn indicator(self) -> f64 {
        match self {
            Gender::Female => 1.0,
            Gender::Male => 0.0,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => f.write_str("Female"),
            Gender::Male => f.write_str("Male"),
        }
    }
}

impl FromStr for Gender {
    type Err = GroupingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Gender::Female),
            "male" | "m" => Ok(Gender::Male),
            _ => Err(GroupingError::InvalidGender(s.to_string())),
        }
    }
}

/// One row of the roster.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Tutorial cohort identifier.
    pub cohort: String,
    pub id: String,
    pub school: String,
    pub name: String,
    pub gender: Gender,
    pub cgpa: f64,
}

impl Student {
    pub fn new(
        cohort: impl Into<String>,
        id: impl Into<String>,
        school: impl Into<String>,
        name: impl Into<String>,
        gender: Gender,
        cgpa: f64,
    ) -> Self {
        Self {
            cohort: cohort.into(),
            id: id.into(),
            school: school.into(),
            name: name.into(),
            gender,
            cgpa,
        }
    }
}
