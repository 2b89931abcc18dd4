//! # Group
//!
//! A `Group` is an ordered sequence of students. Order is irrelevant to the
//! fitness terms but the crossover operator works on positions, so it is kept.

use crate::student::Student;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    members: Vec<Student>,
}

impl Group {
    pub fn new(members: Vec<Student>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Student] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.members.iter()
    }

    pub fn into_members(self) -> Vec<Student> {
        self.members
    }
}

impl From<Vec<Student>> for Group {
    fn from(members: Vec<Student>) -> Self {
        Self::new(members)
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
