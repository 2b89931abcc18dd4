use crate::{error::Result, fitness, group::Group};

/// Scores one group. Higher scores are treated as fitter by the evolution loop.
pub trait Challenge: Send + Sync {
    fn score(&self, group: &Group) -> Result<f64>;
}

/// The composite CGPA / gender / school score from [`crate::fitness`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceChallenge;

impl Challenge for BalanceChallenge {
    fn score(&self, group: &Group) -> Result<f64> {
        fitness::composite(group)
    }
}
