use crate::{
    error::{GroupingError, Result},
    selection::SelectionStrategy,
    strategy::BreedStrategy,
};

use super::{Challenge, EvolutionLauncher};

/// Fluent construction of an [`EvolutionLauncher`] from its three parts.
///
/// # Example
///
/// ```rust
/// use balanced_groups::evolution::{BalanceChallenge, EvolutionLauncherBuilder};
/// use balanced_groups::selection::ExtremesSelection;
/// use balanced_groups::strategy::SortSwapCrossover;
///
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_breed_strategy(SortSwapCrossover::new())
///     .with_selection_strategy(ExtremesSelection::new())
///     .with_challenge(BalanceChallenge)
///     .build()
///     .unwrap();
/// ```
pub struct EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    C: Challenge,
{
    breed_strategy: Option<B>,
    selection_strategy: Option<S>,
    challenge: Option<C>,
}

impl<B, S, C> EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    C: Challenge,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            selection_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<B, S, C>> {
        let breed_strategy = self.breed_strategy.ok_or_else(|| {
            GroupingError::Configuration("Breeding strategy not specified".to_string())
        })?;

        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GroupingError::Configuration("Selection strategy not specified".to_string())
        })?;

        let challenge = self
            .challenge
            .ok_or_else(|| GroupingError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(
            breed_strategy,
            selection_strategy,
            challenge,
        ))
    }
}

impl<B, S, C> Default for EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy,
    S: SelectionStrategy,
    C: Challenge,
{
    fn default() -> Self {
        Self::new()
    }
}
