use tracing::{debug, info, instrument, warn};

use super::{challenge::Challenge, options::EvolutionOptions};
use crate::{
    error::{GroupingError, Result},
    group::Group,
    population::{self, Population},
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
    strategy::BreedStrategy,
    student::Student,
};

/// Snapshot of the generation with the highest average score so far.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    /// 1-based generation index.
    pub generation: usize,
    pub average_fitness: f64,
    /// Composite score of each group, in population order.
    pub fitness_scores: Vec<f64>,
}

/// The best generation of a run together with its groups.
#[derive(Debug, Clone, PartialEq)]
pub struct BestGeneration {
    pub record: GenerationRecord,
    pub population: Population,
}

/// Outcome of one evolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// `None` when no generation ever scored above zero, including runs with
    /// an empty population or a zero generation budget.
    pub best: Option<BestGeneration>,
    /// Number of groups in the initial population.
    pub initial_groups: usize,
}

/// A population with the composite score of each group, index-aligned.
#[derive(Debug, Clone, Default)]
struct ScoredPopulation {
    groups: Vec<Group>,
    fitness: Vec<f64>,
}

impl ScoredPopulation {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            groups: Vec::with_capacity(capacity),
            fitness: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, group: Group, score: f64) {
        self.groups.push(group);
        self.fitness.push(score);
    }

    fn remove(&mut self, index: usize) -> (Group, f64) {
        (self.groups.remove(index), self.fitness.remove(index))
    }

    fn len(&self) -> usize {
        self.groups.len()
    }

    fn average(&self) -> f64 {
        self.fitness.iter().sum::<f64>() / self.fitness.len() as f64
    }
}

/// Runs the generation loop for one cohort using a selection strategy, a
/// breeding strategy and a challenge to score groups.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy, Selection, Chall>
where
    Strategy: BreedStrategy,
    Selection: SelectionStrategy,
    Chall: Challenge,
{
    strategy: Strategy,
    selection: Selection,
    challenge: Chall,
}

impl<Strategy, Selection, Chall> EvolutionLauncher<Strategy, Selection, Chall>
where
    Strategy: BreedStrategy,
    Selection: SelectionStrategy,
    Chall: Challenge,
{
    /// Creates a new `EvolutionLauncher`.
    ///
    /// # Arguments
    ///
    /// * `strategy` - Recombines the two selected parents.
    /// * `selection` - Picks the parents from the working population.
    /// * `challenge` - Scores each group.
    pub fn new(strategy: Strategy, selection: Selection, challenge: Chall) -> Self {
        Self {
            strategy,
            selection,
            challenge,
        }
    }

    /// Evolves groups for a single cohort.
    ///
    /// The initial population is built from `students` with
    /// [`population::initialize`]. Each generation pairs the selected parents
    /// until fewer than two groups remain, replacing both parents with their
    /// two children; a single leftover group is carried over unchanged. The
    /// generation whose average score is strictly higher than every earlier
    /// one (and than zero) is kept as the best.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail [`EvolutionOptions::validate`]
    /// - A group cannot be scored or produces a non-finite score
    /// - Selection or breeding fails
    #[instrument(level = "debug", skip_all, fields(students = students.len()))]
    pub fn evolve(
        &self,
        students: &[Student],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        let initial = population::initialize(
            students,
            options.get_group_size(),
            options.get_target_groups(),
            rng,
        );
        let initial_groups = initial.len();

        if initial.is_empty() {
            warn!(
                group_size = options.get_group_size(),
                "Roster too small to form a single group"
            );
            return Ok(EvolutionResult {
                best: None,
                initial_groups,
            });
        }

        if initial_groups % 2 == 1 {
            warn!(
                groups = initial_groups,
                "Odd number of groups, one group is carried over unpaired each generation"
            );
        }

        let mut working = ScoredPopulation::with_capacity(initial_groups);
        for group in initial {
            let score = self.score(&group)?;
            working.push(group, score);
        }

        let mut highest_avg_fitness = 0.0;
        let mut best: Option<BestGeneration> = None;

        for generation in 1..=options.get_num_generations() {
            working = self.next_generation(working)?;

            let average_fitness = working.average();
            debug!(generation, average_fitness, "Generation complete");

            if average_fitness > highest_avg_fitness {
                highest_avg_fitness = average_fitness;
                info!(generation, average_fitness, "New best generation");
                best = Some(BestGeneration {
                    record: GenerationRecord {
                        generation,
                        average_fitness,
                        fitness_scores: working.fitness.clone(),
                    },
                    population: working.groups.clone(),
                });
            }
        }

        Ok(EvolutionResult {
            best,
            initial_groups,
        })
    }

    fn next_generation(&self, mut working: ScoredPopulation) -> Result<ScoredPopulation> {
        let mut next = ScoredPopulation::with_capacity(working.len());

        while working.len() >= 2 {
            let pair = self.selection.select(&working.groups, &working.fitness)?;
            if pair.most_fit == pair.least_fit {
                return Err(GroupingError::Other(format!(
                    "Selection returned the same group ({}) for both parents",
                    pair.most_fit
                )));
            }

            // Remove the higher index first so the lower one stays valid
            let (most_fit, least_fit) = if pair.most_fit > pair.least_fit {
                let (most_fit, _) = working.remove(pair.most_fit);
                let (least_fit, _) = working.remove(pair.least_fit);
                (most_fit, least_fit)
            } else {
                let (least_fit, _) = working.remove(pair.least_fit);
                let (most_fit, _) = working.remove(pair.most_fit);
                (most_fit, least_fit)
            };

            let (child1, child2) = self.strategy.breed(&most_fit, &least_fit)?;
            for child in [child1, child2] {
                let score = self.score(&child)?;
                next.push(child, score);
            }
        }

        if working.len() == 1 {
            let (residual, score) = working.remove(0);
            next.push(residual, score);
        }

        Ok(next)
    }

    fn score(&self, group: &Group) -> Result<f64> {
        let score = self.challenge.score(group)?;
        if !score.is_finite() {
            return Err(GroupingError::InvalidNumericValue(format!(
                "Non-finite fitness score encountered: {}",
                score
            )));
        }
        Ok(score)
    }
}

impl<Strategy, Selection, Chall> Default for EvolutionLauncher<Strategy, Selection, Chall>
where
    Strategy: BreedStrategy + Default,
    Selection: SelectionStrategy + Default,
    Chall: Challenge + Default,
{
    fn default() -> Self {
        Self::new(Strategy::default(), Selection::default(), Chall::default())
    }
}
