//! # Cohort Orchestrator
//!
//! Splits the roster by tutorial cohort, evolves each cohort on its own and
//! concatenates the best groups of every cohort into one report.
//!
//! Cohorts run strictly one after another and share only the generator, so a
//! seeded run is reproducible because the cohort order is fixed (order of
//! first appearance in the roster).

use std::collections::HashMap;

use tracing::{info, instrument, warn};

use crate::{
    error::Result,
    evolution::{
        BalanceChallenge, BestGeneration, Challenge, EvolutionLauncher, EvolutionOptions,
        GenerationRecord,
    },
    group::Group,
    rng::RandomNumberGenerator,
    selection::{ExtremesSelection, SelectionStrategy},
    strategy::{BreedStrategy, SortSwapCrossover},
    student::Student,
};

/// Groups `students` by cohort, keeping cohorts in order of first appearance
/// and students in roster order within each cohort.
pub fn partition_by_cohort(students: &[Student]) -> Vec<(String, Vec<Student>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut cohorts: Vec<(String, Vec<Student>)> = Vec::new();

    for student in students {
        let slot = *index.entry(student.cohort.as_str()).or_insert_with(|| {
            cohorts.push((student.cohort.clone(), Vec::new()));
            cohorts.len() - 1
        });
        cohorts[slot].1.push(student.clone());
    }

    cohorts
}

/// Result of evolving a single cohort.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortOutcome {
    pub cohort: String,
    pub students: usize,
    /// Best generation metadata, absent when no generation scored above zero.
    pub best: Option<GenerationRecord>,
    /// How many groups this cohort contributed to [`GroupingReport::groups`].
    pub group_count: usize,
}

/// Aggregate result over every cohort.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupingReport {
    /// Per-cohort metadata, in processing order.
    pub outcomes: Vec<CohortOutcome>,
    /// Best groups of all cohorts, concatenated in processing order.
    pub groups: Vec<Group>,
}

impl GroupingReport {
    /// Groups contributed by each cohort, as `(outcome, groups)` pairs.
    pub fn groups_by_cohort(&self) -> impl Iterator<Item = (&CohortOutcome, &[Group])> {
        let mut offset = 0;
        self.outcomes.iter().map(move |outcome| {
            let slice = &self.groups[offset..offset + outcome.group_count];
            offset += outcome.group_count;
            (outcome, slice)
        })
    }
}

/// Runs an [`EvolutionLauncher`] once per cohort.
#[derive(Debug, Clone)]
pub struct CohortOrchestrator<Strategy, Selection, Chall>
where
    Strategy: BreedStrategy,
    Selection: SelectionStrategy,
    Chall: Challenge,
{
    launcher: EvolutionLauncher<Strategy, Selection, Chall>,
    options: EvolutionOptions,
}

impl CohortOrchestrator<SortSwapCrossover, ExtremesSelection, BalanceChallenge> {
    /// Orchestrator with the standard balance score, extremes selection and
    /// sort-and-swap crossover.
    pub fn with_options(options: EvolutionOptions) -> Self {
        Self::new(EvolutionLauncher::default(), options)
    }
}

impl<Strategy, Selection, Chall> CohortOrchestrator<Strategy, Selection, Chall>
where
    Strategy: BreedStrategy,
    Selection: SelectionStrategy,
    Chall: Challenge,
{
    pub fn new(
        launcher: EvolutionLauncher<Strategy, Selection, Chall>,
        options: EvolutionOptions,
    ) -> Self {
        Self { launcher, options }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Evolves every cohort in `students` and aggregates the best groups.
    ///
    /// # Errors
    ///
    /// Invalid options and any evaluation, selection or breeding failure abort
    /// the whole run.
    #[instrument(level = "info", skip_all, fields(students = students.len()))]
    pub fn run(
        &self,
        students: &[Student],
        rng: &mut RandomNumberGenerator,
    ) -> Result<GroupingReport> {
        self.options.validate()?;

        let mut report = GroupingReport::default();

        for (cohort, members) in partition_by_cohort(students) {
            let result = self.launcher.evolve(&members, &self.options, rng)?;

            let outcome = match result.best {
                Some(BestGeneration { record, population }) => {
                    info!(
                        cohort = %cohort,
                        generation = record.generation,
                        average_fitness = record.average_fitness,
                        "Cohort evolved"
                    );
                    let group_count = population.len();
                    report.groups.extend(population);
                    CohortOutcome {
                        cohort,
                        students: members.len(),
                        best: Some(record),
                        group_count,
                    }
                }
                None => {
                    warn!(cohort = %cohort, students = members.len(), "No best population for cohort");
                    CohortOutcome {
                        cohort,
                        students: members.len(),
                        best: None,
                        group_count: 0,
                    }
                }
            };
            report.outcomes.push(outcome);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::Gender;

    fn student(cohort: &str, id: usize) -> Student {
        let gender = if id % 2 == 0 { Gender::Female } else { Gender::Male };
        let schools = ["SCSE", "EEE", "MAE", "NBS"];
        Student::new(
            cohort,
            format!("{}-{}", cohort, id),
            schools[id % 4],
            format!("N{}", id),
            gender,
            2.0 + (id % 5) as f64 * 0.5,
        )
    }

    #[test]
    fn test_partition_keeps_first_appearance_order() {
        let students = vec![
            student("T2", 0),
            student("T1", 1),
            student("T2", 2),
            student("T3", 3),
            student("T1", 4),
        ];
        let cohorts = partition_by_cohort(&students);

        let names: Vec<&str> = cohorts.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["T2", "T1", "T3"]);
        let t2: Vec<&str> = cohorts[0].1.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(t2, vec!["T2-0", "T2-2"]);
        assert_eq!(cohorts[1].1.len(), 2);
        assert_eq!(cohorts[2].1.len(), 1);
    }

    #[test]
    fn test_partition_empty() {
        assert!(partition_by_cohort(&[]).is_empty());
    }

    #[test]
    fn test_run_aggregates_cohorts() {
        let mut students: Vec<Student> = (0..20).map(|i| student("T1", i)).collect();
        students.extend((0..12).map(|i| student("T2", i)));
        students.extend((0..3).map(|i| student("T3", i)));

        let orchestrator = CohortOrchestrator::with_options(EvolutionOptions::new(4, 4, 6));
        let mut rng = RandomNumberGenerator::from_seed(8);
        let report = orchestrator.run(&students, &mut rng).unwrap();

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.outcomes[0].cohort, "T1");
        assert_eq!(report.outcomes[0].group_count, 4);
        assert_eq!(report.outcomes[1].cohort, "T2");
        assert_eq!(report.outcomes[1].group_count, 3);
        // T3 cannot fill a single group of four
        assert!(report.outcomes[2].best.is_none());
        assert_eq!(report.outcomes[2].group_count, 0);

        assert_eq!(report.groups.len(), 7);
        for (outcome, groups) in report.groups_by_cohort() {
            assert_eq!(groups.len(), outcome.group_count);
            assert!(groups
                .iter()
                .all(|g| g.iter().all(|s| s.cohort == outcome.cohort)));
        }
    }

    #[test]
    fn test_run_is_reproducible() {
        let mut students: Vec<Student> = (0..20).map(|i| student("T1", i)).collect();
        students.extend((0..20).map(|i| student("T2", i)));

        let orchestrator = CohortOrchestrator::with_options(EvolutionOptions::new(5, 4, 5));
        let a = orchestrator
            .run(&students, &mut RandomNumberGenerator::from_seed(3))
            .unwrap();
        let b = orchestrator
            .run(&students, &mut RandomNumberGenerator::from_seed(3))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_rejects_invalid_options() {
        let orchestrator = CohortOrchestrator::with_options(EvolutionOptions::new(5, 0, 5));
        let mut rng = RandomNumberGenerator::from_seed(3);
        assert!(orchestrator.run(&[student("T1", 0)], &mut rng).is_err());
    }
}
