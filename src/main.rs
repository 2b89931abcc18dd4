use std::path::PathBuf;

use anyhow::Context;
use balanced_groups::{
    evolution::options::{DEFAULT_GROUP_SIZE, DEFAULT_NUM_GENERATIONS, DEFAULT_TARGET_GROUPS},
    rng::RandomNumberGenerator,
    roster::{self, WriteMode},
    CohortOrchestrator, EvolutionOptions, GroupingReport,
};
use clap::Parser;
use tracing::{info, Level};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster file: Tutorial Group,Student ID,School,Name,Gender,CGPA
    #[arg(default_value = "Data_sets/records.csv")]
    input: PathBuf,

    /// Where the final groups are written
    #[arg(short, long, default_value = "final_groups.csv")]
    output: PathBuf,

    /// Students per group
    #[arg(long, default_value_t = DEFAULT_GROUP_SIZE)]
    group_size: usize,

    /// Groups formed per tutorial cohort
    #[arg(long, default_value_t = DEFAULT_TARGET_GROUPS)]
    target_groups: usize,

    /// Fixed generation budget per cohort
    #[arg(long, default_value_t = DEFAULT_NUM_GENERATIONS)]
    generations: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Append to the output file instead of overwriting it
    #[arg(long)]
    append: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn print_summary(report: &GroupingReport) {
    for outcome in &report.outcomes {
        println!("Tutorial Group: {}", outcome.cohort);
        match &outcome.best {
            Some(record) => {
                println!("Best Generation: {}", record.generation);
                println!("Average Fitness: {:.2}", record.average_fitness);
                println!("Fitness Scores: {:?}", record.fitness_scores);
            }
            None => println!("Best Generation: none"),
        }
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(args.verbose))
        .init();

    let options = EvolutionOptions::builder()
        .group_size(args.group_size)
        .target_groups(args.target_groups)
        .num_generations(args.generations)
        .build();
    options.validate()?;

    let mut rng = match args.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    let students = roster::load_students(&args.input)
        .with_context(|| format!("loading roster {}", args.input.display()))?;
    info!(students = students.len(), "Roster loaded");

    let report = CohortOrchestrator::with_options(options).run(&students, &mut rng)?;
    print_summary(&report);

    let mode = if args.append {
        WriteMode::Append
    } else {
        WriteMode::Overwrite
    };
    roster::save_groups(&args.output, &report.groups, mode)
        .with_context(|| format!("writing groups to {}", args.output.display()))?;
    info!(groups = report.groups.len(), output = %args.output.display(), "Groups written");

    Ok(())
}
