pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::{BalanceChallenge, Challenge};
pub use launcher::{BestGeneration, EvolutionLauncher, EvolutionResult, GenerationRecord};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder};
