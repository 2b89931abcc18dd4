pub mod extremes;
pub mod selection_strategy;

pub use extremes::ExtremesSelection;
pub use selection_strategy::{ParentPair, SelectionStrategy};
