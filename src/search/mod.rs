// 探索モジュール

pub mod engine;
pub mod probability;

pub use engine::{run_search, SearchOutcome};
pub use probability::{ProbabilityCell, ProbabilityGrid};
