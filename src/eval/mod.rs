pub mod evaluator;

pub use evaluator::{evaluate, EvalReport, SampleOutcome};
