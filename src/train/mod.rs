pub mod config;
pub mod step;
pub mod trainer;

pub use config::TrainConfig;
pub use step::train_step;
pub use trainer::{Trainer, TrainingOutcome};
