pub mod activation;
pub mod data;
pub mod error;
pub mod eval;
pub mod grading;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod persist;
pub mod train;

// Convenience re-exports
pub use activation::activation::Sigmoid;
pub use data::record::StudentRecord;
pub use data::sampler::StudentSampler;
pub use error::{DimensionError, FormatError};
pub use eval::evaluator::{evaluate, EvalReport};
pub use grading::grade::Grade;
pub use layers::dense::Layer;
pub use loss::squared::SquaredLoss;
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use network::topology::Topology;
pub use optim::sgd::Sgd;
pub use train::config::TrainConfig;
pub use train::step::train_step;
pub use train::trainer::{Trainer, TrainingOutcome};
