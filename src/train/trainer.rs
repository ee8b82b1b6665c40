use rand::Rng;

use crate::data::sampler::StudentSampler;
use crate::error::DimensionError;
use crate::grading::{grade::Grade, scoring};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::config::TrainConfig;
use crate::train::step::train_step;

const PROGRESS_EVERY: usize = 10_000;

/// A finished training run.
pub struct TrainingOutcome {
    pub network: Network,
    /// Number of samples consumed before the loop stopped.
    pub samples: usize,
    /// Error of the last training step.
    pub final_error: f64,
}

/// Drives the sample → score → encode → backpropagate loop until the most
/// recent single-sample error falls below the convergence threshold.
///
/// Note that the stopping rule really is a single sample's error, not a
/// moving average; an easy sample can end training before the network
/// generalizes. `TrainConfig::max_samples` bounds the loop when that risk
/// is unacceptable.
pub struct Trainer<R: Rng> {
    config: TrainConfig,
    rng: R,
}

impl<R: Rng> Trainer<R> {
    pub fn new(config: TrainConfig, rng: R) -> Trainer<R> {
        Trainer { config, rng }
    }

    pub fn train(mut self) -> Result<TrainingOutcome, DimensionError> {
        let mut network = Network::new(&self.config.topology, &mut self.rng);
        let mut sampler = StudentSampler::new(self.rng);
        let optimizer = Sgd::new(self.config.learning_rate);

        let mut error = 1.0;
        let mut samples = 0;

        loop {
            if let Some(cap) = self.config.max_samples {
                if samples >= cap {
                    log::warn!(
                        "stopping after {samples} samples without convergence (last error {error:.9})"
                    );
                    break;
                }
            }

            let record = sampler.generate();
            let true_score = scoring::score(&record)?;
            let target = Grade::encode(true_score);

            error = train_step(&mut network, &record.feature_vector(), &target, &optimizer)?;
            samples += 1;

            if error <= self.config.convergence_threshold {
                log::info!("converged after {samples} samples (final error {error:.9})");
                break;
            }

            if samples % PROGRESS_EVERY == 0 {
                log::debug!("trained on {samples} samples, last error {error:.9}");
            }
        }

        Ok(TrainingOutcome {
            network,
            samples,
            final_error: error,
        })
    }
}
