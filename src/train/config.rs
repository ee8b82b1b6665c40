use crate::network::topology::Topology;
use crate::optim::sgd::DEFAULT_LEARNING_RATE;

/// Error level below which a single sample counts as convergence.
pub const CONVERGENCE_THRESHOLD: f64 = 1e-6;

/// Configuration for a `Trainer` run.
///
/// # Fields
/// - `topology`              — layer widths of the freshly initialized network
/// - `learning_rate`         — fixed SGD step size
/// - `convergence_threshold` — training stops once the most recent
///                             single-sample error drops below this value
/// - `max_samples`           — optional hard cap on the number of training
///                             samples. `None` (the default) reproduces the
///                             unbounded loop: a single noisy sample decides
///                             convergence, and nothing else stops it.
pub struct TrainConfig {
    pub topology: Topology,
    pub learning_rate: f64,
    pub convergence_threshold: f64,
    pub max_samples: Option<usize>,
}

impl TrainConfig {
    pub fn new(topology: Topology, learning_rate: f64, convergence_threshold: f64) -> Self {
        TrainConfig {
            topology,
            learning_rate,
            convergence_threshold,
            max_samples: None,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(Topology::grader(), DEFAULT_LEARNING_RATE, CONVERGENCE_THRESHOLD)
    }
}
