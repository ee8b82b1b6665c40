use serde::{Deserialize, Serialize};

use crate::data::record::FEATURE_WIDTH;
use crate::grading::grade::GRADE_COUNT;

/// Ordered layer widths, input width first.
///
/// The persisted model document stores exactly this sequence, so a loaded
/// network can be checked against it before any weights are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub widths: Vec<usize>,
}

impl Topology {
    pub fn new(widths: Vec<usize>) -> Topology {
        assert!(widths.len() >= 2, "a network needs an input and an output layer");
        Topology { widths }
    }

    /// The fixed grader topology: 7 inputs (6 quiz scores + attendance),
    /// two hidden layers of 10, one output neuron per letter grade.
    pub fn grader() -> Topology {
        Topology::new(vec![FEATURE_WIDTH, 10, 10, GRADE_COUNT])
    }

    pub fn input_width(&self) -> usize {
        self.widths[0]
    }

    pub fn output_width(&self) -> usize {
        self.widths[self.widths.len() - 1]
    }

    /// (input_size, size) pairs for each weight layer, input to output.
    pub fn layer_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.widths.windows(2).map(|w| (w[0], w[1]))
    }
}
