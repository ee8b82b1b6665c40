use rand::Rng;

use crate::{activation::activation::Sigmoid, math::matrix::Matrix};

/// Weights are drawn uniformly from [-0.5, 0.5] at construction.
const WEIGHT_INIT_LIMIT: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct Layer {
    pub size: usize,
    /// Activations from the most recent forward pass (1 x size); backprop
    /// reads these both for the sigmoid derivative and as the next layer's
    /// input.
    pub neurons: Matrix,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: Sigmoid,
}

impl Layer {
    pub fn new<R: Rng>(size: usize, input_size: usize, activator: Sigmoid, rng: &mut R) -> Layer {
        let neurons = Matrix::zeros(1, size);
        let weights = Matrix::uniform(input_size, size, WEIGHT_INIT_LIMIT, rng);
        let biases = Matrix::uniform(1, size, WEIGHT_INIT_LIMIT, rng);

        Layer {
            size,
            neurons,
            weights,
            biases,
            activator,
        }
    }

    /// Rebuilds a layer from persisted weights and biases.
    pub fn from_parts(weights: Matrix, biases: Matrix, activator: Sigmoid) -> Layer {
        let size = weights.cols;
        Layer {
            size,
            neurons: Matrix::zeros(1, size),
            weights,
            biases,
            activator,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    pub fn feed_from(&mut self, input: Vec<f64>) -> Vec<f64> {
        let z = Matrix::from_data(vec![input]) * self.weights.clone() + self.biases.clone();
        let a = z.map(|x| self.activator.function(x));
        self.neurons = a.clone();
        a.data[0].clone()
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(&self, next_layer_delta: Matrix, inputs: &Matrix) -> (Matrix, Matrix) {
        let act_derivative = self
            .neurons
            .map(|a| self.activator.derivative_from_output(a));
        // Element-wise (Hadamard) product: δ = error ⊙ σ'(z)
        let layer_delta = hadamard(&next_layer_delta, &act_derivative);

        let weights_adjustment = inputs.transpose() * layer_delta.clone();
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, weights_grad: Matrix, biases_grad: Matrix, lr: f64) {
        self.weights = self.weights.clone() - weights_grad.map(|x| x * lr);
        self.biases = self.biases.clone() - biases_grad.map(|x| x * lr);
    }
}

/// Element-wise (Hadamard) product of two same-shape matrices.
fn hadamard(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.cols, b.cols);
    let data = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect())
        .collect();
    Matrix::from_data(data)
}
