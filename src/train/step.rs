use crate::{
    error::DimensionError,
    loss::squared::SquaredLoss,
    math::matrix::Matrix,
    network::network::Network,
    optim::sgd::Sgd,
};

/// One online gradient-descent step: forward pass, backward pass, in-place
/// weight update. This is the only operation in the crate that mutates a
/// network's weights.
///
/// Returns the scalar error `0.5 * sum((target - output)²)` computed from
/// the output of the pre-update weights.
pub fn train_step(
    network: &mut Network,
    input: &[f64],
    target: &[f64],
    optimizer: &Sgd,
) -> Result<f64, DimensionError> {
    if target.len() != network.output_width() {
        return Err(DimensionError::new(
            "target width",
            network.output_width(),
            target.len(),
        ));
    }

    // Forward pass (validates input width, caches per-layer activations)
    let output = network.forward(input)?;
    let sample_error = SquaredLoss::loss(&output, target);

    // Initial delta: ∂L/∂a_output (error in output activation space)
    let error = SquaredLoss::derivative(&output, target);
    let mut delta = Matrix::from_data(vec![error]);

    // Backward pass
    for i in (0..network.layers.len()).rev() {
        let input_for_layer = if i == 0 {
            Matrix::from_data(vec![input.to_vec()])
        } else {
            network.layers[i - 1].neurons.clone()
        };

        // Borrow-checker ordering: compute gradients → compute next delta → apply step
        let (w_grad, b_grad) = network.layers[i].compute_gradients(delta.clone(), &input_for_layer);

        if i > 0 {
            // Propagate δ_i through weights to get ∂L/∂a_{i-1}
            delta = b_grad.clone() * network.layers[i].weights.transpose();
        }

        optimizer.step(&mut network.layers[i], w_grad, b_grad);
    }

    Ok(sample_error)
}
