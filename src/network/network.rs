use rand::Rng;

use crate::activation::activation::Sigmoid;
use crate::error::DimensionError;
use crate::layers::dense::Layer;
use crate::network::topology::Topology;

#[derive(Debug)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a freshly initialized network for the given topology. All
    /// layers use the default sigmoid; weights come from `rng`.
    pub fn new<R: Rng>(topology: &Topology, rng: &mut R) -> Network {
        let layers = topology
            .layer_pairs()
            .map(|(input_size, size)| Layer::new(size, input_size, Sigmoid::default(), rng))
            .collect();
        Network { layers }
    }

    /// Reassembles a network from already-built layers (persistence path).
    pub fn from_layers(layers: Vec<Layer>) -> Network {
        Network { layers }
    }

    pub fn input_width(&self) -> usize {
        self.layers[0].input_size()
    }

    pub fn output_width(&self) -> usize {
        self.layers[self.layers.len() - 1].size
    }

    /// Layer widths as persisted: input width followed by each layer's size.
    pub fn topology(&self) -> Topology {
        let mut widths = vec![self.input_width()];
        widths.extend(self.layers.iter().map(|layer| layer.size));
        Topology::new(widths)
    }

    /// Forward pass; stores activations in each layer for backprop. The
    /// output is a pure function of the current weights and `input`.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>, DimensionError> {
        if input.len() != self.input_width() {
            return Err(DimensionError::new(
                "input width",
                self.input_width(),
                input.len(),
            ));
        }

        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.feed_from(current);
        }
        Ok(current)
    }
}
