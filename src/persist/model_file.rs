use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activation::activation::Sigmoid;
use crate::error::FormatError;
use crate::layers::dense::Layer;
use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::network::topology::Topology;

/// Persisted parameters of one layer.
///
/// `weights` is row-major with one row per input neuron and one column per
/// neuron in this layer; `biases` has one entry per neuron.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerParams {
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
}

/// On-disk model document: the topology's layer widths (input width first),
/// then each layer's parameters in input-to-output order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub topology: Topology,
    pub layers: Vec<LayerParams>,
}

impl ModelFile {
    pub fn from_network(network: &Network) -> ModelFile {
        let layers = network
            .layers
            .iter()
            .map(|layer| LayerParams {
                weights: layer.weights.data.clone(),
                biases: layer.biases.data[0].clone(),
            })
            .collect();

        ModelFile {
            topology: network.topology(),
            layers,
        }
    }

    /// Validates the document and rebuilds the network. Nothing is returned
    /// unless every matrix agrees with the declared widths and every value
    /// is finite.
    pub fn into_network(self) -> Result<Network, FormatError> {
        let widths = &self.topology.widths;
        if widths.len() < 2 {
            return Err(FormatError::Topology(format!(
                "{} layer widths declared, need at least 2",
                widths.len()
            )));
        }
        if widths.iter().any(|&w| w == 0) {
            return Err(FormatError::Topology("a declared layer width is zero".into()));
        }
        if self.layers.len() != widths.len() - 1 {
            return Err(FormatError::Topology(format!(
                "{} widths declare {} weight layers, document has {}",
                widths.len(),
                widths.len() - 1,
                self.layers.len()
            )));
        }

        let mut layers = Vec::with_capacity(self.layers.len());

        for (l, params) in self.layers.into_iter().enumerate() {
            let input_size = widths[l];
            let size = widths[l + 1];

            if params.weights.len() != input_size
                || params.weights.iter().any(|row| row.len() != size)
            {
                return Err(FormatError::Topology(format!(
                    "layer {l} weights are not {input_size}x{size}"
                )));
            }
            if params.biases.len() != size {
                return Err(FormatError::Topology(format!(
                    "layer {l} has {} biases, expected {size}",
                    params.biases.len()
                )));
            }

            let finite = params.weights.iter().flatten().all(|w| w.is_finite())
                && params.biases.iter().all(|b| b.is_finite());
            if !finite {
                return Err(FormatError::NonFinite { layer: l });
            }

            layers.push(Layer::from_parts(
                Matrix::from_data(params.weights),
                Matrix::from_data(vec![params.biases]),
                Sigmoid::default(),
            ));
        }

        Ok(Network::from_layers(layers))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, FormatError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<ModelFile, FormatError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Serializes the network to a pretty-printed JSON model file.
pub fn save<P: AsRef<Path>>(network: &Network, path: P) -> Result<(), FormatError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ModelFile::from_network(network))?;
    Ok(())
}

/// Deserializes and validates a network from a model file previously written
/// by `save`. The loaded network's `forward` matches the saved one's.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Network, FormatError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let document: ModelFile = serde_json::from_reader(reader)?;
    document.into_network()
}
