// Tests for the model file format: round-trip fidelity and rejection of
// structurally broken documents.

use rand::{rngs::StdRng, SeedableRng};

use grade_net::error::FormatError;
use grade_net::network::{Network, Topology};
use grade_net::persist::{self, ModelFile};

fn trained_like_network(seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    Network::new(&Topology::grader(), &mut rng)
}

#[test]
fn byte_round_trip_preserves_forward_output() {
    let mut network = trained_like_network(21);

    let bytes = ModelFile::from_network(&network).to_bytes().unwrap();
    let mut restored = ModelFile::from_bytes(&bytes).unwrap().into_network().unwrap();

    for input in [
        [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        [0.99, 0.99, 0.99, 0.99, 0.99, 0.99, 0.99],
        [0.13, 0.87, 0.42, 0.66, 0.05, 0.91, 0.3],
    ] {
        assert_eq!(
            network.forward(&input).unwrap(),
            restored.forward(&input).unwrap()
        );
    }
}

#[test]
fn file_round_trip_preserves_topology() {
    let network = trained_like_network(22);
    let path = std::env::temp_dir().join("grade-net-roundtrip.json");

    persist::save(&network, &path).unwrap();
    let restored = persist::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(restored.topology(), Topology::grader());
    assert_eq!(restored.input_width(), 7);
    assert_eq!(restored.output_width(), 5);
}

#[test]
fn truncated_bytes_are_rejected_as_malformed() {
    let network = trained_like_network(23);
    let bytes = ModelFile::from_network(&network).to_bytes().unwrap();

    // Cut the stream mid-matrix.
    let err = ModelFile::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, FormatError::Malformed(_)));
}

#[test]
fn missing_layer_is_rejected_as_topology_error() {
    let network = trained_like_network(24);
    let mut document = ModelFile::from_network(&network);
    document.layers.pop();

    let err = document.into_network().unwrap_err();
    assert!(matches!(err, FormatError::Topology(_)));
}

#[test]
fn misshapen_weights_are_rejected_as_topology_error() {
    let network = trained_like_network(25);
    let mut document = ModelFile::from_network(&network);
    document.layers[1].weights[3].pop();

    let err = document.into_network().unwrap_err();
    assert!(matches!(err, FormatError::Topology(_)));
}

#[test]
fn non_finite_weight_is_rejected() {
    let network = trained_like_network(26);
    let mut document = ModelFile::from_network(&network);
    document.layers[2].weights[0][0] = f64::NAN;

    let err = document.into_network().unwrap_err();
    assert!(matches!(err, FormatError::NonFinite { layer: 2 }));
}

#[test]
fn nonsense_bytes_are_rejected_without_a_partial_network() {
    let err = ModelFile::from_bytes(b"not a model").unwrap_err();
    assert!(matches!(err, FormatError::Malformed(_)));
}
