pub mod model_file;

pub use model_file::{load, save, LayerParams, ModelFile};
