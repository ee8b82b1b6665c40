pub mod squared;

pub use squared::SquaredLoss;
