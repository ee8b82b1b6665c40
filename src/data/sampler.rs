use rand::Rng;

use crate::data::record::{StudentRecord, QUIZ_COUNT};

/// Generates synthetic student records from an owned random source.
///
/// The sampler owns its RNG rather than reaching for a process-wide one;
/// seeding the RNG makes a whole training or evaluation run reproducible.
pub struct StudentSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> StudentSampler<R> {
    pub fn new(rng: R) -> StudentSampler<R> {
        StudentSampler { rng }
    }

    /// Draws 6 quiz scores and an attendance value, each an independent
    /// uniform hundredth in [0.00, 0.99].
    pub fn generate(&mut self) -> StudentRecord {
        let quiz_scores = (0..QUIZ_COUNT).map(|_| self.draw_hundredth()).collect();
        let attendance = self.draw_hundredth();
        StudentRecord::new(quiz_scores, attendance)
    }

    fn draw_hundredth(&mut self) -> f64 {
        self.rng.gen_range(0..100) as f64 / 100.0
    }
}
