use crate::data::record::{StudentRecord, QUIZ_COUNT};
use crate::error::DimensionError;

/// Quiz scores entering the mean after the lowest is dropped.
pub const CALCULATION_COUNT: usize = QUIZ_COUNT - 1;

const QUIZ_WEIGHT: f64 = 0.95;
const ATTENDANCE_WEIGHT: f64 = 0.05;

/// Ground-truth course score in [0, 1]: the mean of the calculation scores
/// weighted 95%, attendance weighted 5%. Deterministic per record.
pub fn score(record: &StudentRecord) -> Result<f64, DimensionError> {
    let calculation_scores = record.calculation_scores();
    if calculation_scores.len() != CALCULATION_COUNT {
        return Err(DimensionError::new(
            "calculation score count",
            CALCULATION_COUNT,
            calculation_scores.len(),
        ));
    }

    let quiz_mean = calculation_scores.iter().sum::<f64>() / CALCULATION_COUNT as f64;
    Ok(quiz_mean * QUIZ_WEIGHT + record.attendance * ATTENDANCE_WEIGHT)
}
