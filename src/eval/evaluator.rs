use rand::Rng;

use crate::data::record::StudentRecord;
use crate::data::sampler::StudentSampler;
use crate::error::DimensionError;
use crate::grading::{grade::Grade, scoring};
use crate::network::network::Network;

/// Classification counts over an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalReport {
    pub correct: usize,
    pub wrong: usize,
}

impl EvalReport {
    pub fn accuracy(&self) -> f64 {
        let total = self.correct + self.wrong;
        if total == 0 {
            return 0.0;
        }
        self.correct as f64 / total as f64
    }
}

/// One evaluated sample, handed to the observer as it happens.
pub struct SampleOutcome<'a> {
    /// 0-based position in the evaluation run.
    pub index: usize,
    pub record: &'a StudentRecord,
    pub score: f64,
    pub truth: Grade,
    pub predicted: Grade,
}

/// Runs `network` against `sample_count` freshly generated students and
/// counts grade predictions that match the ground truth.
///
/// The observer is invoked once per sample; the binary uses it to print the
/// per-sample report lines, tests pass `|_| {}`. Weights are never touched;
/// forward's `&mut` is only activation caching.
pub fn evaluate<R, F>(
    network: &mut Network,
    sample_count: usize,
    rng: R,
    mut observer: F,
) -> Result<EvalReport, DimensionError>
where
    R: Rng,
    F: FnMut(&SampleOutcome<'_>),
{
    let mut sampler = StudentSampler::new(rng);
    let mut correct = 0;
    let mut wrong = 0;

    for index in 0..sample_count {
        let record = sampler.generate();

        let score = scoring::score(&record)?;
        let truth = Grade::decode_score(score);

        let output = network.forward(&record.feature_vector())?;
        let predicted = Grade::decode(&output);

        observer(&SampleOutcome {
            index,
            record: &record,
            score,
            truth,
            predicted,
        });

        if predicted == truth {
            correct += 1;
        } else {
            wrong += 1;
        }
    }

    let report = EvalReport { correct, wrong };
    log::info!(
        "evaluated {sample_count} samples: {} correct, {} wrong ({:.1}% accuracy)",
        report.correct,
        report.wrong,
        report.accuracy() * 100.0
    );
    Ok(report)
}
