use std::env;

use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};

use grade_net::eval::evaluator::{evaluate, SampleOutcome};
use grade_net::persist;
use grade_net::train::{config::TrainConfig, trainer::Trainer};

const MODEL_PATH: &str = "network.json";
const EVAL_SAMPLES: usize = 1000;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // With a path argument, skip training and load a previously saved model.
    let mut network = match env::args().nth(1) {
        Some(path) => {
            persist::load(&path).with_context(|| format!("failed to load model from {path}"))?
        }
        None => {
            let trainer = Trainer::new(TrainConfig::default(), StdRng::from_entropy());
            let outcome = trainer.train()?;
            println!("Sample count: {}", outcome.samples);
            outcome.network
        }
    };

    let report = evaluate(
        &mut network,
        EVAL_SAMPLES,
        StdRng::from_entropy(),
        print_sample,
    )?;
    println!("Correct: {} / Wrong: {}", report.correct, report.wrong);

    persist::save(&network, MODEL_PATH)
        .with_context(|| format!("failed to save model to {MODEL_PATH}"))?;

    Ok(())
}

fn print_sample(sample: &SampleOutcome<'_>) {
    print!("Student {} - ", sample.index);
    for (j, quiz) in sample.record.quiz_scores.iter().enumerate() {
        print!("Q{j}: {quiz} / ");
    }
    print!("Attendance: {} / ", sample.record.attendance);
    print!("Score: {} / True Grade: {} / ", sample.score, sample.truth);
    println!("Predicted Grade: {}", sample.predicted);
}
