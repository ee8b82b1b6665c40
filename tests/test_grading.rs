// Tests for the deterministic grading path: record derivation, scoring,
// and the grade codec, including the exact threshold boundaries.

use approx::assert_relative_eq;
use rand::{rngs::StdRng, SeedableRng};

use grade_net::data::record::{StudentRecord, QUIZ_COUNT};
use grade_net::data::sampler::StudentSampler;
use grade_net::grading::{scoring, Grade};

#[test]
fn calculation_scores_drop_the_lowest_quiz() {
    let record = StudentRecord::new(vec![0.4, 0.9, 0.1, 0.7, 0.1, 0.5], 0.8);
    let calc = record.calculation_scores();

    assert_eq!(calc.len(), QUIZ_COUNT - 1);
    // Sorted ascending with the first minimum removed; the duplicate 0.1 stays.
    assert_eq!(calc, vec![0.1, 0.4, 0.5, 0.7, 0.9]);
}

#[test]
fn feature_vector_is_quiz_scores_then_attendance() {
    let record = StudentRecord::new(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6], 0.7);
    assert_eq!(
        record.feature_vector(),
        vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7]
    );
}

#[test]
fn sampler_produces_discrete_hundredths_in_range() {
    let mut sampler = StudentSampler::new(StdRng::seed_from_u64(7));

    for _ in 0..100 {
        let record = sampler.generate();
        assert_eq!(record.quiz_scores.len(), QUIZ_COUNT);

        for &value in record.quiz_scores.iter().chain([record.attendance].iter()) {
            assert!((0.0..=0.99).contains(&value), "out of range: {value}");
            let hundredths = value * 100.0;
            assert_relative_eq!(hundredths, hundredths.round(), epsilon = 1e-9);
        }
    }
}

#[test]
fn score_weights_quiz_mean_and_attendance() {
    // Dropped-lowest set [0.9; 5], mean 0.9: 0.9 * 0.95 + 1.0 * 0.05 = 0.905
    let record = StudentRecord::new(vec![0.9, 0.9, 0.9, 0.9, 0.9, 0.1], 1.0);
    let score = scoring::score(&record).unwrap();
    assert_relative_eq!(score, 0.905, epsilon = 1e-12);

    assert_eq!(Grade::encode(score), vec![1.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(Grade::decode_score(score), Grade::A);
}

#[test]
fn score_of_flat_half_student_is_failing() {
    let record = StudentRecord::new(vec![0.5; 6], 0.0);
    let score = scoring::score(&record).unwrap();
    assert_relative_eq!(score, 0.475, epsilon = 1e-12);

    assert_eq!(Grade::from_score(score), Grade::F);
    assert_eq!(Grade::encode(score), vec![0.0, 0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn score_is_deterministic_per_record() {
    let record = StudentRecord::new(vec![0.61, 0.72, 0.83, 0.94, 0.15, 0.26], 0.37);
    assert_eq!(
        scoring::score(&record).unwrap(),
        scoring::score(&record).unwrap()
    );
}

#[test]
fn score_rejects_wrong_quiz_count() {
    let record = StudentRecord::new(vec![0.5; 5], 0.5);
    let err = scoring::score(&record).unwrap_err();
    assert_eq!(err.expected, 5);
    assert_eq!(err.actual, 4);
}

#[test]
fn grade_ladder_matches_thresholds() {
    assert_eq!(Grade::from_score(0.95), Grade::A);
    assert_eq!(Grade::from_score(0.85), Grade::B);
    assert_eq!(Grade::from_score(0.75), Grade::C);
    assert_eq!(Grade::from_score(0.65), Grade::D);
    assert_eq!(Grade::from_score(0.35), Grade::F);
}

#[test]
fn boundary_scores_fall_to_the_lower_grade() {
    // Strict `>` everywhere: exact boundaries belong to the grade below.
    assert_eq!(Grade::from_score(0.9), Grade::B);
    assert_eq!(Grade::from_score(0.8), Grade::C);
    assert_eq!(Grade::from_score(0.7), Grade::D);
    assert_eq!(Grade::from_score(0.6), Grade::F);

    assert_eq!(Grade::decode_score(0.9), Grade::B);
    assert_eq!(Grade::decode_score(0.8), Grade::C);
    assert_eq!(Grade::decode_score(0.7), Grade::D);
    assert_eq!(Grade::decode_score(0.6), Grade::F);
}

#[test]
fn decode_inverts_one_hot_encoding() {
    for (score, grade) in [
        (0.95, Grade::A),
        (0.85, Grade::B),
        (0.75, Grade::C),
        (0.65, Grade::D),
        (0.05, Grade::F),
    ] {
        assert_eq!(Grade::decode(&Grade::encode(score)), grade);
    }
}

#[test]
fn decode_breaks_ties_toward_the_better_grade() {
    assert_eq!(Grade::decode(&[0.5, 0.5, 0.5, 0.5, 0.5]), Grade::A);
    assert_eq!(Grade::decode(&[0.1, 0.9, 0.9, 0.2, 0.1]), Grade::B);
    // Well-defined on arbitrary non-one-hot output vectors too.
    assert_eq!(Grade::decode(&[0.03, 0.11, 0.02, 0.48, 0.47]), Grade::D);
}
