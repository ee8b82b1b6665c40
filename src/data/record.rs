/// Number of quizzes each student takes.
pub const QUIZ_COUNT: usize = 6;

/// Network input width: every quiz score plus the attendance value.
pub const FEATURE_WIDTH: usize = QUIZ_COUNT + 1;

/// One synthetic student: quiz percentages and an attendance fraction,
/// all discrete hundredths in [0.00, 0.99]. Records are created fresh per
/// sample and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub quiz_scores: Vec<f64>,
    pub attendance: f64,
}

impl StudentRecord {
    pub fn new(quiz_scores: Vec<f64>, attendance: f64) -> StudentRecord {
        StudentRecord {
            quiz_scores,
            attendance,
        }
    }

    /// Quiz scores with the single lowest value dropped: sort ascending,
    /// remove the first element. Always one shorter than `quiz_scores`.
    pub fn calculation_scores(&self) -> Vec<f64> {
        let mut sorted = self.quiz_scores.clone();
        sorted.sort_by(f64::total_cmp);
        sorted.remove(0);
        sorted
    }

    /// The network input: all quiz scores in original order, then attendance.
    pub fn feature_vector(&self) -> Vec<f64> {
        let mut features = self.quiz_scores.clone();
        features.push(self.attendance);
        features
    }
}
