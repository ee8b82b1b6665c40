use std::fmt;

/// Number of letter grades, and therefore the network's output width.
pub const GRADE_COUNT: usize = 5;

/// Letter grade, ordered best to worst. The discriminant order is the
/// one-hot index mapping: {0:A, 1:B, 2:C, 3:D, 4:F}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Threshold ladder, evaluated top-down with strict `>`: boundary scores
    /// (exactly 0.9, 0.8, 0.7, 0.6) fall to the lower grade.
    pub fn from_score(score: f64) -> Grade {
        if score > 0.9 {
            Grade::A
        } else if score > 0.8 {
            Grade::B
        } else if score > 0.7 {
            Grade::C
        } else if score > 0.6 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn index(self) -> usize {
        match self {
            Grade::A => 0,
            Grade::B => 1,
            Grade::C => 2,
            Grade::D => 3,
            Grade::F => 4,
        }
    }

    /// One-hot target vector for this grade's index.
    pub fn one_hot(self) -> Vec<f64> {
        let mut vector = vec![0.0; GRADE_COUNT];
        vector[self.index()] = 1.0;
        vector
    }

    /// Encodes a score straight to its one-hot target vector.
    pub fn encode(score: f64) -> Vec<f64> {
        Grade::from_score(score).one_hot()
    }

    /// Reads a grade out of an arbitrary output vector: the letter at the
    /// index of the maximum value. Ties go to the lowest index, so the
    /// higher-ranked grade wins; on an exact one-hot encoding this inverts
    /// `encode`.
    pub fn decode(vector: &[f64]) -> Grade {
        let mut max_index = 0;
        let mut max_value = f64::NEG_INFINITY;

        for (i, &value) in vector.iter().enumerate() {
            if value > max_value {
                max_index = i;
                max_value = value;
            }
        }

        match max_index {
            0 => Grade::A,
            1 => Grade::B,
            2 => Grade::C,
            3 => Grade::D,
            _ => Grade::F,
        }
    }

    /// Convenience composition used by the ground-truth path:
    /// `decode(encode(score))`.
    pub fn decode_score(score: f64) -> Grade {
        Grade::decode(&Grade::encode(score))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{letter}")
    }
}
