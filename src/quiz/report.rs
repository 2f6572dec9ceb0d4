/// Result of grading one answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub is_correct: bool,
    pub correct_answer_text: String,
    pub book_title: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub score: usize,
    pub total: usize,
    pub passed: bool,
}

impl Report {
    /// `total` must be non-zero.
    pub fn new(score: usize, total: usize, pass_mark_percent: usize) -> Self {
        Report {
            score,
            total,
            passed: score as u128 * 100 >= total as u128 * pass_mark_percent as u128,
        }
    }

    pub fn percent(&self) -> f64 {
        (self.score as f64 / self.total as f64) * 100.0
    }
}
