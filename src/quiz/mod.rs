use log::{debug, info};
use rand::Rng;

use self::definition::*;

pub mod definition;
mod error;
mod report;
mod sampling;
mod settings;

pub use self::error::QuizError;
pub use self::report::{Outcome, Report};
pub use self::settings::Settings;


pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Complete,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Progress<'a> {
    Question {
        number: usize,
        total: usize,
        question: &'a Question,
    },
    Complete {
        score: usize,
        total: usize,
    },
}

/// One attempt at the practice test, from size selection to the final report.
#[derive(Debug)]
pub struct QuizSession {
    settings: Settings,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    started: bool,
    answered: bool,
}

fn draw_from<'a, R: Rng + ?Sized>(
    pool: &[&'a Question],
    kind: QuestionKind,
    amount: usize,
    rng: &mut R,
) -> Result<Vec<&'a Question>> {
    sampling::draw(pool, amount, rng).ok_or(QuizError::NotEnoughQuestions {
        kind,
        requested: amount,
        available: pool.len(),
    })
}

impl QuizSession {
    pub fn new(settings: Settings) -> Self {
        QuizSession {
            settings,
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            started: false,
            answered: false,
        }
    }

    pub fn state(&self) -> SessionState {
        if !self.started {
            SessionState::NotStarted
        } else if self.current_index < self.questions.len() {
            SessionState::InProgress
        } else {
            SessionState::Complete
        }
    }

    pub fn start<R: Rng + ?Sized>(
        &mut self,
        requested_count: usize,
        bank: &QuestionBank,
        rng: &mut R,
    ) -> Result<()> {
        if self.started {
            return Err(QuizError::InvalidState(
                "A quiz is already underway, restart it first.",
            ));
        }
        if bank.is_empty() {
            return Err(QuizError::NoData);
        }

        let fill_pool = bank.pool(QuestionKind::Fill);
        let choice_pool = bank.pool(QuestionKind::Choice);
        let fill_count = sampling::share(requested_count, self.settings.fill_percent)
            .min(fill_pool.len())
            .min(requested_count);
        let choice_count = requested_count - fill_count;

        let fills = draw_from(&fill_pool, QuestionKind::Fill, fill_count, rng)?;
        let choices = draw_from(&choice_pool, QuestionKind::Choice, choice_count, rng)?;
        let mut questions: Vec<Question> = fills.into_iter().chain(choices).cloned().collect();
        sampling::shuffle(&mut questions, rng);

        info!(
            "Starting a {} question quiz ({} fill-in-the-blank, {} multiple-choice)",
            requested_count, fill_count, choice_count
        );
        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.answered = false;
        self.started = true;
        Ok(())
    }

    pub fn current(&self) -> Result<Progress<'_>> {
        if !self.started {
            return Err(QuizError::InvalidState("No quiz has been started."));
        }
        let total = self.questions.len();
        Ok(match self.questions.get(self.current_index) {
            Some(question) => Progress::Question {
                number: self.current_index + 1,
                total,
                question,
            },
            None => Progress::Complete {
                score: self.score,
                total,
            },
        })
    }

    pub fn submit(&mut self, answer: &str) -> Result<Outcome> {
        let outcome = match self.current()? {
            Progress::Question { question, .. } => {
                if self.answered {
                    return Err(QuizError::AlreadyAnswered);
                }
                Outcome {
                    is_correct: question.is_guess_correct(answer),
                    correct_answer_text: question.answer_text.clone(),
                    book_title: question.book_title.clone(),
                    explanation: question.explanation.clone(),
                }
            }
            Progress::Complete { .. } => {
                return Err(QuizError::InvalidState("There is no question to answer."))
            }
        };

        self.answered = true;
        if outcome.is_correct {
            self.score += 1;
        }
        debug!(
            "Question {} answered ({}), score is {}",
            self.current_index + 1,
            if outcome.is_correct { "correct" } else { "incorrect" },
            self.score
        );
        Ok(outcome)
    }

    /// Moves to the next question. Moving past the last question is harmless.
    pub fn advance(&mut self) {
        if !self.started {
            return;
        }
        self.current_index += 1;
        self.answered = false;
    }

    pub fn finalize(&self) -> Result<Report> {
        let total = self.questions.len();
        if total == 0 {
            return Err(QuizError::InvalidState("There are no questions to report on."));
        }
        Ok(Report::new(
            self.score,
            total,
            self.settings.pass_mark_percent,
        ))
    }

    pub fn restart(&mut self) {
        info!("Restarting quiz");
        self.questions.clear();
        self.current_index = 0;
        self.score = 0;
        self.answered = false;
        self.started = false;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }
}
