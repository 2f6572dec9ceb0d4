use thiserror::Error;

use crate::quiz::definition::QuestionKind;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum QuizError {
    #[error("There are no questions to choose from.")]
    NoData,
    #[error("Cannot draw {requested} {kind} questions, only {available} are available.")]
    NotEnoughQuestions {
        kind: QuestionKind,
        requested: usize,
        available: usize,
    },
    #[error("{0}")]
    InvalidState(&'static str),
    #[error("This question was already answered.")]
    AlreadyAnswered,
}
