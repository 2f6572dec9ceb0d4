use anyhow::Result;

use crate::quiz::Report;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Choices(Vec<String>),
    Error(String),
    FillPrompt,
    GuessCorrect,
    GuessIncorrect(String),
    InvalidPassword,
    NextPrompt,
    NoData,
    PasswordPrompt,
    QuestionBegins {
        number: usize,
        total: usize,
        stem: String,
    },
    RestartPrompt,
    Results(Report),
    SizeMenu(Vec<usize>),
    Source {
        book_title: Option<String>,
        explanation: Option<String>,
    },
}

pub trait QuizOutput {
    fn say(&mut self, message: &Message) -> Result<()>;
}
