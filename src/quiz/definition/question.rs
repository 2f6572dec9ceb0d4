use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::hash::{Hash, Hasher};


lazy_static! {
    static ref OPTION_LINE_REGEX: Regex = Regex::new("^[a-dA-D]\\.").unwrap();
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Lines of `text` that look like a lettered option (`a.` through `d.`), trimmed, in source order.
pub fn parse_options(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| OPTION_LINE_REGEX.is_match(line))
        .map(str::to_owned)
        .collect()
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    #[serde(
        rename = "Question Text",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub question_text: Option<String>,
    #[serde(
        rename = "Correct Answer (Letter)",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub correct_letter: Option<String>,
    #[serde(rename = "Answer Text", default, deserialize_with = "blank_as_none")]
    pub answer_text: Option<String>,
    #[serde(rename = "Book Title", default, deserialize_with = "blank_as_none")]
    pub book_title: Option<String>,
    #[serde(
        rename = "Explanation / Summary",
        default,
        deserialize_with = "blank_as_none"
    )]
    pub explanation: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QuestionKind {
    Choice,
    Fill,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Choice => write!(f, "multiple-choice"),
            QuestionKind::Fill => write!(f, "fill-in-the-blank"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Answer {
    /// Uppercase letter of the correct option.
    Choice(char),
    /// Accepted answers, trimmed and lowercased.
    Fill(Vec<String>),
}

#[derive(Clone, Debug)]
pub struct Question {
    pub row: usize,
    pub text: String,
    pub answer: Answer,
    pub answer_text: String,
    pub book_title: Option<String>,
    pub explanation: Option<String>,
}

impl Question {
    /// Validates a bank row. Rows missing the fields their kind requires are rejected.
    pub fn from_raw(row: usize, raw: RawQuestion) -> Option<Question> {
        let text = raw.question_text?;
        let answer_text = raw.answer_text?;
        let answer = match raw.correct_letter.and_then(|l| l.trim().chars().next()) {
            Some(letter) => Answer::Choice(letter.to_ascii_uppercase()),
            None => Answer::Fill(
                answer_text
                    .split(',')
                    .map(normalize)
                    .filter(|answer| !answer.is_empty())
                    .collect(),
            ),
        };

        Some(Question {
            row,
            text,
            answer,
            answer_text,
            book_title: raw.book_title,
            explanation: raw.explanation,
        })
    }

    pub fn kind(&self) -> QuestionKind {
        match self.answer {
            Answer::Choice(_) => QuestionKind::Choice,
            Answer::Fill(_) => QuestionKind::Fill,
        }
    }

    pub fn is_guess_correct(&self, guess: &str) -> bool {
        match &self.answer {
            Answer::Choice(letter) => guess
                .trim_start()
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase() == *letter)
                .unwrap_or(false),
            Answer::Fill(accepted_answers) => {
                let guess = normalize(guess);
                accepted_answers.iter().any(|answer| *answer == guess)
            }
        }
    }

    /// Selectable options for a choice question. When the text carries no lettered
    /// lines, the answer text becomes the only option.
    pub fn choices(&self) -> Vec<String> {
        match self.answer {
            Answer::Fill(_) => Vec::new(),
            Answer::Choice(_) => {
                let options = parse_options(&self.text);
                if options.is_empty() {
                    vec![self.answer_text.clone()]
                } else {
                    options
                }
            }
        }
    }

    /// Question text without its option lines.
    pub fn stem(&self) -> String {
        self.text
            .lines()
            .filter(|line| !OPTION_LINE_REGEX.is_match(line.trim()))
            .join("\n")
            .trim()
            .to_owned()
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row
    }
}
impl Eq for Question {}

impl Hash for Question {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
    }
}
