use anyhow::Result;
use log::{info, warn};
use rand::Rng;
use std::sync::Arc;

use crate::gate::AccessGate;
use crate::output::{Message, QuizOutput};
use crate::quiz::definition::{QuestionBank, QuestionKind};
use crate::quiz::{Progress, QuizSession, SessionState, Settings};

#[cfg(test)]
mod tests;

/// Line-driven front-end: one line of user input per call to `handle_line`.
pub struct Console<O, R> {
    gate: AccessGate,
    unlocked: bool,
    bank: Arc<QuestionBank>,
    session: QuizSession,
    rng: R,
    output: O,
}

impl<O: QuizOutput, R: Rng> Console<O, R> {
    pub fn new(
        gate: AccessGate,
        bank: Arc<QuestionBank>,
        settings: Settings,
        rng: R,
        output: O,
    ) -> Self {
        Console {
            gate,
            unlocked: false,
            bank,
            session: QuizSession::new(settings),
            rng,
            output,
        }
    }

    pub fn begin(&mut self) -> Result<()> {
        self.output.say(&Message::PasswordPrompt)
    }

    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        if !self.unlocked {
            return self.unlock(line);
        }
        if self.bank.is_empty() {
            return self.output.say(&Message::NoData);
        }

        match self.session.state() {
            SessionState::NotStarted => self.choose_size(line),
            SessionState::InProgress => {
                if self.session.is_answered() {
                    self.session.advance();
                    self.present()
                } else {
                    self.answer(line)
                }
            }
            SessionState::Complete => {
                if line.trim().eq_ignore_ascii_case("restart") {
                    self.session.restart();
                    self.show_menu()
                } else {
                    self.output.say(&Message::RestartPrompt)
                }
            }
        }
    }

    fn unlock(&mut self, line: &str) -> Result<()> {
        if !self.gate.check(line) {
            return self.output.say(&Message::InvalidPassword);
        }
        info!("Practice test unlocked");
        self.unlocked = true;
        if self.bank.is_empty() {
            self.output.say(&Message::NoData)
        } else {
            self.show_menu()
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        let sizes = self.session.settings().quiz_sizes.clone();
        self.output.say(&Message::SizeMenu(sizes))
    }

    fn choose_size(&mut self, line: &str) -> Result<()> {
        let size = match line.trim().parse::<usize>() {
            Ok(size) if self.session.settings().quiz_sizes.contains(&size) => size,
            _ => return self.show_menu(),
        };
        if let Err(e) = self.session.start(size, &self.bank, &mut self.rng) {
            warn!("Could not start a {} question quiz: {}", size, e);
            self.output.say(&Message::Error(e.to_string()))?;
            return self.show_menu();
        }
        self.present()
    }

    fn present(&mut self) -> Result<()> {
        match self.session.current()? {
            Progress::Question {
                number,
                total,
                question,
            } => {
                let stem = question.stem();
                let prompt = match question.kind() {
                    QuestionKind::Choice => Message::Choices(question.choices()),
                    QuestionKind::Fill => Message::FillPrompt,
                };
                self.output.say(&Message::QuestionBegins {
                    number,
                    total,
                    stem,
                })?;
                self.output.say(&prompt)
            }
            Progress::Complete { .. } => {
                let report = self.session.finalize()?;
                info!(
                    "Quiz complete: {} / {} ({})",
                    report.score,
                    report.total,
                    if report.passed { "pass" } else { "fail" }
                );
                self.output.say(&Message::Results(report))?;
                self.output.say(&Message::RestartPrompt)
            }
        }
    }

    fn answer(&mut self, line: &str) -> Result<()> {
        let outcome = self.session.submit(line)?;
        if outcome.is_correct {
            self.output.say(&Message::GuessCorrect)?;
        } else {
            self.output
                .say(&Message::GuessIncorrect(outcome.correct_answer_text))?;
        }
        self.output.say(&Message::Source {
            book_title: outcome.book_title,
            explanation: outcome.explanation,
        })?;
        self.output.say(&Message::NextPrompt)
    }
}
