use anyhow::Result;
use itertools::Itertools;
use std::io::Write;

use crate::output::{Message, QuizOutput};
use crate::quiz::Report;


const GAUGE_WIDTH: usize = 20;

pub struct TerminalOutput<W> {
    writer: W,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(writer: W) -> Self {
        TerminalOutput { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn gauge(report: &Report) -> String {
    let filled = ((report.percent() / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    let filled = filled.min(GAUGE_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(GAUGE_WIDTH - filled)
    )
}

fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        PasswordPrompt => "🔒 Password Required\nEnter the temporary password:".into(),
        InvalidPassword => "Invalid password.".into(),
        NoData => "No questions could be loaded. Check the question bank file and restart.".into(),
        SizeMenu(sizes) => format!(
            "Distribution One Practice Test\nChoose number of questions ({}):",
            sizes.iter().join(", ")
        ),
        QuestionBegins { number, total, stem } => {
            format!("\nQuestion {} of {}\n{}", number, total, stem)
        }
        Choices(choices) => {
            let mut message = "Select your answer:".to_owned();
            for choice in choices {
                message += &format!("\n  {}", choice);
            }
            message
        }
        FillPrompt => "Type your answer:".into(),
        GuessCorrect => "✅ Correct!".into(),
        GuessIncorrect(answer) => format!("❌ Incorrect. Answer: {}", answer),
        Source {
            book_title,
            explanation,
        } => format!(
            "Source: {} | Summary: {}",
            book_title.as_deref().unwrap_or("-"),
            explanation.as_deref().unwrap_or("-")
        ),
        NextPrompt => "Press Enter for the next question.".into(),
        Results(report) => {
            let verdict = if report.passed {
                "✅ PASS: System Integrity Maintained\n🚒 Fire Hydrant Secured"
            } else {
                "❌ FAIL\nLooks like we are still working on that leak... 🌊"
            };
            format!(
                "\nSystem Pressure: {:.0}% {}\nScore: {} / {}\n{}",
                report.percent(),
                gauge(report),
                report.score,
                report.total,
                verdict
            )
        }
        RestartPrompt => "Type `restart` to take the test again.".into(),
        Error(e) => format!("⚠️ {}", e),
    }
}

impl<W: Write> QuizOutput for TerminalOutput<W> {
    fn say(&mut self, message: &Message) -> Result<()> {
        writeln!(self.writer, "{}", interpret_message(message))?;
        self.writer.flush()?;
        Ok(())
    }
}
