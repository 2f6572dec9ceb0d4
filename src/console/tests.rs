use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::output::mock::MockQuizOutput;
use crate::quiz::definition::RawQuestion;
use crate::quiz::Report;

const PASSWORD: &str = "hydrant";

struct ContextBuilder {
    fill_count: usize,
    choice_count: usize,
    quiz_sizes: Vec<usize>,
}

impl ContextBuilder {
    fn new() -> Self {
        ContextBuilder {
            fill_count: 10,
            choice_count: 30,
            quiz_sizes: vec![5],
        }
    }

    fn questions(mut self, fill_count: usize, choice_count: usize) -> Self {
        self.fill_count = fill_count;
        self.choice_count = choice_count;
        self
    }

    fn build(self) -> Context {
        let mut rows = Vec::new();
        for i in 0..self.fill_count {
            rows.push(RawQuestion {
                question_text: Some(format!("What do you do to hydrant {}?", i)),
                correct_letter: None,
                answer_text: Some("Flush, flush hydrant".to_owned()),
                book_title: Some("Water Distribution".to_owned()),
                explanation: Some("Hydrants chapter".to_owned()),
            });
        }
        for i in 0..self.choice_count {
            rows.push(RawQuestion {
                question_text: Some(format!(
                    "Which valve isolates hydrant {}?\na. Check valve\nb. Gate valve",
                    i
                )),
                correct_letter: Some("b".to_owned()),
                answer_text: Some("Gate valves isolate hydrants".to_owned()),
                book_title: Some("Water Distribution".to_owned()),
                explanation: None,
            });
        }

        let output = MockQuizOutput::new();
        let gate = AccessGate::new(vec![PASSWORD.to_owned()].into_iter().collect());
        let settings = Settings {
            quiz_sizes: self.quiz_sizes,
            ..Default::default()
        };
        let console = Console::new(
            gate,
            Arc::new(QuestionBank::from_rows(rows)),
            settings,
            StdRng::seed_from_u64(5),
            output.clone(),
        );
        Context { console, output }
    }
}

struct Context {
    console: Console<MockQuizOutput, StdRng>,
    output: MockQuizOutput,
}

impl Context {
    fn send(&mut self, line: &str) -> Vec<Message> {
        self.console.handle_line(line).unwrap();
        self.output.flush()
    }

    fn unlock_and_start(&mut self) -> Vec<Message> {
        self.send(PASSWORD);
        self.send("5")
    }
}

fn correct_answer_for(prompt: &Message) -> &'static str {
    match prompt {
        Message::Choices(_) => "b. Gate valve",
        Message::FillPrompt => "flush hydrant",
        other => panic!("Expected an answer prompt, got {:?}", other),
    }
}

#[test]
fn asks_for_password() {
    let mut ctx = ContextBuilder::new().build();
    ctx.console.begin().unwrap();
    assert_eq!(ctx.output.flush(), [Message::PasswordPrompt]);
}

#[test]
fn wrong_password_keeps_quiz_locked() {
    let mut ctx = ContextBuilder::new().build();
    assert_eq!(ctx.send("valve"), [Message::InvalidPassword]);
    assert_eq!(ctx.send("5"), [Message::InvalidPassword]);
}

#[test]
fn password_unlocks_size_menu() {
    let mut ctx = ContextBuilder::new().build();
    assert_eq!(ctx.send(PASSWORD), [Message::SizeMenu(vec![5])]);
}

#[test]
fn empty_bank_cannot_be_used() {
    let mut ctx = ContextBuilder::new().questions(0, 0).build();
    assert_eq!(ctx.send(PASSWORD), [Message::NoData]);
    assert_eq!(ctx.send("5"), [Message::NoData]);
}

#[test]
fn unknown_size_shows_menu_again() {
    let mut ctx = ContextBuilder::new().build();
    ctx.send(PASSWORD);
    assert_eq!(ctx.send("25"), [Message::SizeMenu(vec![5])]);
    assert_eq!(ctx.send("five"), [Message::SizeMenu(vec![5])]);
}

#[test]
fn reports_start_failures() {
    let mut ctx = ContextBuilder::new().questions(1, 2).build();
    ctx.send(PASSWORD);
    let messages = ctx.send("5");
    assert_eq!(messages.len(), 2);
    match &messages[0] {
        Message::Error(e) => assert!(e.contains("only 2 are available")),
        other => panic!("Expected an error, got {:?}", other),
    }
    assert_eq!(messages[1], Message::SizeMenu(vec![5]));
}

#[test]
fn presents_first_question() {
    let mut ctx = ContextBuilder::new().build();
    let messages = ctx.unlock_and_start();
    assert_eq!(messages.len(), 2);
    match &messages[0] {
        Message::QuestionBegins {
            number,
            total,
            stem,
        } => {
            assert_eq!(*number, 1);
            assert_eq!(*total, 5);
            assert!(!stem.contains("a. Check valve"));
        }
        other => panic!("Expected a question, got {:?}", other),
    }
    match &messages[1] {
        Message::Choices(choices) => assert_eq!(
            choices,
            &vec!["a. Check valve".to_owned(), "b. Gate valve".to_owned()]
        ),
        Message::FillPrompt => (),
        other => panic!("Expected an answer prompt, got {:?}", other),
    }
}

#[test]
fn wrong_answer_reveals_correct_answer() {
    let mut ctx = ContextBuilder::new().build();
    let messages = ctx.unlock_and_start();
    let expected_answer = match messages[1] {
        Message::Choices(_) => "Gate valves isolate hydrants",
        _ => "Flush, flush hydrant",
    };
    let messages = ctx.send("zzz");
    assert_eq!(
        messages[0],
        Message::GuessIncorrect(expected_answer.to_owned())
    );
    match &messages[1] {
        Message::Source { book_title, .. } => {
            assert_eq!(book_title.as_deref(), Some("Water Distribution"))
        }
        other => panic!("Expected the source, got {:?}", other),
    }
    assert_eq!(messages[2], Message::NextPrompt);
}

#[test]
fn full_quiz_walkthrough() {
    let mut ctx = ContextBuilder::new().build();
    let mut messages = ctx.unlock_and_start();
    for _ in 0..5 {
        let answer = correct_answer_for(&messages[1]);
        let outcome = ctx.send(answer);
        assert_eq!(outcome[0], Message::GuessCorrect);
        messages = ctx.send("");
    }
    assert_eq!(
        messages,
        [
            Message::Results(Report::new(5, 5, 70)),
            Message::RestartPrompt
        ]
    );

    assert_eq!(ctx.send("again"), [Message::RestartPrompt]);
    assert_eq!(ctx.send("restart"), [Message::SizeMenu(vec![5])]);
    let messages = ctx.send("5");
    assert!(matches!(
        messages[0],
        Message::QuestionBegins { number: 1, .. }
    ));
}

#[test]
fn failing_quiz_reports_failure() {
    let mut ctx = ContextBuilder::new().build();
    ctx.unlock_and_start();
    let mut messages = Vec::new();
    for _ in 0..5 {
        ctx.send("wrong");
        messages = ctx.send("");
    }
    assert!(ctx.output.flush().is_empty());
    match &messages[0] {
        Message::Results(report) => {
            assert_eq!(report.score, 0);
            assert!(!report.passed);
        }
        other => panic!("Expected results, got {:?}", other),
    }
}

#[test]
fn output_records_every_message() {
    let mut ctx = ContextBuilder::new().build();
    ctx.console.handle_line(PASSWORD).unwrap();
    assert!(ctx.output.contains_message(&Message::SizeMenu(vec![5])));
}
