use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::{debug, info, warn};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod question;

pub use question::{Question, QuestionKind, RawQuestion};


lazy_static! {
    static ref BANK_CACHE: RwLock<HashMap<PathBuf, Arc<QuestionBank>>> =
        RwLock::new(HashMap::new());
}

/// Every row read from a question bank, and the subset of rows that can be asked.
#[derive(Debug, Default)]
pub struct QuestionBank {
    row_count: usize,
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn open(source: &Path) -> Result<QuestionBank> {
        let file = File::open(source)
            .with_context(|| format!("could not open question bank {}", source.display()))?;
        QuestionBank::from_reader(file)
            .with_context(|| format!("could not parse question bank {}", source.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuestionBank> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers: csv::StringRecord = csv_reader.headers()?.iter().map(str::trim).collect();
        csv_reader.set_headers(headers);

        let mut rows = Vec::new();
        for (index, row) in csv_reader.deserialize().enumerate() {
            let raw_question: RawQuestion =
                row.with_context(|| format!("invalid row {}", index + 1))?;
            rows.push(raw_question);
        }

        Ok(QuestionBank::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<RawQuestion>) -> QuestionBank {
        let row_count = rows.len();
        let questions: Vec<Question> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(row, raw_question)| {
                let question = Question::from_raw(row, raw_question);
                if question.is_none() {
                    debug!("Skipping incomplete question bank row {}", row + 1);
                }
                question
            })
            .collect();
        QuestionBank {
            row_count,
            questions,
        }
    }

    /// Like `open`, but a missing or unreadable bank comes back empty.
    pub fn load(source: &Path) -> QuestionBank {
        match QuestionBank::open(source) {
            Ok(bank) => {
                info!(
                    "Loaded {} questions ({} rows) from {}",
                    bank.questions.len(),
                    bank.row_count,
                    source.display()
                );
                bank
            }
            Err(e) => {
                warn!("{:#}", e);
                QuestionBank::default()
            }
        }
    }

    /// Loads each bank at most once per process.
    pub fn cached(source: &Path) -> Arc<QuestionBank> {
        if let Some(bank) = BANK_CACHE.read().get(source) {
            return Arc::clone(bank);
        }
        let bank = Arc::new(QuestionBank::load(source));
        let mut cache = BANK_CACHE.write();
        Arc::clone(cache.entry(source.to_path_buf()).or_insert(bank))
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn pool(&self, kind: QuestionKind) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.kind() == kind).collect()
    }
}
