use anyhow::{Context, Result};
use directories_next::BaseDirs;
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use crate::quiz;


const BANK_FILE_NAME: &str = "quiz_bank.csv";
const BANK_VAR: &str = "PRACTICE_TEST_BANK";
const PASSWORDS_VAR: &str = "PRACTICE_TEST_PASSWORDS";
const SEED_VAR: &str = "PRACTICE_TEST_SEED";

#[derive(Debug)]
pub struct Settings {
    pub bank_path: PathBuf,
    pub passwords: HashSet<String>,
    pub seed: Option<u64>,
    pub quiz: quiz::Settings,
}

fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("practice-test");
    Ok(dir)
}

fn default_bank_path() -> PathBuf {
    let local = PathBuf::from(BANK_FILE_NAME);
    if local.exists() {
        return local;
    }
    match get_data_dir() {
        Ok(mut dir) => {
            dir.push(BANK_FILE_NAME);
            dir
        }
        Err(_) => local,
    }
}

fn parse_passwords(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        Settings::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bank_path = var(BANK_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_bank_path);
        let passwords = var(PASSWORDS_VAR)
            .map(|list| parse_passwords(&list))
            .unwrap_or_default();
        let seed = match var(SEED_VAR) {
            Some(seed) => Some(
                seed.trim()
                    .parse::<u64>()
                    .with_context(|| format!("{} must be an unsigned integer", SEED_VAR))?,
            ),
            None => None,
        };

        Ok(Settings {
            bank_path,
            passwords,
            seed,
            quiz: Default::default(),
        })
    }
}
