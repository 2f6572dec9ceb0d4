use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead};

mod console;
mod gate;
mod output;
mod quiz;
mod settings;

use crate::console::Console;
use crate::gate::AccessGate;
use crate::output::terminal::TerminalOutput;
use crate::quiz::definition::QuestionBank;
use crate::settings::Settings;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    let settings = Settings::from_env().context("invalid configuration")?;
    info!("Using question bank {}", settings.bank_path.display());
    let bank = QuestionBank::cached(&settings.bank_path);

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let gate = AccessGate::new(settings.passwords);
    let output = TerminalOutput::new(io::stdout());
    let mut console = Console::new(gate, bank, settings.quiz, rng, output);

    console.begin()?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("quit") {
            break;
        }
        console.handle_line(&line)?;
    }

    info!("Goodbye");
    Ok(())
}
