use anyhow::Result;
use log::{error, info, warn};
use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::citations::Citations;
use crate::commands::Command;
use crate::output::terminal::TerminalOutput;
use crate::output::QuizOutput;
use crate::quiz::settings::Settings;
use crate::quiz::Quiz;
use crate::store::{FileWeightStore, MemoryWeightStore, WeightStore};

mod citations;
mod commands;
mod output;
mod quiz;
mod store;


const DEFAULT_QUESTIONS_PATH: &str = "q.csv";

fn open_store(settings: &Settings) -> Box<dyn WeightStore> {
    let store = match &settings.weights_path {
        Some(path) => Ok(FileWeightStore::new(path.clone())),
        None => FileWeightStore::in_data_dir(),
    };
    match store {
        Ok(store) => {
            info!("Weights are stored in {:?}", store.path());
            Box::new(store)
        }
        Err(e) => {
            warn!("Weights will not survive this session: {:#}", e);
            Box::new(MemoryWeightStore::new())
        }
    }
}

fn open_citations(settings: &Settings) -> Citations {
    let path = match &settings.citations_path {
        Some(path) => path,
        None => return Citations::default(),
    };
    match Citations::open(path) {
        Ok(citations) => {
            if citations.is_empty() {
                warn!("No citations found in {:?}", path);
            }
            citations
        }
        Err(e) => {
            warn!("Could not load citations: {:#}", e);
            Citations::default()
        }
    }
}

/// Feeds input lines to the quiz until `q` or end of input. Lines that are not
/// valid UTF-8 are decoded lossily and reported like any other bad command.
fn play<O, R>(quiz: &mut Quiz<O>, mut input: R) -> Result<()>
where
    O: QuizOutput + Clone,
    R: BufRead,
{
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buffer);
        let command = match commands::parse(&line, quiz.controls()) {
            Ok(command) => command,
            Err(e) => {
                println!("{:#}", e);
                continue;
            }
        };
        let result = match command {
            Command::Quit => break,
            Command::Submit(slots) => quiz.submit(&slots).map(|_| ()),
            Command::Continue => quiz.proceed(),
        };
        if let Err(e) = result {
            println!("{:#}", e);
        }
    }
    Ok(())
}

fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    let source = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_QUESTIONS_PATH));

    let store = open_store(&settings);
    let citations = open_citations(&settings);
    let mut quiz = Quiz::new(settings, store, citations, TerminalOutput::new());
    quiz.begin(&source)?;

    let stdin = io::stdin();
    let played = play(&mut quiz, stdin.lock());
    quiz.end();
    played
}

fn main() {
    pretty_env_logger::init();
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
