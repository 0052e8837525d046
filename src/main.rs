use anyhow::{Context, Result};
use clap::Parser;
use fuzzy::config::{Algorithm, load_config};
use fuzzy::scorer::{NucleoScorer, Scorer, has_upper};
use fuzzy::sources::{CandidateSource, json};
use fuzzy::ui::TerminalDisplay;
use fuzzy::{FuzzyMatcher, Outcome, Session, SessionOptions, signals};
use log::{info, warn};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the user cancels.
const CANCELLED: u8 = 130;

#[derive(Parser, Debug)]
#[command(author, version, about = "Select a line from stdin with fuzzy search", long_about = None)]
struct Args {
    /// Initial query
    query: Vec<String>,

    /// Print scores alongside each line
    #[arg(short, long)]
    verbose: bool,

    /// Print the match without asking when the query leaves exactly one
    #[arg(short = '1', long)]
    select_one: bool,

    /// Hide lines scoring below this value
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    hide_less_than: Option<f64>,

    /// Scoring algorithm
    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,

    /// Read a JSON object of {"printed": "searched"} instead of lines
    #[arg(long)]
    json: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    // 1. Load Config
    let config = load_config(args.config.as_deref()).context("failed to load config")?;
    let query = args.query.join(" ");

    // 2. Read candidates
    let stdin = io::stdin().lock();
    let candidates = if args.json {
        let map = json::read_map(stdin).context("failed to read JSON from stdin")?;
        CandidateSource::from_map(map).load()?
    } else {
        CandidateSource::Lines(stdin)
            .load()
            .context("failed to read lines from stdin")?
    };

    // 3. Build matcher; an uppercase letter in the query makes it case sensitive
    let case_sensitive = has_upper(&query);
    let algorithm = args.algorithm.unwrap_or(config.matching.algorithm);
    let scorer: Box<dyn Scorer> = match algorithm {
        Algorithm::SmithWaterman => Box::new(config.scorer.smith_waterman(case_sensitive)),
        Algorithm::Nucleo => Box::new(NucleoScorer::new(case_sensitive)),
    };
    info!(
        "{} candidates, algorithm={:?}, case_sensitive={}",
        candidates.len(),
        algorithm,
        case_sensitive
    );

    let matcher = FuzzyMatcher::new(scorer).with_hide_less_than(config.matching.hide_less_than);
    let options = SessionOptions {
        verbose: args.verbose,
        return_one_result: args.select_one || config.matching.return_one_result,
        hide_less_than: args.hide_less_than,
    };

    if let Err(e) = signals::install() {
        warn!("failed to install signal handlers: {}", e);
    }

    // 4. Run the session
    let session = Session::new(&candidates, matcher, options, &query);
    let mut display = TerminalDisplay::new(config.theme);
    let outcome = session
        .run(&mut display)
        .context("interactive session failed")?;

    match outcome {
        Outcome::Selected(value) | Outcome::AutoResolved(value) => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", value)?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Cancelled => Ok(ExitCode::from(CANCELLED)),
    }
}
