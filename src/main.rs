#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # lumina
//! ## Introduction
//!
//! An essay grading assistant for student writers.
//!
//! Point it at a draft (or pipe one in), pick an education level, and it
//! returns a graded report: an overall score, rubric scores, NLP metrics, and
//! itemized feedback, all produced by an LLM scoring service and rendered in
//! your terminal.
//!
//! ## Configuration
//!
//! Reads a `.env` file when present. `LUMINA_API_KEY` must be set to grade;
//! `LUMINA_ENDPOINT`, `LUMINA_MODEL`, `LUMINA_TEMPERATURE`, and
//! `LUMINA_TOP_P` are optional overrides for the scoring service.

use std::io::Read;

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use lumina::{
    essay::EducationLevel,
    report,
    scoring::{EssayScorer, OpenAiScorer},
    session::{Phase, Session},
};
use tracing::{Level, info, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade an essay and render the report
    Grade {
        /// Path to the essay, `-` for stdin
        file:  String,
        /// Education level to grade against
        level: EducationLevel,
        /// Emit raw result JSON instead of the rendered report
        json:  bool,
    },
    /// List accepted education levels
    Levels,
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses essay file path
    fn file() -> impl Parser<String> {
        positional("FILE").help("Path to the essay text file, or `-` to read from stdin")
    }

    /// parses the education level option
    fn level() -> impl Parser<EducationLevel> {
        long("level")
            .short('l')
            .help("Education level to grade against (see `lumina levels`)")
            .argument::<EducationLevel>("LEVEL")
            .fallback(EducationLevel::default())
            .display_fallback()
    }

    /// parses the raw-JSON output switch
    fn json() -> impl Parser<bool> {
        long("json")
            .help("Print the graded result as JSON instead of the rendered report")
            .switch()
    }

    let grade = construct!(Cmd::Grade {
        file(),
        level(),
        json()
    })
    .to_options()
    .command("grade")
    .help("Grade an essay and render the report");

    let levels = pure(Cmd::Levels)
        .to_options()
        .command("levels")
        .help("List the accepted education levels");

    let cmd = construct!([grade, levels]);

    cmd.to_options().descr("Essay grading assistant").run()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Grade { file, level, json } => grade(&file, level, json).await?,
        Cmd::Levels => levels(),
    };

    Ok(())
}

/// Runs one submission through the session and prints the outcome.
///
/// The draft is validated before the scoring client is built, so a rejected
/// essay reports its own error even when no credential is configured.
async fn grade(file: &str, level: EducationLevel, json: bool) -> Result<()> {
    let essay = read_essay(file)?;

    let mut session = Session::new(level);
    session.set_essay(essay);

    info!(
        "Analyzing {} words ({} characters) at the {} level",
        session.word_count(),
        session.character_count(),
        session.level()
    );

    if session.begin_submit() {
        let scorer = OpenAiScorer::from_config()?;
        let outcome = scorer.score(session.essay(), session.level()).await;
        session.finish_submit(outcome);
    }

    match session.phase() {
        Phase::Reviewing => {
            let result = session.result().expect("reviewing session holds a result");
            if json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                println!("{}", report::render(result));
            }
        }
        Phase::Editing => {
            let error = session.error().expect("failed submission records an error");
            eprintln!("{error}");
            std::process::exit(1);
        }
        // An accepted submission is resolved by finish_submit above.
        Phase::Submitting => unreachable!("scoring call left unresolved"),
    };

    Ok(())
}

/// Reads the essay draft from `path`, with `-` meaning stdin.
fn read_essay(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Could not read the essay from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Could not read essay file `{path}`"))
    }
}

/// Prints the accepted education levels with their command-line tokens.
fn levels() {
    for level in EducationLevel::ALL {
        println!("{:<16} {level}", level.cli_token());
    }
}
