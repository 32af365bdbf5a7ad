//! Interactive terminal flag quiz.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use flagquiz::config::Config;
use flagquiz::directory::GeonamesProvider;
use flagquiz::quiz::flag_url;
use flagquiz::score::ScoreStore;
use flagquiz::session::QuizSession;

/// Guess the country behind the flag.
#[derive(Debug, Parser)]
#[command(name = "flagquiz", version, about)]
struct Args {
    /// Path to the configuration file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the question generator, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let provider = GeonamesProvider::new(&config.provider)?;
    let store = ScoreStore::open(ScoreStore::default_path())?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = QuizSession::new(provider, store, rng, config.quiz.clone());

    println!("Flag quiz: type the number of your answer, or q to quit.");
    session.start().await;

    let mut lines = io::stdin().lock().lines();
    loop {
        // Snapshot before the session is borrowed mutably below.
        let state = session.state().clone();
        if let Some(error) = &state.error {
            println!("{error}");
            break;
        }
        let Some(round) = state.round else {
            break;
        };

        println!();
        println!("Score: {}", state.score);
        println!("Which country is this flag? {}", flag_url(round.flag_key()));
        for (slot, option) in round.options().iter().enumerate() {
            println!("  {}. {}", slot + 1, option.name);
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        let input = input.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }
        let choice = match input.parse::<usize>() {
            Ok(choice) => choice,
            Err(_) => {
                println!(
                    "Please enter a number between 1 and {}.",
                    round.options().len()
                );
                continue;
            }
        };
        let Some(country) = choice
            .checked_sub(1)
            .and_then(|slot| round.options().get(slot))
            .cloned()
        else {
            println!("No option number {choice}.");
            continue;
        };

        session.select(country);
        let verdict = session.confirm().await;
        if let Some(feedback) = &verdict.feedback {
            println!("{feedback}");
        }
    }

    println!("Final score: {}", session.state().score);
    Ok(())
}

/// Terminal logging, quiet by default. `RUST_LOG` overrides the filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
