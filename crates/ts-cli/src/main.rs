//! `ts-sim` - Drive the token sampling simulation from the command line.
//!
//! Usage:
//!   ts-sim                                  # demo vocabulary, 5 tokens
//!   ts-sim -t 0.2 -p 0.5 -n 10 "Hôm nay tôi"
//!   ts-sim --vocab vocab.json --seed 42 --sweep-temperature 0.1,1,5

mod chart;
mod cli;
mod vocab_file;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use ts_session::{demo, SimulationSession};

use crate::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Vocabulary scores and token draws share one stream.
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let vocab = match &cli.vocab {
        Some(path) => vocab_file::load(path)?,
        None => demo::demo_vocabulary(&mut rng).context("failed to build demo vocabulary")?,
    };
    info!(tokens = vocab.len(), "vocabulary ready");

    let mut session = SimulationSession::with_rng(vocab, cli.prompt.clone(), rng);
    session.set_temperature(cli.temperature);
    session.set_top_p(cli.top_p);

    for step in 1..=cli.steps {
        let snapshot = session.generate()?;
        if !cli.quiet {
            println!("step {step}");
            print!("{}", chart::render(&snapshot, cli.width));
            println!("{}\n", snapshot.prompt_text);
        }
    }

    for &temperature in &cli.sweep_temperature {
        if let Some(snapshot) = session.update_parameters(temperature, cli.top_p)? {
            if !cli.quiet {
                print!("{}", chart::render(&snapshot, cli.width));
                println!();
            }
        }
    }

    println!("{}", session.prompt_text());
    Ok(())
}
