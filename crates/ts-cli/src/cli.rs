// Command-line argument parsing for the sampling simulator.

use std::path::PathBuf;

use clap::Parser;

use ts_session::demo::DEFAULT_PROMPT;

/// Simulate how temperature and nucleus (top-p) sampling pick the next token.
///
/// Uses a built-in Vietnamese demo vocabulary unless `--vocab` points at a
/// JSON file of the form {"tokens": [{"token": "a", "score": -1.0}, ...]}.
#[derive(Parser, Debug)]
#[command(name = "ts-sim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text the generated tokens are appended to
    #[arg(default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Sampling temperature (values <= 0 are clamped to 0.01)
    #[arg(short, long, env = "TS_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f64,

    /// Nucleus sampling threshold
    #[arg(short = 'p', long, env = "TS_TOP_P", default_value_t = 0.9)]
    pub top_p: f64,

    /// Number of tokens to generate
    #[arg(short = 'n', long, default_value_t = 5)]
    pub steps: usize,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON vocabulary file replacing the demo vocabulary
    #[arg(long)]
    pub vocab: Option<PathBuf>,

    /// Temperatures applied after generation as parameter-only changes
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub sweep_temperature: Vec<f64>,

    /// Width of the longest chart bar, in characters
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Only print the final text
    #[arg(short, long)]
    pub quiet: bool,
}
