//! Command-line arguments
//!
//! Parsed with clap derive macros. [`Args::resolve_input`] turns the flags
//! into the array to trace, so `main` only deals with a ready `Vec<i64>`.

use crate::controls::constants::{DEFAULT_ARRAY, DEFAULT_ARRAY_SIZE, DEFAULT_PLAY_INTERVAL_MS};
use crate::controls::{parse_size, parse_values, ArrayControls, InputError};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "quicktrace")]
#[command(about = "Step through QuickSort one snapshot at a time", long_about = None)]
pub struct Args {
    /// Values to sort, comma or space separated (e.g. "3,1,2")
    #[arg(short, long)]
    pub values: Option<String>,

    /// Trace the built-in demo array
    #[arg(long, conflicts_with = "values")]
    pub demo: bool,

    /// Size of the random array when no values are given (clamped to 7-20)
    #[arg(short, long, default_value_t = DEFAULT_ARRAY_SIZE.to_string())]
    pub size: String,

    /// Seed for random arrays, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between auto-play steps in milliseconds
    #[arg(long, default_value_t = DEFAULT_PLAY_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Print the trace to stdout instead of starting the TUI
    #[arg(long)]
    pub print: bool,
}

impl Args {
    /// Controls configured from `--size` and `--seed`
    pub fn controls(&self) -> ArrayControls {
        let size = parse_size(&self.size);
        match self.seed {
            Some(seed) => ArrayControls::with_seed(size, seed),
            None => ArrayControls::new(size),
        }
    }

    /// Explicit values or the demo array if asked for, otherwise a random
    /// array from `controls`
    pub fn resolve_input(&self, controls: &mut ArrayControls) -> Result<Vec<i64>, InputError> {
        if self.demo {
            return Ok(DEFAULT_ARRAY.to_vec());
        }
        match &self.values {
            Some(text) => parse_values(text),
            None => Ok(controls.generate_random()),
        }
    }

    pub fn play_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}
