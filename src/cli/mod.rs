//! CLI definitions for the arrsum command-line interface.
//!
//! `sum` adds integers from arguments, a file, or stdin. `zeros` sums a
//! zero-filled sequence. `bounds` replays the off-by-one overwrite loop and
//! reports the rejected write. `limits` prints the range of each width, and
//! `passenger` prints a passenger record.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use arrsum::Width;

#[derive(Parser)]
#[command(
    name = "arrsum",
    about = "Bounds-checked fixed-width integer summation",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sum a list of integers, wrapping on overflow
    Sum {
        /// Integers to sum. If empty, read from --file or stdin
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Read whitespace- or comma-separated integers from this file
        #[arg(short, long, conflicts_with = "values")]
        file: Option<PathBuf>,

        /// Element width in bits
        #[arg(short, long, value_enum, default_value = "32")]
        width: Width,

        /// Fail on overflow instead of wrapping
        #[arg(long)]
        checked: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sum a zero-initialized sequence of the given length
    Zeros {
        /// Number of elements
        #[arg(short, long)]
        len: usize,
    },

    /// Overwrite indices 0..=len and show that the last write is refused
    Bounds {
        /// Sequence length
        #[arg(short, long, default_value = "100000")]
        len: usize,

        /// Log progress every this many elements (0 disables)
        #[arg(long, default_value = "10000")]
        progress_every: usize,
    },

    /// Print the [min, max] range of each supported width
    Limits {
        /// Only this width
        #[arg(short, long, value_enum)]
        width: Option<Width>,
    },

    /// Build and print an airline passenger record
    Passenger {
        /// Flight number, e.g. UAL1345
        #[arg(long)]
        flight: String,

        /// Passenger name
        #[arg(long)]
        name: String,

        /// Seat, e.g. 32A
        #[arg(long)]
        seat: String,

        /// Opaque meal preference code
        #[arg(long, allow_negative_numbers = true)]
        meal: i32,

        /// Move the passenger to this seat before printing
        #[arg(long)]
        reseat: Option<String>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}
