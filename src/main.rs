use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use arrsum::input::{parse_tokens, read_text, tokens};
use arrsum::{
    checked_sum, overwrite_inclusive, parse_sequence, wide_sum, AirlinePassenger,
    MealPreferenceCode, NumericSequence, SignedInt, Width,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Sum {
            values,
            file,
            width,
            checked,
            json,
        } => run_sum(&values, file.as_deref(), width, checked, json),
        Commands::Zeros { len } => {
            let seq = NumericSequence::<i32>::try_zeroed(len)?;
            println!("{}", total_of(&seq));
            Ok(())
        }
        Commands::Bounds {
            len,
            progress_every,
        } => run_bounds(len, progress_every),
        Commands::Limits { width } => {
            let widths = width.map_or(Width::ALL.to_vec(), |w| vec![w]);
            for width in widths {
                let range = width.range();
                println!("i{}: [{}, {}]", width.bits(), range.start(), range.end());
            }
            Ok(())
        }
        Commands::Passenger {
            flight,
            name,
            seat,
            meal,
            reseat,
            json,
        } => {
            let mut passenger = AirlinePassenger::new(flight, name, seat, MealPreferenceCode(meal));
            if let Some(seat) = reseat {
                passenger = passenger.with_seat(seat);
            }
            if json {
                println!("{}", to_json(&passenger)?);
            } else {
                print!("{}", passenger);
            }
            Ok(())
        }
    }
}

/// Machine-readable result of `arrsum sum --json`.
#[derive(serde::Serialize)]
struct SumOutput {
    len: usize,
    width: u32,
    sum: i64,
    wrapped: bool,
}

fn run_sum(
    values: &[String],
    file: Option<&Path>,
    width: Width,
    checked: bool,
    json: bool,
) -> Result<()> {
    // Arguments win; otherwise the file, otherwise stdin.
    let text = if values.is_empty() {
        let source = file.map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
        Some(read_text(file).with_context(|| format!("Failed to read {}", source))?)
    } else {
        None
    };

    match width {
        Width::W8 => sum_as::<i8>(values, text.as_deref(), checked, json),
        Width::W16 => sum_as::<i16>(values, text.as_deref(), checked, json),
        Width::W32 => sum_as::<i32>(values, text.as_deref(), checked, json),
        Width::W64 => sum_as::<i64>(values, text.as_deref(), checked, json),
    }
}

fn sum_as<T: SignedInt>(
    args: &[String],
    text: Option<&str>,
    checked: bool,
    json: bool,
) -> Result<()> {
    let seq: NumericSequence<T> = match text {
        Some(text) => parse_sequence(text)?,
        None => parse_tokens(args.iter().flat_map(|a| tokens(a)))?,
    };
    debug!(len = seq.len(), width = T::BITS, checked, "parsed sequence");

    let total = if checked {
        checked_sum(&seq)?
    } else {
        total_of(&seq)
    };
    let wrapped = wide_sum(&seq) != total.to_i128();
    debug!(len = seq.len(), width = T::BITS, %total, wrapped, "summed sequence");

    if json {
        let output = SumOutput {
            len: seq.len(),
            width: T::BITS,
            sum: total.to_i128() as i64,
            wrapped,
        };
        println!("{}", to_json(&output)?);
    } else if display::is_tty() {
        display::print_lines(&display::sum_box(
            seq.len(),
            T::BITS,
            &total.to_string(),
            wrapped,
        ));
    } else {
        println!("{}", total);
    }
    Ok(())
}

fn run_bounds(len: usize, progress_every: usize) -> Result<()> {
    let mut seq = NumericSequence::<i64>::try_filled(len, 1)?;
    // An allocated length is at most isize::MAX, so every index converts.
    let report = overwrite_inclusive(&mut seq, progress_every, |i| {
        i64::try_from(i).unwrap_or(i64::MAX)
    });
    debug!(len, written = report.written, "overwrite finished");
    display::print_lines(&display::bounds_box(len, &report));
    Ok(())
}

#[cfg(feature = "parallel")]
fn total_of<T: SignedInt>(seq: &NumericSequence<T>) -> T {
    arrsum::sum_parallel(seq)
}

#[cfg(not(feature = "parallel"))]
fn total_of<T: SignedInt>(seq: &NumericSequence<T>) -> T {
    seq.sum()
}

#[cfg(feature = "serde_json")]
fn to_json<S: serde::Serialize>(value: &S) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}

#[cfg(not(feature = "serde_json"))]
fn to_json<S: serde::Serialize>(_value: &S) -> Result<String> {
    anyhow::bail!("JSON output requires the `serde_json` feature")
}
