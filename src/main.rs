//! Ripple - switching regulator output ripple calculator
//!
//! Prints the peak-to-peak output ripple voltage of the LM3670 design point.
//!
//! # Usage
//!
//! ```bash
//! ripple
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use ripple_calc::{output_ripple, RegulatorParams};

/// Output ripple voltage calculator for the LM3670 buck regulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    // stdout carries only the result
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let params = RegulatorParams::lm3670();
    tracing::debug!(?params, "design point");

    run(&params, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Evaluate `params`, writing the result line to `out` or the error to `err`.
fn run(params: &RegulatorParams, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    match output_ripple(params) {
        Ok(v_pp) => match writeln!(out, "{v_pp}") {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                let _ = writeln!(err, "error: failed to write result: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            ExitCode::FAILURE
        }
    }
}
