use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use litter_fib_core::Evaluator;
use tracing::info;

mod args;
mod logging;

use args::Opts;

/// Evaluate the recurrence for already-validated options.
fn run(opts: &Opts) -> u64 {
    Evaluator::new(opts.litter).evaluate(opts.generations)
}

/// Write the result as a single line; this is the only thing the binary prints to stdout.
fn write_result(out: &mut impl Write, value: u64) -> io::Result<()> {
    writeln!(out, "{value}")
}

fn main() -> anyhow::Result<()> {
    // clap prints usage errors to stderr and exits non-zero before anything is evaluated
    let opts = Opts::parse();
    logging::init(opts.verbose);

    info!(generations = %opts.generations, litter = %opts.litter, "calculating");
    let value = run(&opts);

    let mut stdout = io::stdout().lock();
    write_result(&mut stdout, value).context("failed to write result to stdout")?;
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(generations: &str, litter: &str) -> u64 {
        let opts = Opts::try_parse_from(["litter-fib", generations, litter]).unwrap();
        run(&opts)
    }

    #[test]
    fn prints_expected_values() {
        assert_eq!(run_args("1", "1"), 1);
        assert_eq!(run_args("2", "5"), 1);
        assert_eq!(run_args("5", "1"), 5);
        assert_eq!(run_args("10", "1"), 55);
        assert_eq!(run_args("5", "2"), 11);
    }

    #[test]
    fn largest_input() {
        assert_eq!(run_args("40", "5"), 148_277_527_396_903_091);
    }

    #[test]
    fn result_is_one_line_on_stdout() {
        let mut out = Vec::new();
        write_result(&mut out, run_args("10", "1")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "55\n");
    }

    #[test]
    fn usage_error_writes_nothing() {
        let mut out = Vec::new();
        let parsed = Opts::try_parse_from(["litter-fib", "41", "3"]);
        assert!(parsed.is_err());
        if let Ok(opts) = parsed {
            write_result(&mut out, run(&opts)).unwrap();
        }
        assert!(out.is_empty());
    }
}
