use clap::{ArgAction, Parser};
use litter_fib_core::{Generations, Litter, ParamError};

#[derive(Parser, Debug)]
#[command(version, about, allow_negative_numbers = true)]
/// Calculate Fibonacci
pub struct Opts {
    /// Number of generations
    #[arg(value_name = "generations", value_parser = parse_generations)]
    pub generations: Generations,

    /// Size of litter per generation
    #[arg(value_name = "litter", value_parser = parse_litter)]
    pub litter: Litter,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_generations(s: &str) -> Result<Generations, ParamError> {
    s.parse()
}

fn parse_litter(s: &str) -> Result<Litter, ParamError> {
    s.parse()
}


#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};

    fn parse(args: &[&str]) -> Result<Opts, clap::Error> {
        Opts::try_parse_from(std::iter::once("litter-fib").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Opts::command().debug_assert();
    }

    #[test]
    fn accepts_values_in_range() {
        let opts = parse(&["40", "5"]).unwrap();
        assert_eq!(opts.generations.get(), 40);
        assert_eq!(opts.litter.get(), 5);
        assert_eq!(opts.verbose, 0);
    }

    #[test]
    fn rejects_out_of_range_values() {
        for args in [["0", "3"], ["41", "3"], ["5", "0"], ["5", "6"], ["-1", "3"]] {
            let err = parse(&args).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ValueValidation, "args {args:?}");
        }
    }

    #[test]
    fn usage_error_names_value_and_range() {
        let err = parse(&["41", "3"]).unwrap_err();
        assert!(err.to_string().contains("generations \"41\" must be between 1 and 40"));

        let err = parse(&["4", "6"]).unwrap_err();
        assert!(err.to_string().contains("litter \"6\" must be between 1 and 5"));
    }

    #[test]
    fn oversized_integer_is_a_range_error() {
        let err = parse(&["99999999999999999999", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err
            .to_string()
            .contains("generations \"99999999999999999999\" must be between 1 and 40"));
    }

    #[test]
    fn rejects_malformed_integers() {
        let err = parse(&["ten", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("not a valid integer"));
    }

    #[test]
    fn both_positionals_are_required() {
        let err = parse(&["5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn usage_errors_exit_non_zero() {
        let err = parse(&["41", "3"]).unwrap_err();
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn verbose_flag_counts() {
        let opts = parse(&["-vv", "5", "2"]).unwrap();
        assert_eq!(opts.verbose, 2);
    }
}
