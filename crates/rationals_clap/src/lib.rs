#![deny(unused_imports)]
//! Command Line Argument Parser
//!
//! Hand-written so that its errors look like the rest of the driver's errors.

use hmath::BigInt;
use log::debug;
use rationals_config::{
    MAX_VERBOSITY,
    MIN_VERBOSITY,
    RunOption,
    SpecialOutput,
};
use std::collections::HashSet;

mod dist;
mod error;
mod flag;
mod session;


pub use error::{ClapError, ClapErrorKind};
pub use flag::{Flag, FLAGS};
pub use session::ClapSession;

pub fn parse_cli_args() -> ClapSession {
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    parse_cli(&args)
}

/// `args` must not contain the name of the binary.
pub fn parse_cli(args: &[String]) -> ClapSession {
    let mut errors = vec![];
    let mut given_flags = HashSet::new();
    let mut special_output: Option<(Flag, SpecialOutput)> = None;
    let mut result = RunOption::default();
    let mut index = 0;

    while let Some(token) = args.get(index) {
        index += 1;

        if !flag::looks_like_flag(token) {
            result.expression.push(token.to_string());
            continue;
        }

        let flag = match Flag::from_token(token) {
            Some(flag) => flag,
            None => {
                debug!("unknown flag: {token:?}");
                errors.push(ClapError::invalid_flag(token));
                continue;
            },
        };

        if !given_flags.insert(flag) {
            errors.push(ClapError::same_flag_multiple_times(flag));

            // don't let the duplicate consume the next token as an expression
            if flag.takes_arg() {
                index += 1;
            }

            continue;
        }

        match flag {
            Flag::Help | Flag::Version => {
                let output = if let Flag::Help = flag {
                    SpecialOutput::HelpMessage
                } else {
                    SpecialOutput::VersionInfo
                };

                match special_output {
                    Some((prev_flag, _)) => {
                        errors.push(ClapError::incompatible_flags(prev_flag, flag));
                    },
                    None => {
                        special_output = Some((flag, output));
                    },
                }
            },
            Flag::Verbose => match args.get(index) {
                Some(arg) => {
                    index += 1;

                    match parse_verbosity(arg) {
                        Ok(verbosity) => {
                            result.verbosity = verbosity;
                        },
                        Err(e) => {
                            errors.push(e);
                        },
                    }
                },
                None => {
                    errors.push(ClapError::no_arg(flag));
                },
            },
        }
    }

    if !errors.is_empty() {
        return ClapSession::with_errors(errors);
    }

    if let Some((_, output)) = special_output {
        result.do_not_run_and_do_this = Some(output);
    }

    ClapSession::with_result(result)
}

fn parse_verbosity(arg: &str) -> Result<u8, ClapError> {
    let digits = arg.strip_prefix('-').unwrap_or(arg);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClapError::invalid_argument(Flag::Verbose, arg));
    }

    let is_neg = digits.len() < arg.len();

    // `BigInt::from_string` reads a leading `0` as a radix prefix
    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let given = match BigInt::from_string(digits) {
        Ok(n) if is_neg && !n.is_zero() => n.neg(),
        Ok(n) => n,
        Err(_) => {
            return Err(ClapError::invalid_argument(Flag::Verbose, arg));
        },
    };
    let start = BigInt::from(MIN_VERBOSITY as i64);
    let end = BigInt::from(MAX_VERBOSITY as i64 + 1);

    if given.lt_bi(&start) || !given.lt_bi(&end) {
        return Err(ClapError::integer_range_error(start, end, given));
    }

    // it's in range, so it fits in a u8
    match arg.parse::<i64>() {
        Ok(n) => Ok(n as u8),
        Err(_) => Err(ClapError::invalid_argument(Flag::Verbose, arg)),
    }
}

pub fn help_message() -> String {
    format!(
"Usage: rationals [OPTIONS] [EXPRESSION]

Without an expression, it runs the built-in demonstration.

Expressions:
    <x>                             Print <x> in lowest terms
    <x> <op> <y>                    <op> is one of + - * / == != < <= > >=
    neg <x>                         Negate <x>
    <x> in <low>..<high>            Check whether low <= x <= high
    Numbers are written as `<int>` or `<int>/<int>`, e.g. `-117/1098`.

Examples:
    rationals 1/2 + 1/3
    rationals '1/2' '*' '2/3' --verbose 2
    rationals 1/2 in 1/3..2/3

Options:
    -h, --help                      Display this message
    -v, --version                   Display version info
    --verbose <N>                   {MIN_VERBOSITY}: results only, 1: `<expr> = <result>` (default),
                                    {MAX_VERBOSITY}: also shows the un-normalized result
")
}
