use crate::{InvalidArgument, Rational};
use hmath::BigInt;
use log::debug;
use smallvec::SmallVec;
use std::str::FromStr;

impl Rational {
    /// `<int>` or `<int>/<int>`, where `<int>` is `[+-]?[0-9]+`.
    /// Whitespace is not allowed anywhere.
    pub fn from_string(s: &str) -> Result<Self, InvalidArgument> {
        let tokens: SmallVec<[&str; 2]> = s.split('/').collect();

        match &tokens[..] {
            [numer] => Rational::new(parse_integer(numer)?, BigInt::one()),
            [numer, denom] => Rational::new(
                parse_integer(numer)?,
                parse_integer(denom)?,
            ),
            _ => {
                debug!("rejected fraction with {} separators: {s:?}", tokens.len() - 1);
                Err(InvalidArgument::malformed_fraction(s))
            },
        }
    }
}

impl FromStr for Rational {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, InvalidArgument> {
        Rational::from_string(s)
    }
}

fn parse_integer(token: &str) -> Result<BigInt, InvalidArgument> {
    let (is_neg, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        debug!("rejected integer token: {token:?}");
        return Err(InvalidArgument::invalid_integer(token));
    }

    // `BigInt::from_string` reads a leading `0` as a radix prefix (`0x`, `0b`, ...)
    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    match BigInt::from_string(digits) {
        Ok(n) if is_neg && !n.is_zero() => Ok(n.neg()),
        Ok(n) => Ok(n),
        Err(_) => {
            debug!("rejected integer token: {token:?}");
            Err(InvalidArgument::invalid_integer(token))
        },
    }
}
