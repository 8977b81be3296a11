use std::fmt;

/// The only error this crate returns. Zero denominators, unparsable
/// tokens and division by zero all end up here; `kind` only tells
/// the renderer what happened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidArgument {
    kind: InvalidArgumentKind,
}

impl InvalidArgument {
    pub fn zero_denominator() -> Self {
        InvalidArgument {
            kind: InvalidArgumentKind::ZeroDenominator,
        }
    }

    pub fn division_by_zero() -> Self {
        InvalidArgument {
            kind: InvalidArgumentKind::DivisionByZero,
        }
    }

    pub fn invalid_integer(token: &str) -> Self {
        InvalidArgument {
            kind: InvalidArgumentKind::InvalidInteger(token.to_string()),
        }
    }

    pub fn malformed_fraction(text: &str) -> Self {
        InvalidArgument {
            kind: InvalidArgumentKind::MalformedFraction(text.to_string()),
        }
    }

    pub fn kind(&self) -> &InvalidArgumentKind {
        &self.kind
    }

    pub fn render_error(&self) -> String {
        match &self.kind {
            InvalidArgumentKind::ZeroDenominator => String::from("denominator cannot be zero"),
            InvalidArgumentKind::DivisionByZero => String::from("division by zero"),
            InvalidArgumentKind::InvalidInteger(token) => format!("`{token}` is not an integer"),
            InvalidArgumentKind::MalformedFraction(text) => format!(
                "`{text}` is not a fraction: expected `<int>` or `<int>/<int>`"
            ),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidArgumentKind {
    ZeroDenominator,
    DivisionByZero,
    InvalidInteger(String),

    // more than one `/`
    MalformedFraction(String),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "invalid argument: {}", self.render_error())
    }
}

impl std::error::Error for InvalidArgument {}
