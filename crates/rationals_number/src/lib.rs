#![deny(unused_imports)]
//! Exact fractions over `hmath::BigInt`.
//!
//! A `Rational` is built cheaply and normalized on demand. Comparison,
//! equality, hashing and `Display` always look at the normalized form, so
//! `2i64.div_by(4)` and `(-1i64).div_by(-2)` are the same key in
//! a `HashMap` even though they store different fields.

mod convert;
mod error;
mod fmt;
mod parse;
mod ratio;


pub use convert::DivBy;
pub use error::{InvalidArgument, InvalidArgumentKind};
pub use hmath::{BigInt, gcd_bi};
pub use ratio::Rational;
