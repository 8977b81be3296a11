use crate::{InvalidArgument, Rational};
use hmath::BigInt;

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Rational {
        Rational::new_unchecked(n, BigInt::one())
    }
}

// `BigInt::from(i64)` can't take `i64::MIN`, but `i128` has room for its magnitude.
impl From<i64> for Rational {
    fn from(n: i64) -> Rational {
        Rational::from(BigInt::from(n as i128))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Rational {
        Rational::from(n as i64)
    }
}

/// `1i32.div_by(2)` reads like the fraction it makes. Both sides are promoted
/// to `BigInt` before `Rational::new` checks the denominator.
pub trait DivBy<Rhs = Self> {
    fn div_by(self, denom: Rhs) -> Result<Rational, InvalidArgument>;
}

impl DivBy for BigInt {
    fn div_by(self, denom: BigInt) -> Result<Rational, InvalidArgument> {
        Rational::new(self, denom)
    }
}

impl DivBy for i64 {
    fn div_by(self, denom: i64) -> Result<Rational, InvalidArgument> {
        Rational::new(BigInt::from(self as i128), BigInt::from(denom as i128))
    }
}

impl DivBy for i32 {
    fn div_by(self, denom: i32) -> Result<Rational, InvalidArgument> {
        (self as i64).div_by(denom as i64)
    }
}
