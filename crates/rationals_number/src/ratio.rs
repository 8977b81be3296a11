use crate::error::InvalidArgument;
use hmath::{BigInt, gcd_bi};

pub mod cmp;
pub mod op;

// `denom` is never 0. That's the only thing the constructor checks.
// `denom > 0` and `gcd(|numer|, denom) == 1` hold only after `normalize`:
// `add_rat` and `sub_rat` return normalized values, but `mul_rat`, `div_rat`
// and `neg` return whatever the arithmetic gives. Anything that observes the
// value (cmp, eq, hash, fmt) normalizes first.
#[derive(Clone)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self, InvalidArgument> {
        if denom.is_zero() {
            return Err(InvalidArgument::zero_denominator());
        }

        Ok(Rational { numer, denom })
    }

    // callers must guarantee that `denom` is not 0
    pub(crate) fn new_unchecked(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());

        Rational { numer, denom }
    }

    pub fn zero() -> Self {
        Rational::new_unchecked(BigInt::zero(), BigInt::one())
    }

    pub fn one() -> Self {
        Rational::new_unchecked(BigInt::one(), BigInt::one())
    }

    /// The numerator as stored. It may not be in lowest terms.
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The denominator as stored. It may be negative.
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Lowest terms, positive denominator. The sign lives in the numerator.
    pub fn normalize(&self) -> Self {
        // otherwise `0 * -1` might leave a negative zero behind
        if self.numer.is_zero() {
            return Rational::zero();
        }

        let g = gcd_bi(&self.numer, &self.denom);
        let numer = if self.denom.is_neg() { self.numer.neg() } else { self.numer.clone() };

        Rational::new_unchecked(
            numer.div_bi(&g),
            self.denom.abs().div_bi(&g),
        )
    }

    pub fn is_normalized(&self) -> bool {
        !self.denom.is_neg() && gcd_bi(&self.numer, &self.denom).is_one()
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.normalize().denom.is_one()
    }

    /// `low <= self <= high`
    pub fn in_range(&self, low: &Rational, high: &Rational) -> bool {
        low.leq_rat(self) && self.leq_rat(high)
    }

    pub(crate) fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}
