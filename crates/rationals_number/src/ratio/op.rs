use super::Rational;
use crate::error::InvalidArgument;
use std::ops::{Add, Div, Mul, Sub};

impl Rational {
    /// Always normalized.
    pub fn add_rat(&self, other: &Rational) -> Rational {
        let lhs_numer = self.numer.mul_bi(&other.denom);
        let rhs_numer = other.numer.mul_bi(&self.denom);

        Rational::new_unchecked(
            lhs_numer.add_bi(&rhs_numer),
            self.denom.mul_bi(&other.denom),
        ).normalize()
    }

    /// Always normalized.
    pub fn sub_rat(&self, other: &Rational) -> Rational {
        let lhs_numer = self.numer.mul_bi(&other.denom);
        let rhs_numer = other.numer.mul_bi(&self.denom);

        Rational::new_unchecked(
            lhs_numer.sub_bi(&rhs_numer),
            self.denom.mul_bi(&other.denom),
        ).normalize()
    }

    /// It doesn't normalize the result.
    pub fn mul_rat(&self, other: &Rational) -> Rational {
        Rational::new_unchecked(
            self.numer.mul_bi(&other.numer),
            self.denom.mul_bi(&other.denom),
        )
    }

    /// It doesn't normalize the result.
    pub fn div_rat(&self, other: &Rational) -> Result<Rational, InvalidArgument> {
        if other.numer.is_zero() {
            return Err(InvalidArgument::division_by_zero());
        }

        Ok(Rational::new_unchecked(
            self.numer.mul_bi(&other.denom),
            self.denom.mul_bi(&other.numer),
        ))
    }

    /// Only the numerator flips. The denominator keeps whatever sign it had.
    pub fn neg(&self) -> Rational {
        Rational::new_unchecked(self.numer.neg(), self.denom.clone())
    }
}

// `Neg` is not imported: `BigInt::neg` has to resolve to the inherent method.
// the operators below are thin wrappers around the methods above

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        self.add_rat(rhs)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        self.add_rat(&rhs)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        self.sub_rat(rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self.sub_rat(&rhs)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        self.mul_rat(rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        self.mul_rat(&rhs)
    }
}

// dividing by zero has no value, so `/` is fallible
impl Div for &Rational {
    type Output = Result<Rational, InvalidArgument>;

    fn div(self, rhs: &Rational) -> Result<Rational, InvalidArgument> {
        self.div_rat(rhs)
    }
}

impl Div for Rational {
    type Output = Result<Rational, InvalidArgument>;

    fn div(self, rhs: Rational) -> Result<Rational, InvalidArgument> {
        self.div_rat(&rhs)
    }
}

impl std::ops::Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::neg(self)
    }
}

impl std::ops::Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::neg(&self)
    }
}
