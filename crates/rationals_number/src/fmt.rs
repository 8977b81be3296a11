use crate::Rational;
use std::fmt;

impl fmt::Display for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let (numer, denom) = self.normalize().into_parts();

        if denom.is_one() {
            write!(fmt, "{numer}")
        }

        else {
            write!(fmt, "{numer}/{denom}")
        }
    }
}

// It shows the raw fields, so that un-normalized results are visible while debugging.
impl fmt::Debug for Rational {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "Rational({} / {})", self.numer(), self.denom())
    }
}
