use super::Rational;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl Rational {
    // Cross-multiplication only works if both denominators are positive.
    // `mul_rat` and `div_rat` may return negative denominators, so both
    // sides are normalized first.
    pub fn cmp_rat(&self, other: &Rational) -> Ordering {
        let lhs = self.normalize();
        let rhs = other.normalize();

        lhs.numer.mul_bi(&rhs.denom).cmp(&rhs.numer.mul_bi(&lhs.denom))
    }

    pub fn eq_rat(&self, other: &Rational) -> bool {
        let lhs = self.normalize();
        let rhs = other.normalize();

        lhs.numer.eq_bi(&rhs.numer) && lhs.denom.eq_bi(&rhs.denom)
    }

    pub fn lt_rat(&self, other: &Rational) -> bool {
        self.cmp_rat(other) == Ordering::Less
    }

    pub fn gt_rat(&self, other: &Rational) -> bool {
        self.cmp_rat(other) == Ordering::Greater
    }

    pub fn leq_rat(&self, other: &Rational) -> bool {
        self.cmp_rat(other) != Ordering::Greater
    }

    pub fn geq_rat(&self, other: &Rational) -> bool {
        self.cmp_rat(other) != Ordering::Less
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Rational) -> bool {
        self.eq_rat(other)
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        self.cmp_rat(other)
    }
}

// It must agree with `eq_rat`: `1/2` and `-2/-4` must land in the same bucket.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();

        normalized.numer.hash(state);
        normalized.denom.hash(state);
    }
}
