//! Literals are variables paired with a (boolean) polarity.
//!
//! A literal is packed into a single integer: the positive literal of variable *v*
//! is `2v` and the negative literal is `2v + 1`.
//! With this encoding negation and the polarity check are single bit operations,
//! and a literal is directly an index into per-literal arrays such as the
//! valuation and the watch lists.
//!
//! In DIMACS input and output an integer is used instead, with the sign of the
//! integer indicating the polarity and magnitudes starting from one.
//!
//! ```rust
//! # use heron_sat::structures::literal::Literal;
//! let literal = Literal::positive(79);
//!
//! assert!(literal.is_positive());
//! assert_eq!(literal.variable(), 79);
//! assert_eq!(literal.negate().variable(), 79);
//! assert_eq!(literal, literal.negate().negate());
//! assert_eq!(literal.as_dimacs(), 80);
//! ```

use crate::structures::Variable;

/// A variable paired with a polarity, packed into a single integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(u32);

impl Literal {
    /// The literal asserting `variable` holds.
    pub fn positive(variable: Variable) -> Self {
        Literal(variable << 1)
    }

    /// The literal asserting `variable` does not hold.
    pub fn negative(variable: Variable) -> Self {
        Literal((variable << 1) | 1)
    }

    /// The literal of `variable` with the given polarity.
    pub fn new(variable: Variable, polarity: bool) -> Self {
        match polarity {
            true => Self::positive(variable),
            false => Self::negative(variable),
        }
    }

    /// The variable of the literal.
    pub fn variable(self) -> Variable {
        self.0 >> 1
    }

    /// True if the literal asserts its variable holds.
    pub fn is_positive(self) -> bool {
        self.0 & 1 == 0
    }

    /// The literal of the same variable with the opposite polarity.
    pub fn negate(self) -> Self {
        Literal(self.0 ^ 1)
    }

    /// The literal as an index into a per-literal array of length twice the
    /// variable count.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The literal of a (non-zero) DIMACS integer.
    ///
    /// DIMACS variables count from one, so `-3` is the negative literal of
    /// variable `2`.
    pub fn from_dimacs(int: i64) -> Self {
        Self::new((int.unsigned_abs() - 1) as Variable, int > 0)
    }

    /// The DIMACS integer of the literal.
    pub fn as_dimacs(self) -> i64 {
        let magnitude = (self.variable() + 1) as i64;
        match self.is_positive() {
            true => magnitude,
            false => -magnitude,
        }
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_dimacs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing() {
        let p = Literal::positive(0);
        let not_p = Literal::negative(0);

        assert_eq!(p.index(), 0);
        assert_eq!(not_p.index(), 1);
        assert_eq!(p.negate(), not_p);
        assert_eq!(-not_p, p);
        assert!(!not_p.is_positive());
    }

    #[test]
    fn dimacs() {
        assert_eq!(Literal::from_dimacs(1), Literal::positive(0));
        assert_eq!(Literal::from_dimacs(-4), Literal::negative(3));
        assert_eq!(Literal::from_dimacs(-4).as_dimacs(), -4);
        assert_eq!(Literal::negative(6).to_string(), "-7");
    }
}
