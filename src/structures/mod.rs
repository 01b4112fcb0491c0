//! The algebraic-structure ladder
//!
//! A magma is a set with a closed binary operation. Each rung of the ladder
//! wraps the one below it and validates one more law at construction:
//!
//! - [`FiniteMagma`]: the operation's codomain is the set
//! - [`FiniteSemigroup`]: the operation is associative
//! - [`FiniteMonoid`]: the operation has an identity element
//! - [`FiniteGroup`]: every element has an inverse
//!
//! A structure that exists has passed all of its checks; there is no way to
//! build one in an invalid state.

pub mod magma;
pub mod semigroup;
pub mod monoid;
pub mod group;
pub mod subgroups;
pub mod group_properties;

pub use magma::FiniteMagma;
pub use semigroup::FiniteSemigroup;
pub use monoid::FiniteMonoid;
pub use group::FiniteGroup;

use crate::error::Result;
use crate::functions::FiniteBinaryOperation;
use crate::sets::{Element, FiniteSet};

/// Shared view of every rung of the ladder: a carrier set and its operation
pub trait AlgebraicStructure<T: Element> {
    /// The carrier set
    fn set(&self) -> &FiniteSet<T>;

    /// The closed binary operation
    fn operation(&self) -> &FiniteBinaryOperation<T>;

    /// `a ∘ b`
    fn apply_operation(&self, a: &T, b: &T) -> Result<T> {
        self.operation().apply(a, b)
    }

    /// Number of elements in the carrier set
    fn cardinality(&self) -> usize {
        self.set().cardinality()
    }

    fn contains(&self, element: &T) -> bool {
        self.set().contains(element)
    }
}

/// The positive divisors of `n` in ascending order. `find_factors(0)` is empty.
pub fn find_factors(n: usize) -> Vec<usize> {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1;
    while d * d <= n {
        if n % d == 0 {
            small.push(d);
            if d * d != n {
                large.push(n / d);
            }
        }
        d += 1;
    }
    small.extend(large.into_iter().rev());
    small
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_factors() {
        assert_eq!(find_factors(1), vec![1]);
        assert_eq!(find_factors(12), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(find_factors(16), vec![1, 2, 4, 8, 16]);
        assert_eq!(find_factors(13), vec![1, 13]);
        assert!(find_factors(0).is_empty());
    }
}
