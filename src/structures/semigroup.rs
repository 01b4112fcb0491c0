//! Finite semigroups

use std::fmt::{self, Debug};

use super::{AlgebraicStructure, FiniteMagma};
use crate::error::{AlgebraError, Result};
use crate::functions::FiniteBinaryOperation;
use crate::properties::StructureProperty;
use crate::sets::{Element, FiniteSet};

/// A magma whose operation is associative
#[derive(Clone, PartialEq)]
pub struct FiniteSemigroup<T: Element> {
    magma: FiniteMagma<T>,
}

impl<T: Element> FiniteSemigroup<T> {
    /// Create a semigroup, failing if the operation is not associative
    pub fn new(set: FiniteSet<T>, operation: FiniteBinaryOperation<T>) -> Result<Self> {
        Self::from_magma(FiniteMagma::new(set, operation)?)
    }

    /// Promote a magma, failing if its operation is not associative
    pub fn from_magma(magma: FiniteMagma<T>) -> Result<Self> {
        if !Self::is_semigroup_magma(&magma) {
            return Err(AlgebraError::NotAssociative);
        }
        Ok(FiniteSemigroup { magma })
    }

    /// Whether `set` and `operation` form a semigroup
    pub fn is_semigroup(set: &FiniteSet<T>, operation: &FiniteBinaryOperation<T>) -> bool {
        FiniteMagma::is_magma(set, operation) && operation.is_associative()
    }

    /// Whether a magma is also a semigroup
    pub fn is_semigroup_magma(magma: &FiniteMagma<T>) -> bool {
        magma.operation().is_associative()
    }

    pub fn as_magma(&self) -> &FiniteMagma<T> {
        &self.magma
    }

    /// A band is an idempotent semigroup
    pub fn is_band(&self) -> bool {
        self.magma
            .properties()
            .get_or_compute(StructureProperty::Band, || self.operation().is_idempotent())
    }

    /// A semilattice is a commutative band
    pub fn is_semilattice(&self) -> bool {
        self.magma.properties().get_or_compute(StructureProperty::Semilattice, || {
            self.is_band() && self.operation().is_commutative()
        })
    }

    /// Every element of the form `a ∘ a`
    pub fn set_of_square_elements(&self) -> &FiniteSet<T> {
        self.magma.set_of_square_elements()
    }
}

impl<T: Element> AlgebraicStructure<T> for FiniteSemigroup<T> {
    fn set(&self) -> &FiniteSet<T> {
        self.magma.set()
    }

    fn operation(&self) -> &FiniteBinaryOperation<T> {
        self.magma.operation()
    }
}

impl<T: Element> Debug for FiniteSemigroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteSemigroup")
            .field("set", self.set())
            .field("properties", &self.magma.properties().snapshot())
            .finish()
    }
}
