//! Finite magmas

use std::fmt::{self, Debug};
use std::sync::OnceLock;

use super::AlgebraicStructure;
use crate::error::{AlgebraError, Result};
use crate::functions::FiniteBinaryOperation;
use crate::properties::{PropertyCache, StructureProperty};
use crate::sets::{Element, FiniteSet};

/// A finite set together with a binary operation closed over it
pub struct FiniteMagma<T> {
    set: FiniteSet<T>,
    operation: FiniteBinaryOperation<T>,
    properties: PropertyCache<StructureProperty>,
    squares: OnceLock<FiniteSet<T>>,
}

impl<T: Element> FiniteMagma<T> {
    /// Create a magma.
    ///
    /// The operation's domain is `codomain × codomain` by construction, so only
    /// the codomain needs to be checked against the set.
    pub fn new(set: FiniteSet<T>, operation: FiniteBinaryOperation<T>) -> Result<Self> {
        if !Self::is_magma(&set, &operation) {
            return Err(AlgebraError::CodomainMismatch(
                "the codomain of the operation is not the set of the magma".to_string(),
            ));
        }

        Ok(FiniteMagma {
            set,
            operation,
            properties: PropertyCache::new(),
            squares: OnceLock::new(),
        })
    }

    /// Whether `set` and `operation` form a magma
    pub fn is_magma(set: &FiniteSet<T>, operation: &FiniteBinaryOperation<T>) -> bool {
        operation.codomain() == set
    }

    /// The cached structure properties (band, semilattice)
    pub fn properties(&self) -> &PropertyCache<StructureProperty> {
        &self.properties
    }

    /// Every element of the form `a ∘ a`
    pub fn set_of_square_elements(&self) -> &FiniteSet<T> {
        self.squares.get_or_init(|| {
            let table = self.operation.cayley_table();
            let codomain = self.operation.codomain();
            (0..codomain.cardinality())
                .map(|i| codomain[table[[i, i]]].clone())
                .collect()
        })
    }
}

impl<T: Element> AlgebraicStructure<T> for FiniteMagma<T> {
    fn set(&self) -> &FiniteSet<T> {
        &self.set
    }

    fn operation(&self) -> &FiniteBinaryOperation<T> {
        &self.operation
    }
}

impl<T: Element> Clone for FiniteMagma<T> {
    fn clone(&self) -> Self {
        FiniteMagma {
            set: self.set.clone(),
            operation: self.operation.clone(),
            properties: self.properties.clone(),
            squares: self.squares.clone(),
        }
    }
}

/// Magmas are equal when their sets are equal and their operations agree
impl<T: Element> PartialEq for FiniteMagma<T> {
    fn eq(&self, other: &Self) -> bool {
        self.set == other.set && self.operation == other.operation
    }
}

impl<T: Element> Debug for FiniteMagma<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteMagma")
            .field("set", &self.set)
            .field("properties", &self.properties.snapshot())
            .finish()
    }
}
