//! Closed binary operations on a finite set
//!
//! A [`FiniteBinaryOperation`] is a [`FiniteFunction`] from `S × S` to `S`.
//! Alongside the function it keeps a Cayley table: an `n × n` grid of
//! indices into the set's enumeration, so that structural checks (identity,
//! commutativity, associativity, inverses) run on plain index lookups.

use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::OnceLock;

use log::debug;
use ndarray::Array2;

use super::finite_function::FiniteFunction;
use super::map::{MathMap, Mapping};
use crate::error::{AlgebraError, Result};
use crate::properties::{OperationProperty, PropertyCache};
use crate::sets::{Element, FiniteSet};

/// Index-coded multiplication table: entry `(i, j)` is the index of `s_i ∘ s_j`
pub type CayleyTable = Array2<usize>;

/// A map that evaluates pairs through a Cayley table
#[derive(Clone)]
pub struct CayleyMap<T> {
    elements: FiniteSet<T>,
    table: CayleyTable,
}

impl<T: Element> Mapping<(T, T), T> for CayleyMap<T> {
    fn apply(&self, input: &(T, T)) -> Option<T> {
        let i = self.elements.index_of(&input.0)?;
        let j = self.elements.index_of(&input.1)?;
        self.elements.get(self.table[[i, j]]).cloned()
    }
}

impl<T: Debug> Debug for CayleyMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CayleyMap")
            .field("elements", &self.elements)
            .field("table", &self.table)
            .finish()
    }
}

/// A binary operation closed over its codomain
pub struct FiniteBinaryOperation<T> {
    function: FiniteFunction<(T, T), T>,
    table: CayleyTable,
    properties: PropertyCache<OperationProperty>,
    identity: OnceLock<Option<T>>,
}

impl<T: Element> FiniteBinaryOperation<T> {
    /// Create an operation on `codomain`. The domain is always `codomain × codomain`.
    pub fn new(codomain: FiniteSet<T>, relation: MathMap<(T, T), T>) -> Result<Self> {
        let domain = codomain.direct_product(&codomain);
        let function = FiniteFunction::new(domain, codomain, relation)?;
        let table = Self::build_table(&function)?;

        Ok(FiniteBinaryOperation {
            function,
            table,
            properties: PropertyCache::new(),
            identity: OnceLock::new(),
        })
    }

    /// Create an operation seeded with already-known properties
    pub fn with_known_properties(
        codomain: FiniteSet<T>,
        relation: MathMap<(T, T), T>,
        known: &BTreeMap<OperationProperty, bool>,
    ) -> Result<Self> {
        let operation = Self::new(codomain, relation)?;
        operation.properties.merge_absent(known);
        Ok(operation)
    }

    /// Create an operation by tabulating `f` on every pair
    pub fn from_fn<F: Fn(&T, &T) -> T>(codomain: FiniteSet<T>, f: F) -> Result<Self> {
        let pairs = codomain.direct_product(&codomain);
        let relation = MathMap::tabulate(&pairs, |(a, b)| f(a, b));
        Self::new(codomain, relation)
    }

    /// Create an operation from an index-coded Cayley table over `codomain`'s enumeration
    pub fn from_cayley_table(codomain: FiniteSet<T>, table: &CayleyTable) -> Result<Self> {
        let n = codomain.cardinality();
        if table.dim() != (n, n) {
            return Err(AlgebraError::DomainMismatch(format!(
                "a Cayley table for {} elements must be {}x{}, got {:?}",
                n,
                n,
                n,
                table.dim()
            )));
        }
        if let Some(&bad) = table.iter().find(|&&k| k >= n) {
            return Err(AlgebraError::IndexOutOfRange { index: bad, len: n });
        }

        let relation = MathMap::new(CayleyMap {
            elements: codomain.clone(),
            table: table.clone(),
        });
        Self::new(codomain, relation)
    }

    fn build_table(function: &FiniteFunction<(T, T), T>) -> Result<CayleyTable> {
        let codomain = function.codomain();
        let n = codomain.cardinality();
        let mut table = Array2::zeros((n, n));
        for (i, a) in codomain.iter().enumerate() {
            for (j, b) in codomain.iter().enumerate() {
                let output = function.evaluate(&(a.clone(), b.clone()))?;
                table[[i, j]] = codomain.index_of(&output).ok_or_else(|| AlgebraError::OutsideCodomain {
                    input: format!("{:?}", (a, b)),
                    output: format!("{:?}", output),
                })?;
            }
        }
        Ok(table)
    }

    /// The set the operation is closed over
    pub fn codomain(&self) -> &FiniteSet<T> {
        self.function.codomain()
    }

    /// The underlying function `S × S → S`
    pub fn function(&self) -> &FiniteFunction<(T, T), T> {
        &self.function
    }

    pub fn relation(&self) -> &MathMap<(T, T), T> {
        self.function.relation()
    }

    /// The cached property flags
    pub fn properties(&self) -> &PropertyCache<OperationProperty> {
        &self.properties
    }

    /// The index-coded multiplication table
    pub fn cayley_table(&self) -> &CayleyTable {
        &self.table
    }

    /// The operation as a map backed by its Cayley table
    pub fn cayley_map(&self) -> MathMap<(T, T), T> {
        MathMap::new(CayleyMap {
            elements: self.codomain().clone(),
            table: self.table.clone(),
        })
    }

    fn index(&self, element: &T) -> Result<usize> {
        self.codomain()
            .index_of(element)
            .ok_or_else(|| AlgebraError::not_in_set(element))
    }

    /// `a ∘ b`
    pub fn apply(&self, a: &T, b: &T) -> Result<T> {
        let k = self.table[[self.index(a)?, self.index(b)?]];
        Ok(self.codomain()[k].clone())
    }

    /// `a ∘ b` for a pair
    pub fn apply_pair(&self, pair: &(T, T)) -> Result<T> {
        self.apply(&pair.0, &pair.1)
    }

    fn identity_index(&self) -> Option<usize> {
        let n = self.codomain().cardinality();
        (0..n).find(|&e| (0..n).all(|a| self.table[[e, a]] == a && self.table[[a, e]] == a))
    }

    /// The element `e` with `a ∘ e = e ∘ a = a` for every `a`, if there is one
    pub fn identity(&self) -> Option<&T> {
        self.identity
            .get_or_init(|| {
                let found = self.identity_index().map(|e| self.codomain()[e].clone());
                debug!("identity search over {} elements: {:?}", self.codomain().cardinality(), found);
                found
            })
            .as_ref()
    }

    pub fn has_identity(&self) -> bool {
        self.properties
            .get_or_compute(OperationProperty::Identity, || self.identity().is_some())
    }

    /// The first element `e` with `e ∘ a = a` for every `a`, if there is one.
    /// A left identity need not be unique, nor a right identity.
    pub fn left_identity(&self) -> Option<&T> {
        let n = self.codomain().cardinality();
        (0..n)
            .find(|&e| (0..n).all(|a| self.table[[e, a]] == a))
            .map(|e| &self.codomain()[e])
    }

    pub fn has_left_identity(&self) -> bool {
        self.left_identity().is_some()
    }

    /// The two-sided inverse of `a`.
    ///
    /// Fails if `a` is not in the set; `None` if there is no identity or `a` has no inverse.
    pub fn inverse_element(&self, a: &T) -> Result<Option<T>> {
        let i = self.index(a)?;
        Ok(self.inverse_index(i).map(|k| self.codomain()[k].clone()))
    }

    fn inverse_index(&self, i: usize) -> Option<usize> {
        let e = self.identity().and_then(|e| self.codomain().index_of(e))?;
        (0..self.codomain().cardinality()).find(|&b| self.table[[i, b]] == e && self.table[[b, i]] == e)
    }

    /// `a ∘ a = a` for every `a`
    pub fn is_idempotent(&self) -> bool {
        self.properties.get_or_compute(OperationProperty::Idempotent, || {
            (0..self.codomain().cardinality()).all(|i| self.table[[i, i]] == i)
        })
    }

    /// `a ∘ b = b ∘ a` for every pair
    pub fn is_commutative(&self) -> bool {
        self.properties
            .get_or_compute(OperationProperty::Commutative, || self.table == self.table.t())
    }

    /// `a ∘ (b ∘ c) = (a ∘ b) ∘ c` for every triple
    pub fn is_associative(&self) -> bool {
        self.properties.get_or_compute(OperationProperty::Associative, || {
            let n = self.codomain().cardinality();
            let t = &self.table;
            (0..n).all(|a| {
                (0..n).all(|b| {
                    let ab = t[[a, b]];
                    (0..n).all(|c| t[[ab, c]] == t[[a, t[[b, c]]]])
                })
            })
        })
    }

    /// Every element has a two-sided inverse
    pub fn has_inverses(&self) -> bool {
        self.properties.get_or_compute(OperationProperty::Inverses, || {
            self.has_identity() && (0..self.codomain().cardinality()).all(|i| self.inverse_index(i).is_some())
        })
    }

    /// The operation restricted to `new_set`.
    ///
    /// Fails if `new_set` is not a subset of the codomain or is not closed under
    /// the operation. Associativity, commutativity and idempotence carry over
    /// when they are already known.
    pub fn restriction(&self, new_set: &FiniteSet<T>) -> Result<FiniteBinaryOperation<T>> {
        if !new_set.is_subset_of(self.codomain()) {
            return Err(AlgebraError::NotASubset { of: "operation's codomain" });
        }

        let restricted = FiniteBinaryOperation::new(new_set.clone(), self.cayley_map())?;
        for property in [
            OperationProperty::Associative,
            OperationProperty::Commutative,
            OperationProperty::Idempotent,
        ] {
            if self.properties.is_known_true(property) {
                restricted.properties.insert_if_absent(property, true);
            }
        }
        Ok(restricted)
    }
}

impl<T: Element> Clone for FiniteBinaryOperation<T> {
    fn clone(&self) -> Self {
        FiniteBinaryOperation {
            function: self.function.clone(),
            table: self.table.clone(),
            properties: self.properties.clone(),
            identity: self.identity.clone(),
        }
    }
}

impl<T: Element> PartialEq for FiniteBinaryOperation<T> {
    fn eq(&self, other: &Self) -> bool {
        self.function == other.function
    }
}

impl<T: Element> Debug for FiniteBinaryOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteBinaryOperation")
            .field("codomain", self.function.codomain())
            .field("table", &self.table)
            .finish()
    }
}
