//! Finite monoids and homomorphisms between them

use std::fmt::{self, Debug};

use super::{AlgebraicStructure, FiniteSemigroup};
use crate::error::{AlgebraError, Result};
use crate::functions::{FiniteBinaryOperation, FiniteFunction};
use crate::sets::{Element, FiniteSet};

/// A semigroup with an identity element
#[derive(Clone, PartialEq)]
pub struct FiniteMonoid<T: Element> {
    semigroup: FiniteSemigroup<T>,
    identity: T,
}

impl<T: Element> FiniteMonoid<T> {
    /// Create a monoid, failing if the operation is not associative or has no identity
    pub fn new(set: FiniteSet<T>, operation: FiniteBinaryOperation<T>) -> Result<Self> {
        Self::from_semigroup(FiniteSemigroup::new(set, operation)?)
    }

    /// Promote a semigroup, failing if its operation has no identity
    pub fn from_semigroup(semigroup: FiniteSemigroup<T>) -> Result<Self> {
        let identity = semigroup
            .operation()
            .identity()
            .cloned()
            .ok_or(AlgebraError::NoIdentity)?;
        Ok(FiniteMonoid { semigroup, identity })
    }

    /// Whether `set` and `operation` form a monoid
    pub fn is_monoid(set: &FiniteSet<T>, operation: &FiniteBinaryOperation<T>) -> bool {
        FiniteSemigroup::is_semigroup(set, operation) && operation.has_identity()
    }

    /// Whether a semigroup is also a monoid
    pub fn is_monoid_semigroup(semigroup: &FiniteSemigroup<T>) -> bool {
        semigroup.operation().has_identity()
    }

    /// The identity element
    pub fn identity(&self) -> &T {
        &self.identity
    }

    pub fn as_semigroup(&self) -> &FiniteSemigroup<T> {
        &self.semigroup
    }

    /// Whether `f` is a homomorphism from this monoid into `codomain`:
    /// `f(a ∘ b) = f(a) ∘′ f(b)` for every pair and `f(1) = 1′`.
    ///
    /// Fails if `f` is not a function from this monoid's set to `codomain`'s set.
    pub fn is_homomorphism<G: Element>(&self, codomain: &FiniteMonoid<G>, f: &FiniteFunction<T, G>) -> Result<bool> {
        self.check_signature(codomain, f)?;

        for a in self.set().iter() {
            let fa = f.apply(a)?;
            for b in self.set().iter() {
                let lhs = f.apply(&self.apply_operation(a, b)?)?;
                let rhs = codomain.apply_operation(&fa, &f.apply(b)?)?;
                if lhs != rhs {
                    return Ok(false);
                }
            }
        }

        Ok(f.apply(&self.identity)? == *codomain.identity())
    }

    /// Whether `f` is a bijective homomorphism into `codomain`
    pub fn is_isomorphism<G: Element>(&self, codomain: &FiniteMonoid<G>, f: &FiniteFunction<T, G>) -> Result<bool> {
        self.check_signature(codomain, f)?;
        Ok(f.is_bijective() && self.is_homomorphism(codomain, f)?)
    }

    fn check_signature<G: Element>(&self, codomain: &FiniteMonoid<G>, f: &FiniteFunction<T, G>) -> Result<()> {
        if f.domain() != self.set() {
            return Err(AlgebraError::DomainMismatch(
                "the domain of the function is not the set of this monoid".to_string(),
            ));
        }
        if f.codomain() != codomain.set() {
            return Err(AlgebraError::CodomainMismatch(
                "the codomain of the function is not the set of the target monoid".to_string(),
            ));
        }
        Ok(())
    }
}

impl<T: Element> AlgebraicStructure<T> for FiniteMonoid<T> {
    fn set(&self) -> &FiniteSet<T> {
        self.semigroup.set()
    }

    fn operation(&self) -> &FiniteBinaryOperation<T> {
        self.semigroup.operation()
    }
}

impl<T: Element> Debug for FiniteMonoid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteMonoid")
            .field("set", self.set())
            .field("identity", &self.identity)
            .finish()
    }
}
