//! Finite groups: construction, element arithmetic and closures
//!
//! Subgroup machinery lives in [`subgroups`](super::subgroups) and the
//! boolean group properties in [`group_properties`](super::group_properties);
//! both extend [`FiniteGroup`] with further `impl` blocks.

use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::OnceLock;

use log::{debug, trace, warn};

use super::{find_factors, AlgebraicStructure, FiniteMonoid};
use crate::config::GroupConfig;
use crate::error::{AlgebraError, Result};
use crate::functions::{FiniteBinaryOperation, FiniteFunction};
use crate::properties::{GroupProperty, PropertyCache};
use crate::sets::{Element, FiniteSet};

/// A monoid in which every element has an inverse.
///
/// Group-theoretic properties are cached per instance and never change once
/// known. Derived groups (centers, subgroups, quotients) are new instances,
/// seeded with whatever the parent already knows that is guaranteed to carry
/// over.
#[derive(Clone)]
pub struct FiniteGroup<T: Element> {
    monoid: FiniteMonoid<T>,
    pub(super) properties: PropertyCache<GroupProperty>,
    pub(super) config: GroupConfig,
    pub(super) subgroups: OnceLock<FiniteSet<FiniteGroup<T>>>,
    pub(super) normal_subgroups: OnceLock<FiniteSet<FiniteGroup<T>>>,
}

impl<T: Element> FiniteGroup<T> {
    /// Create a group, failing unless the operation is associative with an identity and inverses
    pub fn new(set: FiniteSet<T>, operation: FiniteBinaryOperation<T>) -> Result<Self> {
        Self::from_monoid(FiniteMonoid::new(set, operation)?)
    }

    /// Create a group and seed its property cache with externally known facts
    pub fn with_known_properties(
        set: FiniteSet<T>,
        operation: FiniteBinaryOperation<T>,
        known: &BTreeMap<GroupProperty, bool>,
    ) -> Result<Self> {
        let group = Self::new(set, operation)?;
        group.properties.merge_absent(known);
        Ok(group)
    }

    /// Promote a monoid, failing if some element has no inverse
    pub fn from_monoid(monoid: FiniteMonoid<T>) -> Result<Self> {
        if !Self::is_group_monoid(&monoid) {
            return Err(AlgebraError::NoInverses);
        }

        Ok(FiniteGroup {
            monoid,
            properties: PropertyCache::new(),
            config: GroupConfig::default(),
            subgroups: OnceLock::new(),
            normal_subgroups: OnceLock::new(),
        })
    }

    /// The group with a single element
    pub fn trivial_on(identity: T) -> Result<Self> {
        let set = FiniteSet::singleton(identity.clone());
        let operation = FiniteBinaryOperation::from_fn(set.clone(), move |_, _| identity.clone())?;
        Self::new(set, operation)
    }

    /// The trivial group on `T::default()`
    pub fn trivial() -> Result<Self>
    where
        T: Default,
    {
        Self::trivial_on(T::default())
    }

    /// Replace the configuration used by the expensive algorithms
    pub fn with_config(mut self, config: GroupConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// The cached group properties
    pub fn properties(&self) -> &PropertyCache<GroupProperty> {
        &self.properties
    }

    /// Whether `set` and `operation` form a group
    pub fn is_group(set: &FiniteSet<T>, operation: &FiniteBinaryOperation<T>) -> bool {
        FiniteMonoid::is_monoid(set, operation) && operation.has_inverses()
    }

    /// Whether a monoid is also a group
    pub fn is_group_monoid(monoid: &FiniteMonoid<T>) -> bool {
        monoid.operation().has_inverses()
    }

    pub fn as_monoid(&self) -> &FiniteMonoid<T> {
        &self.monoid
    }

    pub fn identity(&self) -> &T {
        self.monoid.identity()
    }

    /// Number of elements
    pub fn order(&self) -> usize {
        self.set().cardinality()
    }

    pub(crate) fn ensure_member(&self, g: &T) -> Result<()> {
        if self.set().contains(g) {
            Ok(())
        } else {
            Err(AlgebraError::not_in_set(g))
        }
    }

    /// `a ∘ b`
    pub fn operate(&self, a: &T, b: &T) -> Result<T> {
        self.operation().apply(a, b)
    }

    /// The inverse of `g`
    pub fn inverse(&self, g: &T) -> Result<T> {
        self.operation()
            .inverse_element(g)?
            .ok_or(AlgebraError::NoInverses)
    }

    /// `g^k` by square-and-multiply; negative exponents use the inverse
    pub fn power(&self, g: &T, k: i64) -> Result<T> {
        self.ensure_member(g)?;
        let mut base = if k < 0 { self.inverse(g)? } else { g.clone() };
        let mut exponent = k.unsigned_abs();
        let mut result = self.identity().clone();

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = self.operate(&result, &base)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = self.operate(&base, &base)?;
            }
        }
        Ok(result)
    }

    /// The order of `g`: the least `k > 0` with `g^k = e`.
    ///
    /// Only divisors of the group order are tried as candidate exponents.
    pub fn element_order(&self, g: &T) -> Result<usize> {
        self.ensure_member(g)?;
        if g == self.identity() {
            return Ok(1);
        }

        for d in find_factors(self.order()).into_iter().skip(1) {
            if self.power(g, d as i64)? == *self.identity() {
                return Ok(d);
            }
        }
        Ok(self.order())
    }

    /// Whether `g` alone generates the whole group
    pub fn generates_group(&self, g: &T) -> Result<bool> {
        Ok(self.element_order(g)? == self.order())
    }

    /// The commutator `[g, h] = g⁻¹ ∘ h⁻¹ ∘ g ∘ h`
    pub fn commutator(&self, g: &T, h: &T) -> Result<T> {
        self.ensure_member(g)?;
        self.ensure_member(h)?;
        let g_inv = self.inverse(g)?;
        let h_inv = self.inverse(h)?;
        let left = self.operate(&g_inv, &h_inv)?;
        let left = self.operate(&left, g)?;
        self.operate(&left, h)
    }

    /// `x ∘ g ∘ x⁻¹`
    pub fn conjugate(&self, g: &T, x: &T) -> Result<T> {
        let xg = self.operate(x, g)?;
        self.operate(&xg, &self.inverse(x)?)
    }

    /// `{ x ∘ g ∘ x⁻¹ : x ∈ G }`
    pub fn conjugacy_class(&self, g: &T) -> Result<FiniteSet<T>> {
        self.ensure_member(g)?;
        let mut class = FiniteSet::new();
        for x in self.set().iter() {
            class.add_element(self.conjugate(g, x)?);
        }
        Ok(class)
    }

    /// The function sending every element to its conjugacy class
    pub fn set_of_all_conjugacy_classes(&self) -> Result<FiniteFunction<T, FiniteSet<T>>> {
        let mut pairs = Vec::with_capacity(self.order());
        let mut classes = FiniteSet::new();
        for g in self.set().iter() {
            let class = self.conjugacy_class(g)?;
            classes.add_element(class.clone());
            pairs.push((g.clone(), class));
        }
        FiniteFunction::from_pairs(self.set().clone(), classes, pairs)
    }

    /// Whether some `x` satisfies `x ∘ a ∘ x⁻¹ = b`
    pub fn is_conjugate(&self, a: &T, b: &T) -> Result<bool> {
        self.ensure_member(a)?;
        self.ensure_member(b)?;
        for x in self.set().iter() {
            if self.conjugate(a, x)? == *b {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The elements commuting with every element of the group
    pub fn center(&self) -> Result<FiniteSet<T>> {
        let mut center = FiniteSet::new();
        'candidates: for g in self.set().iter() {
            for h in self.set().iter() {
                if self.commutator(g, h)? != *self.identity() {
                    continue 'candidates;
                }
            }
            center.add_element_without_check(g.clone());
        }
        Ok(center)
    }

    /// The center as a group. It is always abelian.
    pub fn center_group(&self) -> Result<FiniteGroup<T>> {
        let mut known = self.subgroup_closed_properties();
        known.insert(GroupProperty::Abelian, true);
        self.subgroup_from_set(self.center()?, &known)
    }

    /// The smallest superset of `generators` closed under the group operation.
    ///
    /// `None` when the closure does not settle within the configured iteration cap.
    pub fn generated_set(&self, generators: &FiniteSet<T>) -> Result<Option<FiniteSet<T>>> {
        for g in generators.iter() {
            self.ensure_member(g)?;
        }
        generated_set(generators, self.config.closure_iteration_cap, |a, b| self.operate(a, b))
    }

    /// The subgroup generated by `generators`; `None` if the closure does not converge
    pub fn generated_subgroup(&self, generators: &FiniteSet<T>) -> Result<Option<FiniteGroup<T>>> {
        let mut seeds = generators.clone();
        seeds.add_element(self.identity().clone());
        match self.generated_set(&seeds)? {
            Some(set) => Ok(Some(self.subgroup_from_set(set, &self.subgroup_closed_properties())?)),
            None => Ok(None),
        }
    }

    /// The subgroup generated by all commutators; `None` if the closure does not converge
    pub fn derived_subgroup(&self) -> Result<Option<FiniteGroup<T>>> {
        self.generated_subgroup(&self.commutators_between(self.set(), self.set())?)
    }

    /// Every commutator `[x, y]` with `x ∈ left`, `y ∈ right`
    pub(crate) fn commutators_between(&self, left: &FiniteSet<T>, right: &FiniteSet<T>) -> Result<FiniteSet<T>> {
        let mut commutators = FiniteSet::new();
        for x in left.iter() {
            for y in right.iter() {
                commutators.add_element(self.commutator(x, y)?);
            }
        }
        Ok(commutators)
    }

    /// The subgroup generated by `[left, right]`, as a set
    pub(crate) fn commutator_subgroup_set(&self, left: &FiniteSet<T>, right: &FiniteSet<T>) -> Result<FiniteSet<T>> {
        let mut generators = self.commutators_between(left, right)?;
        generators.add_element(self.identity().clone());
        self.generated_set(&generators)?
            .ok_or(AlgebraError::ClosureDidNotConverge {
                cap: self.config.closure_iteration_cap,
            })
    }

    /// Wrap a subset closed under the operation as a subgroup sharing this group's configuration
    pub(crate) fn subgroup_from_set(
        &self,
        set: FiniteSet<T>,
        known: &BTreeMap<GroupProperty, bool>,
    ) -> Result<FiniteGroup<T>> {
        let operation = self.operation().restriction(&set)?;
        self.subgroup_from_parts(set, operation, known)
    }

    pub(crate) fn subgroup_from_parts(
        &self,
        set: FiniteSet<T>,
        operation: FiniteBinaryOperation<T>,
        known: &BTreeMap<GroupProperty, bool>,
    ) -> Result<FiniteGroup<T>> {
        let subgroup = FiniteGroup::with_known_properties(set, operation, known)?;
        Ok(subgroup.with_config(self.config))
    }
}

/// Close `generators` under `map` by adding every pairwise product until nothing new appears.
///
/// Gives up and returns `None` after `cap` rounds.
pub fn generated_set<T, F>(generators: &FiniteSet<T>, cap: usize, map: F) -> Result<Option<FiniteSet<T>>>
where
    T: Element,
    F: Fn(&T, &T) -> Result<T>,
{
    let mut closure = generators.clone();
    for round in 0..cap {
        let mut fresh = FiniteSet::new();
        for a in closure.iter() {
            for b in closure.iter() {
                let product = map(a, b)?;
                if !closure.contains(&product) {
                    fresh.add_element(product);
                }
            }
        }

        if fresh.is_empty() {
            debug!("closure settled at {} elements after {} rounds", closure.cardinality(), round);
            return Ok(Some(closure));
        }
        trace!("closure round {}: {} new elements", round, fresh.cardinality());
        for element in fresh {
            closure.add_element_without_check(element);
        }
    }

    warn!("closure did not converge within {} rounds", cap);
    Ok(None)
}

impl<T: Element> AlgebraicStructure<T> for FiniteGroup<T> {
    fn set(&self) -> &FiniteSet<T> {
        self.monoid.set()
    }

    fn operation(&self) -> &FiniteBinaryOperation<T> {
        self.monoid.operation()
    }
}

/// Groups are equal when their sets are equal and their operations agree
impl<T: Element> PartialEq for FiniteGroup<T> {
    fn eq(&self, other: &Self) -> bool {
        self.monoid == other.monoid
    }
}

impl<T: Element> Debug for FiniteGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteGroup")
            .field("set", self.set())
            .field("identity", self.identity())
            .field("properties", &self.properties.snapshot())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cyclic(n: i64) -> FiniteGroup<i64> {
        let set: FiniteSet<i64> = (0..n).collect();
        let op = FiniteBinaryOperation::from_fn(set.clone(), |a, b| (a + b) % n).unwrap();
        FiniteGroup::new(set, op).unwrap()
    }

    #[test]
    fn test_monoid_without_inverses_is_rejected() {
        let set: FiniteSet<i64> = (0..3).collect();
        let op = FiniteBinaryOperation::from_fn(set.clone(), |a, b| (a * b) % 3).unwrap();
        assert_eq!(FiniteGroup::new(set, op).err(), Some(AlgebraError::NoInverses));
    }

    #[test]
    fn test_power_handles_negative_exponents() {
        let z7 = cyclic(7);
        assert_eq!(z7.power(&3, 0).unwrap(), 0);
        assert_eq!(z7.power(&3, 5).unwrap(), 1);
        assert_eq!(z7.power(&3, -1).unwrap(), 4);
        assert!(z7.power(&9, 2).is_err());
    }

    #[test]
    fn test_element_orders_in_z12() {
        let z12 = cyclic(12);
        assert_eq!(z12.element_order(&0).unwrap(), 1);
        assert_eq!(z12.element_order(&1).unwrap(), 12);
        assert_eq!(z12.element_order(&8).unwrap(), 3);
        assert_eq!(z12.element_order(&6).unwrap(), 2);
        assert!(z12.generates_group(&5).unwrap());
        assert!(!z12.generates_group(&4).unwrap());
    }

    #[test]
    fn test_generated_set_stops_at_cap() {
        let generators = FiniteSet::singleton(1u64);
        let unbounded = generated_set(&generators, 5, |a, b| Ok(a + b)).unwrap();
        assert!(unbounded.is_none());

        let bounded = generated_set(&generators, 50, |a, b| Ok((a + b) % 6)).unwrap();
        assert_eq!(bounded.unwrap(), (0..6u64).collect::<FiniteSet<_>>());
    }

    #[test]
    fn test_trivial_group() {
        let trivial: FiniteGroup<u8> = FiniteGroup::trivial().unwrap();
        assert_eq!(trivial.order(), 1);
        assert_eq!(*trivial.identity(), 0);
    }
}
