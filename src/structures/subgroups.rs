//! Cosets, subgroup relations and the subgroup lattice
//!
//! Enumeration is brute force: every subset of the group containing the
//! identity is a candidate, so it is only practical for small orders.

use log::{debug, warn};
use rayon::prelude::*;

use super::{AlgebraicStructure, FiniteGroup};
use crate::error::{AlgebraError, Result};
use crate::functions::{CayleyTable, FiniteBinaryOperation, MathMap};
use crate::properties::GroupProperty;
use crate::sets::{Element, FiniteSet};

impl<T: Element> FiniteGroup<T> {
    fn ensure_subset(&self, subset: &FiniteSet<T>) -> Result<()> {
        if subset.is_subset_of(self.set()) {
            Ok(())
        } else {
            Err(AlgebraError::NotASubset { of: "group" })
        }
    }

    /// `g ∘ H = { g ∘ h : h ∈ H }`
    pub fn left_coset(&self, subgroup: &FiniteSet<T>, g: &T) -> Result<FiniteSet<T>> {
        self.ensure_member(g)?;
        self.ensure_subset(subgroup)?;
        subgroup.iter().map(|h| self.operate(g, h)).collect()
    }

    /// `H ∘ g = { h ∘ g : h ∈ H }`
    pub fn right_coset(&self, subgroup: &FiniteSet<T>, g: &T) -> Result<FiniteSet<T>> {
        self.ensure_member(g)?;
        self.ensure_subset(subgroup)?;
        subgroup.iter().map(|h| self.operate(h, g)).collect()
    }

    /// The distinct left cosets of a subgroup; they partition the group
    pub fn left_cosets(&self, subgroup: &FiniteGroup<T>) -> Result<FiniteSet<FiniteSet<T>>> {
        if !subgroup.is_subgroup_of(self) {
            return Err(AlgebraError::NotASubgroup);
        }

        let mut cosets = FiniteSet::new();
        for g in self.set().iter() {
            if !cosets.iter().any(|coset: &FiniteSet<T>| coset.contains(g)) {
                cosets.add_element_without_check(self.left_coset(subgroup.set(), g)?);
            }
        }
        Ok(cosets)
    }

    /// Whether this group sits inside `other` with the same operation.
    ///
    /// On success the subgroup-closed properties already known for `other`
    /// are copied into this group's cache, without overwriting anything.
    pub fn is_subgroup_of(&self, other: &FiniteGroup<T>) -> bool {
        if !self.set().is_subset_of(other.set()) {
            return false;
        }

        let function = self.operation().function();
        let agrees = function.equivalent_maps(other.operation().relation(), function.domain(), self.set());
        if agrees {
            self.properties.merge_absent(&other.subgroup_closed_properties());
        }
        agrees
    }

    pub fn is_proper_subgroup_of(&self, other: &FiniteGroup<T>) -> bool {
        self.order() < other.order() && self.is_subgroup_of(other)
    }

    /// A proper subgroup with no proper subgroup of `other` strictly between them
    pub fn is_maximal_subgroup_of(&self, other: &FiniteGroup<T>) -> Result<bool> {
        if !self.is_proper_subgroup_of(other) {
            return Ok(false);
        }

        let between = other.set_of_all_subgroups()?.iter().any(|k| {
            self.set().is_proper_subset_of(k.set()) && k.set().is_proper_subset_of(other.set())
        });
        Ok(!between)
    }

    /// Whether this group is a normal subgroup of `other`: every left coset equals the matching right coset
    pub fn is_normal_subgroup_of(&self, other: &FiniteGroup<T>) -> Result<bool> {
        if !self.is_subgroup_of(other) {
            return Ok(false);
        }
        if self.order() == other.order() || other.order() == 2 * self.order() {
            return Ok(true);
        }

        for g in other.set().iter() {
            if other.left_coset(self.set(), g)? != other.right_coset(self.set(), g)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The index `[other : self] = |other| / |self|`: the number of cosets of this
    /// subgroup in `other`, as a whole number. This is the usual group-theoretic
    /// index, not the reciprocal ratio `|self| / |other|`.
    pub fn subgroup_index(&self, other: &FiniteGroup<T>) -> Result<usize> {
        if !self.is_subgroup_of(other) {
            return Err(AlgebraError::NotASubgroup);
        }
        Ok(other.order() / self.order())
    }

    /// `{e}` as a subgroup
    pub fn trivial_subgroup(&self) -> Result<FiniteGroup<T>> {
        self.subgroup_from_set(
            FiniteSet::singleton(self.identity().clone()),
            &self.subgroup_closed_properties(),
        )
    }

    /// Whether the subgroup lattice has already been enumerated for this instance
    pub fn subgroups_enumerated(&self) -> bool {
        self.subgroups.get().is_some()
    }

    /// Every subgroup, in power-set enumeration order. Computed once per instance;
    /// each call returns an independent copy.
    pub fn set_of_all_subgroups(&self) -> Result<FiniteSet<FiniteGroup<T>>> {
        if let Some(subgroups) = self.subgroups.get() {
            return Ok(subgroups.clone());
        }
        let computed = self.enumerate_subgroups()?;
        Ok(self.subgroups.get_or_init(|| computed).clone())
    }

    fn enumerate_subgroups(&self) -> Result<FiniteSet<FiniteGroup<T>>> {
        let order = self.order();
        if order > self.config.enumeration_warning_order {
            warn!(
                "enumerating subgroups of a group of order {}: 2^{} candidate subsets",
                order,
                order - 1
            );
        }

        let identity = self.identity().clone();
        let non_identity = self.set().difference(&FiniteSet::singleton(identity.clone()));
        let candidates: Vec<FiniteSet<T>> = non_identity
            .power_set()
            .into_iter()
            .map(|mut candidate| {
                candidate.add_element_without_check(identity.clone());
                candidate
            })
            .filter(|candidate| order % candidate.cardinality() == 0)
            .collect();
        debug!("{} subgroup candidates pass the Lagrange filter", candidates.len());

        let known = self.subgroup_closed_properties();
        let build = |candidate: FiniteSet<T>| -> Option<FiniteGroup<T>> {
            let operation = self.operation().restriction(&candidate).ok()?;
            if !FiniteGroup::is_group(&candidate, &operation) {
                return None;
            }
            self.subgroup_from_parts(candidate, operation, &known).ok()
        };

        let subgroups: Vec<FiniteGroup<T>> = if self.config.parallel_enumeration {
            candidates.into_par_iter().filter_map(build).collect()
        } else {
            candidates.into_iter().filter_map(build).collect()
        };
        debug!("found {} subgroups of a group of order {}", subgroups.len(), order);

        let mut result = FiniteSet::new();
        for subgroup in subgroups {
            result.add_element_without_check(subgroup);
        }
        Ok(result)
    }

    /// Every normal subgroup. For an abelian group this is every subgroup.
    pub fn set_of_all_normal_subgroups(&self) -> Result<FiniteSet<FiniteGroup<T>>> {
        if let Some(normal) = self.normal_subgroups.get() {
            return Ok(normal.clone());
        }

        let subgroups = self.set_of_all_subgroups()?;
        let computed = if self.is_abelian()? {
            subgroups
        } else {
            let mut normal = FiniteSet::new();
            for subgroup in subgroups {
                if subgroup.is_normal_subgroup_of(self)? {
                    normal.add_element_without_check(subgroup);
                }
            }
            normal
        };
        Ok(self.normal_subgroups.get_or_init(|| computed).clone())
    }

    /// Every maximal subgroup
    pub fn set_of_all_maximal_subgroups(&self) -> Result<FiniteSet<FiniteGroup<T>>> {
        let mut maximal = FiniteSet::new();
        for subgroup in self.set_of_all_subgroups()? {
            if subgroup.is_maximal_subgroup_of(self)? {
                maximal.add_element_without_check(subgroup);
            }
        }
        Ok(maximal)
    }

    /// The largest perfect subgroup.
    ///
    /// When several perfect subgroups share the largest order, the first one in
    /// enumeration order is returned.
    pub fn perfect_core(&self) -> Result<FiniteGroup<T>> {
        let mut core: Option<FiniteGroup<T>> = None;
        for subgroup in self.set_of_all_subgroups()? {
            let larger = core.as_ref().map_or(true, |c| subgroup.order() > c.order());
            if larger && subgroup.is_perfect()? {
                core = Some(subgroup);
            }
        }
        match core {
            Some(core) => Ok(core),
            None => self.trivial_subgroup(),
        }
    }

    /// The quotient `G / N` of this group by a normal subgroup, whose elements are the cosets of `N`
    pub fn quotient_group(&self, normal: &FiniteGroup<T>) -> Result<FiniteGroup<FiniteSet<T>>> {
        if !normal.is_normal_subgroup_of(self)? {
            return Err(AlgebraError::NotNormal);
        }

        let cosets = self.left_cosets(normal)?;
        let mut pairs = Vec::with_capacity(cosets.cardinality() * cosets.cardinality());
        for a in cosets.iter() {
            for b in cosets.iter() {
                let product = self.operate(&a[0], &b[0])?;
                let target = cosets
                    .iter()
                    .find(|coset| coset.contains(&product))
                    .cloned()
                    .ok_or_else(|| AlgebraError::not_in_set(&product))?;
                pairs.push(((a.clone(), b.clone()), target));
            }
        }

        let operation = FiniteBinaryOperation::new(cosets.clone(), MathMap::from_pairs(pairs))?;
        let quotient = FiniteGroup::with_known_properties(cosets, operation, &self.quotient_closed_properties())?;
        Ok(quotient.with_config(self.config))
    }

    /// The direct product `G × H` with the componentwise operation
    pub fn direct_product<U: Element>(&self, other: &FiniteGroup<U>) -> Result<FiniteGroup<(T, U)>> {
        // the Cayley tables index the codomains, whose order may differ from `set()`
        let set = self.operation().codomain().direct_product(other.operation().codomain());
        let (left, right) = (self.operation().cayley_table(), other.operation().cayley_table());
        let m = other.order();
        let n = self.order() * m;

        let mut table = CayleyTable::zeros((n, n));
        for i1 in 0..self.order() {
            for j1 in 0..m {
                for i2 in 0..self.order() {
                    for j2 in 0..m {
                        table[[i1 * m + j1, i2 * m + j2]] = left[[i1, i2]] * m + right[[j1, j2]];
                    }
                }
            }
        }

        let mut known = self.product_closed_properties();
        let theirs = other.product_closed_properties();
        known.retain(|property: &GroupProperty, _| theirs.contains_key(property));

        let operation = FiniteBinaryOperation::from_cayley_table(set.clone(), &table)?;
        let product = FiniteGroup::with_known_properties(set, operation, &known)?;
        Ok(product.with_config(self.config))
    }
}
