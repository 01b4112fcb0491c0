//! Boolean group-theoretic properties
//!
//! Every predicate follows the same pattern: return the cached value if there
//! is one, otherwise try the implication shortcuts against what is already
//! known, and only then run the defining algorithm. The result is cached for
//! the lifetime of the instance.

use std::collections::BTreeMap;

use log::debug;

use super::{AlgebraicStructure, FiniteGroup};
use crate::error::{AlgebraError, Result};
use crate::properties::{GroupProperty, PRODUCT_CLOSED, QUOTIENT_CLOSED, SUBGROUP_CLOSED};
use crate::sets::Element;

impl<T: Element> FiniteGroup<T> {
    /// Properties known true here that every subgroup inherits
    pub fn subgroup_closed_properties(&self) -> BTreeMap<GroupProperty, bool> {
        self.properties.restricted_to(SUBGROUP_CLOSED)
    }

    /// Properties known true here that every quotient inherits
    pub fn quotient_closed_properties(&self) -> BTreeMap<GroupProperty, bool> {
        self.properties.restricted_to(QUOTIENT_CLOSED)
    }

    /// Properties known true here that a direct product inherits when the other factor has them too
    pub fn product_closed_properties(&self) -> BTreeMap<GroupProperty, bool> {
        self.properties.restricted_to(PRODUCT_CLOSED)
    }

    fn known_true_any(&self, properties: &[GroupProperty]) -> bool {
        properties.iter().any(|p| self.properties.is_known_true(*p))
    }

    fn converged<S>(&self, value: Option<S>) -> Result<S> {
        value.ok_or(AlgebraError::ClosureDidNotConverge {
            cap: self.config.closure_iteration_cap,
        })
    }

    /// The operation is commutative
    pub fn is_abelian(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Abelian, || {
            Ok(self.known_true_any(&[GroupProperty::Cyclic]) || self.operation().is_commutative())
        })
    }

    /// Every element is conjugate to its own inverse
    pub fn is_ambivalent(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Ambivalent, || {
            for g in self.set().iter() {
                if !self.is_conjugate(g, &self.inverse(g)?)? {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// Some element generates the whole group. A cyclic group is recorded as abelian too.
    pub fn is_cyclic(&self) -> Result<bool> {
        let cyclic = self.properties.get_or_try_compute(GroupProperty::Cyclic, || {
            for g in self.set().iter() {
                if self.generates_group(g)? {
                    debug!("cyclic group of order {} generated by {:?}", self.order(), g);
                    return Ok(true);
                }
            }
            Ok(false)
        })?;
        if cyclic {
            self.properties.insert_if_absent(GroupProperty::Abelian, true);
        }
        Ok(cyclic)
    }

    /// Every subgroup is normal.
    ///
    /// Abelian groups, and groups already known to be nilpotent T-groups, are
    /// answered without enumerating the subgroup lattice.
    pub fn is_dedekind(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Dedekind, || {
            if self.is_abelian()? {
                return Ok(true);
            }
            if self.properties.is_known_true(GroupProperty::Nilpotent)
                && self.properties.is_known_true(GroupProperty::TGroup)
            {
                return Ok(true);
            }

            for subgroup in self.set_of_all_subgroups()? {
                if !subgroup.is_normal_subgroup_of(self)? {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }

    /// A non-abelian Dedekind group
    pub fn is_hamiltonian(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Hamiltonian, || {
            Ok(self.is_dedekind()? && !self.is_abelian()?)
        })
    }

    /// The perfect core is trivial
    pub fn is_hypoabelian(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Hypoabelian, || {
            if self.is_solvable()? {
                return Ok(true);
            }
            Ok(self.perfect_core()?.order() == 1)
        })
    }

    /// The derived subgroup is the whole group
    pub fn is_perfect(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Perfect, || {
            let derived = self.commutator_subgroup_set(self.set(), self.set())?;
            Ok(derived.cardinality() == self.order())
        })
    }

    /// Non-trivial, with `{e}` and the group itself as the only normal subgroups
    pub fn is_simple(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Simple, || {
            if self.order() <= 1 {
                return Ok(false);
            }
            Ok(self.set_of_all_normal_subgroups()?.cardinality() == 2)
        })
    }

    /// The derived series `G ⊇ G′ ⊇ G″ ⊇ …` reaches `{e}`
    pub fn is_solvable(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Solvable, || {
            if self.known_true_any(&[
                GroupProperty::Cyclic,
                GroupProperty::Nilpotent,
                GroupProperty::Metabelian,
            ]) || self.is_abelian()?
            {
                return Ok(true);
            }

            let mut current = self.set().clone();
            loop {
                let next = self.commutator_subgroup_set(&current, &current)?;
                if next.cardinality() == 1 {
                    return Ok(true);
                }
                if next.cardinality() == current.cardinality() {
                    return Ok(false);
                }
                current = next;
            }
        })
    }

    /// The lower central series `G ⊇ [G, G] ⊇ [[G, G], G] ⊇ …` reaches `{e}`
    pub fn is_nilpotent(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Nilpotent, || {
            if self.is_abelian()? {
                return Ok(true);
            }

            let mut current = self.set().clone();
            loop {
                let next = self.commutator_subgroup_set(&current, self.set())?;
                if next.cardinality() == 1 {
                    return Ok(true);
                }
                if next.cardinality() == current.cardinality() {
                    return Ok(false);
                }
                current = next;
            }
        })
    }

    /// The derived subgroup is abelian
    pub fn is_metabelian(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Metabelian, || {
            if self.is_abelian()? {
                return Ok(true);
            }
            let derived = self.converged(self.derived_subgroup()?)?;
            derived.is_abelian()
        })
    }

    /// Some normal subgroup `N` is nilpotent with `G / N` nilpotent
    pub fn is_metanilpotent(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::Metanilpotent, || {
            if self.known_true_any(&[GroupProperty::Cyclic, GroupProperty::Abelian]) || self.is_nilpotent()? {
                return Ok(true);
            }

            for normal in self.set_of_all_normal_subgroups()? {
                if normal.is_nilpotent()? && self.quotient_group(&normal)?.is_nilpotent()? {
                    return Ok(true);
                }
            }
            Ok(false)
        })
    }

    /// Normality is transitive: a normal subgroup of a normal subgroup is normal
    pub fn is_t_group(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::TGroup, || {
            if self.properties.is_known_true(GroupProperty::Dedekind) || self.is_abelian()? {
                return Ok(true);
            }

            let normal = self.set_of_all_normal_subgroups()?;
            for k in self.set_of_all_subgroups()? {
                if normal.contains(&k) {
                    continue;
                }
                for n in normal.iter() {
                    if k.set().is_subset_of(n.set()) && k.is_normal_subgroup_of(n)? {
                        return Ok(false);
                    }
                }
            }
            Ok(true)
        })
    }

    /// Every subgroup is a T-group
    pub fn is_t_star_group(&self) -> Result<bool> {
        self.properties.get_or_try_compute(GroupProperty::TStarGroup, || {
            if self.properties.is_known_true(GroupProperty::Dedekind) || self.is_abelian()? {
                return Ok(true);
            }

            for subgroup in self.set_of_all_subgroups()? {
                if !subgroup.is_t_group()? {
                    return Ok(false);
                }
            }
            Ok(true)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::FiniteBinaryOperation;
    use crate::sets::FiniteSet;

    type Perm = [u8; 3];

    fn compose(a: &Perm, b: &Perm) -> Perm {
        [a[b[0] as usize], a[b[1] as usize], a[b[2] as usize]]
    }

    fn s3() -> FiniteGroup<Perm> {
        let set: FiniteSet<Perm> = FiniteSet::from_elements(vec![
            [0, 1, 2],
            [1, 0, 2],
            [2, 1, 0],
            [0, 2, 1],
            [1, 2, 0],
            [2, 0, 1],
        ]);
        let op = FiniteBinaryOperation::from_fn(set.clone(), compose).unwrap();
        FiniteGroup::new(set, op).unwrap()
    }

    fn cyclic(n: u32) -> FiniteGroup<u32> {
        let set: FiniteSet<u32> = (0..n).collect();
        let op = FiniteBinaryOperation::from_fn(set.clone(), |a, b| (a + b) % n).unwrap();
        FiniteGroup::new(set, op).unwrap()
    }

    #[test]
    fn test_cyclic_implies_abelian() {
        let z6 = cyclic(6);
        assert!(z6.is_cyclic().unwrap());
        assert_eq!(z6.properties().get(GroupProperty::Abelian), Some(true));
        assert!(z6.is_nilpotent().unwrap());
        assert!(z6.is_solvable().unwrap());
        assert!(!z6.is_perfect().unwrap());
    }

    #[test]
    fn test_s3_properties() {
        let s3 = s3();
        assert!(!s3.is_abelian().unwrap());
        assert!(!s3.is_cyclic().unwrap());
        assert!(s3.is_ambivalent().unwrap());
        assert!(!s3.is_dedekind().unwrap());
        assert!(!s3.is_hamiltonian().unwrap());
        assert!(s3.is_solvable().unwrap());
        assert!(!s3.is_nilpotent().unwrap());
        assert!(s3.is_metabelian().unwrap());
        assert!(s3.is_metanilpotent().unwrap());
        assert!(s3.is_hypoabelian().unwrap());
        assert!(!s3.is_simple().unwrap());
        assert!(s3.is_t_group().unwrap());
        assert!(s3.is_t_star_group().unwrap());
    }

    #[test]
    fn test_prime_order_groups_are_simple() {
        assert!(cyclic(5).is_simple().unwrap());
        assert!(!cyclic(4).is_simple().unwrap());
        assert!(!cyclic(1).is_simple().unwrap());
    }

    #[test]
    fn test_z4_is_not_ambivalent() {
        assert!(!cyclic(4).is_ambivalent().unwrap());
        assert!(cyclic(2).is_ambivalent().unwrap());
    }

    #[test]
    fn test_trivial_group_is_perfect() {
        let trivial = cyclic(1);
        assert!(trivial.is_perfect().unwrap());
        assert_eq!(trivial.perfect_core().unwrap().order(), 1);
    }

    #[test]
    fn test_closed_property_lists_only_carry_known_truths() {
        let s3 = s3();
        s3.is_abelian().unwrap();
        s3.is_solvable().unwrap();
        s3.is_ambivalent().unwrap();
        let subgroup_closed = s3.subgroup_closed_properties();
        assert_eq!(subgroup_closed.get(&GroupProperty::Solvable), Some(&true));
        assert!(!subgroup_closed.contains_key(&GroupProperty::Abelian));
        assert!(!subgroup_closed.contains_key(&GroupProperty::Ambivalent));
        assert!(s3.quotient_closed_properties().contains_key(&GroupProperty::Ambivalent));
    }
}
