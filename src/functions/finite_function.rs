//! Total functions between finite sets

use std::fmt::{self, Debug};
use std::sync::OnceLock;

use log::debug;

use super::map::MathMap;
use crate::error::{AlgebraError, Result};
use crate::properties::{FunctionProperty, PropertyCache};
use crate::sets::{Element, FiniteSet};

/// A total function from a finite domain into a finite codomain.
///
/// The relation is checked at construction: every domain element must be
/// sent somewhere inside the codomain, so a malformed function cannot exist.
/// Functions are immutable; the image, the inverse and the
/// injective/surjective/bijective flags are computed at most once.
pub struct FiniteFunction<T, G> {
    domain: FiniteSet<T>,
    codomain: FiniteSet<G>,
    relation: MathMap<T, G>,
    properties: PropertyCache<FunctionProperty>,
    image: OnceLock<FiniteSet<G>>,
    inverse: OnceLock<Option<Box<FiniteFunction<G, T>>>>,
}

impl<T: Element, G: Element> FiniteFunction<T, G> {
    /// Create a function, checking that `relation` sends the whole domain into the codomain
    pub fn new(domain: FiniteSet<T>, codomain: FiniteSet<G>, relation: MathMap<T, G>) -> Result<Self> {
        for input in domain.iter() {
            let output = relation.apply(input).ok_or_else(|| AlgebraError::UndefinedMapping {
                input: format!("{:?}", input),
            })?;
            if !codomain.contains(&output) {
                return Err(AlgebraError::OutsideCodomain {
                    input: format!("{:?}", input),
                    output: format!("{:?}", output),
                });
            }
        }

        Ok(FiniteFunction {
            domain,
            codomain,
            relation,
            properties: PropertyCache::new(),
            image: OnceLock::new(),
            inverse: OnceLock::new(),
        })
    }

    /// Create a function from its graph
    pub fn from_pairs<I>(domain: FiniteSet<T>, codomain: FiniteSet<G>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, G)>,
    {
        Self::new(domain, codomain, MathMap::from_pairs(pairs))
    }

    /// Create a function by tabulating `f` over the domain
    pub fn from_fn<F: Fn(&T) -> G>(domain: FiniteSet<T>, codomain: FiniteSet<G>, f: F) -> Result<Self> {
        let relation = MathMap::tabulate(&domain, f);
        Self::new(domain, codomain, relation)
    }

    pub fn domain(&self) -> &FiniteSet<T> {
        &self.domain
    }

    pub fn codomain(&self) -> &FiniteSet<G> {
        &self.codomain
    }

    pub fn relation(&self) -> &MathMap<T, G> {
        &self.relation
    }

    /// The cached property flags
    pub fn properties(&self) -> &PropertyCache<FunctionProperty> {
        &self.properties
    }

    /// Apply the function to a domain element
    pub fn apply(&self, input: &T) -> Result<G> {
        if !self.domain.contains(input) {
            return Err(AlgebraError::not_in_domain(input));
        }
        self.evaluate(input)
    }

    /// Evaluate without the domain membership scan. The caller guarantees `input` is in the domain.
    pub(crate) fn evaluate(&self, input: &T) -> Result<G> {
        self.relation
            .apply(input)
            .ok_or_else(|| AlgebraError::UndefinedMapping {
                input: format!("{:?}", input),
            })
    }

    /// The composition `self ∘ inner`.
    ///
    /// Requires `inner.codomain() == self.domain()`. Injectivity, surjectivity and
    /// bijectivity carry over only when both functions are already known to have them.
    pub fn composition<S: Element>(&self, inner: &FiniteFunction<S, T>) -> Result<FiniteFunction<S, G>> {
        if inner.codomain != self.domain {
            return Err(AlgebraError::CodomainMismatch(
                "the codomain of the inner function must equal the domain of the outer function".to_string(),
            ));
        }

        let composed = FiniteFunction::new(
            inner.domain.clone(),
            self.codomain.clone(),
            inner.relation.compose(&self.relation),
        )?;

        for property in FunctionProperty::ALL {
            if self.properties.is_known_true(*property) && inner.properties.is_known_true(*property) {
                composed.properties.insert_if_absent(*property, true);
            }
        }

        Ok(composed)
    }

    /// Whether `other` agrees with this function's relation on every element of
    /// `test_domain`, always landing in `test_codomain`
    pub fn equivalent_maps(&self, other: &MathMap<T, G>, test_domain: &FiniteSet<T>, test_codomain: &FiniteSet<G>) -> bool {
        test_domain.iter().all(|input| {
            match (self.relation.apply(input), other.apply(input)) {
                (Some(mine), Some(theirs)) => mine == theirs && test_codomain.contains(&theirs),
                _ => false,
            }
        })
    }

    /// The set of all values taken by the function
    pub fn image_set(&self) -> &FiniteSet<G> {
        self.image.get_or_init(|| {
            self.domain
                .iter()
                .filter_map(|input| self.relation.apply(input))
                .collect()
        })
    }

    /// Every domain element sent into `targets`
    pub fn inverse_image_set(&self, targets: &FiniteSet<G>) -> FiniteSet<T> {
        let mut preimage = FiniteSet::new();
        for input in self.domain.iter() {
            if let Some(output) = self.relation.apply(input) {
                if targets.contains(&output) {
                    preimage.add_element_without_check(input.clone());
                }
            }
        }
        preimage
    }

    /// The inverse function, or `None` when the function is not bijective
    pub fn inverse_function(&self) -> Option<&FiniteFunction<G, T>> {
        self.inverse
            .get_or_init(|| {
                if !self.is_bijective() {
                    return None;
                }

                let swapped = self
                    .domain
                    .iter()
                    .filter_map(|input| self.relation.apply(input).map(|output| (output, input.clone())));
                let inverse = FiniteFunction::from_pairs(self.codomain.clone(), self.domain.clone(), swapped).ok()?;
                for property in FunctionProperty::ALL {
                    inverse.properties.insert_if_absent(*property, true);
                }
                debug!("built inverse of a function on {} elements", self.domain.cardinality());
                Some(Box::new(inverse))
            })
            .as_deref()
    }

    pub fn is_injective(&self) -> bool {
        self.properties.get_or_compute(FunctionProperty::Injective, || {
            let outputs: Vec<Option<G>> = self.domain.iter().map(|x| self.relation.apply(x)).collect();
            outputs
                .iter()
                .enumerate()
                .all(|(i, a)| outputs[i + 1..].iter().all(|b| a != b))
        })
    }

    pub fn is_surjective(&self) -> bool {
        self.properties.get_or_compute(FunctionProperty::Surjective, || {
            self.codomain.is_subset_of(self.image_set())
        })
    }

    pub fn is_bijective(&self) -> bool {
        self.properties.get_or_compute(FunctionProperty::Bijective, || {
            self.is_injective() && self.is_surjective()
        })
    }

    /// The function restricted to `new_domain`, or `None` if that is not a subset of the domain.
    ///
    /// A restriction of an injective function is injective; surjectivity is not inherited.
    pub fn restriction(&self, new_domain: &FiniteSet<T>) -> Option<FiniteFunction<T, G>> {
        if !new_domain.is_subset_of(&self.domain) {
            return None;
        }

        let restricted = FiniteFunction::new(new_domain.clone(), self.codomain.clone(), self.relation.clone()).ok()?;
        if self.properties.is_known_true(FunctionProperty::Injective) {
            restricted.properties.insert_if_absent(FunctionProperty::Injective, true);
        }
        Some(restricted)
    }
}

impl<T: Element> FiniteFunction<T, T> {
    /// The identity function on a set
    pub fn identity(set: FiniteSet<T>) -> Result<Self> {
        FiniteFunction::from_fn(set.clone(), set, |x| x.clone())
    }
}

impl<T: Element, G: Element> Clone for FiniteFunction<T, G> {
    fn clone(&self) -> Self {
        FiniteFunction {
            domain: self.domain.clone(),
            codomain: self.codomain.clone(),
            relation: self.relation.clone(),
            properties: self.properties.clone(),
            image: self.image.clone(),
            inverse: self.inverse.clone(),
        }
    }
}

/// Functions are equal when they share domain and codomain and agree pointwise
impl<T: Element, G: Element> PartialEq for FiniteFunction<T, G> {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.codomain == other.codomain
            && self
                .domain
                .iter()
                .all(|x| self.relation.apply(x) == other.relation.apply(x))
    }
}

impl<T: Debug, G: Debug> Debug for FiniteFunction<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteFunction")
            .field("domain", &self.domain)
            .field("codomain", &self.codomain)
            .field("relation", &self.relation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squaring() -> FiniteFunction<i32, i32> {
        FiniteFunction::from_fn(
            FiniteSet::from_elements(vec![-2, -1, 0, 1, 2]),
            FiniteSet::from_elements(vec![0, 1, 2, 3, 4]),
            |x| x * x,
        )
        .unwrap()
    }

    #[test]
    fn test_construction_rejects_outputs_outside_codomain() {
        let result = FiniteFunction::from_fn(
            FiniteSet::from_elements(vec![1, 2]),
            FiniteSet::from_elements(vec![1, 2]),
            |x| x + 1,
        );
        assert!(matches!(result, Err(AlgebraError::OutsideCodomain { .. })));
    }

    #[test]
    fn test_construction_rejects_partial_relations() {
        let result = FiniteFunction::from_pairs(
            FiniteSet::from_elements(vec![1, 2]),
            FiniteSet::from_elements(vec!['a']),
            vec![(1, 'a')],
        );
        assert!(matches!(result, Err(AlgebraError::UndefinedMapping { .. })));
    }

    #[test]
    fn test_apply_outside_domain_fails() {
        let f = squaring();
        assert_eq!(f.apply(&-2).unwrap(), 4);
        assert!(matches!(f.apply(&5), Err(AlgebraError::NotInDomain { .. })));
    }

    #[test]
    fn test_image_and_inverse_image() {
        let f = squaring();
        assert_eq!(*f.image_set(), FiniteSet::from_elements(vec![0, 1, 4]));
        assert_eq!(
            f.inverse_image_set(&FiniteSet::from_elements(vec![1, 3])),
            FiniteSet::from_elements(vec![-1, 1])
        );
        assert!(!f.is_injective());
        assert!(!f.is_surjective());
        assert!(f.inverse_function().is_none());
    }

    #[test]
    fn test_restriction_keeps_known_injectivity() {
        let f = FiniteFunction::from_fn(
            FiniteSet::from_elements(vec![1, 2, 3]),
            FiniteSet::from_elements(vec![2, 4, 6]),
            |x| 2 * x,
        )
        .unwrap();
        assert!(f.is_injective());

        let restricted = f.restriction(&FiniteSet::from_elements(vec![1, 3])).unwrap();
        assert_eq!(restricted.properties().get(FunctionProperty::Injective), Some(true));
        assert_eq!(restricted.properties().get(FunctionProperty::Surjective), None);
        assert!(f.restriction(&FiniteSet::from_elements(vec![4])).is_none());
    }
}
