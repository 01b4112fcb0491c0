//! Finite sets with insertion-ordered storage
//!
//! Equality is unordered; the storage order only matters for indexed access.

use std::fmt::{self, Debug};
use std::ops::{Add, Index, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, Result};

/// Any value that can live in a [`FiniteSet`] and flow through the algebraic layers
pub trait Element: Clone + PartialEq + Debug + Send + Sync + 'static {}

impl<T> Element for T where T: Clone + PartialEq + Debug + Send + Sync + 'static {}

/// A finite mathematical set of distinct elements
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "StoredSet<T>")]
#[serde(bound(deserialize = "T: Element + Deserialize<'de>"))]
pub struct FiniteSet<T> {
    elements: Vec<T>,
}

/// Wire shape of a [`FiniteSet`]; deserialized input is deduplicated on the way in
#[derive(Deserialize)]
struct StoredSet<T> {
    elements: Vec<T>,
}

impl<T: Element> From<StoredSet<T>> for FiniteSet<T> {
    fn from(stored: StoredSet<T>) -> Self {
        FiniteSet::from_elements(stored.elements)
    }
}

impl<T> Default for FiniteSet<T> {
    fn default() -> Self {
        FiniteSet { elements: Vec::new() }
    }
}

impl<T: Element> FiniteSet<T> {
    /// Create the empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from a sequence, dropping repeated elements
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut set = FiniteSet::new();
        for element in elements {
            set.add_element(element);
        }
        set
    }

    /// Create a singleton set
    pub fn singleton(element: T) -> Self {
        FiniteSet { elements: vec![element] }
    }

    /// Add an element unless an equal one is present. Returns whether the set grew.
    pub fn add_element(&mut self, element: T) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Add an element without scanning for duplicates.
    ///
    /// The caller must guarantee the element is not already present.
    pub fn add_element_without_check(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Remove and return the element at `index`
    pub fn delete_element(&mut self, index: usize) -> Result<T> {
        if index >= self.elements.len() {
            return Err(AlgebraError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            });
        }
        Ok(self.elements.remove(index))
    }

    /// Number of elements
    pub fn cardinality(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Position of `element` in the storage order
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The elements in storage order
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Union of this set with another set
    pub fn union(&self, other: &FiniteSet<T>) -> FiniteSet<T> {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut result = self.clone();
        for element in other.iter() {
            result.add_element(element.clone());
        }
        result
    }

    /// Intersection of this set with another set
    pub fn intersection(&self, other: &FiniteSet<T>) -> FiniteSet<T> {
        if self.is_empty() || other.is_empty() {
            return FiniteSet::new();
        }

        FiniteSet {
            elements: self
                .iter()
                .filter(|element| other.contains(element))
                .cloned()
                .collect(),
        }
    }

    /// Set-theoretic difference: the elements of this set that are not in `other`
    pub fn difference(&self, other: &FiniteSet<T>) -> FiniteSet<T> {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }

        FiniteSet {
            elements: self
                .iter()
                .filter(|element| !other.contains(element))
                .cloned()
                .collect(),
        }
    }

    pub fn is_subset_of(&self, superset: &FiniteSet<T>) -> bool {
        self.iter().all(|element| superset.contains(element))
    }

    pub fn is_proper_subset_of(&self, superset: &FiniteSet<T>) -> bool {
        self.cardinality() < superset.cardinality() && self.is_subset_of(superset)
    }

    pub fn is_superset_of(&self, subset: &FiniteSet<T>) -> bool {
        subset.is_subset_of(self)
    }

    /// The set of all subsets.
    ///
    /// Exponential in the cardinality; only meant for small sets. Subsets are
    /// produced in a fixed order: the subsets without the first element come
    /// before the subsets that contain it.
    pub fn power_set(&self) -> FiniteSet<FiniteSet<T>> {
        let Some((first, rest)) = self.elements.split_first() else {
            return FiniteSet::singleton(FiniteSet::new());
        };

        let remainder = FiniteSet {
            elements: rest.to_vec(),
        };
        let without_first = remainder.power_set();

        let mut family = without_first.clone();
        for subset in without_first.into_iter() {
            let mut with_first = subset;
            with_first.add_element_without_check(first.clone());
            family.add_element_without_check(with_first);
        }
        family
    }

    /// Cartesian product. Any product with the empty set is empty.
    pub fn direct_product<U: Element>(&self, other: &FiniteSet<U>) -> FiniteSet<(T, U)> {
        let mut product = FiniteSet::new();
        if self.is_empty() || other.is_empty() {
            return product;
        }

        for left in self.iter() {
            for right in other.iter() {
                product.add_element_without_check((left.clone(), right.clone()));
            }
        }
        product
    }

    /// Apply `f` to every element and collect the distinct results
    pub fn map<U: Element, F: Fn(&T) -> U>(&self, f: F) -> FiniteSet<U> {
        self.iter().map(f).collect()
    }
}

impl<T: Element> PartialEq for FiniteSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cardinality() == other.cardinality() && self.is_subset_of(other)
    }
}

impl<T: Element + Eq> Eq for FiniteSet<T> {}

impl<T: Debug> Debug for FiniteSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T> Index<usize> for FiniteSet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T: Element> FromIterator<T> for FiniteSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FiniteSet::from_elements(iter)
    }
}

impl<T> IntoIterator for FiniteSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FiniteSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Element> Add for &FiniteSet<T> {
    type Output = FiniteSet<T>;

    fn add(self, rhs: Self) -> FiniteSet<T> {
        self.union(rhs)
    }
}

impl<T: Element> Sub for &FiniteSet<T> {
    type Output = FiniteSet<T>;

    fn sub(self, rhs: Self) -> FiniteSet<T> {
        self.difference(rhs)
    }
}
