//! Boolean property caches
//!
//! Functions, operations and structures remember the answers to their
//! property queries. A cache only ever grows: once a property is known to be
//! true or false for an instance it is never recomputed or overwritten.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, Result};

macro_rules! property_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The lowercase key under which this property is cached
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = AlgebraError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(AlgebraError::UnknownProperty(other.to_string())),
                }
            }
        }
    };
}

property_enum! {
    /// Properties of a [`FiniteFunction`](crate::functions::FiniteFunction)
    FunctionProperty {
        Injective => "injective",
        Surjective => "surjective",
        Bijective => "bijective",
    }
}

property_enum! {
    /// Properties of a [`FiniteBinaryOperation`](crate::functions::FiniteBinaryOperation)
    OperationProperty {
        Identity => "identity",
        Idempotent => "idempotent",
        Commutative => "commutative",
        Associative => "associative",
        /// Every element has a two-sided inverse
        Inverses => "inverses",
    }
}

property_enum! {
    /// Properties of magmas and semigroups
    StructureProperty {
        /// Idempotent semigroup
        Band => "band",
        /// Commutative band
        Semilattice => "semilattice",
    }
}

property_enum! {
    /// Group-theoretic properties of a [`FiniteGroup`](crate::structures::FiniteGroup)
    GroupProperty {
        Abelian => "abelian",
        /// Every element is conjugate to its inverse
        Ambivalent => "ambivalent",
        Cyclic => "cyclic",
        /// Every subgroup is normal
        Dedekind => "dedekind",
        /// Non-abelian Dedekind group
        Hamiltonian => "hamiltonian",
        /// The perfect core is trivial
        Hypoabelian => "hypoabelian",
        /// The derived subgroup is abelian
        Metabelian => "metabelian",
        Metanilpotent => "metanilpotent",
        Nilpotent => "nilpotent",
        /// Equal to its own derived subgroup
        Perfect => "perfect",
        Simple => "simple",
        Solvable => "solvable",
        /// Normality is transitive
        TGroup => "t-group",
        /// Every subgroup is a T-group
        TStarGroup => "t*-group",
    }
}

/// Properties inherited by every subgroup
pub const SUBGROUP_CLOSED: &[GroupProperty] = &[
    GroupProperty::Abelian,
    GroupProperty::Cyclic,
    GroupProperty::Dedekind,
    GroupProperty::Metabelian,
    GroupProperty::Metanilpotent,
    GroupProperty::Nilpotent,
    GroupProperty::Solvable,
    GroupProperty::TStarGroup,
];

/// Properties inherited by every quotient group
pub const QUOTIENT_CLOSED: &[GroupProperty] = &[
    GroupProperty::Abelian,
    GroupProperty::Ambivalent,
    GroupProperty::Cyclic,
    GroupProperty::Dedekind,
    GroupProperty::Metabelian,
    GroupProperty::Metanilpotent,
    GroupProperty::Nilpotent,
    GroupProperty::Perfect,
    GroupProperty::Solvable,
    GroupProperty::TStarGroup,
];

/// Properties inherited by a direct product when both factors have them
pub const PRODUCT_CLOSED: &[GroupProperty] = &[
    GroupProperty::Abelian,
    GroupProperty::Ambivalent,
    GroupProperty::Metabelian,
    GroupProperty::Nilpotent,
    GroupProperty::Perfect,
    GroupProperty::Solvable,
];

/// Parse a map keyed by property names into a typed property map
pub fn parse_properties<K: FromStr<Err = AlgebraError> + Ord>(
    named: &BTreeMap<String, bool>,
) -> Result<BTreeMap<K, bool>> {
    named
        .iter()
        .map(|(name, value)| Ok((name.parse()?, *value)))
        .collect()
}

/// A monotonically growing map from property keys to booleans.
///
/// Reads and writes go through an `RwLock`, so a cache may be shared between
/// threads. Two threads racing to fill the same key compute the same value;
/// the first write wins and the second is dropped.
#[derive(Debug)]
pub struct PropertyCache<K> {
    entries: RwLock<BTreeMap<K, bool>>,
}

impl<K: Ord + Copy> Default for PropertyCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy> Clone for PropertyCache<K> {
    fn clone(&self) -> Self {
        PropertyCache::from_map(self.snapshot())
    }
}

impl<K: Ord + Copy> PropertyCache<K> {
    /// Create an empty cache
    pub fn new() -> Self {
        PropertyCache {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a cache seeded with known values
    pub fn from_map(known: BTreeMap<K, bool>) -> Self {
        PropertyCache {
            entries: RwLock::new(known),
        }
    }

    /// The cached value of a property, if it has been determined
    pub fn get(&self, key: K) -> Option<bool> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied()
    }

    /// Whether the property has been determined
    pub fn contains(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Whether the property is known to hold
    pub fn is_known_true(&self, key: K) -> bool {
        self.get(key) == Some(true)
    }

    /// Record a value unless one is already present, returning the value that ends up cached
    pub fn insert_if_absent(&self, key: K, value: bool) -> bool {
        *self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(value)
    }

    /// Merge known values, keeping any entry that is already present
    pub fn merge_absent(&self, known: &BTreeMap<K, bool>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in known {
            entries.entry(*key).or_insert(*value);
        }
    }

    /// Return the cached value or compute, cache and return it.
    ///
    /// The lock is not held while `compute` runs, so `compute` may query the
    /// same cache recursively.
    pub fn get_or_compute<F>(&self, key: K, compute: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if let Some(value) = self.get(key) {
            return value;
        }
        let value = compute();
        self.insert_if_absent(key, value)
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute); errors are not cached
    pub fn get_or_try_compute<F>(&self, key: K, compute: F) -> Result<bool>
    where
        F: FnOnce() -> Result<bool>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let value = compute()?;
        Ok(self.insert_if_absent(key, value))
    }

    /// A copy of every cached entry
    pub fn snapshot(&self) -> BTreeMap<K, bool> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The entries from `allowed` that are known to be true
    pub fn restricted_to(&self, allowed: &[K]) -> BTreeMap<K, bool> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        allowed
            .iter()
            .filter(|key| entries.get(key) == Some(&true))
            .map(|key| (*key, true))
            .collect()
    }

    /// Number of determined properties
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing has been determined yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
