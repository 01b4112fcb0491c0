//! Relations between values
//!
//! A [`MathMap`] is a possibly partial rule sending inputs to outputs. It is
//! either defined by a table of pairs or built by composing two other maps.
//! Maps know nothing about domains and codomains; that is the job of
//! [`FiniteFunction`](super::FiniteFunction).

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::sets::{Element, FiniteSet};

/// A rule sending inputs of type `T` to outputs of type `G`.
///
/// Returns `None` for inputs the rule is not defined on.
pub trait Mapping<T, G>: Debug + Send + Sync {
    /// Evaluate the rule at `input`
    fn apply(&self, input: &T) -> Option<G>;
}

/// A map given by its graph: a set of (input, output) pairs with unique inputs
#[derive(Clone)]
pub struct SetDefinedMap<T, G> {
    relation: FiniteSet<(T, G)>,
}

impl<T: Element, G: Element> SetDefinedMap<T, G> {
    /// Build a map from its pairs. When an input appears twice the first pair wins.
    pub fn new<I: IntoIterator<Item = (T, G)>>(pairs: I) -> Self {
        let mut relation = FiniteSet::new();
        for (input, output) in pairs {
            if !relation.iter().any(|(x, _): &(T, G)| *x == input) {
                relation.add_element_without_check((input, output));
            }
        }
        SetDefinedMap { relation }
    }

    /// The pairs making up the graph
    pub fn relation(&self) -> &FiniteSet<(T, G)> {
        &self.relation
    }
}

impl<T: Element, G: Element> Mapping<T, G> for SetDefinedMap<T, G> {
    fn apply(&self, input: &T) -> Option<G> {
        self.relation
            .iter()
            .find(|(x, _)| x == input)
            .map(|(_, y)| y.clone())
    }
}

impl<T: Debug, G: Debug> Debug for SetDefinedMap<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetDefinedMap")
            .field("relation", &self.relation)
            .finish()
    }
}

/// The composition `outer ∘ inner`
pub struct CompositionMap<T, I, G> {
    inner: MathMap<T, I>,
    outer: MathMap<I, G>,
}

impl<T, I, G> CompositionMap<T, I, G> {
    pub fn new(inner: MathMap<T, I>, outer: MathMap<I, G>) -> Self {
        CompositionMap { inner, outer }
    }
}

impl<T: Element, I: Element, G: Element> Mapping<T, G> for CompositionMap<T, I, G> {
    fn apply(&self, input: &T) -> Option<G> {
        let intermediate = self.inner.apply(input)?;
        self.outer.apply(&intermediate)
    }
}

impl<T, I, G> Debug for CompositionMap<T, I, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionMap")
            .field("inner", &self.inner)
            .field("outer", &self.outer)
            .finish()
    }
}

/// A shared, immutable handle to a [`Mapping`]
pub struct MathMap<T, G> {
    rule: Arc<dyn Mapping<T, G>>,
}

impl<T, G> Clone for MathMap<T, G> {
    fn clone(&self) -> Self {
        MathMap {
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T, G> Debug for MathMap<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.rule, f)
    }
}

impl<T: Element, G: Element> MathMap<T, G> {
    /// Wrap any rule
    pub fn new<M: Mapping<T, G> + 'static>(rule: M) -> Self {
        MathMap {
            rule: Arc::new(rule),
        }
    }

    /// A table-defined map
    pub fn from_pairs<I: IntoIterator<Item = (T, G)>>(pairs: I) -> Self {
        MathMap::new(SetDefinedMap::new(pairs))
    }

    /// Tabulate `f` over `inputs`
    pub fn tabulate<F: Fn(&T) -> G>(inputs: &FiniteSet<T>, f: F) -> Self {
        MathMap::new(SetDefinedMap {
            relation: inputs
                .iter()
                .map(|x| (x.clone(), f(x)))
                .fold(FiniteSet::new(), |mut pairs, pair| {
                    pairs.add_element_without_check(pair);
                    pairs
                }),
        })
    }

    /// Evaluate the map, or `None` if it is undefined at `input`
    pub fn apply(&self, input: &T) -> Option<G> {
        self.rule.apply(input)
    }

    /// The map `outer ∘ self`
    pub fn compose<H: Element>(&self, outer: &MathMap<G, H>) -> MathMap<T, H> {
        MathMap::new(CompositionMap::new(self.clone(), outer.clone()))
    }
}
