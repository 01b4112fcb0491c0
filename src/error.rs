//! Error-handling module for the crate
//!
//! Every fallible operation in the crate returns [`AlgebraError`]. Results that
//! are merely undefined (a missing identity, a function without an inverse)
//! are reported as `None` instead.

use thiserror::Error;

/// Errors raised when a contract of a set, function or algebraic structure is violated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A function was applied to something outside its domain
    #[error("{element} is not an element of the domain")]
    NotInDomain {
        /// Debug rendering of the offending input
        element: String,
    },
    /// An element was expected to belong to a set or structure
    #[error("{element} is not an element of the set")]
    NotInSet {
        /// Debug rendering of the offending element
        element: String,
    },
    /// The underlying relation has no entry for an input
    #[error("the map is not defined for {input}")]
    UndefinedMapping {
        /// Debug rendering of the input
        input: String,
    },
    /// The relation sends a domain element outside the declared codomain
    #[error("{input} is mapped to {output}, which is not in the codomain")]
    OutsideCodomain {
        /// Debug rendering of the input
        input: String,
        /// Debug rendering of the output that escaped the codomain
        output: String,
    },
    /// A set was expected to be a subset of another
    #[error("the given set is not a subset of the {of}")]
    NotASubset {
        /// Name of the superset that was expected
        of: &'static str,
    },
    /// An indexed access went past the end of a set
    #[error("index {index} is out of range for a set of {len} elements")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of elements in the set
        len: usize,
    },
    /// The domain of a function does not match what the caller requires
    #[error("domain mismatch: {0}")]
    DomainMismatch(String),
    /// The codomain of a function does not match what the caller requires
    #[error("codomain mismatch: {0}")]
    CodomainMismatch(String),
    /// The operation is not associative
    #[error("the operation is not associative")]
    NotAssociative,
    /// The operation has no identity element
    #[error("the operation does not have an identity element")]
    NoIdentity,
    /// Some element has no inverse under the operation
    #[error("the operation does not have inverses for every element")]
    NoInverses,
    /// A group was expected to be a subgroup of another
    #[error("the group is not a subgroup of the given group")]
    NotASubgroup,
    /// A subgroup was expected to be normal
    #[error("the subgroup is not normal in the given group")]
    NotNormal,
    /// A closure computation did not reach a fixed point within its cap
    #[error("closure did not converge within {cap} iterations")]
    ClosureDidNotConverge {
        /// The iteration cap that was hit
        cap: usize,
    },
    /// A property name could not be parsed
    #[error("unknown property name \"{0}\"")]
    UnknownProperty(String),
}

impl AlgebraError {
    pub(crate) fn not_in_domain<T: std::fmt::Debug>(element: &T) -> Self {
        AlgebraError::NotInDomain {
            element: format!("{:?}", element),
        }
    }

    pub(crate) fn not_in_set<T: std::fmt::Debug>(element: &T) -> Self {
        AlgebraError::NotInSet {
            element: format!("{:?}", element),
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AlgebraError>;
