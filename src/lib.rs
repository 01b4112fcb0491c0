//! Finite Algebra Framework
//!
//! This crate models finite mathematical structures built from explicit data:
//! finite sets, functions between them, binary operations stored as Cayley
//! tables, and the ladder magma → semigroup → monoid → group. Groups answer
//! structural questions (subgroups, normality, cosets, conjugacy, center,
//! quotients, direct products) and cache the answers to boolean property
//! queries such as abelian, cyclic, Dedekind, perfect or simple.
//!
//! Most algorithms are brute force and intended for small structures.

pub mod config;
pub mod error;
pub mod functions;
pub mod properties;
pub mod sets;
pub mod structures;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::config::GroupConfig;
    pub use crate::error::{AlgebraError, Result};
    pub use crate::functions::{FiniteBinaryOperation, FiniteFunction, Mapping, MathMap};
    pub use crate::properties::{FunctionProperty, GroupProperty, OperationProperty, StructureProperty};
    pub use crate::sets::{Element, FiniteSet};
    pub use crate::structures::{AlgebraicStructure, FiniteGroup, FiniteMagma, FiniteMonoid, FiniteSemigroup};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
