//! Finite sets
//!
//! The foundation of every structure in the crate: a duplicate-free
//! collection with set algebra, power sets and cartesian products.

pub mod finite_set;

pub use finite_set::{Element, FiniteSet};
