//! Maps, functions and binary operations between finite sets

pub mod map;
pub mod finite_function;
pub mod binary_operation;

pub use map::{CompositionMap, Mapping, MathMap, SetDefinedMap};
pub use finite_function::FiniteFunction;
pub use binary_operation::{CayleyMap, CayleyTable, FiniteBinaryOperation};
