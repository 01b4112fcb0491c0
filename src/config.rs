//! Tunable limits for the brute-force group algorithms

use serde::{Deserialize, Serialize};

/// Default number of rounds a closure computation may take before giving up
pub const DEFAULT_CLOSURE_ITERATION_CAP: usize = 3000;

/// Default group order above which subgroup enumeration logs a warning
pub const DEFAULT_ENUMERATION_WARNING_ORDER: usize = 32;

/// Configuration carried by every [`FiniteGroup`](crate::structures::FiniteGroup).
///
/// Derived groups (subgroups, centers, quotients) inherit the configuration of
/// the group they were built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Maximum number of rounds for `generated_set` before it reports non-convergence
    pub closure_iteration_cap: usize,

    /// Orders above this threshold log a warning before the power set is enumerated
    pub enumeration_warning_order: usize,

    /// Filter subgroup candidates on the rayon thread pool
    pub parallel_enumeration: bool,
}

impl Default for GroupConfig {
    fn default() -> Self {
        GroupConfig {
            closure_iteration_cap: DEFAULT_CLOSURE_ITERATION_CAP,
            enumeration_warning_order: DEFAULT_ENUMERATION_WARNING_ORDER,
            parallel_enumeration: true,
        }
    }
}

impl GroupConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the closure iteration cap
    pub fn with_closure_iteration_cap(mut self, cap: usize) -> Self {
        self.closure_iteration_cap = cap;
        self
    }

    /// Set the order above which subgroup enumeration warns
    pub fn with_enumeration_warning_order(mut self, order: usize) -> Self {
        self.enumeration_warning_order = order;
        self
    }

    /// Enable or disable parallel candidate filtering
    pub fn with_parallel_enumeration(mut self, parallel: bool) -> Self {
        self.parallel_enumeration = parallel;
        self
    }
}
