//! Utilities around the solver core.

/// plotting of expressions over the fixed sample domain
pub mod plots;
