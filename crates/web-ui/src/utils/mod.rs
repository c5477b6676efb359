//! Utility functions

pub mod format;
pub mod validation;

pub use format::*;
pub use validation::*;
