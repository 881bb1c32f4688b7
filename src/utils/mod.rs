//! Shared utilities: error handling and input normalisation.

pub mod errors;
pub mod validation;
