//! Core traits (algebraic capabilities, matrix access) and their faer implementations.

pub mod traits;
pub mod wrappers;
