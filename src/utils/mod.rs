//! Shared utilities: input validation guards.

pub mod validation;
pub use validation::{
    Requirements, require, require_non_empty, require_square, require_symmetric,
    require_symmetric_within,
};
