//! Pure matrix and vector operations.

pub mod cross;
pub mod kron;
pub mod ranks;
pub mod triangular;

pub use cross::cross;
pub use kron::kron;
pub use ranks::{ranks, ranks_by};
pub use triangular::{
    lower_triangular, strictly_lower_triangular, strictly_upper_triangular, upper_triangular,
};
