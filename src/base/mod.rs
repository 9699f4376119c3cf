//! Implements the base structures such as material parameters

mod parameters;
mod sample_params;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
