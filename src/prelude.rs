//! Makes available common structures needed by a host solver
//!
//! You may write `use sinfonietta::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{ParamPlasticity, SampleParams};
pub use crate::material::{FiniteDifference, PlasticityModel, PlasticityTrait, Settings, SinfoniettaClassica};
pub use crate::StrError;
