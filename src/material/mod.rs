//! Implements material models evaluated at the integration point

mod invariants;
mod numerical;
mod plasticity_model;
mod plasticity_trait;
mod settings;
mod sinfonietta_classica;
mod voigt;
pub use crate::material::invariants::*;
pub use crate::material::numerical::*;
pub use crate::material::plasticity_model::*;
pub use crate::material::plasticity_trait::*;
pub use crate::material::settings::*;
pub use crate::material::sinfonietta_classica::*;
pub use crate::material::voigt::*;
