//! Sinfonietta Classica: material-point functions for an elastoplastic constitutive law
//!
//! This crate computes the yield function, the flow-rule gradients and the hardening response
//! that a host finite element solver calls at each integration point during its stress-update
//! iterations. The stress-update algorithm, the global equilibrium iterations and the mesh
//! belong to the host solver.
//!
//! # Example
//!
//! ```
//! use sinfonietta::prelude::*;
//! use russell_lab::Vector;
//!
//! let param = ParamPlasticity::sinfonietta_classica(1e7, 0.3, 0.01, 30.0, 0.02, 0.1);
//! let model = PlasticityModel::new(&param, &Settings::new()).unwrap();
//! let stress = Vector::from(&[-100.0, -100.0, -100.0, 0.0, 0.0, 0.0]);
//! let f = model.actual.yield_function(&stress, -f64::ln(100.0));
//! assert!(f64::abs(f) < 1e-14);
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod material;
pub mod prelude;
