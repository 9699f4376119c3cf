use serde::{Deserialize, Serialize};

/// Holds parameters for elastoplastic models evaluated at the material point
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParamPlasticity {
    /// Sinfonietta Classica model
    SinfoniettaClassica {
        /// Young's modulus
        young: f64,

        /// Poisson's coefficient
        poisson: f64,

        /// Slope of the compression line β
        beta: f64,

        /// Friction angle φ in degrees
        phi: f64,

        /// Plastic compliance β_P (the hardening modulus is 1/β_P)
        beta_p: f64,

        /// State parameter κ
        kappa: f64,

        /// Preconsolidation pressure P_c (the initial hardening variable is -ln(P_c))
        pc: f64,

        /// Secondary state parameter varP
        var_p: f64,
    },
}

impl ParamPlasticity {
    /// Returns parameters for the Sinfonietta Classica model with P_c = 0 and varP = 0
    ///
    /// **Note:** With P_c = 0 the default initial hardening variable is +∞;
    /// thus, the host solver is expected to call `set_q0` before loading.
    pub fn sinfonietta_classica(young: f64, poisson: f64, beta: f64, phi: f64, beta_p: f64, kappa: f64) -> Self {
        ParamPlasticity::SinfoniettaClassica {
            young,
            poisson,
            beta,
            phi,
            beta_p,
            kappa,
            pc: 0.0,
            var_p: 0.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
