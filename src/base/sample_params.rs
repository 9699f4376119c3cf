use super::ParamPlasticity;

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for the Sinfonietta Classica model
    ///
    /// ```text
    /// E = 1e7, ν = 0.3, φ = 30°, β = 0.01, β_P = 0.02, κ = 0.1, P_c = 100, varP = 0
    /// ```
    pub fn param_sinfonietta_classica() -> ParamPlasticity {
        ParamPlasticity::SinfoniettaClassica {
            young: 1e7,
            poisson: 0.3,
            beta: 0.01,
            phi: 30.0,
            beta_p: 0.02,
            kappa: 0.1,
            pc: 100.0,
            var_p: 0.0,
        }
    }

    /// Returns sample parameters for the Sinfonietta Classica model with a non-zero varP
    pub fn param_sinfonietta_classica_var_p() -> ParamPlasticity {
        ParamPlasticity::SinfoniettaClassica {
            young: 1e7,
            poisson: 0.3,
            beta: 0.01,
            phi: 30.0,
            beta_p: 0.02,
            kappa: 0.1,
            pc: 100.0,
            var_p: 2.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
