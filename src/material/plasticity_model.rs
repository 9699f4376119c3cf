use super::{PlasticityTrait, Settings, SinfoniettaClassica};
use crate::base::ParamPlasticity;
use crate::StrError;

/// Holds the actual plasticity model implementation
pub struct PlasticityModel {
    /// Holds the actual model implementation
    pub actual: Box<dyn PlasticityTrait>,
}

impl PlasticityModel {
    /// Allocates a new instance
    pub fn new(param: &ParamPlasticity, settings: &Settings) -> Result<Self, StrError> {
        let actual: Box<dyn PlasticityTrait> = match *param {
            // Sinfonietta Classica model
            ParamPlasticity::SinfoniettaClassica {
                young,
                poisson,
                beta,
                phi,
                beta_p,
                kappa,
                pc,
                var_p,
            } => {
                if phi <= 0.0 || phi >= 90.0 {
                    return Err("friction angle must satisfy 0 < φ < 90");
                }
                if beta_p == 0.0 {
                    return Err("β_P must be non-zero");
                }
                let model = SinfoniettaClassica::new(settings, young, poisson, beta, phi, beta_p, kappa, pc, var_p);
                if settings.verbose {
                    let (z, mu) = model.shape_parameters();
                    print_constants(z, mu, model.q0(), model.hardening_parameter(model.q0()));
                }
                Box::new(model)
            }
        };
        Ok(PlasticityModel { actual })
    }
}

#[inline]
#[rustfmt::skip]
fn print_constants(z: f64, mu: f64, q0: f64, hh: f64) {
    println!(
        "{:>13} {:>13} {:>13} {:>13}",
        "Z", "μ", "q₀", "1/β_P"
    );
    println!(
        "{:>13.6e} {:>13.6e} {:>13.6e} {:>13.6e}",
        z, mu, q0, hh
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
