use russell_lab::{Matrix, Vector};

/// Specifies the material-point functions required by a stress-update algorithm
///
/// Stresses are given in Voigt representation `[σxx, σyy, σzz, σxy, σxz, σyz]`
/// and q is the (scalar) hardening variable owned by the host solver.
///
/// **Note:** The evaluation functions perform no checks. Stress states outside the
/// physically admissible domain (e.g., p' ≤ 0) yield non-finite results.
pub trait PlasticityTrait: Send + Sync {
    /// Returns the hardening modulus
    fn hardening_parameter(&self, q: f64) -> f64;

    /// Calculates the yield function f(σ, q)
    fn yield_function(&self, stress: &Vector, q: f64) -> f64;

    /// Calculates the derivative of the yield function w.r.t stress
    fn df_dsigma(&self, df_dsigma: &mut Vector, stress: &Vector);

    /// Calculates the derivative of the plastic potential w.r.t stress (flow direction)
    fn dg_dsigma(&self, dg_dsigma: &mut Vector, stress: &Vector);

    /// Calculates the second derivative of the plastic potential w.r.t stress
    fn d2g_dsigma2(&self, d2g_dsigma2: &mut Matrix, stress: &Vector);

    /// Calculates the derivative of the yield function w.r.t the hardening variable
    fn df_dq(&self, q: f64) -> f64;

    /// Calculates the dilatancy/hardening scalar M(σ, q)
    fn mm(&self, stress: &Vector, q: f64) -> f64;

    /// Calculates the derivative of M w.r.t stress
    fn dmm_dsigma(&self, dmm_dsigma: &mut Vector, stress: &Vector, q: f64);

    /// Returns the initial value of the hardening variable
    fn q0(&self) -> f64;

    /// Sets the initial value of the hardening variable
    fn set_q0(&mut self, q0: f64);

    /// Calculates the elastic rigidity modulus (Voigt, engineering shear strains)
    fn elastic_rigidity(&self, dde: &mut Matrix);
}
