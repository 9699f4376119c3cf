use super::{deviatoric, tensor_from_voigt};
use russell_lab::Vector;
use russell_tensor::Tensor2;

/// Calculates the mean pressure (positive in compression)
///
/// ```text
/// p' = -tr(σ) / 3
/// ```
pub fn mean_pressure(sigma: &Tensor2) -> f64 {
    -sigma.trace() / 3.0
}

/// Calculates the square of a symmetric tensor
///
/// ```text
/// s² = s · s
/// ```
pub fn deviatoric_square(s: &Tensor2) -> Tensor2 {
    let mut ss = Tensor2::new(s.mandel());
    for i in 0..3 {
        for j in i..3 {
            let mut sum = 0.0;
            for k in 0..3 {
                sum += s.get(i, k) * s.get(k, j);
            }
            ss.sym_set(i, j, sum);
        }
    }
    ss
}

/// Calculates the critical-state shape parameters (Z, μ) from the friction angle
///
/// ```text
/// Z = 6 sin(φ) / (3 - sin(φ))
///
///          9 - Z²
/// μ = ───────────────
///     3 - Z² + 2 Z³/9
/// ```
///
/// # Input
///
/// * `phi` -- friction angle in degrees
pub fn critical_state_shape(phi: f64) -> (f64, f64) {
    let sin_phi = f64::sin(phi.to_radians());
    let z = 6.0 * sin_phi / (3.0 - sin_phi);
    let mu = (9.0 - z * z) / (3.0 - z * z + 2.0 * z * z * z / 9.0);
    (z, mu)
}

/// Holds the stress invariants normalized by the mean pressure
///
/// ```text
/// ξ = s / p'
/// J2ξ = ‖ξ‖²
/// J3ξ = 3 det(ξ)
/// ```
#[derive(Clone, Debug)]
pub struct NormalizedInvariants {
    /// Mean pressure p' (positive in compression)
    pub p: f64,

    /// Deviatoric stress s = dev(σ)
    pub s: Tensor2,

    /// Squared Frobenius norm of ξ
    pub j2_xi: f64,

    /// Three times the determinant of ξ
    pub j3_xi: f64,
}

impl NormalizedInvariants {
    /// Calculates the invariants of a stress given in Voigt representation
    ///
    /// **Note:** Non-positive p' yields non-finite ξ (no checks are made).
    ///
    /// # Panics
    ///
    /// A panic will occur if `stress.dim() != 6`.
    pub fn new(stress: &Vector) -> Self {
        let sigma = tensor_from_voigt(stress);
        let s = deviatoric(&sigma);
        let p = mean_pressure(&sigma);
        let norm_s = s.norm();
        let j2_xi = norm_s * norm_s / (p * p);
        let j3_xi = 3.0 * s.determinant() / (p * p * p);
        NormalizedInvariants { p, s, j2_xi, j3_xi }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use russell_lab::{approx_eq, Vector};
    use russell_tensor::{Mandel, Tensor2};

    #[test]
    fn mean_pressure_works() {
        let sigma = tensor_from_voigt(&Vector::from(&[-100.0, -100.0, -100.0, 0.0, 0.0, 0.0]));
        assert_eq!(mean_pressure(&sigma), 100.0);
        let sigma = tensor_from_voigt(&Vector::from(&[-120.0, -90.0, -60.0, 10.0, -5.0, 8.0]));
        approx_eq(mean_pressure(&sigma), 90.0, 1e-13);
        let sigma = tensor_from_voigt(&Vector::from(&[30.0, 0.0, 0.0, 0.0, 0.0, 0.0]));
        approx_eq(mean_pressure(&sigma), -10.0, 1e-15);
    }

    #[test]
    fn deviatoric_square_works() {
        let mut s = Tensor2::new(Mandel::Symmetric);
        s.sym_set(0, 0, 1.0);
        s.sym_set(1, 1, 2.0);
        s.sym_set(2, 2, -3.0);
        s.sym_set(0, 1, 4.0);
        s.sym_set(0, 2, 5.0);
        s.sym_set(1, 2, 6.0);
        let ss = deviatoric_square(&s);
        #[rustfmt::skip]
        let correct = [
            [42.0, 42.0, 14.0],
            [42.0, 56.0, 14.0],
            [14.0, 14.0, 70.0],
        ];
        for i in 0..3 {
            for j in 0..3 {
                approx_eq(ss.get(i, j), correct[i][j], 1e-13);
            }
        }
    }

    #[test]
    fn critical_state_shape_works() {
        // φ = 30° ⇒ sin(φ) = 1/2 ⇒ Z = 6/5 and μ = 35/9
        let (z, mu) = critical_state_shape(30.0);
        approx_eq(z, 1.2, 1e-15);
        approx_eq(mu, 35.0 / 9.0, 1e-14);

        // limiting isotropic case
        let (z, mu) = critical_state_shape(0.001);
        assert!(z > 0.0);
        approx_eq(z, 0.0, 1e-4);
        approx_eq(mu, 3.0, 1e-8);
        assert!(mu.is_finite());
    }

    #[test]
    fn normalized_invariants_work() {
        let inv = NormalizedInvariants::new(&Vector::from(&[-100.0, -100.0, -100.0, 0.0, 0.0, 0.0]));
        assert_eq!(inv.p, 100.0);
        assert_eq!(inv.j2_xi, 0.0);
        assert_eq!(inv.j3_xi, 0.0);
        assert_eq!(inv.s.norm(), 0.0);

        // triaxial state: s = diag(-30, 0, 30), p' = 90
        let inv = NormalizedInvariants::new(&Vector::from(&[-120.0, -90.0, -60.0, 0.0, 0.0, 0.0]));
        approx_eq(inv.p, 90.0, 1e-13);
        approx_eq(inv.j2_xi, 1800.0 / 8100.0, 1e-14);
        approx_eq(inv.j3_xi, 0.0, 1e-15);

        // triaxial extension: s = diag(2a, -a, -a) with a = 50/3, p' = 400/3
        let inv = NormalizedInvariants::new(&Vector::from(&[-100.0, -150.0, -150.0, 0.0, 0.0, 0.0]));
        let (a, p) = (50.0 / 3.0, 400.0 / 3.0);
        approx_eq(inv.p, p, 1e-13);
        approx_eq(inv.j2_xi, 6.0 * a * a / (p * p), 1e-14);
        approx_eq(inv.j3_xi, 3.0 * 2.0 * a * a * a / (p * p * p), 1e-14);
    }
}
