use super::{deviatoric_square, project_deviatoric, tensor_from_voigt, voigt_from_tensor, voigt_identity};
use super::{critical_state_shape, fd_gradient, fd_jacobian, FiniteDifference, NormalizedInvariants};
use super::{PlasticityTrait, Settings, VOIGT_IDENTITY, VOIGT_P_DEV};
use russell_lab::{vec_inner, vec_norm, Matrix, Norm, Vector};
use russell_tensor::{LinElasticity, Mandel, Tensor2};

/// Implements the Sinfonietta Classica elastoplastic model
///
/// The yield function reads:
///
/// ```text
/// f = 3β(μ-3)(ln(p') + q) + (9/4)(μ-1) J2ξ + μ J3ξ
/// ```
///
/// where `ξ = dev(σ)/p'`, `J2ξ = ‖ξ‖²`, `J3ξ = 3 det(ξ)` and `p' = -tr(σ)/3`.
/// The plastic potential differs from f only in the isotropic coefficient,
/// which is `9(μ-3)` instead of `3β(μ-3)`.
///
/// **Note:** The shear derivatives are reported as tensor components, i.e.,
/// `(df/dσ)[3] = ∂f/∂σ₀₁` (not `∂f/∂σ₀₁ + ∂f/∂σ₁₀`).
pub struct SinfoniettaClassica {
    /// Bulk modulus K
    kk: f64,

    /// Shear modulus G
    gg: f64,

    /// Slope of the compression line β
    beta: f64,

    /// State parameter κ
    kappa: f64,

    /// Secondary state parameter varP
    var_p: f64,

    /// Critical-state shape parameter Z
    z: f64,

    /// Shape parameter μ
    mu: f64,

    /// Hardening modulus H = 1/β_P
    hh: f64,

    /// Initial value of the hardening variable
    q0: f64,

    /// Finite difference scheme for d²g/dσ² and dM/dσ
    finite_difference: FiniteDifference,
}

impl SinfoniettaClassica {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `young` -- Young's modulus E
    /// * `poisson` -- Poisson's coefficient ν
    /// * `beta` -- slope of the compression line β
    /// * `phi` -- friction angle φ in degrees
    /// * `beta_p` -- plastic compliance β_P
    /// * `kappa` -- state parameter κ
    /// * `pc` -- preconsolidation pressure P_c
    /// * `var_p` -- secondary state parameter varP
    pub fn new(
        settings: &Settings,
        young: f64,
        poisson: f64,
        beta: f64,
        phi: f64,
        beta_p: f64,
        kappa: f64,
        pc: f64,
        var_p: f64,
    ) -> Self {
        let (kk, gg) = LinElasticity::new(young, poisson, false, false).get_bulk_shear();
        let (z, mu) = critical_state_shape(phi);
        SinfoniettaClassica {
            kk,
            gg,
            beta,
            kappa,
            var_p,
            z,
            mu,
            hh: 1.0 / beta_p,
            q0: -f64::ln(pc),
            finite_difference: settings.finite_difference,
        }
    }

    /// Returns the shape parameters (Z, μ)
    pub fn shape_parameters(&self) -> (f64, f64) {
        (self.z, self.mu)
    }

    /// Calculates the stress gradient shared by the yield function and the plastic potential
    ///
    /// ```text
    /// d/dσ = -(1/3) (∂/∂p') n + P_D · ((9/2)(μ-1) s/p'² + 3μ s²/p'³)
    ///
    /// ∂/∂p' = a/p' - (9/2)(μ-1)‖s‖²/p'³ - 9μ det(s)/p'⁴
    /// ```
    ///
    /// where `a` is the isotropic coefficient.
    fn gradient(&self, out: &mut Vector, stress: &Vector, a: f64) {
        let inv = NormalizedInvariants::new(stress);
        let (p, mu) = (inv.p, self.mu);
        let (p2, p3) = (p * p, p * p * p);
        let norm_s = inv.s.norm();
        let det_s = inv.s.determinant();
        let d_dp = a / p - 4.5 * (mu - 1.0) * norm_s * norm_s / p3 - 9.0 * mu * det_s / (p3 * p);

        // deviatoric contribution
        let ss = deviatoric_square(&inv.s);
        let (c1, c2) = (4.5 * (mu - 1.0) / p2, 3.0 * mu / p3);
        let mut tt = Tensor2::new(Mandel::Symmetric);
        for i in 0..3 {
            for j in i..3 {
                tt.sym_set(i, j, c1 * inv.s.get(i, j) + c2 * ss.get(i, j));
            }
        }
        project_deviatoric(out, &voigt_from_tensor(&tt));

        // isotropic contribution
        for i in 0..6 {
            out[i] -= d_dp * VOIGT_IDENTITY[i] / 3.0;
        }
    }
}

impl PlasticityTrait for SinfoniettaClassica {
    /// Returns the hardening modulus (1/β_P, independent of q)
    fn hardening_parameter(&self, _q: f64) -> f64 {
        self.hh
    }

    /// Calculates the yield function f(σ, q)
    fn yield_function(&self, stress: &Vector, q: f64) -> f64 {
        let inv = NormalizedInvariants::new(stress);
        let mu = self.mu;
        3.0 * self.beta * (mu - 3.0) * (f64::ln(inv.p) + q) + 2.25 * (mu - 1.0) * inv.j2_xi + mu * inv.j3_xi
    }

    /// Calculates the derivative of the yield function w.r.t stress
    fn df_dsigma(&self, df_dsigma: &mut Vector, stress: &Vector) {
        self.gradient(df_dsigma, stress, 3.0 * self.beta * (self.mu - 3.0));
    }

    /// Calculates the derivative of the plastic potential w.r.t stress
    fn dg_dsigma(&self, dg_dsigma: &mut Vector, stress: &Vector) {
        self.gradient(dg_dsigma, stress, 9.0 * (self.mu - 3.0));
    }

    /// Calculates d²g/dσ² by finite differences of dg/dσ
    ///
    /// **Note:** The result is not symmetrized.
    fn d2g_dsigma2(&self, d2g_dsigma2: &mut Matrix, stress: &Vector) {
        fd_jacobian(d2g_dsigma2, self.finite_difference, stress, |dg, sigma| {
            self.dg_dsigma(dg, sigma)
        });
    }

    /// Calculates the derivative of the yield function w.r.t the hardening variable
    fn df_dq(&self, _q: f64) -> f64 {
        3.0 * self.beta * (self.mu - 3.0)
    }

    /// Calculates the dilatancy/hardening scalar M(σ, q)
    ///
    /// ```text
    /// M = -(dg/dσ)·n + κ ‖P_D·dg/dσ‖ + varP³ √det(P_D·dg/dσ)
    /// ```
    ///
    /// **Note:** The last term is only evaluated if varP ≠ 0. Otherwise, a negative
    /// determinant would turn the zero contribution into NaN.
    fn mm(&self, stress: &Vector, _q: f64) -> f64 {
        let mut dg = Vector::new(6);
        let mut dg_dev = Vector::new(6);
        self.dg_dsigma(&mut dg, stress);
        project_deviatoric(&mut dg_dev, &dg);
        let mut m = -vec_inner(&dg, &voigt_identity()) + self.kappa * vec_norm(&dg_dev, Norm::Euc);
        if self.var_p != 0.0 {
            m += f64::powi(self.var_p, 3) * f64::sqrt(tensor_from_voigt(&dg_dev).determinant());
        }
        m
    }

    /// Calculates dM/dσ by finite differences of M
    fn dmm_dsigma(&self, dmm_dsigma: &mut Vector, stress: &Vector, q: f64) {
        fd_gradient(dmm_dsigma, self.finite_difference, stress, |sigma| self.mm(sigma, q));
    }

    /// Returns the initial value of the hardening variable
    fn q0(&self) -> f64 {
        self.q0
    }

    /// Sets the initial value of the hardening variable
    fn set_q0(&mut self, q0: f64) {
        self.q0 = q0;
    }

    /// Calculates the elastic rigidity modulus
    ///
    /// ```text
    /// D = K n ⊗ n + 2G P_D  (normal block)
    /// D = G                 (shear diagonal; engineering shear strains)
    /// ```
    ///
    /// # Panics
    ///
    /// A panic will occur if `dde` is not 6×6.
    fn elastic_rigidity(&self, dde: &mut Matrix) {
        assert_eq!(dde.dims(), (6, 6));
        let (kk, gg) = (self.kk, self.gg);
        for i in 0..6 {
            for j in 0..6 {
                let value = if i < 3 && j < 3 {
                    kk * VOIGT_IDENTITY[i] * VOIGT_IDENTITY[j] + 2.0 * gg * VOIGT_P_DEV[i][j]
                } else if i == j {
                    gg
                } else {
                    0.0
                };
                dde.set(i, j, value);
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
