use russell_lab::{approx_eq, mat_approx_eq, vec_approx_eq, Matrix, Vector};
use sinfonietta::material::{deviatoric_projector, voigt_identity, NormalizedInvariants};
use sinfonietta::prelude::*;

// Sinfonietta Classica under hydrostatic compression
//
// TEST GOAL
//
// Verifies the material-point functions at an isotropic stress state where
// all quantities have closed-form expressions.
//
// CONFIGURATION AND PARAMETERS
//
// E = 1e7, ν = 0.3, φ = 30°, β = 0.01, β_P = 0.02, κ = 0.1, P_c = 100, varP = 0
// σ = [-100, -100, -100, 0, 0, 0] ⇒ p' = 100
//
// With φ = 30°: sin(φ) = 1/2, Z = 6/5 and μ = 35/9; thus 3β(μ-3) = 0.08/3.

const P: f64 = 100.0;

// 3β(μ-3) computed by hand
const DF_DQ: f64 = 0.08 / 3.0;

// ln(100)
const LN_P: f64 = 4.605170185988092;

#[test]
fn test_sinfonietta_hydrostatic() -> Result<(), StrError> {
    // model
    let param = SampleParams::param_sinfonietta_classica();
    let mut model = PlasticityModel::new(&param, &Settings::new())?;
    let stress = Vector::from(&[-P, -P, -P, 0.0, 0.0, 0.0]);

    // invariants
    let inv = NormalizedInvariants::new(&stress);
    assert_eq!(inv.p, P);
    assert_eq!(inv.s.norm(), 0.0);
    assert_eq!(inv.j2_xi, 0.0);
    assert_eq!(inv.j3_xi, 0.0);

    // yield function
    for (q, correct) in [
        (0.0, 0.1228045382930158),
        (1.0, 0.1494712049596825),
        (-2.0, 0.0694712049596825),
    ] {
        approx_eq(DF_DQ * (LN_P + q), correct, 1e-15);
        approx_eq(model.actual.yield_function(&stress, q), correct, 1e-9);
    }

    // the default initial hardening variable puts the state on the yield surface
    let q0 = model.actual.q0();
    approx_eq(q0, -LN_P, 1e-15);
    approx_eq(model.actual.yield_function(&stress, q0), 0.0, 1e-15);

    // hardening
    approx_eq(model.actual.hardening_parameter(q0), 50.0, 1e-13);
    approx_eq(model.actual.df_dq(q0), DF_DQ, 1e-15);

    // gradients: purely isotropic
    let n = voigt_identity();
    let mut df = Vector::new(6);
    let mut dg = Vector::new(6);
    model.actual.df_dsigma(&mut df, &stress);
    model.actual.dg_dsigma(&mut dg, &stress);
    let mut df_correct = Vector::new(6);
    let mut dg_correct = Vector::new(6);
    for i in 0..6 {
        df_correct[i] = -DF_DQ / (3.0 * P) * n[i];
        dg_correct[i] = -(8.0 / 3.0) / P * n[i]; // -9(μ-3)/(3p') = -(8/3)/p'
    }
    vec_approx_eq(&df, &df_correct, 1e-15);
    vec_approx_eq(&dg, &dg_correct, 1e-15);

    // d²g/dσ² = (-(μ-3) n ⊗ n + (9/2)(μ-1) P_D) / p'²
    let pd = deviatoric_projector();
    let mut d2g_correct = Matrix::new(6, 6);
    for i in 0..6 {
        for j in 0..6 {
            let value = -(8.0 / 9.0) * n[i] * n[j] + 4.5 * (26.0 / 9.0) * pd.get(i, j);
            d2g_correct.set(i, j, value / (P * P));
        }
    }
    let mut d2g = Matrix::new(6, 6);
    model.actual.d2g_dsigma2(&mut d2g, &stress);
    mat_approx_eq(&d2g, &d2g_correct, 1e-8); // forward differences: roundoff ~ |dg| 1e-16/√ε

    // M = 9(μ-3)/p'
    approx_eq(model.actual.mm(&stress, q0), 0.08, 1e-15);

    // initial hardening variable
    for q0 in [-LN_P, 0.0, -1.25, 3.5] {
        model.actual.set_q0(q0);
        assert_eq!(model.actual.q0(), q0);
    }
    Ok(())
}

#[test]
fn test_sinfonietta_small_friction_angle() -> Result<(), StrError> {
    // Z → 0 and μ → 3 as φ → 0
    let settings = Settings::new();
    let model = SinfoniettaClassica::new(&settings, 1e7, 0.3, 0.01, 0.001, 0.02, 0.1, 100.0, 0.0);
    let (z, mu) = model.shape_parameters();
    approx_eq(z, 3.490678811757571e-5, 1e-12);
    approx_eq(mu, 3.0, 1e-8);

    // hence, the yield function barely depends on ln(p')
    let stress = Vector::from(&[-P, -P, -P, 0.0, 0.0, 0.0]);
    assert!(f64::abs(model.df_dq(0.0)) < 1e-10);
    assert!(f64::abs(model.yield_function(&stress, 0.0)) < 1e-9);

    // the same model through the factory
    let param = ParamPlasticity::sinfonietta_classica(1e7, 0.3, 0.01, 0.001, 0.02, 0.1);
    let model = PlasticityModel::new(&param, &settings)?;
    assert_eq!(model.actual.q0(), f64::INFINITY);
    Ok(())
}
