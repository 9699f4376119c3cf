use russell_lab::{Matrix, Vector};
use russell_tensor::{Mandel, Tensor2};

/// Holds the (i,j) indices of the shear components in the Voigt vector
///
/// ```text
/// v = [ T00, T11, T22, T01, T02, T12 ]
/// ```
const SHEAR_IJ: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Holds the Voigt representation of the second-order identity tensor
///
/// ```text
/// n = [1, 1, 1, 0, 0, 0]
/// ```
pub const VOIGT_IDENTITY: [f64; 6] = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0];

/// Holds the deviatoric projector in Voigt representation
///
/// ```text
/// P_D = I - (1/3) n ⊗ n
/// ```
#[rustfmt::skip]
pub const VOIGT_P_DEV: [[f64; 6]; 6] = [
    [ 2.0/3.0, -1.0/3.0, -1.0/3.0, 0.0, 0.0, 0.0],
    [-1.0/3.0,  2.0/3.0, -1.0/3.0, 0.0, 0.0, 0.0],
    [-1.0/3.0, -1.0/3.0,  2.0/3.0, 0.0, 0.0, 0.0],
    [ 0.0,      0.0,      0.0,     1.0, 0.0, 0.0],
    [ 0.0,      0.0,      0.0,     0.0, 1.0, 0.0],
    [ 0.0,      0.0,      0.0,     0.0, 0.0, 1.0],
];

/// Converts a Voigt vector into a symmetric 3×3 tensor
///
/// The normal components `v[0..3]` go to the diagonal and `v[3]`, `v[4]`, `v[5]`
/// go to the (0,1), (0,2), (1,2) positions (and their symmetric counterparts).
///
/// # Panics
///
/// A panic will occur if `v.dim() != 6`.
pub fn tensor_from_voigt(v: &Vector) -> Tensor2 {
    assert_eq!(v.dim(), 6);
    let mut tt = Tensor2::new(Mandel::Symmetric);
    for i in 0..3 {
        tt.sym_set(i, i, v[i]);
    }
    for (m, (i, j)) in SHEAR_IJ.iter().enumerate() {
        tt.sym_set(*i, *j, v[3 + m]);
    }
    tt
}

/// Converts a symmetric 3×3 tensor into a Voigt vector
///
/// This is the inverse of [tensor_from_voigt()].
pub fn voigt_from_tensor(tt: &Tensor2) -> Vector {
    let mut v = Vector::new(6);
    for i in 0..3 {
        v[i] = tt.get(i, i);
    }
    for (m, (i, j)) in SHEAR_IJ.iter().enumerate() {
        v[3 + m] = tt.get(*i, *j);
    }
    v
}

/// Returns the deviatoric part of a tensor
///
/// ```text
/// dev(T) = T - (tr(T)/3) I
/// ```
pub fn deviatoric(tt: &Tensor2) -> Tensor2 {
    let mut dev = Tensor2::new(tt.mandel());
    tt.deviator(&mut dev);
    dev
}

/// Returns the deviatoric tensor corresponding to a Voigt vector
///
/// # Panics
///
/// A panic will occur if `v.dim() != 6`.
pub fn deviatoric_from_voigt(v: &Vector) -> Tensor2 {
    deviatoric(&tensor_from_voigt(v))
}

/// Returns the Voigt identity vector n
pub fn voigt_identity() -> Vector {
    Vector::from(&VOIGT_IDENTITY)
}

/// Returns the deviatoric projector P_D as a 6×6 matrix
pub fn deviatoric_projector() -> Matrix {
    Matrix::from(&VOIGT_P_DEV)
}

/// Projects a Voigt vector onto the deviatoric subspace
///
/// ```text
/// out = (vᵀ P_D)ᵀ
/// ```
///
/// # Panics
///
/// A panic will occur if `out.dim() != 6` or `v.dim() != 6`.
pub fn project_deviatoric(out: &mut Vector, v: &Vector) {
    assert_eq!(out.dim(), 6);
    assert_eq!(v.dim(), 6);
    for j in 0..6 {
        out[j] = 0.0;
        for i in 0..6 {
            out[j] += v[i] * VOIGT_P_DEV[i][j];
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
