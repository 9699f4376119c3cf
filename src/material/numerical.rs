use russell_lab::{Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Specifies the finite difference scheme used for numerical derivatives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiniteDifference {
    /// One-sided difference: (h(x + ε eⱼ) - h(x)) / ε with ε = √(machine epsilon)
    Forward,

    /// Symmetric difference: (h(x + ε eⱼ) - h(x - ε eⱼ)) / 2ε with ε = ∛(machine epsilon)
    Central,
}

impl FiniteDifference {
    /// Returns the perturbation ε
    pub fn step(&self) -> f64 {
        match self {
            FiniteDifference::Forward => f64::sqrt(f64::EPSILON),
            FiniteDifference::Central => f64::cbrt(f64::EPSILON),
        }
    }
}

/// Returns a copy of x with the j-th component perturbed by delta
fn perturbed(x: &Vector, j: usize, delta: f64) -> Vector {
    let mut x_h = x.clone();
    x_h[j] += delta;
    x_h
}

/// Computes the Jacobian of a vector function by finite differences
///
/// Column j of the Jacobian holds the difference of `h` along the j-th component of `x`.
/// The callback is `h(out, x)`.
///
/// # Panics
///
/// A panic will occur if `jac` is not an `m×n` matrix with `n = x.dim()`.
pub fn fd_jacobian<F>(jac: &mut Matrix, method: FiniteDifference, x: &Vector, mut h: F)
where
    F: FnMut(&mut Vector, &Vector),
{
    let (m, n) = jac.dims();
    assert_eq!(n, x.dim());
    let eps = method.step();
    let mut h_a = Vector::new(m);
    let mut h_b = Vector::new(m);
    match method {
        FiniteDifference::Forward => {
            h(&mut h_b, x);
            for j in 0..n {
                h(&mut h_a, &perturbed(x, j, eps));
                for i in 0..m {
                    jac.set(i, j, (h_a[i] - h_b[i]) / eps);
                }
            }
        }
        FiniteDifference::Central => {
            for j in 0..n {
                h(&mut h_a, &perturbed(x, j, eps));
                h(&mut h_b, &perturbed(x, j, -eps));
                for i in 0..m {
                    jac.set(i, j, (h_a[i] - h_b[i]) / (2.0 * eps));
                }
            }
        }
    }
}

/// Computes the gradient of a scalar function by finite differences
///
/// # Panics
///
/// A panic will occur if `grad.dim() != x.dim()`.
pub fn fd_gradient<F>(grad: &mut Vector, method: FiniteDifference, x: &Vector, mut h: F)
where
    F: FnMut(&Vector) -> f64,
{
    let n = x.dim();
    assert_eq!(grad.dim(), n);
    let eps = method.step();
    match method {
        FiniteDifference::Forward => {
            let h_x = h(x);
            for j in 0..n {
                grad[j] = (h(&perturbed(x, j, eps)) - h_x) / eps;
            }
        }
        FiniteDifference::Central => {
            for j in 0..n {
                grad[j] = (h(&perturbed(x, j, eps)) - h(&perturbed(x, j, -eps))) / (2.0 * eps);
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
