//! Lambert W function, lower real branch (k = -1)
//!
//! The Lambert W function is the multivalued inverse of `f(w) = w·exp(w)`.
//! The cloud-base solution needs the k = -1 branch evaluated on the real
//! segment `[-1/e, 0)`, where it takes real values in `(-inf, -1]`. The
//! evaluation runs in the complex domain and the caller takes the real
//! part, so arguments perturbed off the axis by rounding stay well-defined.
//!
//! Accuracy: the Halley iteration is run to machine precision, a few
//! orders tighter than the 1e-10 relative tolerance the published
//! cloud-base reference values are checked against.
//!
//! # Scientific References
//! - Corless, R.M., Gonnet, G.H., Hare, D.E.G., Jeffrey, D.J., Knuth, D.E.
//!   (1996). "On the Lambert W function." Advances in Computational
//!   Mathematics, 5, 329-359.

use nalgebra::Complex;

/// Iteration cap; Halley converges cubically so this is never approached
/// for arguments on the physical segment
const MAX_ITERATIONS: usize = 48;

/// Evaluate the Lambert W function on the k = -1 branch.
///
/// For real `z` in `(-1/e, 0)` the result is real (zero imaginary part)
/// and `<= -1`. At the branch point `z = -1/e` the two real branches meet
/// at exactly -1. `W(-1)(0)` diverges; the physical caller never reaches
/// it because a zero vapor pressure short-circuits before the solve.
///
/// # Algorithm
/// Seed from the branch-point series near `-1/e`, otherwise from the
/// asymptotic logarithmic expansion of the requested branch, then polish
/// with Halley's method (Corless et al. 1996, §4).
#[must_use]
pub fn lambert_w_m1(z: Complex<f64>) -> Complex<f64> {
    let mut w = initial_guess(z);

    for _ in 0..MAX_ITERATIONS {
        let ew = w.exp();
        let resid = w * ew - z;
        if resid.norm() <= f64::EPSILON * z.norm() {
            break;
        }
        // Halley: dw = f / (f' - f·f'' / (2 f')), with f = w·e^w - z
        let wp1 = w + 1.0;
        let denom = ew * wp1 - (w + 2.0) * resid / (2.0 * wp1);
        let dw = resid / denom;
        w -= dw;
        if dw.norm() <= f64::EPSILON * w.norm() {
            break;
        }
    }

    w
}

/// Seed for the Halley iteration on the k = -1 branch.
fn initial_guess(z: Complex<f64>) -> Complex<f64> {
    let q = z * std::f64::consts::E + 1.0;
    if q.norm() < 0.05 {
        // Branch-point series, W = -1 + p - p²/3 + 11/72·p³ + O(p⁴),
        // with p = -sqrt(2(e·z + 1)) selecting the lower branch
        let p = -(2.0 * q).sqrt();
        return -1.0 + p - p * p / 3.0 + 11.0 / 72.0 * p * p * p;
    }

    // Asymptotic expansion W_k ≈ L1 - L2 + L2/L1,
    // L1 = Log(z) + 2πik, L2 = Log(L1), here with k = -1
    let l1 = z.ln() - Complex::new(0.0, 2.0 * std::f64::consts::PI);
    let l2 = l1.ln();
    l1 - l2 + l2 / l1
}
