//! Probability scale transforms.
//!
//! Conversions between probabilities, odds and log-odds, plus the logistic
//! sigmoid that maps log-odds back to probabilities.
//!
//! # Domains
//!
//! - [`odds`] and [`logit`] accept `p ∈ [0, 1)`. The upper bound is
//!   exclusive: `p = 1` has infinite odds and is rejected.
//! - [`logit_inverse`] accepts any finite real.
//!
//! Every scalar function has a slice counterpart (`*_all`) that validates
//! the whole input before computing anything and reports the index of the
//! first offending element.

use crate::error::{NumError, NumResult};

/// Cutoff below which `exp(x)` is evaluated directly in the sigmoid.
///
/// For `x < 0` the direct form `eˣ / (1 + eˣ)` cannot overflow, and for
/// `x ≥ 0` the form `1 / (1 + e⁻ˣ)` cannot overflow.
const SIGMOID_BRANCH: f64 = 0.0;

/// Computes the odds `p / (1 − p)` of a probability.
///
/// # Returns
/// - `Err(NumError::InvalidProbability)` if `p < 0`, `p ≥ 1` or `p` is NaN.
///
/// # Examples
/// ```
/// use u_numkit::probability::odds;
/// assert_eq!(odds(0.0).unwrap(), 0.0);
/// assert!((odds(0.75).unwrap() - 3.0).abs() < 1e-15);
/// assert!(odds(1.0).is_err());
/// assert!(odds(-1.0).is_err());
/// ```
pub fn odds(p: f64) -> NumResult<f64> {
    check_probability(p, None)?;
    Ok(p / (1.0 - p))
}

/// Element-wise [`odds`], preserving order and length.
///
/// # Returns
/// - `Err(NumError::InvalidProbability)` carrying the index of the first
///   element outside `[0, 1)`. No partial output is produced.
///
/// # Examples
/// ```
/// use u_numkit::probability::odds_all;
/// let o = odds_all(&[0.0, 0.5, 0.8]).unwrap();
/// assert_eq!(o.len(), 3);
/// assert!((o[1] - 1.0).abs() < 1e-15);
/// assert!((o[2] - 4.0).abs() < 1e-12);
/// ```
pub fn odds_all(p: &[f64]) -> NumResult<Vec<f64>> {
    for (i, &v) in p.iter().enumerate() {
        check_probability(v, Some(i))?;
    }
    Ok(p.iter().map(|&v| v / (1.0 - v)).collect())
}

/// Computes the log-odds `ln(p / (1 − p))`.
///
/// Delegates to [`odds`], so out-of-domain input is rejected rather than
/// producing the logarithm of a negative number. `logit(0)` is `−∞`.
///
/// # Examples
/// ```
/// use u_numkit::probability::logit;
/// assert_eq!(logit(0.5).unwrap(), 0.0);
/// assert_eq!(logit(0.0).unwrap(), f64::NEG_INFINITY);
/// assert!(logit(-0.2).is_err());
/// assert!(logit(1.3).is_err());
/// ```
pub fn logit(p: f64) -> NumResult<f64> {
    odds(p).map(f64::ln)
}

/// Element-wise [`logit`].
pub fn logit_all(p: &[f64]) -> NumResult<Vec<f64>> {
    let mut out = odds_all(p)?;
    for v in &mut out {
        *v = v.ln();
    }
    Ok(out)
}

/// Computes the logistic sigmoid `eˣ / (1 + eˣ)`, the inverse of [`logit`].
///
/// # Algorithm
/// Branches on the sign of `x` so that the exponential is always taken of a
/// non-positive argument. Large negative inputs underflow smoothly to `0`
/// and large positive inputs saturate at `1` without producing `inf / inf`.
///
/// # Returns
/// - `Err(NumError::NonFinite)` if `x` is NaN or infinite.
///
/// # Examples
/// ```
/// use u_numkit::probability::logit_inverse;
/// assert_eq!(logit_inverse(0.0).unwrap(), 0.5);
/// let near_one = logit_inverse(10.0).unwrap();
/// assert!(near_one < 1.0 && near_one > 0.9999);
/// assert!(logit_inverse(f64::INFINITY).is_err());
/// ```
///
/// Text is not a number and never reaches the function:
/// ```compile_fail
/// use u_numkit::probability::logit_inverse;
/// let _ = logit_inverse("a");
/// ```
pub fn logit_inverse(x: f64) -> NumResult<f64> {
    check_finite(x, None)?;
    Ok(sigmoid(x))
}

/// Element-wise [`logit_inverse`].
///
/// # Returns
/// - `Err(NumError::NonFinite)` carrying the index of the first NaN or
///   infinite element.
pub fn logit_inverse_all(x: &[f64]) -> NumResult<Vec<f64>> {
    for (i, &v) in x.iter().enumerate() {
        check_finite(v, Some(i))?;
    }
    Ok(x.iter().map(|&v| sigmoid(v)).collect())
}

fn sigmoid(x: f64) -> f64 {
    if x >= SIGMOID_BRANCH {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

fn check_probability(p: f64, index: Option<usize>) -> NumResult<()> {
    // NaN fails both comparisons, so test the accepted range instead.
    if (0.0..1.0).contains(&p) {
        Ok(())
    } else {
        tracing::debug!(value = p, ?index, "probability outside [0, 1)");
        Err(NumError::InvalidProbability { value: p, index })
    }
}

fn check_finite(x: f64, index: Option<usize>) -> NumResult<()> {
    if x.is_finite() {
        Ok(())
    } else {
        tracing::debug!(value = x, ?index, "non-finite input to logistic sigmoid");
        Err(NumError::NonFinite { value: x, index })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
