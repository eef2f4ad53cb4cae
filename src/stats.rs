//! Running means and standard errors with numerical stability guarantees.
//!
//! # Algorithms
//!
//! - **Running sum**: Neumaier compensated summation, so the cumulative mean
//!   keeps O(ε) error independent of the prefix length.
//! - **Variance**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//!
//! # Missing values
//!
//! [`summary_stats`] treats `NaN` as a missing entry and
//! [`summary_stats_opt`] treats `None` as one. Missing entries are dropped
//! from both the mean and the count. Results that are undefined for the
//! remaining sample size come back as `NaN` rather than as an error.

use crate::error::{NumError, NumResult};

/// Computes the running mean of `data`.
///
/// Element `i` of the output is the mean of `data[0..=i]`.
///
/// # Complexity
/// Time: O(n), Space: O(n) for the output.
///
/// # Returns
/// - `Err(NumError::EmptyInput)` if `data` is empty.
///
/// Non-finite entries follow IEEE addition: after a NaN, or after both
/// `+∞` and `−∞`, every output is `NaN`; after infinities of one sign it is
/// that infinity. Finite input always yields finite output, even when the
/// running sum itself would overflow.
///
/// # Examples
/// ```
/// use u_numkit::stats::cummean;
/// let m = cummean(&[-2.0, -1.0, 0.0, 1.0, 2.0]).unwrap();
/// assert_eq!(m, vec![-2.0, -1.5, -1.0, -0.5, 0.0]);
/// ```
pub fn cummean(data: &[f64]) -> NumResult<Vec<f64>> {
    if data.is_empty() {
        tracing::debug!("cumulative mean of an empty sequence");
        return Err(NumError::EmptyInput);
    }
    let mut acc = NeumaierSum::new();
    // Overflow fallback; scaled before subtracting so it cannot overflow.
    let mut running = 0.0_f64;
    // Sum of the non-finite entries seen so far, zero while there are none.
    let mut non_finite = 0.0_f64;
    Ok(data
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let n = (i + 1) as f64;
            if x.is_finite() {
                acc.add(x);
                running += x / n - running / n;
            } else {
                non_finite += x;
            }
            if non_finite != 0.0 {
                return non_finite;
            }
            let mean = acc.total() / n;
            if mean.is_finite() {
                mean
            } else {
                running
            }
        })
        .collect())
}

/// Mean and standard error of the non-missing entries of a sample.
///
/// With the `serde` feature a `NaN` field is written as `null` and read back
/// as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStats {
    /// Arithmetic mean, `NaN` when `n == 0`.
    #[cfg_attr(feature = "serde", serde(with = "nan_as_null"))]
    pub mean: f64,
    /// Sample standard deviation over `√n`, `NaN` when `n < 2`.
    #[cfg_attr(feature = "serde", serde(with = "nan_as_null"))]
    pub std_error: f64,
    /// Number of non-missing entries.
    pub n: usize,
}

impl SummaryStats {
    /// Returns `(mean, std_error)`.
    pub fn as_pair(&self) -> (f64, f64) {
        (self.mean, self.std_error)
    }

    fn from_accumulator(acc: &WelfordAccumulator) -> Self {
        let n = acc.count() as usize;
        let mean = acc.mean().unwrap_or(f64::NAN);
        let std_error = acc
            .sample_std_dev()
            .map_or(f64::NAN, |sd| sd / (n as f64).sqrt());
        if std_error.is_nan() {
            tracing::trace!(n, "standard error undefined for sample");
        }
        Self { mean, std_error, n }
    }
}

/// Computes the mean and standard error, skipping `NaN` entries.
///
/// `std_error = s / √n` where `s` is the sample standard deviation
/// (`n − 1` denominator) and `n` counts the non-missing entries.
///
/// Never fails: with no usable entries both fields are `NaN`, and with a
/// single entry only `std_error` is `NaN`.
///
/// # Examples
/// ```
/// use u_numkit::stats::summary_stats;
/// let s = summary_stats(&[8.0, 0.0, -19.0, f64::NAN, f64::NAN, 3.0, 4.0]);
/// assert_eq!(s.n, 5);
/// assert!((s.mean - (-0.8)).abs() < 1e-12);
/// assert!(s.std_error > 0.0);
/// ```
pub fn summary_stats(data: &[f64]) -> SummaryStats {
    let mut acc = WelfordAccumulator::new();
    for &x in data.iter().filter(|x| !x.is_nan()) {
        acc.update(x);
    }
    SummaryStats::from_accumulator(&acc)
}

/// Computes the mean and standard error, skipping `None` entries.
///
/// Same semantics as [`summary_stats`] with missing values spelled as
/// `Option`. A `Some(NaN)` is not missing and poisons the result.
///
/// # Examples
/// ```
/// use u_numkit::stats::summary_stats_opt;
/// let s = summary_stats_opt(&[Some(1.0), None, Some(3.0)]);
/// assert_eq!(s.n, 2);
/// assert_eq!(s.mean, 2.0);
/// ```
pub fn summary_stats_opt(data: &[Option<f64>]) -> SummaryStats {
    let mut acc = WelfordAccumulator::new();
    for x in data.iter().flatten() {
        acc.update(*x);
    }
    SummaryStats::from_accumulator(&acc)
}

/// Standard error of the non-`NaN` entries of `data`.
///
/// # Returns
/// - `None` if fewer than two entries are present.
pub fn std_error(data: &[f64]) -> Option<f64> {
    let s = summary_stats(data);
    if s.n < 2 {
        None
    } else {
        Some(s.std_error)
    }
}

#[cfg(feature = "serde")]
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        let value = if value.is_nan() { None } else { Some(*value) };
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

// ---------------------------------------------------------------------------
// Neumaier compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// Maintains a running compensation variable `c`. At each step, the
/// branch ensures the smaller operand's low-order bits are captured.
/// Kept as running state so [`cummean`] can read every prefix total.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *Zeitschrift für Angewandte
/// Mathematik und Mechanik* 54(1), pp. 39–51.
#[derive(Debug, Clone, Copy, Default)]
struct NeumaierSum {
    sum: f64,
    c: f64,
}

impl NeumaierSum {
    fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.c += (self.sum - t) + x;
        } else {
            self.c += (x - t) + self.sum;
        }
        self.sum = t;
    }

    fn total(&self) -> f64 {
        self.sum + self.c
    }
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for mean and variance.
///
/// Computes the running mean and the sum of squared deviations in a single
/// pass with O(1) memory, avoiding the catastrophic cancellation of
/// `Var = E[X²] − (E[X])²`.
///
/// Reference: Welford (1962), *Technometrics* 4(3), pp. 419–420.
///
/// # Examples
/// ```
/// use u_numkit::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-15);
/// assert!((acc.sample_variance().unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a new sample into the accumulator.
    ///
    /// The first sample only initializes the mean, which avoids an
    /// intermediate `delta²` overflow for values near `1e166`.
    pub fn update(&mut self, value: f64) {
        let n1 = self.count;
        self.count += 1;

        if n1 == 0 {
            self.mean_acc = value;
            return;
        }

        let delta = value - self.mean_acc;
        let delta_n = delta / self.count as f64;
        self.m2 += delta * delta_n * n1 as f64;
        self.mean_acc += delta_n;
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean_acc)
        }
    }

    /// Returns the sample variance (n − 1 denominator), or `None` if fewer
    /// than 2 samples have been added.
    pub fn sample_variance(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some(self.m2 / (self.count - 1) as f64)
        }
    }

    /// Returns the sample standard deviation, or `None` if fewer than 2
    /// samples have been added.
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
