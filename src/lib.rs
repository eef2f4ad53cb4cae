//! # u-numkit
//!
//! Small, pure numeric utilities for working on the probability scale and
//! summarizing short samples.
//!
//! Every function is stateless and side-effect free. Inputs outside a
//! function's domain are rejected with [`NumError`] before any computation;
//! results that are mathematically undefined for valid input come back as
//! `NaN`.
//!
//! ## Modules
//!
//! - [`probability`] — odds, log-odds and the logistic sigmoid
//! - [`stats`] — running mean, mean with standard error, missing-value aware
//! - [`geometry`] — trapezoid area
//! - [`error`] — the crate's error type
//!
//! ## Design Philosophy
//!
//! - **Half-open probability domain**: `odds` and `logit` accept `[0, 1)`
//! - **Numerical stability first**: branch-stable sigmoid, Neumaier
//!   summation for running sums, Welford's algorithm for variance
//! - **Property-based testing**: mathematical invariants verified via proptest
//!
//! ## Example
//!
//! ```
//! use u_numkit::{cummean, logit, logit_inverse, summary_stats, trapezoid_area};
//!
//! let p = 0.8;
//! let back = logit_inverse(logit(p)?)?;
//! assert!((back - p).abs() < 1e-12);
//!
//! assert_eq!(cummean(&[-2.0, -1.0, 0.0, 1.0, 2.0])?, vec![-2.0, -1.5, -1.0, -0.5, 0.0]);
//! assert_eq!(summary_stats(&[1.0, f64::NAN, 3.0]).n, 2);
//! assert_eq!(trapezoid_area(3.0, 5.0, 4.0), 16.0);
//! # Ok::<(), u_numkit::NumError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod probability;
pub mod stats;

pub use error::{NumError, NumResult};
pub use geometry::{trapezoid_area, Trapezoid};
pub use probability::{logit, logit_all, logit_inverse, logit_inverse_all, odds, odds_all};
pub use stats::{cummean, std_error, summary_stats, summary_stats_opt, SummaryStats};
