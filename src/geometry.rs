//! Plane figure areas.

use crate::error::{NumError, NumResult};

/// Area of a trapezoid: `((base_1 + base_2) / 2) × height`.
///
/// Performs no validation. Lengths are assumed positive; negative or
/// non-finite arguments give a meaningless but well-defined `f64`. Use
/// [`Trapezoid::new`] to have the lengths checked.
///
/// # Examples
/// ```
/// use u_numkit::geometry::trapezoid_area;
/// assert_eq!(trapezoid_area(3.0, 5.0, 4.0), 16.0);
/// ```
pub fn trapezoid_area(base_1: f64, base_2: f64, height: f64) -> f64 {
    ((base_1 + base_2) / 2.0) * height
}

/// A trapezoid with two parallel bases and a height, all finite and positive.
///
/// # Examples
/// ```
/// use u_numkit::geometry::Trapezoid;
/// let t = Trapezoid::new(3.0, 5.0, 4.0).unwrap();
/// assert_eq!(t.area(), 16.0);
/// assert!(Trapezoid::new(3.0, -5.0, 4.0).is_err());
/// ```
///
/// With the `serde` feature, deserialization goes through [`Trapezoid::new`]
/// and fails on the same lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTrapezoid"))]
pub struct Trapezoid {
    base_1: f64,
    base_2: f64,
    height: f64,
}

impl Trapezoid {
    /// Creates a trapezoid after checking every length.
    ///
    /// # Returns
    /// - `Err(NumError::InvalidLength)` naming the first length that is
    ///   zero, negative, NaN or infinite.
    pub fn new(base_1: f64, base_2: f64, height: f64) -> NumResult<Self> {
        check_length("base_1", base_1)?;
        check_length("base_2", base_2)?;
        check_length("height", height)?;
        Ok(Self {
            base_1,
            base_2,
            height,
        })
    }

    /// First parallel base.
    pub fn base_1(&self) -> f64 {
        self.base_1
    }

    /// Second parallel base.
    pub fn base_2(&self) -> f64 {
        self.base_2
    }

    /// Distance between the bases.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Area, see [`trapezoid_area`].
    pub fn area(&self) -> f64 {
        trapezoid_area(self.base_1, self.base_2, self.height)
    }
}

/// Unchecked wire form of [`Trapezoid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTrapezoid {
    base_1: f64,
    base_2: f64,
    height: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTrapezoid> for Trapezoid {
    type Error = NumError;

    fn try_from(raw: RawTrapezoid) -> NumResult<Self> {
        Self::new(raw.base_1, raw.base_2, raw.height)
    }
}

fn check_length(name: &'static str, value: f64) -> NumResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        tracing::debug!(name, value, "invalid trapezoid length");
        Err(NumError::InvalidLength { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trapezoid_area_known() {
        assert_eq!(trapezoid_area(3.0, 5.0, 4.0), 16.0);
        assert_eq!(trapezoid_area(2.0, 2.0, 3.0), 6.0);
    }

    #[test]
    fn test_trapezoid_area_argument_order() {
        assert_eq!(trapezoid_area(5.0, 3.0, 4.0), trapezoid_area(3.0, 5.0, 4.0));
    }

    #[test]
    fn test_trapezoid_area_unchecked() {
        // No validation on the free function.
        assert_eq!(trapezoid_area(-3.0, -5.0, 4.0), -16.0);
    }

    #[test]
    fn test_trapezoid_new_valid() {
        let t = Trapezoid::new(3.0, 5.0, 4.0).unwrap();
        assert_eq!(t.base_1(), 3.0);
        assert_eq!(t.base_2(), 5.0);
        assert_eq!(t.height(), 4.0);
        assert_eq!(t.area(), 16.0);
    }

    #[test]
    fn test_trapezoid_new_rejects_bad_lengths() {
        assert_eq!(
            Trapezoid::new(0.0, 5.0, 4.0),
            Err(NumError::InvalidLength {
                name: "base_1",
                value: 0.0
            })
        );
        assert!(matches!(
            Trapezoid::new(3.0, f64::INFINITY, 4.0),
            Err(NumError::InvalidLength { name: "base_2", .. })
        ));
        assert!(matches!(
            Trapezoid::new(3.0, 5.0, f64::NAN),
            Err(NumError::InvalidLength { name: "height", .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_trapezoid_serde() {
        let t = Trapezoid::new(3.0, 5.0, 4.0).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"base_1":3.0,"base_2":5.0,"height":4.0}"#);
        let back: Trapezoid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_trapezoid_deserialize_rejects_bad_lengths() {
        let json = r#"{"base_1":-3.0,"base_2":5.0,"height":-4.0}"#;
        let err = serde_json::from_str::<Trapezoid>(json).unwrap_err();
        assert!(
            err.to_string().contains("base_1 must be finite and positive"),
            "unexpected error: {err}"
        );
        let flat = r#"{"base_1":3.0,"base_2":5.0,"height":0.0}"#;
        assert!(serde_json::from_str::<Trapezoid>(flat).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        // --- a rectangle is a trapezoid with equal bases ---
        #[test]
        fn equal_bases_is_rectangle(b in 1e-3_f64..1e3, h in 1e-3_f64..1e3) {
            let area = trapezoid_area(b, b, h);
            prop_assert!((area - b * h).abs() < 1e-12 * (b * h).max(1.0));
        }

        // --- area is symmetric in the bases ---
        #[test]
        fn symmetric_in_bases(a in 1e-3_f64..1e3, b in 1e-3_f64..1e3, h in 1e-3_f64..1e3) {
            prop_assert_eq!(trapezoid_area(a, b, h), trapezoid_area(b, a, h));
        }

        // --- validated shapes have positive area ---
        #[test]
        fn validated_area_positive(a in 1e-3_f64..1e3, b in 1e-3_f64..1e3, h in 1e-3_f64..1e3) {
            let t = Trapezoid::new(a, b, h).unwrap();
            prop_assert!(t.area() > 0.0);
        }
    }
}
