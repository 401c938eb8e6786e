use crate::error::{Error, Result};

/// Ordering of consecutive values in a slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonic {
    /// Every value is strictly greater than the one before
    Ascending,
    /// Every value is strictly less than the one before
    Descending,
    /// Fewer than two values, so trivially ordered either way
    Trivial,
    /// Direction changes, or two consecutive values are equal
    Neither,
}

impl Monotonic {
    /// True for anything that can be binary searched
    pub fn is_strict(&self) -> bool {
        !matches!(self, Monotonic::Neither)
    }
}

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use lutools_utils::SliceExt;
    /// # use lutools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f64::MIN, 2.2].try_min(), Ok(f64::MIN));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// The float primitives (`f32`/`f64`) do not implement `Ord` due to `NaN`
    /// being incomparable, so this uses `total_cmp` on the validated values.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// ```rust
    /// # use lutools_utils::SliceExt;
    /// # use lutools_utils::Error;
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    /// assert_eq!([1.1, f64::INFINITY].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Direction of a sequence of values
    ///
    /// Table levels must be strictly ordered one way or the other so that
    /// downstream consumers can binary search them. Equal neighbours break
    /// this, as does any NAN.
    ///
    /// ```rust
    /// # use lutools_utils::{Monotonic, SliceExt};
    /// assert_eq!([0.0, 0.5, 1.0].monotonicity(), Monotonic::Ascending);
    /// assert_eq!([1.0, 0.5, 0.0].monotonicity(), Monotonic::Descending);
    /// assert_eq!([0.0, 0.5, 0.5].monotonicity(), Monotonic::Neither);
    /// assert_eq!([0.0, 1.0, 0.5].monotonicity(), Monotonic::Neither);
    /// assert_eq!([0.3].monotonicity(), Monotonic::Trivial);
    /// ```
    fn monotonicity(&self) -> Monotonic;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .min_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .max_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn monotonicity(&self) -> Monotonic {
        if self.len() < 2 {
            return Monotonic::Trivial;
        }

        // comparisons with NAN are always false, so NAN falls through to Neither
        if self.windows(2).all(|w| w[0] < w[1]) {
            Monotonic::Ascending
        } else if self.windows(2).all(|w| w[0] > w[1]) {
            Monotonic::Descending
        } else {
            Monotonic::Neither
        }
    }
}
