//! Pointwise and special-value validation of the function under test.

use thiserror::Error;

/// Failure taxonomy for a conformance run. Every variant is fatal: the driver
/// aborts on the first one and nothing after it is evaluated.
///
/// Diagnostics carry actual and expected at 9 significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationFailure {
    /// The computed result differs from the reference by more than the
    /// entry's variance.
    #[error("sinhf({value}) returned {actual:.8e} when it should have returned {expected:.8e}")]
    ValueMismatch {
        value: f32,
        actual: f32,
        expected: f32,
    },
    /// A NaN input did not propagate to a NaN output.
    #[error("sinhf({value}) returned {actual:.8e} when it should have returned NaN")]
    NotNaN { value: f32, actual: f32 },
}

/// Check one `(value, expected, variance)` entry against `sinhf`.
///
/// `variance` must be non-negative. When `expected` is infinite the delta
/// would be `inf - inf = NaN`, which could mask a real mismatch, so the
/// comparison degenerates to exact same-value equality instead.
pub fn validate<F>(
    sinhf: &F,
    value: f32,
    expected: f32,
    variance: f32,
) -> Result<(), ValidationFailure>
where
    F: Fn(f32) -> f32,
{
    debug_assert!(variance >= 0.0, "variance must be non-negative");
    let actual = sinhf(value);
    let delta = if expected.is_infinite() {
        if actual == expected { 0.0 } else { f32::INFINITY }
    } else {
        (actual - expected).abs()
    };
    // Negated so a NaN delta (NaN actual against a finite expected) fails the
    // entry instead of falling through the comparison.
    if !(delta <= variance) {
        return Err(ValidationFailure::ValueMismatch {
            value,
            actual,
            expected,
        });
    }
    Ok(())
}

/// Check that `sinhf` propagates a NaN input to a NaN output.
pub fn validate_is_nan<F>(sinhf: &F, value: f32) -> Result<(), ValidationFailure>
where
    F: Fn(f32) -> f32,
{
    let actual = sinhf(value);
    if !actual.is_nan() {
        return Err(ValidationFailure::NotNaN { value, actual });
    }
    Ok(())
}
