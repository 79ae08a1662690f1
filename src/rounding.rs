use crate::{astro_errors::AstroError, constants::MAX_DIGITS};

/// Magnitude above which every `f64` is already an integer (2^52).
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Round `value` to `digits` decimal places, half away from zero.
///
/// This is the spreadsheet `ROUND` convention: `2.5 → 3`, `-2.5 → -3`. Ties are decided on the
/// shortest decimal form of `value`, so `1.005` rounds to `1.01` even though its binary
/// approximation lies slightly below the tie.
///
/// Values that carry no digits below the requested precision (including non-finite values)
/// are returned unchanged.
///
/// Arguments
/// -----------------
/// * `value`: The number to round.
/// * `digits`: Number of decimal places to keep, at most [`MAX_DIGITS`].
///
/// Return
/// ----------
/// * The rounded value, or [`AstroError::InvalidPrecision`] if `digits` exceeds [`MAX_DIGITS`].
pub fn round_to(value: f64, digits: u32) -> Result<f64, AstroError> {
    check_digits(digits)?;
    let multiplier = 10_f64.powi(digits as i32);
    if !value.is_finite() || value.abs() >= EXACT_INTEGER_LIMIT / multiplier {
        return Ok(value);
    }

    Ok(shift_decimal(value, digits).round() / multiplier)
}

/// `value × 10^digits`, computed on the shortest decimal representation of `value`.
///
/// Multiplying in binary would turn `1.005 × 100` into `100.49999999999999`.
fn shift_decimal(value: f64, digits: u32) -> f64 {
    let repr = format!("{value:e}");
    repr.split_once('e')
        .and_then(|(mantissa, exponent)| {
            let exponent: i32 = exponent.parse().ok()?;
            format!("{mantissa}e{}", exponent + digits as i32).parse().ok()
        })
        .unwrap_or(value * 10_f64.powi(digits as i32))
}

/// Validate a requested digit count.
pub(crate) fn check_digits(digits: u32) -> Result<(), AstroError> {
    if digits > MAX_DIGITS {
        return Err(AstroError::InvalidPrecision(digits));
    }
    Ok(())
}

/// Reject a computed quantity that overflowed, underflowed to zero or turned non-positive.
pub(crate) fn check_representable(quantity: &'static str, value: f64) -> Result<f64, AstroError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AstroError::OutOfRange { quantity, value })
    }
}
