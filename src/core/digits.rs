use crate::core::bounds::BoundingBox;
use crate::core::constants::RADIX;

/// Pulls the next base-26 digit off a running fraction.
///
/// The fraction is scaled by 26, its integer part clamped to `0..=25` becomes the digit,
/// and the residual is left in `frac` for the next step. Out-of-range, infinite and NaN
/// fractions all yield a digit in range.
pub fn next_digit(frac: &mut f64) -> usize {
    *frac *= RADIX as f64;
    let digit = frac.floor().clamp(0.0, (RADIX - 1) as f64) as usize;
    *frac -= digit as f64;
    digit
}

/// Converts a coordinate to interleaved base-26 digits.
///
/// Even positions are latitude digits and odd positions longitude digits, most significant
/// first. `code_length` digits are produced in total.
pub fn coord_to_digits(
    latitude: f64,
    longitude: f64,
    bounds: &BoundingBox,
    code_length: usize,
) -> Vec<usize> {
    let (mut frac_lat, mut frac_lon) = bounds.normalize(latitude, longitude);

    (0..code_length)
        .map(|i| {
            if i % 2 == 0 {
                next_digit(&mut frac_lat)
            } else {
                next_digit(&mut frac_lon)
            }
        })
        .collect()
}

/// Sums digits as a base-26 fraction: `Σ d_k / 26^(k+1)`.
pub fn digits_to_fraction(digits: impl IntoIterator<Item = usize>) -> f64 {
    let radix = RADIX as f64;
    let mut denom = 1.0;
    let mut total = 0.0;
    for digit in digits {
        denom *= radix;
        total += digit as f64 / denom;
    }
    total
}

/// Converts interleaved digits back to `(latitude, longitude)`.
///
/// The result is the south-west corner of the cell the digits name.
pub fn digits_to_coord(digits: &[usize], bounds: &BoundingBox) -> (f64, f64) {
    let norm_lat = digits_to_fraction(digits.iter().step_by(2).copied());
    let norm_lon = digits_to_fraction(digits.iter().skip(1).step_by(2).copied());
    bounds.denormalize(norm_lat, norm_lon)
}

/// Cell size in degrees `(lat, lon)` for a code of `code_length` digits.
pub fn cell_size(bounds: &BoundingBox, code_length: usize) -> (f64, f64) {
    let radix = RADIX as f64;
    let lat_digits = code_length.div_ceil(2) as i32;
    let lon_digits = (code_length / 2) as i32;
    (
        bounds.lat_span() / radix.powi(lat_digits),
        bounds.lon_span() / radix.powi(lon_digits),
    )
}
