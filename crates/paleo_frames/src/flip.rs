use crate::util::normalize_360;

/// Flip a lower-hemisphere direction to its antipode in the upper hemisphere.
///
/// If `inc_deg` is negative the inclination is negated and the declination
/// rotated by 180° into [0, 360). Otherwise the input is returned as-is.
pub fn doflip(dec_deg: f64, inc_deg: f64) -> (f64, f64) {
    if inc_deg < 0.0 {
        (normalize_360(dec_deg + 180.0), -inc_deg)
    } else {
        (dec_deg, inc_deg)
    }
}
