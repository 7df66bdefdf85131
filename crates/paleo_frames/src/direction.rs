//! Direction ↔ Cartesian conversion.
//!
//! Cartesian vectors use the paleomagnetic convention: x points north,
//! y points east, z points down. Declination is measured clockwise from
//! north in the horizontal plane; inclination is positive downward.

use std::str::FromStr;

use log::warn;

use crate::error::FrameError;
use crate::util::normalize_360;

/// A measured direction: declination, inclination and intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    /// Declination in degrees, conventionally [0, 360). Not validated.
    pub dec_deg: f64,
    /// Inclination in degrees, conventionally [-90, 90]. Not validated.
    pub inc_deg: f64,
    /// Vector length. Unit directions carry 1.0.
    pub intensity: f64,
}

impl Direction {
    /// All-zero sentinel returned by [`cart2dir_or_zero`] for a degenerate vector.
    pub const ZERO: Self = Self {
        dec_deg: 0.0,
        inc_deg: 0.0,
        intensity: 0.0,
    };

    /// Unit-intensity direction.
    pub fn new(dec_deg: f64, inc_deg: f64) -> Self {
        Self::with_intensity(dec_deg, inc_deg, 1.0)
    }

    pub fn with_intensity(dec_deg: f64, inc_deg: f64, intensity: f64) -> Self {
        Self {
            dec_deg,
            inc_deg,
            intensity,
        }
    }

    /// `[dec, inc, intensity]`.
    pub fn to_array(&self) -> [f64; 3] {
        [self.dec_deg, self.inc_deg, self.intensity]
    }
}

impl From<(f64, f64)> for Direction {
    fn from((dec_deg, inc_deg): (f64, f64)) -> Self {
        Self::new(dec_deg, inc_deg)
    }
}

impl TryFrom<&[f64]> for Direction {
    type Error = FrameError;

    /// Build from `[dec, inc]` or `[dec, inc, intensity]`.
    fn try_from(v: &[f64]) -> Result<Self, Self::Error> {
        match *v {
            [dec, inc] => Ok(Self::new(dec, inc)),
            [dec, inc, intensity] => Ok(Self::with_intensity(dec, inc, intensity)),
            _ => Err(FrameError::InvalidLength {
                expected: "2 or 3",
                found: v.len(),
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = FrameError;

    /// Parse `"dec,inc"` or `"dec,inc,intensity"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = parse_components(s)?;
        Self::try_from(values.as_slice())
    }
}

/// Build a cartesian vector from a 3-element slice.
pub fn cartesian_from_slice(v: &[f64]) -> Result<[f64; 3], FrameError> {
    match *v {
        [x, y, z] => Ok([x, y, z]),
        _ => Err(FrameError::InvalidLength {
            expected: "3",
            found: v.len(),
        }),
    }
}

/// Parse `"x,y,z"` into a cartesian vector.
pub fn parse_cartesian(s: &str) -> Result<[f64; 3], FrameError> {
    let values = parse_components(s)?;
    cartesian_from_slice(&values)
}

fn parse_components(s: &str) -> Result<Vec<f64>, FrameError> {
    s.split(',')
        .map(|part| part.trim().parse::<f64>().map_err(FrameError::from))
        .collect()
}

/// Convert a direction to cartesian `[x, y, z]` (north, east, down).
pub fn dir2cart(d: &Direction) -> [f64; 3] {
    let dec = d.dec_deg.to_radians();
    let inc = d.inc_deg.to_radians();
    let cos_inc = inc.cos();
    [
        d.intensity * dec.cos() * cos_inc,
        d.intensity * dec.sin() * cos_inc,
        d.intensity * inc.sin(),
    ]
}

/// Convert a batch of directions. Output has one vector per input row.
pub fn dir2cart_batch(dirs: &[Direction]) -> Vec<[f64; 3]> {
    dirs.iter().map(dir2cart).collect()
}

/// Convert plain numeric rows, each `[dec, inc]` or `[dec, inc, intensity]`.
///
/// All rows must share the length of the first row.
pub fn dir2cart_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<[f64; 3]>, FrameError> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let expected = first.as_ref().len();

    rows.iter()
        .enumerate()
        .map(|(row, r)| {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(FrameError::RaggedBatch {
                    row,
                    expected,
                    found: r.len(),
                });
            }
            Direction::try_from(r).map(|d| dir2cart(&d))
        })
        .collect()
}

/// Convert cartesian `[x, y, z]` to a direction.
///
/// Declination is wrapped into [0, 360). The intensity of the result is the
/// vector length. A zero-length vector has no direction and yields
/// [`FrameError::DegenerateVector`].
pub fn cart2dir(xyz: &[f64; 3]) -> Result<Direction, FrameError> {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return Err(FrameError::DegenerateVector { index: None });
    }

    Ok(Direction {
        dec_deg: normalize_360(y.atan2(x).to_degrees()),
        inc_deg: (z / r).asin().to_degrees(),
        intensity: r,
    })
}

/// Convert a batch of cartesian vectors.
///
/// Fails on the first zero-length row, reporting its index.
pub fn cart2dir_batch(vectors: &[[f64; 3]]) -> Result<Vec<Direction>, FrameError> {
    vectors
        .iter()
        .enumerate()
        .map(|(i, v)| {
            cart2dir(v).map_err(|e| match e {
                FrameError::DegenerateVector { .. } => {
                    FrameError::DegenerateVector { index: Some(i) }
                }
                other => other,
            })
        })
        .collect()
}

/// Like [`cart2dir`], but a zero-length vector yields [`Direction::ZERO`]
/// and a logged warning instead of an error.
pub fn cart2dir_or_zero(xyz: &[f64; 3]) -> Direction {
    cart2dir(xyz).unwrap_or_else(|e| {
        warn!("trouble in cart2dir: {e}; returning zero direction");
        Direction::ZERO
    })
}
