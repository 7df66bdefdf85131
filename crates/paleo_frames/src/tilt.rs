//! Bedding tilt correction.
//!
//! Rotates a direction measured in tilted strata back to its orientation
//! before the bed was tilted. The bed is described by its dip direction
//! (azimuth of steepest descent) and dip angle. The rotation is about the
//! strike line, applied in cartesian space between [`dir2cart`] and
//! [`cart2dir_or_zero`].

use crate::direction::{Direction, cart2dir_or_zero, dir2cart};

/// Orientation of a tilted bedding plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeddingAttitude {
    /// Dip direction azimuth in degrees.
    pub dip_direction_deg: f64,
    /// Dip angle in degrees. Zero is a flat bed.
    pub dip_deg: f64,
}

impl BeddingAttitude {
    pub fn new(dip_direction_deg: f64, dip_deg: f64) -> Self {
        Self {
            dip_direction_deg,
            dip_deg,
        }
    }

    /// Tilt-correct a single direction against this bed.
    pub fn tilt(&self, dec_deg: f64, inc_deg: f64) -> (f64, f64) {
        dotilt(dec_deg, inc_deg, self.dip_direction_deg, self.dip_deg)
    }
}

/// Tilt-correct `(dec, inc)` for a bed with dip direction `bed_az` and
/// dip `bed_dip`, all in degrees.
///
/// Returns the corrected `(dec, inc)` in degrees, declination in [0, 360).
/// A degenerate rotated vector yields `(0, 0)` with a logged warning.
pub fn dotilt(dec_deg: f64, inc_deg: f64, bed_az: f64, bed_dip: f64) -> (f64, f64) {
    let x = dir2cart(&Direction::new(dec_deg, inc_deg));

    let az = bed_az.to_radians();
    let dip = bed_dip.to_radians();
    let (sa, ca) = (-az.sin(), az.cos());
    let (cdp, sdp) = (dip.cos(), dip.sin());

    let xc = x[0] * (sa * sa + ca * ca * cdp) + x[1] * (ca * sa * (1.0 - cdp)) + x[2] * sdp * ca;
    let yc = x[0] * ca * sa * (1.0 - cdp) + x[1] * (ca * ca + sa * sa * cdp) - x[2] * sa * sdp;
    let zc = x[0] * ca * sdp - x[1] * sdp * sa - x[2] * cdp;

    // zc comes out up-positive; flip back to down-positive
    let d = cart2dir_or_zero(&[xc, yc, -zc]);
    (d.dec_deg, d.inc_deg)
}

/// Tilt-correct many `(dec, inc)` pairs against one bed.
pub fn dotilt_batch(dirs: &[(f64, f64)], bedding: &BeddingAttitude) -> Vec<(f64, f64)> {
    dirs.iter()
        .map(|&(dec, inc)| bedding.tilt(dec, inc))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn flat_bed_is_identity() {
        let (dec, inc) = dotilt(91.2, 43.1, 37.0, 0.0);
        assert!((dec - 91.2).abs() < EPS, "dec = {dec}");
        assert!((inc - 43.1).abs() < EPS, "inc = {inc}");
    }

    #[test]
    fn pmag_reference_value() {
        let (dec, inc) = dotilt(91.2, 43.1, 90.0, 20.0);
        assert!((dec - 90.952568837153436).abs() < EPS, "dec = {dec}");
        assert!((inc - 23.103411670066617).abs() < EPS, "inc = {inc}");
    }

    #[test]
    fn dip_direction_vector_flattens() {
        // A direction lying in the bed, pointing down-dip, rotates to horizontal.
        let (dec, inc) = dotilt(90.0, 30.0, 90.0, 30.0);
        assert!((dec - 90.0).abs() < EPS, "dec = {dec}");
        assert!(inc.abs() < EPS, "inc = {inc}");
    }

    #[test]
    fn strike_parallel_direction_unchanged() {
        // Strike of a bed dipping east is north-south; horizontal north stays put.
        let (dec, inc) = dotilt(0.0, 0.0, 90.0, 45.0);
        assert!(dec.abs() < EPS || (dec - 360.0).abs() < EPS, "dec = {dec}");
        assert!(inc.abs() < EPS, "inc = {inc}");
    }

    #[test]
    fn method_matches_free_function() {
        let bed = BeddingAttitude::new(135.0, 25.0);
        assert_eq!(bed.tilt(12.0, -40.0), dotilt(12.0, -40.0, 135.0, 25.0));
    }

    #[test]
    fn batch_matches_single() {
        let bed = BeddingAttitude::new(270.0, 60.0);
        let dirs = [(0.0, 10.0), (180.0, -45.0), (355.0, 89.0)];
        let out = dotilt_batch(&dirs, &bed);
        assert_eq!(out.len(), dirs.len());
        for (i, &(dec, inc)) in dirs.iter().enumerate() {
            assert_eq!(out[i], dotilt(dec, inc, 270.0, 60.0), "row {i}");
        }
    }
}
