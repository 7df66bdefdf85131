//! Direction conversion and tilt correction for paleomagnetic and
//! paleocurrent measurements.
//!
//! Provides direction ↔ Cartesian conversion (single and batch forms),
//! bedding tilt correction and hemisphere flipping.

pub mod direction;
pub mod error;
pub mod flip;
pub mod tilt;
pub mod util;

pub use direction::{
    Direction, cart2dir, cart2dir_batch, cart2dir_or_zero, cartesian_from_slice, dir2cart,
    dir2cart_batch, dir2cart_rows, parse_cartesian,
};
pub use error::FrameError;
pub use flip::doflip;
pub use tilt::{BeddingAttitude, dotilt, dotilt_batch};
pub use util::normalize_360;
