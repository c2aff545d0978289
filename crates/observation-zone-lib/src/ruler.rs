//! Fast local distance and bearing approximations
//!
//! A [`CheapRuler`] flattens the WGS84 ellipsoid around a reference latitude so that
//! distances, bearings and offsets become plain arithmetic. Accuracy is well under 0.1%
//! for distances below a few hundred kilometers, which covers any observation zone.

use crate::{Result, ZoneError};
use geo::Point;

/// WGS84 equatorial radius in kilometers
const RE: f64 = 6378.137;

/// WGS84 flattening
const FE: f64 = 1.0 / 298.257223563;

/// Eccentricity squared
const E2: f64 = FE * (2.0 - FE);

/// Precomputed constant: meters per degree at the equator, before ellipsoid correction
const M: f64 = std::f64::consts::PI / 180.0 * RE * 1000.0;

/// Planar distance calculator calibrated for one latitude
///
/// All distances are in meters and all bearings in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheapRuler {
    /// Meters per degree of longitude
    kx: f64,
    /// Meters per degree of latitude
    ky: f64,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl CheapRuler {
    /// Create a ruler for the given reference latitude (degrees)
    ///
    /// Fails at the poles, where a degree of longitude has no length and offsets
    /// cannot be computed.
    pub fn new(latitude: f64) -> Result<Self> {
        if !latitude.is_finite() || latitude.abs() >= 90.0 {
            return Err(ZoneError::GeometryComputation(format!(
                "ruler latitude must be strictly between the poles, got {latitude}"
            )));
        }

        let coslat = latitude.to_radians().cos();
        let w2 = 1.0 / (1.0 - E2 * (1.0 - coslat * coslat));
        let w = w2.sqrt();

        let kx = M * w * coslat;
        let ky = M * w * w2 * (1.0 - E2);

        Ok(Self { kx, ky })
    }

    /// Distance in meters between two points
    #[inline]
    pub fn distance(&self, a: Point<f64>, b: Point<f64>) -> f64 {
        let dx = wrap(a.x() - b.x()) * self.kx;
        let dy = (a.y() - b.y()) * self.ky;
        dx.hypot(dy)
    }

    /// Bearing in degrees from `a` to `b`, in the range (-180, 180]
    ///
    /// Zero means north and 90 means east. Identical points yield 0.
    #[inline]
    pub fn bearing(&self, a: Point<f64>, b: Point<f64>) -> f64 {
        let dx = wrap(b.x() - a.x()) * self.kx;
        let dy = (b.y() - a.y()) * self.ky;
        dx.atan2(dy).to_degrees()
    }

    /// Point at `distance` meters from `origin` along `bearing` degrees
    #[inline]
    pub fn destination(&self, origin: Point<f64>, distance: f64, bearing: f64) -> Point<f64> {
        let a = bearing.to_radians();
        self.offset(origin, a.sin() * distance, a.cos() * distance)
    }

    /// Point shifted by `dx` meters east and `dy` meters north
    #[inline]
    pub fn offset(&self, origin: Point<f64>, dx: f64, dy: f64) -> Point<f64> {
        Point::new(origin.x() + dx / self.kx, origin.y() + dy / self.ky)
    }
}

/// Wrap a longitude difference into [-180, 180]
///
/// Non-finite input stays non-finite (NaN).
#[inline(always)]
fn wrap(deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&deg) {
        deg
    } else {
        (deg + 180.0).rem_euclid(360.0) - 180.0
    }
}
