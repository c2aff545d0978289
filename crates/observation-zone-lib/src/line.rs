//! Line observation zone: a finite gate that only counts when crossed in one direction

use crate::ruler::CheapRuler;
use crate::zone::{Intersection, ObservationZone};
use crate::{Result, ZoneError, utils};
use geo::{LineString, Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Directed gate of `length` meters centered on `center`, perpendicular to `direction`
///
/// A crossing is an entry when the travel bearing is within ±90° of `direction`.
/// Travelling exactly perpendicular to `direction` still counts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    center: Point<f64>,
    /// Total gate width in meters
    length: f64,
    /// Heading (degrees) in which the gate triggers
    direction: f64,
    ruler: CheapRuler,
    /// The two gate endpoints, at `direction + 90` and `direction - 90`
    gate: LineString<f64>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Line {
    /// Create a gate of `length` meters through `center`, triggering on `direction` degrees
    pub fn new(center: Point<f64>, length: f64, direction: f64) -> Result<Self> {
        if !length.is_finite() || length <= 0.0 {
            tracing::warn!("Rejecting line with length {}", length);
            return Err(ZoneError::InvalidZoneGeometry(format!(
                "line length must be positive, got {length}"
            )));
        }
        if !direction.is_finite() {
            tracing::warn!("Rejecting line with direction {}", direction);
            return Err(ZoneError::InvalidZoneGeometry(format!(
                "line direction must be finite, got {direction}"
            )));
        }
        if utils::ensure_finite(center).is_err() {
            tracing::warn!("Rejecting line with non-finite center");
            return Err(ZoneError::InvalidZoneGeometry(format!(
                "line center must be finite, got ({}, {})",
                center.x(),
                center.y()
            )));
        }

        let ruler = CheapRuler::new(center.y())?;
        let p1 = ruler.destination(center, length / 2.0, direction + 90.0);
        let p2 = ruler.destination(center, length / 2.0, direction - 90.0);

        tracing::debug!(
            "Built line at ({}, {}): {} m wide, direction {}°",
            center.x(),
            center.y(),
            length,
            direction
        );

        Ok(Self {
            center,
            length,
            direction,
            ruler,
            gate: LineString::from(vec![p1, p2]),
        })
    }

    /// Total gate width in meters
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Heading in degrees that counts as entering
    #[inline]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Gate endpoints (`direction + 90` side first)
    #[inline]
    pub fn coordinates(&self) -> [Point<f64>; 2] {
        [Point(self.gate.0[0]), Point(self.gate.0[1])]
    }

    /// Whether travelling on `bearing` degrees counts as crossing in the gate direction
    ///
    /// Rejects headings strictly more than 90° away from `direction`.
    #[inline]
    pub fn accepts_heading(&self, bearing: f64) -> bool {
        let bearing_diff = utils::bearing_to_angle(self.direction - bearing);
        !(bearing_diff > 90.0 && bearing_diff < 270.0)
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl ObservationZone for Line {
    #[inline]
    fn center(&self) -> Point<f64> {
        self.center
    }

    fn check_enter(&self, c1: Point<f64>, c2: Point<f64>) -> Result<Option<Intersection>> {
        utils::ensure_finite(c1)?;
        utils::ensure_finite(c2)?;

        // Bearing is undefined without motion
        if c1 == c2 {
            return Ok(None);
        }

        let Some(&hit) = utils::segment_intersections(&self.gate, c1, c2).first() else {
            return Ok(None);
        };

        let bearing = self.ruler.bearing(c1, c2);
        if !self.accepts_heading(bearing) {
            tracing::debug!(
                "Wrong-way crossing of line at ({}, {}): bearing {:.1}°, expected {:.1}°",
                hit.point.x(),
                hit.point.y(),
                bearing,
                self.direction
            );
            return Ok(None);
        }

        tracing::trace!("Line entered at ({}, {})", hit.point.x(), hit.point.y());
        Ok(Some(hit))
    }
}
