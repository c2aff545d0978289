//! Cylinder observation zone: a circle of fixed radius around a turnpoint

use crate::ruler::CheapRuler;
use crate::zone::{Config, Intersection, ObservationZone};
use crate::{Result, ZoneError, utils};
use geo::{Point, Polygon};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circular zone entered when a track segment crosses the boundary and ends inside
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cylinder {
    center: Point<f64>,
    /// Radius in meters
    radius: f64,
    /// Local distance calculator calibrated at the center latitude
    ruler: CheapRuler,
    /// Polygonal approximation of the boundary circle
    boundary: Polygon<f64>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Cylinder {
    /// Create a cylinder of `radius` meters around `center` with the default config
    pub fn new(center: Point<f64>, radius: f64) -> Result<Self> {
        Self::with_config(center, radius, &Config::default())
    }

    /// Create a cylinder using explicit geometry settings
    pub fn with_config(center: Point<f64>, radius: f64, config: &Config) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            tracing::warn!("Rejecting cylinder with radius {}", radius);
            return Err(ZoneError::InvalidZoneGeometry(format!(
                "cylinder radius must be positive, got {radius}"
            )));
        }
        if utils::ensure_finite(center).is_err() {
            tracing::warn!("Rejecting cylinder with non-finite center");
            return Err(ZoneError::InvalidZoneGeometry(format!(
                "cylinder center must be finite, got ({}, {})",
                center.x(),
                center.y()
            )));
        }

        let ruler = CheapRuler::new(center.y())?;
        let boundary = utils::circle_polygon(center, radius, config.circle_steps)?;

        tracing::debug!(
            "Built cylinder at ({}, {}) with radius {} m",
            center.x(),
            center.y(),
            radius
        );

        Ok(Self {
            center,
            radius,
            ruler,
            boundary,
        })
    }

    /// Radius in meters
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Polygon used for boundary crossing tests
    #[inline]
    pub fn boundary(&self) -> &Polygon<f64> {
        &self.boundary
    }

    /// Whether `coordinate` lies inside or on the circle, regardless of travel direction
    ///
    /// Non-finite coordinates are never inside.
    #[inline]
    pub fn is_inside(&self, coordinate: Point<f64>) -> bool {
        self.ruler.distance(coordinate, self.center) <= self.radius
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl ObservationZone for Cylinder {
    #[inline]
    fn center(&self) -> Point<f64> {
        self.center
    }

    fn check_enter(&self, c1: Point<f64>, c2: Point<f64>) -> Result<Option<Intersection>> {
        utils::ensure_finite(c1)?;
        utils::ensure_finite(c2)?;

        // No motion, no entry
        if c1 == c2 {
            return Ok(None);
        }

        let Some(&first) = utils::segment_intersections(self.boundary.exterior(), c1, c2).first()
        else {
            return Ok(None);
        };

        if !self.is_inside(c2) {
            tracing::debug!(
                "Segment crosses cylinder at ({}, {}) but ends outside",
                first.point.x(),
                first.point.y()
            );
            return Ok(None);
        }

        tracing::trace!(
            "Cylinder entered at ({}, {})",
            first.point.x(),
            first.point.y()
        );
        Ok(Some(first))
    }
}
