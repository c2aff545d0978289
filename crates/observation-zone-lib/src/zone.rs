//! Shared observation zone contract
//!
//! Every zone shape answers one question: does the directed track segment `c1 -> c2`
//! enter the zone? Zones are immutable and evaluation is pure, so the same zone can be
//! queried from many threads at once.

use crate::{Cylinder, Line, Result, utils};
use geo::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration used when building zone geometry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of vertices used to approximate a cylinder boundary (minimum 3).
    /// More vertices follow the true circle more closely at a small cost per check.
    /// Default: 64
    pub circle_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            circle_steps: utils::DEFAULT_CIRCLE_STEPS,
        }
    }
}

/// Where a track segment crosses a zone boundary
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Intersection {
    /// Crossing location (longitude, latitude)
    pub point: Point<f64>,
    /// The crossing lies strictly inside both the track segment and the boundary edge
    pub is_proper: bool,
    /// Index of the crossed boundary edge (always 0 for a line gate)
    pub boundary_edge: usize,
}

/// A geometric region or gate that a track must enter
pub trait ObservationZone {
    /// Reference coordinate of the zone
    fn center(&self) -> Point<f64>;

    /// Evaluate one directed track segment
    ///
    /// Returns the crossing point when the segment is a valid entry, `None` otherwise.
    /// Fails only if the inputs are not finite coordinates.
    fn check_enter(&self, c1: Point<f64>, c2: Point<f64>) -> Result<Option<Intersection>>;
}

/// Any supported zone shape
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Zone {
    Cylinder(Cylinder),
    Line(Line),
}

impl ObservationZone for Zone {
    fn center(&self) -> Point<f64> {
        match self {
            Zone::Cylinder(cylinder) => cylinder.center(),
            Zone::Line(line) => line.center(),
        }
    }

    fn check_enter(&self, c1: Point<f64>, c2: Point<f64>) -> Result<Option<Intersection>> {
        match self {
            Zone::Cylinder(cylinder) => cylinder.check_enter(c1, c2),
            Zone::Line(line) => line.check_enter(c1, c2),
        }
    }
}

impl From<Cylinder> for Zone {
    fn from(cylinder: Cylinder) -> Self {
        Zone::Cylinder(cylinder)
    }
}

impl From<Line> for Zone {
    fn from(line: Line) -> Self {
        Zone::Line(line)
    }
}
