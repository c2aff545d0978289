//! Observation Zone Library - Crossing Detection for Flight Task Validation
//!
//! This library decides whether one step of a GPS track (the directed segment between two
//! consecutive fixes) enters an observation zone of a gliding or paragliding task, and
//! where. Zones are immutable and every check is a pure function of the zone and the two
//! points, so tracks and zones can be evaluated in any order and on any thread.
//!
//! # Architecture
//!
//! - **[`ObservationZone`]**: Shared contract, `check_enter(c1, c2)`
//! - **[`Cylinder`]**: Circle around a turnpoint, entered when a segment crosses in and ends inside
//! - **[`Line`]**: Directed gate, entered when crossed within ±90° of its direction
//! - **[`Zone`]**: Tagged union of the shapes for heterogeneous task definitions
//! - **[`crossings`]**: Stateless helpers that scan a whole track against one zone
//!
//! Each zone owns a [`CheapRuler`] calibrated at its own center latitude, used for
//! local distances and bearings.

mod cylinder;
mod line;
mod ruler;
mod zone;
pub mod crossings;
pub mod utils;

// Public API exports
pub use crossings::Entry;
pub use cylinder::Cylinder;
pub use line::Line;
pub use ruler::CheapRuler;
pub use zone::{Config, Intersection, ObservationZone, Zone};

/// Error types for zone construction and evaluation
#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    #[error("Invalid zone geometry: {0}")]
    InvalidZoneGeometry(String),

    #[error("Geometry computation error: {0}")]
    GeometryComputation(String),
}

pub type Result<T> = std::result::Result<T, ZoneError>;
