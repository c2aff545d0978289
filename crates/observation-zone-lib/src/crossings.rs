//! Evaluate a whole sequence of track points against one zone
//!
//! These helpers only apply [`ObservationZone::check_enter`] to each consecutive pair of
//! points. They keep no memory between segments: deciding which entry counts for
//! scoring is up to the caller.

use crate::{Intersection, ObservationZone, Result};
use geo::Point;
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A qualifying entry found on one track segment
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    /// Index of the segment start point (the segment is `points[i] -> points[i + 1]`)
    pub segment_index: usize,
    /// Where the segment crossed the zone boundary
    pub intersection: Intersection,
}

/// Every entry along `points`, in track order
pub fn entries<Z>(zone: &Z, points: &[Point<f64>]) -> Result<Vec<Entry>>
where
    Z: ObservationZone + ?Sized,
{
    #[cfg(feature = "profiling")]
    profiling::scope!("crossings::entries");

    points
        .windows(2)
        .enumerate()
        .filter_map(|(segment_index, pair)| evaluate(zone, segment_index, pair).transpose())
        .collect()
}

/// Same as [`entries`], evaluating segments on the rayon thread pool
///
/// The result is identical to the sequential version, including order.
pub fn entries_parallel<Z>(zone: &Z, points: &[Point<f64>]) -> Result<Vec<Entry>>
where
    Z: ObservationZone + Sync + ?Sized,
{
    #[cfg(feature = "profiling")]
    profiling::scope!("crossings::entries_parallel");

    points
        .par_windows(2)
        .enumerate()
        .filter_map(|(segment_index, pair)| evaluate(zone, segment_index, pair).transpose())
        .collect()
}

/// The earliest entry along `points`, stopping at the first qualifying segment
pub fn first_entry<Z>(zone: &Z, points: &[Point<f64>]) -> Result<Option<Entry>>
where
    Z: ObservationZone + ?Sized,
{
    #[cfg(feature = "profiling")]
    profiling::scope!("crossings::first_entry");

    for (segment_index, pair) in points.windows(2).enumerate() {
        if let Some(entry) = evaluate(zone, segment_index, pair)? {
            return Ok(Some(entry));
        }
    }
    Ok(None)
}

#[inline]
fn evaluate<Z>(zone: &Z, segment_index: usize, pair: &[Point<f64>]) -> Result<Option<Entry>>
where
    Z: ObservationZone + ?Sized,
{
    Ok(zone
        .check_enter(pair[0], pair[1])?
        .map(|intersection| Entry {
            segment_index,
            intersection,
        }))
}
