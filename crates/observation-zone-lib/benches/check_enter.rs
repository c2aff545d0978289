//! Performance benchmarks for observation-zone-lib
//!
//! Run with: cargo bench --package observation-zone-lib

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use geo::Point;
use gpx::{Gpx, Track, TrackSegment, Waypoint};
use observation_zone_lib::{CheapRuler, Config, Cylinder, Line, ObservationZone, crossings};

/// Build a GPX track that dives into `cylinder` `dives` times
///
/// Fixes alternate between 800 m and 100 m from the center, rotating the bearing
/// each time, so every outside-to-inside step is exactly one entry.
fn generate_diving_track(cylinder: &Cylinder, dives: usize) -> Gpx {
    let center = cylinder.center();
    let ruler = CheapRuler::new(center.y()).expect("valid latitude");

    let mut segment = TrackSegment::default();
    for i in 0..dives * 2 {
        let distance = if i % 2 == 0 { 800.0 } else { 100.0 };
        let bearing = (i as f64 * 37.0) % 360.0;
        let fix = ruler.destination(center, distance, bearing);
        segment.points.push(Waypoint::new(fix));
    }

    let mut track = Track::default();
    track.segments.push(segment);
    let mut gpx = Gpx::default();
    gpx.tracks.push(track);
    gpx
}

/// Flatten the GPX track into plain coordinates
fn track_points(gpx: &Gpx) -> Vec<Point<f64>> {
    gpx.tracks
        .iter()
        .flat_map(|t| t.segments.iter())
        .flat_map(|s| s.points.iter())
        .map(|w| w.point())
        .collect()
}

// ============================================================================
// Core Benchmarks - Key performance indicators
// ============================================================================

fn bench_single_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_enter");

    let center = Point::new(10.0, 50.0);
    let c1 = Point::new(10.0, 49.99);
    let c2 = Point::new(10.0005, 50.0001);

    for steps in [16, 64, 256] {
        let cylinder = Cylinder::with_config(center, 500.0, &Config { circle_steps: steps })
            .expect("valid cylinder");
        group.bench_with_input(BenchmarkId::new("cylinder", steps), &cylinder, |b, z| {
            b.iter(|| z.check_enter(c1, c2))
        });
    }

    let line = Line::new(center, 1000.0, 0.0).expect("valid line");
    group.bench_function("line", |b| b.iter(|| line.check_enter(c1, c2)));

    group.finish();
}

fn bench_track_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("track_scan");

    const DIVES: usize = 25_000;
    let cylinder = Cylinder::new(Point::new(10.0, 50.0), 500.0).expect("valid cylinder");
    let points = track_points(&generate_diving_track(&cylinder, DIVES));
    let found = crossings::entries(&cylinder, &points).expect("finite track");
    assert_eq!(found.len(), DIVES);
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| crossings::entries(&cylinder, &points))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| crossings::entries_parallel(&cylinder, &points))
    });

    group.finish();
}

criterion_group!(benches, bench_single_check, bench_track_scan);
criterion_main!(benches);
