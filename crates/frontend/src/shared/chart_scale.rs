//! Geometry shared by the SVG charts and the map

use std::f64::consts::TAU;

/// Category colors, the same order as the tableau10 scheme
pub const PALETTE: [&str; 10] = [
    "#4c78a8", "#f58518", "#e45756", "#72b7b2", "#54a24b", "#eeca3b", "#b279a2", "#ff9da6",
    "#9d755d", "#bab0ac",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Maps a numeric domain onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// SVG path for a pie slice. Angles in radians, clockwise from 12 o'clock.
pub fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let point = |a: f64| (cx + r * a.sin(), cy - r * a.cos());

    if end - start >= TAU - 1e-9 {
        // A single arc command cannot draw a full circle
        let (x0, y0) = point(0.0);
        let (x1, y1) = point(TAU / 2.0);
        return format!(
            "M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 1 1 {x1:.3} {y1:.3} A {r:.3} {r:.3} 0 1 1 {x0:.3} {y0:.3} Z"
        );
    }

    let (x0, y0) = point(start);
    let (x1, y1) = point(end);
    let large_arc = if end - start > TAU / 2.0 { 1 } else { 0 };
    format!(
        "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
    )
}

/// Latitude/longitude window shown by the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Roughly the territory of Poland
pub const POLAND: GeoBounds = GeoBounds {
    min_lat: 49.0,
    max_lat: 55.0,
    min_lon: 14.0,
    max_lon: 24.2,
};

impl GeoBounds {
    /// Widen to include every point, keeping a margin around the new edges
    pub fn including(self, points: &[(f64, f64)]) -> Self {
        let mut b = self;
        let margin = 0.5;
        for &(lat, lon) in points {
            if lat - margin < b.min_lat {
                b.min_lat = lat - margin;
            }
            if lat + margin > b.max_lat {
                b.max_lat = lat + margin;
            }
            if lon - margin < b.min_lon {
                b.min_lon = lon - margin;
            }
            if lon + margin > b.max_lon {
                b.max_lon = lon + margin;
            }
        }
        b
    }
}

/// Equirectangular projection of `bounds` onto a width x height canvas
#[derive(Debug, Clone, Copy)]
pub struct MapProjection {
    x: LinearScale,
    y: LinearScale,
}

impl MapProjection {
    pub fn new(bounds: GeoBounds, width: f64, height: f64) -> Self {
        Self {
            x: LinearScale::new((bounds.min_lon, bounds.max_lon), (0.0, width)),
            // north is up
            y: LinearScale::new((bounds.min_lat, bounds.max_lat), (height, 0.0)),
        }
    }

    pub fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        (self.x.apply(lon), self.y.apply(lat))
    }
}
