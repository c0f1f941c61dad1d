//! Geometry helpers for the SVG charts

use contracts::dashboards::d100_sales::GeoBounds;

/// Maps a value domain linearly onto a pixel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Rounds up to 1, 2 or 5 times a power of ten
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// `count` intervals between 0 and max, both ends included
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    (0..=count)
        .map(|i| max * i as f64 / count as f64)
        .collect()
}

/// Start and width of band `index` when `count` bands share [start, end]
pub fn band(index: usize, count: usize, start: f64, end: f64, padding: f64) -> (f64, f64) {
    if count == 0 {
        return (start, 0.0);
    }
    let step = (end - start) / count as f64;
    let inner = step * (1.0 - padding);
    (start + step * index as f64 + (step - inner) / 2.0, inner)
}

/// Equirectangular projection of a coordinate into a width x height box
pub fn project(bounds: &GeoBounds, lat: f64, lon: f64, width: f64, height: f64) -> (f64, f64) {
    let x = LinearScale::new((bounds.lon_min, bounds.lon_max), (0.0, width)).map(lon);
    let y = LinearScale::new((bounds.lat_max, bounds.lat_min), (0.0, height)).map(lat);
    (x, y)
}

/// Closed SVG path through (lon, lat) vertices projected into the box
pub fn outline_path(
    bounds: &GeoBounds,
    outline: &[(f64, f64)],
    width: f64,
    height: f64,
) -> String {
    let mut d = String::new();
    for (i, &(lon, lat)) in outline.iter().enumerate() {
        let (x, y) = project(bounds, lat, lon, width, height);
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{}{:.1},{:.1} ", cmd, x, y));
    }
    if !d.is_empty() {
        d.push('Z');
    }
    d
}

/// Compact axis label: 1500 -> "1.5k", 2000000 -> "2M"
pub fn short_value(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (value / 1_000.0, "k")
    } else {
        (value, "")
    };
    let text = format!("{:.1}", scaled);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}{}", text, suffix)
}
