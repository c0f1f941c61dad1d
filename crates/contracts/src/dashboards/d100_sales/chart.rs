//! Declarative chart specifications.
//!
//! The backend builds these from the summary tables; the frontend draws them.
//! Nothing here knows about a particular rendering engine.

use serde::{Deserialize, Serialize};

/// Colour sequence assigned to series in order
pub const SERIES_COLORS: [&str; 6] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    GeoScatter(GeoScatterChart),
    Line(LineChart),
    Bar(BarChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::GeoScatter(chart) => &chart.title,
            ChartSpec::Line(chart) => &chart.title,
            ChartSpec::Bar(chart) => &chart.title,
        }
    }
}

/// Map region a geo chart is clipped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoScope {
    SouthAmerica,
}

/// Lat/lon window of a geo scope
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBounds {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat)
            && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

/// Simplified South America coastline as (lon, lat), clockwise from the
/// Colombian Caribbean coast; the ring is closed implicitly
const SOUTH_AMERICA_OUTLINE: [(f64, f64); 56] = [
    (-77.4, 8.7),
    (-75.5, 10.6),
    (-71.6, 12.4),
    (-70.0, 11.5),
    (-68.2, 10.5),
    (-64.0, 10.6),
    (-61.6, 10.0),
    (-60.0, 8.5),
    (-57.1, 6.0),
    (-54.0, 5.8),
    (-51.6, 4.2),
    (-50.0, 1.8),
    (-48.5, -1.4),
    (-44.3, -2.5),
    (-38.5, -3.7),
    (-35.2, -5.8),
    (-34.8, -7.1),
    (-35.7, -9.7),
    (-38.5, -13.0),
    (-39.0, -17.9),
    (-40.3, -20.3),
    (-43.2, -22.9),
    (-46.3, -24.0),
    (-48.6, -27.6),
    (-50.2, -30.2),
    (-52.1, -32.1),
    (-53.4, -33.7),
    (-56.2, -34.9),
    (-57.5, -36.3),
    (-57.6, -38.2),
    (-62.3, -38.8),
    (-62.1, -40.6),
    (-65.0, -42.0),
    (-65.2, -44.6),
    (-67.5, -46.0),
    (-65.9, -47.8),
    (-69.2, -50.3),
    (-68.4, -52.4),
    (-68.6, -54.9),
    (-67.3, -55.9),
    (-70.5, -55.2),
    (-72.0, -54.5),
    (-74.7, -52.8),
    (-75.5, -48.0),
    (-74.0, -43.5),
    (-73.5, -37.0),
    (-71.6, -33.0),
    (-71.3, -29.9),
    (-70.4, -23.6),
    (-70.3, -18.4),
    (-76.2, -13.9),
    (-77.0, -12.0),
    (-79.0, -8.1),
    (-81.3, -4.6),
    (-80.1, -1.0),
    (-77.9, 7.2),
];

impl GeoScope {
    pub fn bounds(&self) -> GeoBounds {
        match self {
            GeoScope::SouthAmerica => GeoBounds {
                lat_min: -57.0,
                lat_max: 14.0,
                lon_min: -83.0,
                lon_max: -33.0,
            },
        }
    }

    /// Land outline drawn under the markers, as (lon, lat) vertices
    pub fn outline(&self) -> &'static [(f64, f64)] {
        match self {
            GeoScope::SouthAmerica => &SOUTH_AMERICA_OUTLINE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Hover label
    pub label: String,
    pub lat: f64,
    pub lon: f64,
    /// Value the marker area is proportional to
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoScatterChart {
    pub title: String,
    pub scope: GeoScope,
    /// Marker diameter in px for the largest point
    pub size_max: f64,
    pub points: Vec<GeoPoint>,
}

impl GeoScatterChart {
    /// Points that fall inside the scope's window
    pub fn points_in_scope(&self) -> impl Iterator<Item = &GeoPoint> + '_ {
        let bounds = self.scope.bounds();
        self.points.iter().filter(move |p| bounds.contains(p.lat, p.lon))
    }

    /// Marker diameter for a value, area proportional to the value
    pub fn marker_diameter(&self, size: f64) -> f64 {
        let max = self
            .points
            .iter()
            .map(|p| p.size)
            .fold(0.0_f64, f64::max);
        if max <= 0.0 || size <= 0.0 {
            return 0.0;
        }
        self.size_max * (size / max).sqrt()
    }
}

/// Stroke pattern of a line series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    Solid,
    Dot,
    Dash,
    LongDash,
    DashDot,
    LongDashDot,
}

impl LineDash {
    pub const SEQUENCE: [LineDash; 6] = [
        LineDash::Solid,
        LineDash::Dot,
        LineDash::Dash,
        LineDash::LongDash,
        LineDash::DashDot,
        LineDash::LongDashDot,
    ];

    /// SVG `stroke-dasharray` value
    pub fn dasharray(&self) -> &'static str {
        match self {
            LineDash::Solid => "none",
            LineDash::Dot => "2,4",
            LineDash::Dash => "8,4",
            LineDash::LongDash => "14,5",
            LineDash::DashDot => "8,4,2,4",
            LineDash::LongDashDot => "14,5,2,5",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// Category on the x axis
    pub x: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    pub dash: LineDash,
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// x categories in display order
    pub categories: Vec<String>,
    /// Forced y axis range (min, max)
    pub y_range: (f64, f64),
    pub markers: bool,
    pub series: Vec<LineSeries>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarOrientation {
    /// Labels on x, values on y
    Vertical,
    /// Values on x, labels on y
    Horizontal,
}

/// How bar values are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    Money,
    Count,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Money => format!("{:.2}", value),
            ValueFormat::Count => format!("{:.0}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarItem {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub orientation: BarOrientation,
    pub x_title: String,
    pub y_title: String,
    /// Print the value on each bar
    pub text_auto: bool,
    pub value_format: ValueFormat,
    pub color: String,
    pub bars: Vec<BarItem>,
}

impl BarChart {
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, lat: f64, lon: f64, size: f64) -> GeoPoint {
        GeoPoint {
            label: label.into(),
            lat,
            lon,
            size,
        }
    }

    #[test]
    fn test_marker_area_scales_with_value() {
        let chart = GeoScatterChart {
            title: "t".into(),
            scope: GeoScope::SouthAmerica,
            size_max: 20.0,
            points: vec![
                point("SP", -23.5, -46.6, 400.0),
                point("RJ", -22.9, -43.2, 100.0),
            ],
        };
        assert_eq!(chart.marker_diameter(400.0), 20.0);
        assert_eq!(chart.marker_diameter(100.0), 10.0);
        assert_eq!(chart.marker_diameter(0.0), 0.0);
    }

    #[test]
    fn test_points_outside_scope_are_dropped() {
        let chart = GeoScatterChart {
            title: "t".into(),
            scope: GeoScope::SouthAmerica,
            size_max: 20.0,
            points: vec![
                point("SP", -23.5, -46.6, 400.0),
                point("Lisbon", 38.7, -9.1, 50.0),
                point("Null Island", 0.0, 0.0, 10.0),
            ],
        };
        let labels: Vec<&str> = chart.points_in_scope().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["SP"]);
    }

    #[test]
    fn test_outline_fits_scope() {
        let scope = GeoScope::SouthAmerica;
        let bounds = scope.bounds();
        assert!(scope.outline().len() > 3);
        assert!(scope
            .outline()
            .iter()
            .all(|&(lon, lat)| bounds.contains(lat, lon)));
    }

    #[test]
    fn test_chart_spec_is_tagged() {
        let spec = ChartSpec::Bar(BarChart {
            title: "Revenue by category".into(),
            orientation: BarOrientation::Vertical,
            x_title: "Category".into(),
            y_title: "Revenue".into(),
            text_auto: true,
            value_format: ValueFormat::Money,
            color: SERIES_COLORS[0].into(),
            bars: vec![BarItem {
                label: "livros".into(),
                value: 10.0,
            }],
        });
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "bar");
        assert_eq!(json["orientation"], "vertical");
        assert_eq!(spec.title(), "Revenue by category");
    }

    #[test]
    fn test_value_format() {
        assert_eq!(ValueFormat::Money.format(1234.5), "1234.50");
        assert_eq!(ValueFormat::Count.format(12.0), "12");
    }
}
