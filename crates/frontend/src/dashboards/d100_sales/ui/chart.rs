use contracts::dashboards::d100_sales::{
    BarChart, BarOrientation, ChartSpec, GeoScatterChart, LineChart,
};
use leptos::prelude::*;

use super::scale::{band, nice_max, outline_path, project, short_value, ticks, LinearScale};

const WIDTH: f64 = 520.0;
const HEIGHT: f64 = 340.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;
const TICK_COUNT: usize = 4;

/// Draws a chart spec as inline SVG
#[component]
pub fn ChartView(spec: ChartSpec) -> impl IntoView {
    let title = spec.title().to_string();
    let body = match spec {
        ChartSpec::GeoScatter(chart) => geo_scatter(chart).into_any(),
        ChartSpec::Line(chart) => line_chart(chart).into_any(),
        ChartSpec::Bar(chart) => bar_chart(chart).into_any(),
    };

    view! {
        <div class="d100-chart">
            <div class="d100-chart__title">{title}</div>
            {body}
        </div>
    }
}

fn plot_left() -> f64 {
    MARGIN_LEFT
}

fn plot_right() -> f64 {
    WIDTH - MARGIN_RIGHT
}

fn plot_top() -> f64 {
    MARGIN_TOP
}

fn plot_bottom() -> f64 {
    HEIGHT - MARGIN_BOTTOM
}

fn view_box() -> String {
    format!("0 0 {} {}", WIDTH, HEIGHT)
}

/// Axis titles: x below the plot, y rotated along the left edge
fn axis_titles(x_title: String, y_title: String) -> impl IntoView {
    let x = (plot_left() + plot_right()) / 2.0;
    let y = (plot_top() + plot_bottom()) / 2.0;
    view! {
        <text class="d100-chart__axis-title" x=x y={HEIGHT - 8.0} text-anchor="middle">
            {x_title}
        </text>
        <text
            class="d100-chart__axis-title"
            x=14.0
            y=y
            text-anchor="middle"
            transform={format!("rotate(-90 14 {})", y)}
        >
            {y_title}
        </text>
    }
}

fn bar_chart(chart: BarChart) -> impl IntoView {
    let max = nice_max(chart.max_value());
    let count = chart.bars.len();
    let horizontal = chart.orientation == BarOrientation::Horizontal;
    let format = chart.value_format;
    let text_auto = chart.text_auto;
    let color = chart.color.clone();

    let value_scale = if horizontal {
        LinearScale::new((0.0, max), (plot_left(), plot_right()))
    } else {
        LinearScale::new((0.0, max), (plot_bottom(), plot_top()))
    };

    let grid = ticks(max, TICK_COUNT)
        .into_iter()
        .map(|tick| {
            let pos = value_scale.map(tick);
            if horizontal {
                view! {
                    <line class="d100-chart__grid" x1=pos x2=pos y1=plot_top() y2=plot_bottom() />
                    <text
                        class="d100-chart__tick"
                        x=pos
                        y={plot_bottom() + 14.0}
                        text-anchor="middle"
                    >
                        {short_value(tick)}
                    </text>
                }
                .into_any()
            } else {
                view! {
                    <line class="d100-chart__grid" x1=plot_left() x2=plot_right() y1=pos y2=pos />
                    <text
                        class="d100-chart__tick"
                        x={plot_left() - 6.0}
                        y={pos + 4.0}
                        text-anchor="end"
                    >
                        {short_value(tick)}
                    </text>
                }
                .into_any()
            }
        })
        .collect_view();

    let bars = chart
        .bars
        .into_iter()
        .enumerate()
        .map(|(i, bar)| {
            let value_text = text_auto.then(|| format.format(bar.value));
            let color = color.clone();
            if horizontal {
                // first bar on top
                let (y, h) = band(i, count, plot_top(), plot_bottom(), 0.2);
                let x0 = value_scale.map(0.0);
                let w = value_scale.map(bar.value) - x0;
                view! {
                    <rect x=x0 y=y width=w height=h fill=color />
                    <text
                        class="d100-chart__tick"
                        x={x0 - 4.0}
                        y={y + h / 2.0 + 4.0}
                        text-anchor="end"
                    >
                        {bar.label}
                    </text>
                    <text
                        class="d100-chart__value d100-chart__value--inside"
                        x={x0 + w - 4.0}
                        y={y + h / 2.0 + 4.0}
                        text-anchor="end"
                    >
                        {value_text}
                    </text>
                }
                .into_any()
            } else {
                let (x, w) = band(i, count, plot_left(), plot_right(), 0.2);
                let y = value_scale.map(bar.value);
                let h = plot_bottom() - y;
                view! {
                    <rect x=x y=y width=w height=h fill=color />
                    <text
                        class="d100-chart__tick"
                        x={x + w / 2.0}
                        y={plot_bottom() + 14.0}
                        text-anchor="middle"
                    >
                        {bar.label}
                    </text>
                    <text
                        class="d100-chart__value"
                        x={x + w / 2.0}
                        y={y - 4.0}
                        text-anchor="middle"
                    >
                        {value_text}
                    </text>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <svg class="d100-chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
            {grid}
            {bars}
            {axis_titles(chart.x_title, chart.y_title)}
        </svg>
    }
}

fn line_chart(chart: LineChart) -> impl IntoView {
    let (y_min, y_max) = chart.y_range;
    let y_scale = LinearScale::new((y_min, y_max), (plot_bottom(), plot_top()));
    let categories = chart.categories.clone();
    let count = categories.len();
    let x_of = move |category: &str| -> f64 {
        let idx = categories.iter().position(|c| c == category).unwrap_or(0);
        let (x, w) = band(idx, count, plot_left(), plot_right(), 0.0);
        x + w / 2.0
    };

    let grid = ticks(y_max, TICK_COUNT)
        .into_iter()
        .map(|tick| {
            let y = y_scale.map(tick);
            view! {
                <line class="d100-chart__grid" x1=plot_left() x2=plot_right() y1=y y2=y />
                <text class="d100-chart__tick" x={plot_left() - 6.0} y={y + 4.0} text-anchor="end">
                    {short_value(tick)}
                </text>
            }
        })
        .collect_view();

    let x_labels = chart
        .categories
        .iter()
        .map(|c| {
            let x = x_of(c);
            // month names abbreviated on the axis
            let short: String = c.chars().take(3).collect();
            view! {
                <text class="d100-chart__tick" x=x y={plot_bottom() + 14.0} text-anchor="middle">
                    {short}
                </text>
            }
        })
        .collect_view();

    let markers = chart.markers;
    let lines = chart
        .series
        .iter()
        .map(|series| {
            let coords: Vec<(f64, f64)> = series
                .points
                .iter()
                .map(|p| (x_of(&p.x), y_scale.map(p.y)))
                .collect();
            let points = coords
                .iter()
                .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            let color = series.color.clone();
            let dots = markers.then(|| {
                coords
                    .iter()
                    .map(|(x, y)| {
                        view! { <circle cx={*x} cy={*y} r=3.5 fill=color.clone() /> }
                    })
                    .collect_view()
            });
            view! {
                <polyline
                    points=points
                    fill="none"
                    stroke=series.color.clone()
                    stroke-width=2.0
                    stroke-dasharray=series.dash.dasharray()
                />
                {dots}
            }
        })
        .collect_view();

    let legend = chart
        .series
        .iter()
        .map(|series| {
            let style = format!("color: {}", series.color);
            view! {
                <span class="d100-chart__legend-item" style=style>
                    "● "
                    {series.name.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="d100-chart__legend">{legend}</div>
        <svg class="d100-chart__svg" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
            {grid}
            {x_labels}
            {lines}
            {axis_titles(chart.x_title, chart.y_title)}
        </svg>
    }
}

fn geo_scatter(chart: GeoScatterChart) -> impl IntoView {
    let bounds = chart.scope.bounds();
    let width = 400.0;
    let height = width * (bounds.lat_max - bounds.lat_min) / (bounds.lon_max - bounds.lon_min);
    let land = land_path(&chart, width, height);

    let points = chart
        .points_in_scope()
        .map(|p| {
            let (x, y) = project(&bounds, p.lat, p.lon, width, height);
            let r = chart.marker_diameter(p.size) / 2.0;
            view! {
                <circle class="d100-chart__bubble" cx=x cy=y r=r />
                <text class="d100-chart__tick" x={x + r + 2.0} y={y + 4.0}>{p.label.clone()}</text>
            }
        })
        .collect_view();

    view! {
        <svg
            class="d100-chart__svg d100-chart__svg--geo"
            viewBox={format!("0 0 {} {}", width, height)}
            preserveAspectRatio="xMidYMid meet"
        >
            <rect class="d100-chart__geo-bg" x=0.0 y=0.0 width=width height=height />
            <path class="d100-chart__land" d=land />
            {points}
        </svg>
    }
}

/// Map layer under the markers: the scope's outline in chart pixels
fn land_path(chart: &GeoScatterChart, width: f64, height: f64) -> String {
    outline_path(&chart.scope.bounds(), chart.scope.outline(), width, height)
}
