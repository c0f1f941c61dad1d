use contracts::dashboards::d100_sales::{
    BarChart, BarItem, BarOrientation, CategoryRevenue, ChartSpec, GeoPoint, GeoScatterChart,
    GeoScope, LineChart, LineDash, LinePoint, LineSeries, MonthlyRevenue, SellerSummary,
    StateRevenue, ValueFormat, SERIES_COLORS,
};

use super::aggregation::{top_sellers_by_count, top_sellers_by_revenue, SalesTables};

pub const REVENUE_AXIS: &str = "Revenue";
/// States shown in the ranking bar chart
pub const TOP_STATES: usize = 5;
/// Largest geo marker diameter, px
pub const GEO_SIZE_MAX: f64 = 20.0;

/// All charts of one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    pub revenue_map: ChartSpec,
    pub monthly_revenue: ChartSpec,
    pub top_states: ChartSpec,
    pub revenue_by_category: ChartSpec,
    pub top_sellers_revenue: ChartSpec,
    pub top_sellers_count: ChartSpec,
}

impl DashboardCharts {
    pub fn build(tables: &SalesTables, top_n: usize) -> Self {
        Self {
            revenue_map: revenue_map(&tables.by_state),
            monthly_revenue: monthly_revenue(&tables.by_month),
            top_states: top_states(&tables.by_state),
            revenue_by_category: revenue_by_category(&tables.by_category),
            top_sellers_revenue: top_sellers_revenue(&tables.sellers, top_n),
            top_sellers_count: top_sellers_count(&tables.sellers, top_n),
        }
    }
}

pub fn revenue_map(states: &[StateRevenue]) -> ChartSpec {
    ChartSpec::GeoScatter(GeoScatterChart {
        title: "Revenue by state".to_string(),
        scope: GeoScope::SouthAmerica,
        size_max: GEO_SIZE_MAX,
        points: states
            .iter()
            .map(|s| GeoPoint {
                label: s.state.clone(),
                lat: s.lat,
                lon: s.lon,
                size: s.revenue,
            })
            .collect(),
    })
}

/// One line per year over month names, y axis pinned to [0, max month]
pub fn monthly_revenue(months: &[MonthlyRevenue]) -> ChartSpec {
    let mut categories: Vec<String> = Vec::new();
    let mut series: Vec<LineSeries> = Vec::new();

    for row in months {
        if !categories.contains(&row.month) {
            categories.push(row.month.clone());
        }

        let name = row.year.to_string();
        let idx = match series.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                let n = series.len();
                series.push(LineSeries {
                    name,
                    color: SERIES_COLORS[n % SERIES_COLORS.len()].to_string(),
                    dash: LineDash::SEQUENCE[n % LineDash::SEQUENCE.len()],
                    points: Vec::new(),
                });
                n
            }
        };
        series[idx].points.push(LinePoint {
            x: row.month.clone(),
            y: row.revenue,
        });
    }

    let y_max = months.iter().map(|m| m.revenue).fold(0.0_f64, f64::max);

    ChartSpec::Line(LineChart {
        title: "Monthly Revenue".to_string(),
        x_title: "Month".to_string(),
        y_title: REVENUE_AXIS.to_string(),
        categories,
        y_range: (0.0, y_max),
        markers: true,
        series,
    })
}

pub fn top_states(states: &[StateRevenue]) -> ChartSpec {
    bar_chart(
        "Ranking of states by revenue",
        BarOrientation::Vertical,
        ("State", REVENUE_AXIS),
        ValueFormat::Money,
        states
            .iter()
            .take(TOP_STATES)
            .map(|s| BarItem {
                label: s.state.clone(),
                value: s.revenue,
            })
            .collect(),
    )
}

pub fn revenue_by_category(categories: &[CategoryRevenue]) -> ChartSpec {
    bar_chart(
        "Revenue by category",
        BarOrientation::Vertical,
        ("Category", REVENUE_AXIS),
        ValueFormat::Money,
        categories
            .iter()
            .map(|c| BarItem {
                label: c.category.clone(),
                value: c.revenue,
            })
            .collect(),
    )
}

pub fn top_sellers_revenue(sellers: &[SellerSummary], top_n: usize) -> ChartSpec {
    bar_chart(
        &format!("Top {} sellers (revenue)", top_n),
        BarOrientation::Horizontal,
        (REVENUE_AXIS, "Seller"),
        ValueFormat::Money,
        top_sellers_by_revenue(sellers, top_n)
            .into_iter()
            .map(|s| BarItem {
                label: s.seller,
                value: s.revenue,
            })
            .collect(),
    )
}

pub fn top_sellers_count(sellers: &[SellerSummary], top_n: usize) -> ChartSpec {
    bar_chart(
        &format!("Top {} sellers (sales count)", top_n),
        BarOrientation::Horizontal,
        ("Sales", "Seller"),
        ValueFormat::Count,
        top_sellers_by_count(sellers, top_n)
            .into_iter()
            .map(|s| BarItem {
                label: s.seller,
                value: s.count as f64,
            })
            .collect(),
    )
}

fn bar_chart(
    title: &str,
    orientation: BarOrientation,
    (x_title, y_title): (&str, &str),
    value_format: ValueFormat,
    bars: Vec<BarItem>,
) -> ChartSpec {
    ChartSpec::Bar(BarChart {
        title: title.to_string(),
        orientation,
        x_title: x_title.to_string(),
        y_title: y_title.to_string(),
        text_auto: true,
        value_format,
        color: SERIES_COLORS[0].to_string(),
        bars,
    })
}
