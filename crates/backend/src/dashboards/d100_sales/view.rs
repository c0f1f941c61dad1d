use contracts::dashboards::d100_sales::{
    Column, DashboardView, Metric, NumberInput, SalesDashboardRequest, Sidebar, Tab, Widget,
    TOP_N_MAX, TOP_N_MIN,
};
use contracts::shared::number_format::format_number;

use super::charts::DashboardCharts;

pub const PAGE_TITLE: &str = "SALES DASHBOARD";
pub const CURRENCY: &str = "R$";

pub const TAB_REVENUE: &str = "revenue";
pub const TAB_SALES_VOLUME: &str = "sales_volume";
pub const TAB_SELLERS: &str = "sellers";

/// Inputs of the view that come out of the pipeline
pub struct ViewData {
    pub seller_options: Vec<String>,
    pub selected_sellers: Vec<String>,
    pub total_revenue: f64,
    pub sales_count: usize,
    pub charts: DashboardCharts,
}

/// Lay out the page: sidebar of controls and three tabs of two columns each
pub fn render(request: &SalesDashboardRequest, data: ViewData) -> DashboardView {
    let revenue_metric = || {
        Widget::Metric(Metric {
            label: "Total revenue".to_string(),
            value: format_number(data.total_revenue, CURRENCY),
        })
    };
    let count_metric = || {
        Widget::Metric(Metric {
            label: "Sales count".to_string(),
            value: format_number(data.sales_count as f64, ""),
        })
    };
    let charts = &data.charts;

    let revenue_tab = Tab {
        id: TAB_REVENUE.to_string(),
        label: "Revenue".to_string(),
        top_n: None,
        columns: vec![
            Column {
                widgets: vec![
                    revenue_metric(),
                    Widget::Chart(charts.revenue_map.clone()),
                    Widget::Chart(charts.top_states.clone()),
                ],
            },
            Column {
                widgets: vec![
                    count_metric(),
                    Widget::Chart(charts.monthly_revenue.clone()),
                    Widget::Chart(charts.revenue_by_category.clone()),
                ],
            },
        ],
    };

    let volume_tab = Tab {
        id: TAB_SALES_VOLUME.to_string(),
        label: "Sales Volume".to_string(),
        top_n: None,
        columns: vec![
            Column {
                widgets: vec![revenue_metric()],
            },
            Column {
                widgets: vec![count_metric()],
            },
        ],
    };

    let sellers_tab = Tab {
        id: TAB_SELLERS.to_string(),
        label: "Sellers".to_string(),
        top_n: Some(NumberInput {
            label: "Number of sellers".to_string(),
            min: TOP_N_MIN,
            max: TOP_N_MAX,
            value: request.top_n() as u32,
        }),
        columns: vec![
            Column {
                widgets: vec![
                    revenue_metric(),
                    Widget::Chart(charts.top_sellers_revenue.clone()),
                ],
            },
            Column {
                widgets: vec![
                    count_metric(),
                    Widget::Chart(charts.top_sellers_count.clone()),
                ],
            },
        ],
    };

    DashboardView {
        title: PAGE_TITLE.to_string(),
        sidebar: Sidebar::for_request(
            request,
            data.seller_options.clone(),
            data.selected_sellers.clone(),
        ),
        tabs: vec![revenue_tab, volume_tab, sellers_tab],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales::aggregation::SalesTables;
    use crate::dashboards::d100_sales::fixtures::ten_sales;
    use contracts::dashboards::d100_sales::{ChartSpec, Region};

    fn view(request: &SalesDashboardRequest) -> DashboardView {
        let records = ten_sales();
        let tables = SalesTables::compute(&records);
        render(
            request,
            ViewData {
                seller_options: vec!["Ana".into(), "Bruno".into(), "Carla".into()],
                selected_sellers: vec![],
                total_revenue: 1325.0,
                sales_count: records.len(),
                charts: DashboardCharts::build(&tables, request.top_n()),
            },
        )
    }

    fn metric(widget: &Widget) -> &Metric {
        match widget {
            Widget::Metric(m) => m,
            other => panic!("expected metric, got {:?}", other),
        }
    }

    fn chart_title(widget: &Widget) -> &str {
        match widget {
            Widget::Chart(c) => c.title(),
            other => panic!("expected chart, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_of_tabs() {
        let view = view(&SalesDashboardRequest::default());
        assert_eq!(view.title, PAGE_TITLE);
        let labels: Vec<&str> = view.tabs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Revenue", "Sales Volume", "Sellers"]);
        assert!(view.tabs.iter().all(|t| t.columns.len() == 2));

        let revenue = view.tab(TAB_REVENUE).unwrap();
        assert_eq!(metric(&revenue.columns[0].widgets[0]).value, "R$ 1.32 thousand");
        assert_eq!(chart_title(&revenue.columns[0].widgets[1]), "Revenue by state");
        assert_eq!(
            chart_title(&revenue.columns[0].widgets[2]),
            "Ranking of states by revenue"
        );
        assert_eq!(metric(&revenue.columns[1].widgets[0]).value, "10.00 ");
        assert_eq!(chart_title(&revenue.columns[1].widgets[1]), "Monthly Revenue");
        assert_eq!(chart_title(&revenue.columns[1].widgets[2]), "Revenue by category");

        let volume = view.tab(TAB_SALES_VOLUME).unwrap();
        assert!(volume.top_n.is_none());
        assert_eq!(volume.columns[0].widgets.len(), 1);
        assert_eq!(volume.columns[1].widgets.len(), 1);
        assert_eq!(metric(&volume.columns[0].widgets[0]).label, "Total revenue");
        assert_eq!(metric(&volume.columns[1].widgets[0]).label, "Sales count");
    }

    #[test]
    fn test_sellers_tab_uses_top_n() {
        let request = SalesDashboardRequest {
            top_n: 3,
            ..Default::default()
        };
        let view = view(&request);
        let sellers = view.tab(TAB_SELLERS).unwrap();
        let input = sellers.top_n.as_ref().unwrap();
        assert_eq!((input.min, input.max, input.value), (2, 10, 3));
        assert_eq!(
            chart_title(&sellers.columns[0].widgets[1]),
            "Top 3 sellers (revenue)"
        );
        assert_eq!(
            chart_title(&sellers.columns[1].widgets[1]),
            "Top 3 sellers (sales count)"
        );
        assert!(matches!(sellers.columns[1].widgets[1], Widget::Chart(ChartSpec::Bar(_))));
    }

    #[test]
    fn test_sidebar_controls() {
        let request = SalesDashboardRequest {
            region: Region::Northeast,
            all_periods: false,
            year: 2022,
            ..Default::default()
        };
        let sidebar = view(&request).sidebar;
        assert_eq!(sidebar.region.options.len(), 6);
        assert_eq!(sidebar.region.options[0].label, "Brazil");
        assert_eq!(sidebar.region.selected, "northeast");
        assert!(!sidebar.period.all_periods);
        assert_eq!((sidebar.period.year_min, sidebar.period.year_max), (2020, 2023));
        assert_eq!(sidebar.period.year, 2022);
        assert_eq!(sidebar.sellers.options, vec!["Ana", "Bruno", "Carla"]);
    }
}
