use contracts::dashboards::d100_sales::{DashboardView, SaleRecord, SalesDashboardRequest};

use super::aggregation::{total_revenue, SalesTables};
use super::charts::DashboardCharts;
use super::error::DashboardError;
use super::fetcher::{sales_source, SalesSource};
use super::filter::{distinct_sellers, filter_by_sellers, retain_known_sellers};
use super::view::{self, ViewData};

/// Full render pass against the installed sales source
pub async fn get_sales_dashboard(
    request: SalesDashboardRequest,
) -> Result<DashboardView, DashboardError> {
    let source = sales_source()?;
    render_dashboard(source.as_ref(), &request).await
}

/// fetch → filter → aggregate → charts → view
pub async fn render_dashboard(
    source: &dyn SalesSource,
    request: &SalesDashboardRequest,
) -> Result<DashboardView, DashboardError> {
    let records = source
        .fetch_sales(request.region, request.year_filter())
        .await?;
    build_dashboard(request, records)
}

pub fn build_dashboard(
    request: &SalesDashboardRequest,
    records: Vec<SaleRecord>,
) -> Result<DashboardView, DashboardError> {
    let seller_options = distinct_sellers(&records);
    let selected_sellers = retain_known_sellers(&request.sellers, &seller_options);
    if selected_sellers.len() != request.sellers.len() {
        tracing::debug!(
            "D100 Dashboard: dropped {} unknown sellers from the selection",
            request.sellers.len() - selected_sellers.len()
        );
    }

    let records = filter_by_sellers(records, &selected_sellers);
    if records.is_empty() {
        return Err(DashboardError::EmptyResult(format!(
            "no sales for region '{}'{}",
            request.region.label(),
            request
                .year_filter()
                .map(|y| format!(" in {}", y))
                .unwrap_or_default()
        )));
    }

    let top_n = request.top_n();
    let tables = SalesTables::compute(&records);
    let charts = DashboardCharts::build(&tables, top_n);

    Ok(view::render(
        request,
        ViewData {
            seller_options,
            selected_sellers,
            total_revenue: total_revenue(&records),
            sales_count: records.len(),
            charts,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales::fixtures::ten_sales;
    use crate::dashboards::d100_sales::view::TAB_REVENUE;
    use async_trait::async_trait;
    use contracts::dashboards::d100_sales::{Region, Widget};
    use std::sync::Mutex;

    /// Records the filters it was asked for and returns a fixed record set
    struct FixtureSource {
        records: Vec<SaleRecord>,
        calls: Mutex<Vec<(Region, Option<i32>)>>,
    }

    impl FixtureSource {
        fn new(records: Vec<SaleRecord>) -> Self {
            Self {
                records,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SalesSource for FixtureSource {
        async fn fetch_sales(
            &self,
            region: Region,
            year: Option<i32>,
        ) -> Result<Vec<SaleRecord>, DashboardError> {
            self.calls.lock().unwrap().push((region, year));
            Ok(self.records.clone())
        }
    }

    fn count_metric(view: &DashboardView) -> String {
        match &view.tab(TAB_REVENUE).unwrap().columns[1].widgets[0] {
            Widget::Metric(m) => m.value.clone(),
            other => panic!("expected metric, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_render_passes_server_side_filters() {
        let source = FixtureSource::new(ten_sales());
        let request = SalesDashboardRequest {
            region: Region::Southeast,
            all_periods: false,
            year: 2022,
            ..Default::default()
        };
        render_dashboard(&source, &request).await.unwrap();

        let request = SalesDashboardRequest::default();
        render_dashboard(&source, &request).await.unwrap();

        assert_eq!(
            *source.calls.lock().unwrap(),
            vec![(Region::Southeast, Some(2022)), (Region::Brazil, None)]
        );
    }

    #[tokio::test]
    async fn test_seller_filter_applies_to_metrics() {
        let source = FixtureSource::new(ten_sales());
        let request = SalesDashboardRequest {
            sellers: vec!["Bruno".to_string()],
            ..Default::default()
        };
        let view = render_dashboard(&source, &request).await.unwrap();

        assert_eq!(count_metric(&view), "3.00 ");
        // options still come from the unfiltered fetch
        assert_eq!(view.sidebar.sellers.options.len(), 3);
        assert_eq!(view.sidebar.sellers.selected, vec!["Bruno"]);
    }

    #[test]
    fn test_unknown_sellers_are_dropped() {
        let request = SalesDashboardRequest {
            sellers: vec!["Ghost".to_string()],
            ..Default::default()
        };
        let view = build_dashboard(&request, ten_sales()).unwrap();
        assert!(view.sidebar.sellers.selected.is_empty());
        assert_eq!(count_metric(&view), "10.00 ");
    }

    #[test]
    fn test_empty_fetch_is_empty_result() {
        let request = SalesDashboardRequest {
            region: Region::North,
            all_periods: false,
            year: 2021,
            ..Default::default()
        };
        let err = build_dashboard(&request, Vec::new()).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyResult(_)));
        assert!(err.to_string().contains("North"));
        assert!(err.to_string().contains("2021"));
    }
}
