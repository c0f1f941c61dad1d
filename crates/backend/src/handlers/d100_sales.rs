use axum::{http::StatusCode, Json};
use contracts::dashboards::d100_sales::{DashboardView, ErrorResponse, SalesDashboardRequest};

use crate::dashboards::d100_sales::{service, DashboardError};

/// POST /api/d100/sales_dashboard
pub async fn get_sales_dashboard(
    Json(request): Json<SalesDashboardRequest>,
) -> Result<Json<DashboardView>, (StatusCode, Json<ErrorResponse>)> {
    tracing::info!(
        "D100 Dashboard: region={}, year={:?}, sellers={}, top_n={}",
        request.region.label(),
        request.year_filter(),
        request.sellers.len(),
        request.top_n()
    );

    match service::get_sales_dashboard(request).await {
        Ok(view) => {
            tracing::info!(
                "D100 Dashboard: rendered {} tabs, {} seller options",
                view.tabs.len(),
                view.sidebar.sellers.options.len()
            );
            Ok(Json(view))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: failed to render: {}", e);
            Err((status_for(&e), Json(e.to_response())))
        }
    }
}

pub fn status_for(err: &DashboardError) -> StatusCode {
    match err {
        DashboardError::Fetch(_) | DashboardError::Parse(_) => StatusCode::BAD_GATEWAY,
        DashboardError::EmptyResult(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_sales::ErrorKind;

    #[test]
    fn test_status_for_errors() {
        assert_eq!(
            status_for(&DashboardError::Fetch("down".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&DashboardError::Parse("bad".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&DashboardError::EmptyResult("none".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_error_body() {
        let body = DashboardError::Parse("malformed sales payload".into()).to_response();
        assert_eq!(body.kind, ErrorKind::Parse);
        assert_eq!(body.message, "Parse error: malformed sales payload");
    }

    #[tokio::test]
    async fn test_uninitialized_source_is_bad_gateway() {
        let Err((status, Json(body))) =
            get_sales_dashboard(Json(SalesDashboardRequest::default())).await
        else {
            panic!("expected error without an installed sales source");
        };
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.kind, ErrorKind::Fetch);
    }
}
