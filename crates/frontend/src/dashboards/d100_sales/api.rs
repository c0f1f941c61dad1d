use contracts::dashboards::d100_sales::{DashboardView, ErrorResponse, SalesDashboardRequest};
use gloo_net::http::Request;

const API_BASE: &str = "/api/d100";

/// Fetch the sales dashboard for the current control values
pub async fn get_sales_dashboard(request: &SalesDashboardRequest) -> Result<DashboardView, String> {
    let url = format!("{}/sales_dashboard", API_BASE);

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        // backend reports pipeline failures as ErrorResponse
        return match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => Err(error.message),
            Err(_) if body.is_empty() => Err(format!("HTTP error: {}", status)),
            Err(_) => Err(format!("HTTP error: {}: {}", status, body)),
        };
    }

    response
        .json::<DashboardView>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
