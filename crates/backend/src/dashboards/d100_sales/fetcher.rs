use async_trait::async_trait;
use contracts::dashboards::d100_sales::{Region, SaleRecord};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use std::time::Duration;

use super::error::DashboardError;
use crate::shared::config::UpstreamConfig;

/// Source of sale records; region and year are filtered by the API
#[async_trait]
pub trait SalesSource: Send + Sync {
    async fn fetch_sales(
        &self,
        region: Region,
        year: Option<i32>,
    ) -> Result<Vec<SaleRecord>, DashboardError>;
}

/// HTTP client for the sales API
pub struct HttpSalesSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSalesSource {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl SalesSource for HttpSalesSource {
    async fn fetch_sales(
        &self,
        region: Region,
        year: Option<i32>,
    ) -> Result<Vec<SaleRecord>, DashboardError> {
        let year = year.map(|y| y.to_string()).unwrap_or_default();
        tracing::info!(
            "Sales API: GET {} (regiao='{}', ano='{}')",
            self.url,
            region.query_value(),
            year
        );

        let response = self
            .client
            .get(&self.url)
            .query(&[("regiao", region.query_value()), ("ano", year.as_str())])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DashboardError::Fetch(format!("request to {} timed out: {}", self.url, e))
                } else {
                    DashboardError::Fetch(format!("request to {} failed: {}", self.url, e))
                }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!("Sales API response: {} for {}", status, self.url);
            return Err(DashboardError::Fetch(format!(
                "HTTP {} from {}",
                status, self.url
            )));
        }

        let body = response.text().await?;
        let records = parse_sales(&body)?;
        tracing::info!("Sales API: got {} records", records.len());
        Ok(records)
    }
}

/// Decode the upstream JSON array, purchase dates included
pub fn parse_sales(body: &str) -> Result<Vec<SaleRecord>, DashboardError> {
    serde_json::from_str(body)
        .map_err(|e| DashboardError::Parse(format!("malformed sales payload: {}", e)))
}

static SALES_SOURCE: OnceCell<Arc<dyn SalesSource>> = OnceCell::new();

/// Install the process-wide source, once at startup
pub fn install_sales_source(source: Arc<dyn SalesSource>) -> anyhow::Result<()> {
    SALES_SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("sales source is already installed"))
}

pub fn sales_source() -> Result<Arc<dyn SalesSource>, DashboardError> {
    SALES_SOURCE
        .get()
        .cloned()
        .ok_or_else(|| DashboardError::Fetch("sales source is not initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales::fixtures::UPSTREAM_JSON;
    use axum::extract::Query;
    use axum::http::{header, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/produtos", addr)
    }

    fn source(url: String, timeout_secs: u64) -> HttpSalesSource {
        HttpSalesSource::new(&UpstreamConfig { url, timeout_secs }).unwrap()
    }

    type UpstreamResponse = (StatusCode, [(header::HeaderName, &'static str); 1], &'static str);

    async fn upstream(Query(params): Query<HashMap<String, String>>) -> UpstreamResponse {
        let json = [(header::CONTENT_TYPE, "application/json")];
        let regiao = params.get("regiao").map(String::as_str);
        let ano = params.get("ano").map(String::as_str);
        match (regiao, ano) {
            (Some("sudeste"), Some("2022")) | (Some(""), Some("")) => {
                (StatusCode::OK, json, UPSTREAM_JSON)
            }
            _ => (StatusCode::BAD_REQUEST, json, "[]"),
        }
    }

    #[test]
    fn test_parse_sales() {
        let records = parse_sales(UPSTREAM_JSON).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[2].purchase_date,
            NaiveDate::from_ymd_opt(2022, 1, 15).unwrap()
        );
        assert_eq!(records[2].state, "RJ");
    }

    #[test]
    fn test_parse_sales_errors() {
        assert!(matches!(parse_sales("not json"), Err(DashboardError::Parse(_))));
        assert!(matches!(
            parse_sales(r#"[{"Preço": 1.0}]"#),
            Err(DashboardError::Parse(_))
        ));
        assert!(matches!(
            parse_sales(r#"{"Preço": 1.0}"#),
            Err(DashboardError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_sends_region_and_year() {
        let url = serve(Router::new().route("/produtos", get(upstream))).await;
        let records = source(url, 5)
            .fetch_sales(Region::Southeast, Some(2022))
            .await
            .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].seller, "Bruno");
    }

    #[tokio::test]
    async fn test_fetch_without_filters_sends_empty_values() {
        let url = serve(Router::new().route("/produtos", get(upstream))).await;
        let records = source(url, 5).fetch_sales(Region::Brazil, None).await.unwrap();
        assert_eq!(records.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_bad_status_is_fetch_error() {
        let url = serve(Router::new().route("/produtos", get(upstream))).await;
        let err = source(url, 5)
            .fetch_sales(Region::North, Some(2021))
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Fetch(_)));
        assert!(err.to_string().contains("400"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_parse_error() {
        let router = Router::new().route("/produtos", get(|| async { "<html>oops</html>" }));
        let url = serve(router).await;
        let err = source(url, 5).fetch_sales(Region::Brazil, None).await.unwrap_err();
        assert!(matches!(err, DashboardError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let router = Router::new().route(
            "/produtos",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                "[]"
            }),
        );
        let url = serve(router).await;
        let err = source(url, 1).fetch_sales(Region::Brazil, None).await.unwrap_err();
        assert!(matches!(err, DashboardError::Fetch(_)));
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_is_fetch_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = source(format!("http://{}/produtos", addr), 5)
            .fetch_sales(Region::Brazil, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Fetch(_)));
    }
}
