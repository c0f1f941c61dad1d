use serde::{Deserialize, Serialize};

use super::chart::ChartSpec;
use super::dto::{Region, SalesDashboardRequest, YEAR_MAX, YEAR_MIN};

/// Render tree of the whole sales dashboard page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    pub sidebar: Sidebar,
    pub tabs: Vec<Tab>,
}

impl DashboardView {
    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sidebar {
    pub title: String,
    pub region: RegionControl,
    pub period: PeriodControl,
    pub sellers: SellerControl,
}

impl Sidebar {
    /// Controls for a request snapshot. Region and period are fixed; only
    /// the seller list depends on fetched data.
    pub fn for_request(
        request: &SalesDashboardRequest,
        seller_options: Vec<String>,
        selected_sellers: Vec<String>,
    ) -> Self {
        Sidebar {
            title: "Filters".to_string(),
            region: RegionControl {
                label: "Region".to_string(),
                options: Region::ALL
                    .iter()
                    .map(|r| SelectOption {
                        value: r.code().to_string(),
                        label: r.label().to_string(),
                    })
                    .collect(),
                selected: request.region.code().to_string(),
            },
            period: PeriodControl {
                all_periods_label: "All periods data".to_string(),
                all_periods: request.all_periods,
                year_label: "Year".to_string(),
                year_min: YEAR_MIN,
                year_max: YEAR_MAX,
                year: request.year,
            },
            sellers: SellerControl {
                label: "Sellers".to_string(),
                options: seller_options,
                selected: selected_sellers,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionControl {
    pub label: String,
    pub options: Vec<SelectOption>,
    /// Code of the selected region
    pub selected: String,
}

/// "All periods" toggle plus the year slider it enables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodControl {
    pub all_periods_label: String,
    pub all_periods: bool,
    pub year_label: String,
    pub year_min: i32,
    pub year_max: i32,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerControl {
    pub label: String,
    /// Distinct sellers of the current fetch
    pub options: Vec<String>,
    /// Effective selection after dropping unknown names
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberInput {
    pub label: String,
    pub min: u32,
    pub max: u32,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub label: String,
    /// Top-N seller input shown above the columns
    pub top_n: Option<NumberInput>,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Column {
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "widget", content = "data", rename_all = "snake_case")]
pub enum Widget {
    Metric(Metric),
    Chart(ChartSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}
