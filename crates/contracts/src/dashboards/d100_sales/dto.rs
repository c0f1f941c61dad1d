use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Year slider bounds
pub const YEAR_MIN: i32 = 2020;
pub const YEAR_MAX: i32 = 2023;

/// Top-N seller input bounds
pub const TOP_N_MIN: u32 = 2;
pub const TOP_N_MAX: u32 = 10;
pub const TOP_N_DEFAULT: u32 = 5;

/// Upstream date format: "25/12/2022"
pub const PURCHASE_DATE_FORMAT: &str = "%d/%m/%Y";

/// One sale transaction as returned by the upstream products API.
///
/// Field names on the wire follow the upstream JSON; any extra upstream
/// fields (product name, freight, payment type, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "Data da Compra", with = "purchase_date")]
    pub purchase_date: NaiveDate,
    #[serde(rename = "Preço")]
    pub price: f64,
    #[serde(rename = "Categoria do Produto")]
    pub category: String,
    #[serde(rename = "Local da compra")]
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "Vendedor")]
    pub seller: String,
}

/// Parse a purchase date in DD/MM/YYYY order
pub fn parse_purchase_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), PURCHASE_DATE_FORMAT)
        .map_err(|e| format!("invalid purchase date '{}': {}", raw, e))
}

mod purchase_date {
    use super::{parse_purchase_date, PURCHASE_DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(PURCHASE_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_purchase_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Geographic grouping of states used as a coarse server-side filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Whole country, no filter
    #[default]
    Brazil,
    CentralWest,
    Northeast,
    North,
    Southeast,
    South,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Brazil,
        Region::CentralWest,
        Region::Northeast,
        Region::North,
        Region::Southeast,
        Region::South,
    ];

    /// Value for the upstream `regiao` query parameter (lower-cased, empty = all)
    pub fn query_value(&self) -> &'static str {
        match self {
            Region::Brazil => "",
            Region::CentralWest => "centro-oeste",
            Region::Northeast => "nordeste",
            Region::North => "norte",
            Region::Southeast => "sudeste",
            Region::South => "sul",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Brazil => "Brazil",
            Region::CentralWest => "Central-West",
            Region::Northeast => "Northeast",
            Region::North => "North",
            Region::Southeast => "Southeast",
            Region::South => "South",
        }
    }

    /// Stable code used by select controls (same as the serde name)
    pub fn code(&self) -> &'static str {
        match self {
            Region::Brazil => "brazil",
            Region::CentralWest => "central_west",
            Region::Northeast => "northeast",
            Region::North => "north",
            Region::Southeast => "southeast",
            Region::South => "south",
        }
    }

    pub fn from_code(code: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.code() == code)
    }
}

/// Snapshot of the dashboard controls for one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesDashboardRequest {
    pub region: Region,
    /// "All periods" toggle; when set the year slider is ignored
    pub all_periods: bool,
    /// Year slider value
    pub year: i32,
    /// Seller multi-select, empty = no filter
    pub sellers: Vec<String>,
    /// Number of sellers in the top-N charts
    pub top_n: u32,
}

impl Default for SalesDashboardRequest {
    fn default() -> Self {
        Self {
            region: Region::Brazil,
            all_periods: true,
            year: YEAR_MIN,
            sellers: Vec::new(),
            top_n: TOP_N_DEFAULT,
        }
    }
}

impl SalesDashboardRequest {
    /// Year passed upstream, None means all years
    pub fn year_filter(&self) -> Option<i32> {
        if self.all_periods {
            None
        } else {
            Some(self.year)
        }
    }

    /// Top-N clamped to the input bounds
    pub fn top_n(&self) -> usize {
        self.top_n.clamp(TOP_N_MIN, TOP_N_MAX) as usize
    }
}

/// Revenue per purchase state, with the coordinates of its first record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRevenue {
    pub state: String,
    pub lat: f64,
    pub lon: f64,
    pub revenue: f64,
}

/// Revenue per calendar month bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Last day of the month
    pub month_end: NaiveDate,
    pub revenue: f64,
    pub year: i32,
    /// English month name, e.g. "January"
    pub month: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub seller: String,
    pub revenue: f64,
    pub count: usize,
}

/// Error category reported to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Upstream unreachable or non-success status
    Fetch,
    /// Malformed upstream JSON or date field
    Parse,
    /// Nothing left to aggregate
    EmptyResult,
}

/// Error body returned by the dashboard endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}
