use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d100_sales::{
    CategoryRevenue, MonthlyRevenue, SaleRecord, SellerSummary, StateRevenue,
};
use std::collections::{BTreeMap, HashMap};

/// The four summary tables of one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct SalesTables {
    pub by_state: Vec<StateRevenue>,
    pub by_month: Vec<MonthlyRevenue>,
    pub by_category: Vec<CategoryRevenue>,
    pub sellers: Vec<SellerSummary>,
}

impl SalesTables {
    pub fn compute(records: &[SaleRecord]) -> Self {
        Self {
            by_state: revenue_by_state(records),
            by_month: revenue_by_month(records),
            by_category: revenue_by_category(records),
            sellers: seller_summary(records),
        }
    }
}

pub fn total_revenue(records: &[SaleRecord]) -> f64 {
    records.iter().map(|r| r.price).sum()
}

/// Revenue per state with the coordinates of the state's first record,
/// descending by revenue (ties keep first-seen order)
pub fn revenue_by_state(records: &[SaleRecord]) -> Vec<StateRevenue> {
    let mut rows: Vec<StateRevenue> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.state.as_str()) {
            Some(&i) => rows[i].revenue += record.price,
            None => {
                index.insert(record.state.as_str(), rows.len());
                rows.push(StateRevenue {
                    state: record.state.clone(),
                    lat: record.lat,
                    lon: record.lon,
                    revenue: record.price,
                });
            }
        }
    }

    sort_desc_by(&mut rows, |r| r.revenue);
    rows
}

/// Revenue per calendar month; only months with records, ascending
pub fn revenue_by_month(records: &[SaleRecord]) -> Vec<MonthlyRevenue> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in records {
        *buckets.entry(month_end(record.purchase_date)).or_insert(0.0) += record.price;
    }

    buckets
        .into_iter()
        .map(|(month_end, revenue)| MonthlyRevenue {
            month_end,
            revenue,
            year: month_end.year(),
            month: month_end.format("%B").to_string(),
        })
        .collect()
}

/// Revenue per product category, descending
pub fn revenue_by_category(records: &[SaleRecord]) -> Vec<CategoryRevenue> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *groups.entry(record.category.as_str()).or_insert(0.0) += record.price;
    }

    let mut rows: Vec<CategoryRevenue> = groups
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue {
            category: category.to_string(),
            revenue,
        })
        .collect();
    sort_desc_by(&mut rows, |r| r.revenue);
    rows
}

/// Sum and count of price per seller, in seller name order
pub fn seller_summary(records: &[SaleRecord]) -> Vec<SellerSummary> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.seller.as_str()).or_insert((0.0, 0));
        entry.0 += record.price;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(seller, (revenue, count))| SellerSummary {
            seller: seller.to_string(),
            revenue,
            count,
        })
        .collect()
}

pub fn top_sellers_by_revenue(sellers: &[SellerSummary], n: usize) -> Vec<SellerSummary> {
    let mut rows = sellers.to_vec();
    sort_desc_by(&mut rows, |r| r.revenue);
    rows.truncate(n);
    rows
}

pub fn top_sellers_by_count(sellers: &[SellerSummary], n: usize) -> Vec<SellerSummary> {
    let mut rows = sellers.to_vec();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows.truncate(n);
    rows
}

/// Last day of the date's month
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

// stable, so equal values keep their incoming order
fn sort_desc_by<T>(rows: &mut [T], key: impl Fn(&T) -> f64) {
    rows.sort_by(|a, b| key(b).total_cmp(&key(a)));
}
