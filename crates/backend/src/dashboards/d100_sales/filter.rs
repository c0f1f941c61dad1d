use contracts::dashboards::d100_sales::SaleRecord;
use std::collections::{BTreeSet, HashSet};

/// Sorted distinct seller names, the options of the seller multi-select
pub fn distinct_sellers(records: &[SaleRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.seller.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Drop selected sellers that the current fetch doesn't contain
pub fn retain_known_sellers(selected: &[String], options: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    selected
        .iter()
        .filter(|s| options.contains(*s) && seen.insert(s.as_str()))
        .cloned()
        .collect()
}

/// Keep rows whose seller is in `sellers`; an empty set keeps everything
pub fn filter_by_sellers(records: Vec<SaleRecord>, sellers: &[String]) -> Vec<SaleRecord> {
    if sellers.is_empty() {
        return records;
    }
    let wanted: HashSet<&str> = sellers.iter().map(String::as_str).collect();
    records
        .into_iter()
        .filter(|r| wanted.contains(r.seller.as_str()))
        .collect()
}
