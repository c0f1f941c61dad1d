pub mod aggregation;
pub mod charts;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod service;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::DashboardError;
