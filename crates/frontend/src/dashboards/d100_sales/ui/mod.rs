pub mod chart;
pub mod dashboard;
pub mod scale;
pub mod sidebar;

pub use dashboard::SalesDashboard;
