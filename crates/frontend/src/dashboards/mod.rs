pub mod d100_sales;

pub use d100_sales::ui::SalesDashboard;
