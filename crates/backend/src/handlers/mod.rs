pub mod d100_sales;
