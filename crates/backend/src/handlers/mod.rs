pub mod a001_sale;
pub mod d001_sales_overview;
