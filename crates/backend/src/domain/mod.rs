pub mod a001_sale;
