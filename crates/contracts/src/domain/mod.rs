pub mod a001_sale;
pub mod common;
