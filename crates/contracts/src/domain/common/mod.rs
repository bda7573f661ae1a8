//! Common types shared by all aggregates

pub mod serde_date;
