pub mod api_utils;
pub mod chart_scale;
pub mod date_utils;
