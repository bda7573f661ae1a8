mod composition_chart;
mod dashboard;
mod entry_form;
mod form_model;
mod listing;
mod location_map;
mod value_chart;

pub use dashboard::SalesOverviewDashboard;
