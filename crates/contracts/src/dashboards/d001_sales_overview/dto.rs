use crate::domain::a001_sale::aggregate::{Sale, SaleId};
use crate::domain::common::serde_date;
use serde::{Deserialize, Serialize};

/// Filter choice that disables product filtering
pub const ALL_PRODUCTS: &str = "Wszystkie";

/// Query for the sales overview dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    /// Product to keep; `None` or [`ALL_PRODUCTS`] keeps everything
    pub product: Option<String>,
}

impl SalesOverviewRequest {
    pub fn for_product(product: impl Into<String>) -> Self {
        Self {
            product: Some(product.into()),
        }
    }

    /// The selected product, or `None` when the sentinel is selected
    pub fn product_filter(&self) -> Option<&str> {
        match self.product.as_deref() {
            None | Some(ALL_PRODUCTS) => None,
            Some(p) => Some(p),
        }
    }

    pub fn selected(&self) -> String {
        self.product_filter().unwrap_or(ALL_PRODUCTS).to_string()
    }
}

/// Everything the dashboard page renders in one pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    /// The sentinel followed by distinct products present in storage
    #[serde(rename = "filterOptions")]
    pub filter_options: Vec<String>,
    /// Filter applied to produce the rows below
    pub selected: String,
    /// Filtered rows in storage order
    pub rows: Vec<Sale>,
    #[serde(rename = "valueBars")]
    pub value_bars: Vec<ValueBar>,
    #[serde(rename = "compositionArcs")]
    pub composition_arcs: Vec<CompositionArc>,
    #[serde(rename = "mapPoints")]
    pub map_points: Vec<MapPoint>,
}

/// One bar of the value chart, one per row that has both quantity and price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueBar {
    pub id: SaleId,
    /// Position on the temporal axis; `None` if the stored date is not a day
    #[serde(with = "serde_date::option")]
    pub day: Option<chrono::NaiveDate>,
    pub product: Option<String>,
    pub quantity: i64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub value: f64,
}

/// One arc of the composition chart, one per row with a quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionArc {
    pub id: SaleId,
    pub product: Option<String>,
    pub quantity: i64,
    /// Palette index, stable per product within one response
    #[serde(rename = "colorIndex")]
    pub color_index: usize,
    /// Radians, clockwise from 12 o'clock
    #[serde(rename = "startAngle")]
    pub start_angle: f64,
    #[serde(rename = "endAngle")]
    pub end_angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub id: SaleId,
    pub latitude: f64,
    pub longitude: f64,
}
