//! Fixed lookup tables used by the sale entry form

use serde::{Deserialize, Serialize};

/// Products offered by the entry form, in display order
pub const PRODUCTS: [&str; 4] = ["Laptop", "Telefon", "Monitor", "Tablet"];

/// A city the form can attach to a sale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Cities offered by the entry form, in display order
pub const CITIES: [City; 5] = [
    City {
        name: "Warszawa",
        latitude: 52.2297,
        longitude: 21.0122,
    },
    City {
        name: "Kraków",
        latitude: 50.0647,
        longitude: 19.9450,
    },
    City {
        name: "Wrocław",
        latitude: 51.1079,
        longitude: 17.0385,
    },
    City {
        name: "Poznań",
        latitude: 52.4064,
        longitude: 16.9252,
    },
    City {
        name: "Gdańsk",
        latitude: 54.3520,
        longitude: 18.6466,
    },
];

pub const DEFAULT_QUANTITY: i64 = 1;
pub const DEFAULT_UNIT_PRICE: f64 = 1000.0;
pub const MIN_QUANTITY: i64 = 1;
pub const MIN_UNIT_PRICE: f64 = 1.0;

pub fn is_known_product(name: &str) -> bool {
    PRODUCTS.contains(&name)
}

pub fn find_city(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.name == name)
}

/// Owned copy of a city for the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityOption {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&City> for CityOption {
    fn from(c: &City) -> Self {
        Self {
            name: c.name.to_string(),
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

/// Choices and defaults the entry form is built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormOptions {
    pub products: Vec<String>,
    pub cities: Vec<CityOption>,
    #[serde(rename = "defaultQuantity")]
    pub default_quantity: i64,
    #[serde(rename = "defaultUnitPrice")]
    pub default_unit_price: f64,
    #[serde(rename = "minQuantity")]
    pub min_quantity: i64,
    #[serde(rename = "minUnitPrice")]
    pub min_unit_price: f64,
}

impl FormOptions {
    pub fn from_catalog() -> Self {
        Self {
            products: PRODUCTS.iter().map(|p| p.to_string()).collect(),
            cities: CITIES.iter().map(CityOption::from).collect(),
            default_quantity: DEFAULT_QUANTITY,
            default_unit_price: DEFAULT_UNIT_PRICE,
            min_quantity: MIN_QUANTITY,
            min_unit_price: MIN_UNIT_PRICE,
        }
    }
}
