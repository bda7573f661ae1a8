use super::catalog::{self, City, MIN_QUANTITY, MIN_UNIT_PRICE};
use crate::domain::common::serde_date;
use serde::{Deserialize, Serialize};

/// Id of a stored sale, assigned by the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(pub i64);

impl SaleId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

/// A recorded sale as read back from the store
///
/// The table validates nothing, and rows written outside this program may
/// carry NULL in any column. Such rows are still returned, with the missing
/// fields as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub product: Option<String>,
    pub quantity: Option<i64>,
    #[serde(rename = "unitPrice")]
    pub unit_price: Option<f64>,
    /// Stored text, not necessarily a valid date
    pub date: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Sale {
    /// quantity * unit_price, never stored; `None` if either is missing
    pub fn value(&self) -> Option<f64> {
        Some(self.quantity? as f64 * self.unit_price?)
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn day(&self) -> Option<chrono::NaiveDate> {
        self.date.as_deref().and_then(serde_date::parse)
    }
}

/// A sale ready to be inserted; the id is assigned on insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewSale {
    pub product: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub date: chrono::NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
}

// =============================================================================
// DTO
// =============================================================================

/// Entry form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDto {
    pub product: String,
    pub quantity: i64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    #[serde(with = "serde_date")]
    pub date: chrono::NaiveDate,
    pub city: String,
}

impl SaleDto {
    pub fn validate(&self) -> Result<(), String> {
        self.check_values()?;
        self.resolve_city().map(|_| ())
    }

    /// Validate and resolve the city to its coordinates
    pub fn into_new_sale(self) -> Result<NewSale, String> {
        self.check_values()?;
        let city = self.resolve_city()?;
        Ok(NewSale {
            latitude: city.latitude,
            longitude: city.longitude,
            product: self.product,
            quantity: self.quantity,
            unit_price: self.unit_price,
            date: self.date,
        })
    }

    fn check_values(&self) -> Result<(), String> {
        if !catalog::is_known_product(&self.product) {
            return Err(format!("Nieznany produkt: {}", self.product));
        }
        if self.quantity < MIN_QUANTITY {
            return Err(format!("Ilość musi wynosić co najmniej {}", MIN_QUANTITY));
        }
        if !self.unit_price.is_finite() || self.unit_price < MIN_UNIT_PRICE {
            return Err(format!(
                "Cena jednostkowa musi wynosić co najmniej {:.1}",
                MIN_UNIT_PRICE
            ));
        }
        Ok(())
    }

    fn resolve_city(&self) -> Result<&'static City, String> {
        catalog::find_city(&self.city).ok_or_else(|| format!("Nieznane miasto: {}", self.city))
    }
}

/// Acknowledgement returned after a successful insert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreated {
    pub id: SaleId,
    pub message: String,
}

pub const SALE_CREATED_MESSAGE: &str = "Sprzedaż została dodana!";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dto(city: &str) -> SaleDto {
        SaleDto {
            product: "Laptop".into(),
            quantity: 2,
            unit_price: 1000.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            city: city.into(),
        }
    }

    #[test]
    fn test_value_is_quantity_times_price() {
        let s = Sale {
            id: SaleId(1),
            product: Some("Monitor".into()),
            quantity: Some(3),
            unit_price: Some(899.99),
            date: Some("2024-05-01".into()),
            latitude: None,
            longitude: None,
        };
        assert_eq!(s.value(), Some(3.0 * 899.99));
    }

    #[test]
    fn test_missing_fields_have_no_value_or_day() {
        let s = Sale {
            id: SaleId(2),
            product: None,
            quantity: Some(3),
            unit_price: None,
            date: None,
            latitude: None,
            longitude: None,
        };
        assert_eq!(s.value(), None);
        assert_eq!(s.day(), None);
    }

    #[test]
    fn test_into_new_sale_resolves_city() {
        let sale = dto("Warszawa").into_new_sale().unwrap();
        assert_eq!(sale.latitude, 52.2297);
        assert_eq!(sale.longitude, 21.0122);
        assert_eq!(sale.quantity, 2);
        assert_eq!(sale.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_validate_rejects_below_minimums() {
        let mut d = dto("Gdańsk");
        d.quantity = 0;
        assert!(d.validate().is_err());

        let mut d = dto("Gdańsk");
        d.unit_price = 0.5;
        assert!(d.validate().is_err());

        let mut d = dto("Gdańsk");
        d.unit_price = f64::NAN;
        assert!(d.validate().is_err());

        let mut d = dto("Gdańsk");
        d.unit_price = 1.0;
        d.quantity = 1;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_choices() {
        assert!(dto("Berlin").validate().is_err());
        let mut d = dto("Poznań");
        d.product = "Drukarka".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_dto_wire_format() {
        let json = r#"{"product":"Tablet","quantity":1,"unitPrice":1000.0,"date":"2024-01-01","city":"Wrocław"}"#;
        let d: SaleDto = serde_json::from_str(json).unwrap();
        assert_eq!(d.product, "Tablet");
        assert_eq!(d.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_unknown_city_is_reported_once_values_pass() {
        let mut d = dto("Berlin");
        d.quantity = 0;
        // value errors come first
        assert_eq!(
            d.clone().into_new_sale().unwrap_err(),
            "Ilość musi wynosić co najmniej 1"
        );
        d.quantity = 1;
        assert_eq!(d.into_new_sale().unwrap_err(), "Nieznane miasto: Berlin");
    }

    #[test]
    fn test_missing_coordinate_means_no_point() {
        let s = Sale {
            id: SaleId(7),
            product: Some("Laptop".into()),
            quantity: Some(1),
            unit_price: Some(1.0),
            date: Some("2024-01-01".into()),
            latitude: Some(52.0),
            longitude: None,
        };
        assert_eq!(s.coordinates(), None);
    }
}
