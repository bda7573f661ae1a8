use contracts::domain::a001_sale::aggregate::SaleDto;
use contracts::domain::a001_sale::catalog::FormOptions;
use contracts::domain::common::serde_date;

/// Raw entry form state, as typed. Parsed only on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleForm {
    pub product: String,
    pub quantity: String,
    pub unit_price: String,
    pub date: String,
    pub city: String,
}

impl SaleForm {
    pub fn from_options(options: &FormOptions, today: chrono::NaiveDate) -> Self {
        Self {
            product: options.products.first().cloned().unwrap_or_default(),
            quantity: options.default_quantity.to_string(),
            unit_price: format!("{:.2}", options.default_unit_price),
            date: today.format(serde_date::FORMAT).to_string(),
            city: options
                .cities
                .first()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        }
    }

    /// Parse and check the minimums; the same rules the backend applies
    pub fn to_dto(&self) -> Result<SaleDto, String> {
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| "Ilość musi być liczbą całkowitą".to_string())?;
        let unit_price = self
            .unit_price
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| "Cena jednostkowa musi być liczbą".to_string())?;
        let date = serde_date::parse(&self.date)
            .ok_or_else(|| "Data sprzedaży jest nieprawidłowa".to_string())?;

        let dto = SaleDto {
            product: self.product.clone(),
            quantity,
            unit_price,
            date,
            city: self.city.clone(),
        };
        dto.validate()?;
        Ok(dto)
    }
}
