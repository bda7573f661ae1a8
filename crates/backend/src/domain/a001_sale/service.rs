use super::repository;
use contracts::domain::a001_sale::aggregate::{Sale, SaleDto, SaleId};

use crate::shared::data::db::SalesStore;
use crate::shared::error::AppError;

/// Validate a form submission and store it
pub async fn create(store: &SalesStore, dto: SaleDto) -> Result<SaleId, AppError> {
    let sale = dto.into_new_sale().map_err(AppError::Validation)?;
    let id = repository::insert(store.connection(), &sale).await?;
    tracing::info!(
        "Sales: stored #{} {} x{} @ {:.2} on {}",
        id.value(),
        sale.product,
        sale.quantity,
        sale.unit_price,
        sale.date
    );
    Ok(id)
}

pub async fn list_all(store: &SalesStore) -> Result<Vec<Sale>, AppError> {
    Ok(repository::list_all(store.connection()).await?)
}
