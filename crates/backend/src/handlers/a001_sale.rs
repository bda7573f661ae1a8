use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use contracts::domain::a001_sale::aggregate::{Sale, SaleCreated, SaleDto, SALE_CREATED_MESSAGE};
use contracts::domain::a001_sale::catalog::FormOptions;

use crate::domain::a001_sale;
use crate::routes::AppState;
use crate::shared::data::db::SalesStore;
use crate::shared::error::AppError;

/// GET /api/sales
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Sale>>, AppError> {
    let store = SalesStore::open(&state.db_path).await?;
    let result = a001_sale::service::list_all(&store).await;
    store.release(result).await.map(Json)
}

/// POST /api/sales
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<SaleDto>, JsonRejection>,
) -> Result<Json<SaleCreated>, AppError> {
    // undecodable bodies get the same error shape as failed validation
    let Json(dto) = payload?;
    let store = SalesStore::open(&state.db_path).await?;
    let result = a001_sale::service::create(&store, dto).await;
    let id = store.release(result).await?;
    Ok(Json(SaleCreated {
        id,
        message: SALE_CREATED_MESSAGE.to_string(),
    }))
}

/// GET /api/sales/form_options
pub async fn form_options() -> Json<FormOptions> {
    Json(FormOptions::from_catalog())
}
