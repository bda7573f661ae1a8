use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d001_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};

use crate::dashboards::d001_sales_overview::service;
use crate::routes::AppState;
use crate::shared::data::db::SalesStore;
use crate::shared::error::AppError;

/// GET /api/d001/sales_overview?product=Laptop
pub async fn get_sales_overview(
    State(state): State<AppState>,
    Query(request): Query<SalesOverviewRequest>,
) -> Result<Json<SalesOverviewResponse>, AppError> {
    tracing::info!(
        "D001 Dashboard: Getting sales overview for filter {}",
        request.selected()
    );

    let store = SalesStore::open(&state.db_path).await?;
    let result = service::get_sales_overview(&store, request).await;
    let response = store.release(result).await?;

    tracing::info!(
        "D001 Dashboard: Returning {} rows, {} map points",
        response.rows.len(),
        response.map_points.len()
    );
    Ok(Json(response))
}
