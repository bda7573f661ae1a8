use crate::shared::api_utils::{api_url, error_message};
use contracts::dashboards::d001_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};
use contracts::domain::a001_sale::aggregate::{SaleCreated, SaleDto};
use contracts::domain::a001_sale::catalog::FormOptions;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_BASE: &str = "/api/d001";
const SALES_API: &str = "/api/sales";

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Dashboard data for the selected product (or the "all" sentinel)
pub async fn get_sales_overview(product: &str) -> Result<SalesOverviewResponse, String> {
    let query = serde_qs::to_string(&SalesOverviewRequest::for_product(product))
        .map_err(|e| format!("Failed to build query: {}", e))?;
    let url = api_url(&format!("{}/sales_overview?{}", API_BASE, query));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

/// Choices and defaults for the entry form
pub async fn get_form_options() -> Result<FormOptions, String> {
    let url = api_url(&format!("{}/form_options", SALES_API));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}

/// Store a new sale
pub async fn create_sale(dto: &SaleDto) -> Result<SaleCreated, String> {
    let url = api_url(SALES_API);

    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| format!("Failed to encode sale: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json(response).await
}
