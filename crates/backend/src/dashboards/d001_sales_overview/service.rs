use contracts::dashboards::d001_sales_overview::{
    CompositionArc, MapPoint, SalesOverviewRequest, SalesOverviewResponse, ValueBar, ALL_PRODUCTS,
};
use contracts::domain::a001_sale::aggregate::Sale;
use std::f64::consts::TAU;

use crate::domain::a001_sale;
use crate::shared::data::db::SalesStore;
use crate::shared::error::AppError;

/// Read every sale and build the dashboard for the requested filter
pub async fn get_sales_overview(
    store: &SalesStore,
    request: SalesOverviewRequest,
) -> Result<SalesOverviewResponse, AppError> {
    let sales = a001_sale::service::list_all(store).await?;
    Ok(build_overview(sales, &request))
}

/// Build the whole page from the stored sales and the current filter.
/// Pure: same input, same output.
pub fn build_overview(sales: Vec<Sale>, request: &SalesOverviewRequest) -> SalesOverviewResponse {
    let products = distinct_products(&sales);

    let rows: Vec<Sale> = match request.product_filter() {
        Some(product) => sales
            .into_iter()
            .filter(|s| s.product.as_deref() == Some(product))
            .collect(),
        None => sales,
    };

    let mut filter_options = Vec::with_capacity(products.len() + 1);
    filter_options.push(ALL_PRODUCTS.to_string());
    filter_options.extend(products.iter().cloned());

    SalesOverviewResponse {
        value_bars: value_bars(&rows),
        composition_arcs: composition_arcs(&rows, &products),
        map_points: map_points(&rows),
        filter_options,
        selected: request.selected(),
        rows,
    }
}

/// Products in order of first appearance; rows without a product add none
fn distinct_products(sales: &[Sale]) -> Vec<String> {
    let mut products: Vec<String> = Vec::new();
    for product in sales.iter().filter_map(|s| s.product.as_ref()) {
        if !products.contains(product) {
            products.push(product.clone());
        }
    }
    products
}

/// Rows missing quantity or price have no value and get no bar
fn value_bars(rows: &[Sale]) -> Vec<ValueBar> {
    rows.iter()
        .filter_map(|s| {
            let (quantity, unit_price, value) = (s.quantity?, s.unit_price?, s.value()?);
            Some(ValueBar {
                id: s.id,
                day: s.day(),
                product: s.product.clone(),
                quantity,
                unit_price,
                value,
            })
        })
        .collect()
}

/// One arc per row with a quantity, not summed per product.
/// A missing product takes the palette slot after the known ones.
fn composition_arcs(rows: &[Sale], products: &[String]) -> Vec<CompositionArc> {
    let sized: Vec<(&Sale, i64)> = rows
        .iter()
        .filter_map(|s| s.quantity.map(|q| (s, q)))
        .collect();
    let total: f64 = sized.iter().map(|(_, q)| (*q).max(0) as f64).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    sized
        .into_iter()
        .map(|(s, quantity)| {
            let extent = quantity.max(0) as f64 / total * TAU;
            let color_index = s
                .product
                .as_ref()
                .and_then(|name| products.iter().position(|p| p == name))
                .unwrap_or(products.len());
            let arc = CompositionArc {
                id: s.id,
                product: s.product.clone(),
                quantity,
                color_index,
                start_angle: angle,
                end_angle: angle + extent,
            };
            angle += extent;
            arc
        })
        .collect()
}

fn map_points(rows: &[Sale]) -> Vec<MapPoint> {
    rows.iter()
        .filter_map(|s| {
            s.coordinates().map(|(latitude, longitude)| MapPoint {
                id: s.id,
                latitude,
                longitude,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_sale::aggregate::SaleId;

    fn sale(id: i64, product: &str, quantity: i64, unit_price: f64, date: &str) -> Sale {
        Sale {
            id: SaleId(id),
            product: Some(product.into()),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            date: Some(date.into()),
            latitude: Some(52.2297),
            longitude: Some(21.0122),
        }
    }

    fn sample() -> Vec<Sale> {
        vec![
            sale(1, "Laptop", 2, 1000.0, "2024-01-01"),
            sale(2, "Telefon", 3, 499.99, "2024-01-02"),
            sale(3, "Laptop", 1, 3200.0, "2024-01-02"),
            sale(4, "Tablet", 4, 1.1, "2024-01-05"),
        ]
    }

    #[test]
    fn test_sentinel_keeps_all_rows_in_order() {
        let resp = build_overview(sample(), &SalesOverviewRequest::default());
        let ids: Vec<i64> = resp.rows.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(resp.selected, "Wszystkie");
        assert_eq!(
            resp.filter_options,
            vec!["Wszystkie", "Laptop", "Telefon", "Tablet"]
        );
    }

    #[test]
    fn test_product_filter_keeps_exact_matches() {
        let resp = build_overview(sample(), &SalesOverviewRequest::for_product("Laptop"));
        assert_eq!(resp.rows.len(), 2);
        assert!(resp.rows.iter().all(|s| s.product.as_deref() == Some("Laptop")));
        assert_eq!(resp.selected, "Laptop");
        // options come from all stored rows, not the filtered ones
        assert_eq!(resp.filter_options.len(), 4);
    }

    #[test]
    fn test_unknown_filter_gives_empty_result() {
        let resp = build_overview(sample(), &SalesOverviewRequest::for_product("laptop"));
        assert!(resp.rows.is_empty());
        assert!(resp.value_bars.is_empty());
        assert!(resp.composition_arcs.is_empty());
        assert!(resp.map_points.is_empty());
    }

    #[test]
    fn test_value_is_quantity_times_unit_price() {
        let resp = build_overview(sample(), &SalesOverviewRequest::default());
        for (bar, row) in resp.value_bars.iter().zip(resp.rows.iter()) {
            assert_eq!(Some(bar.value), row.value());
        }
        assert_eq!(resp.value_bars[0].value, 2000.0);
    }

    #[test]
    fn test_bars_are_not_aggregated_per_day() {
        let resp = build_overview(sample(), &SalesOverviewRequest::default());
        let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2);
        assert_eq!(resp.value_bars.iter().filter(|b| b.day == jan2).count(), 2);
    }

    #[test]
    fn test_unparseable_date_has_no_axis_position() {
        let resp = build_overview(
            vec![sale(9, "Monitor", 1, 10.0, "not a date")],
            &SalesOverviewRequest::default(),
        );
        assert_eq!(resp.rows.len(), 1);
        assert_eq!(resp.value_bars.len(), 1);
        assert_eq!(resp.value_bars[0].day, None);
    }

    #[test]
    fn test_arcs_are_per_row_and_cover_full_circle() {
        let resp = build_overview(sample(), &SalesOverviewRequest::default());
        let arcs = &resp.composition_arcs;
        assert_eq!(arcs.len(), 4);
        assert_eq!(
            arcs.iter()
                .filter(|a| a.product.as_deref() == Some("Laptop"))
                .count(),
            2
        );
        assert_eq!(arcs[0].start_angle, 0.0);
        assert!((arcs[3].end_angle - TAU).abs() < 1e-9);
        for pair in arcs.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        // 2 of 10 units
        assert!((arcs[0].end_angle - 0.2 * TAU).abs() < 1e-9);
    }

    #[test]
    fn test_arc_color_is_stable_per_product() {
        let resp = build_overview(sample(), &SalesOverviewRequest::default());
        let arcs = &resp.composition_arcs;
        assert_eq!(arcs[0].color_index, arcs[2].color_index);
        assert_ne!(arcs[0].color_index, arcs[1].color_index);
        assert_eq!(arcs[3].color_index, 2);
    }

    #[test]
    fn test_rows_without_coordinates_are_left_off_the_map() {
        let mut sales = sample();
        sales[1].latitude = None;
        sales[2].longitude = None;
        let resp = build_overview(sales, &SalesOverviewRequest::default());
        assert_eq!(resp.rows.len(), 4);
        assert_eq!(resp.value_bars.len(), 4);
        assert_eq!(resp.composition_arcs.len(), 4);
        let ids: Vec<i64> = resp.map_points.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_rows_with_null_fields_stay_in_the_listing() {
        let mut sales = sample();
        sales.push(Sale {
            id: SaleId(5),
            product: None,
            quantity: Some(5),
            unit_price: None,
            date: None,
            latitude: Some(54.3520),
            longitude: Some(18.6466),
        });
        sales.push(Sale {
            id: SaleId(6),
            product: Some("Monitor".into()),
            quantity: None,
            unit_price: Some(700.0),
            date: Some("2024-01-06".into()),
            latitude: None,
            longitude: None,
        });
        let resp = build_overview(sales, &SalesOverviewRequest::default());

        assert_eq!(resp.rows.len(), 6);
        assert_eq!(
            resp.filter_options,
            vec!["Wszystkie", "Laptop", "Telefon", "Tablet", "Monitor"]
        );
        // no value without both quantity and price
        let bar_ids: Vec<i64> = resp.value_bars.iter().map(|b| b.id.value()).collect();
        assert_eq!(bar_ids, vec![1, 2, 3, 4]);
        // no arc without a quantity; the unnamed product gets its own color
        let arcs = &resp.composition_arcs;
        assert_eq!(arcs.len(), 5);
        assert_eq!(arcs[4].id, SaleId(5));
        assert_eq!(arcs[4].color_index, 4);
        assert!((arcs[4].end_angle - TAU).abs() < 1e-9);
        assert_eq!(resp.map_points.len(), 5);
    }

    #[test]
    fn test_filter_never_matches_missing_product() {
        let mut sales = sample();
        sales[0].product = None;
        let resp = build_overview(sales, &SalesOverviewRequest::for_product("Laptop"));
        let ids: Vec<i64> = resp.rows.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_empty_store() {
        let resp = build_overview(Vec::new(), &SalesOverviewRequest::default());
        assert_eq!(resp.filter_options, vec!["Wszystkie"]);
        assert!(resp.composition_arcs.is_empty());
    }

    #[tokio::test]
    async fn test_overview_reads_from_store() {
        use contracts::domain::a001_sale::aggregate::SaleDto;

        let store = SalesStore::connect("sqlite::memory:").await.unwrap();
        let dto = SaleDto {
            product: "Laptop".into(),
            quantity: 2,
            unit_price: 1000.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            city: "Warszawa".into(),
        };
        a001_sale::service::create(&store, dto).await.unwrap();

        let resp = get_sales_overview(&store, SalesOverviewRequest::default())
            .await
            .unwrap();
        assert_eq!(resp.value_bars.len(), 1);
        assert_eq!(resp.value_bars[0].day, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(resp.value_bars[0].value, 2000.0);
        assert_eq!(resp.map_points[0].latitude, 52.2297);
        assert_eq!(resp.map_points[0].longitude, 21.0122);
    }
}
