use super::composition_chart::CompositionChart;
use super::entry_form::SaleEntryForm;
use super::listing::SalesListing;
use super::location_map::LocationMap;
use super::value_chart::ValueChart;
use crate::dashboards::d001_sales_overview::api;
use contracts::dashboards::d001_sales_overview::{SalesOverviewResponse, ALL_PRODUCTS};
use contracts::domain::a001_sale::aggregate::SaleCreated;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Whether a response requested for `requested` still matches the filter
fn is_current(requested: &str, selected: &str) -> bool {
    requested == selected
}

/// Sales overview: entry form, filtered listing and three charts
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    // Filter survives reloads triggered by new sales
    let (selected_product, set_selected_product) = signal(ALL_PRODUCTS.to_string());
    let (refresh, set_refresh) = signal(0u32);

    let (data, set_data) = signal(None::<SalesOverviewResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Reload when the filter changes or a sale is added
    Effect::new(move |_| {
        let product = selected_product.get();
        refresh.track();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::get_sales_overview(&product).await;
            if !is_current(&product, &selected_product.get_untracked()) {
                // a newer request for another filter is in flight
                return;
            }
            match result {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load D001 overview: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    let on_created = Callback::new(move |created: SaleCreated| {
        log::info!("Sale {} created", created.id.0);
        set_refresh.update(|n| *n = n.wrapping_add(1));
    });
    let on_filter = Callback::new(move |product: String| set_selected_product.set(product));

    let rows = Signal::derive(move || data.get().map(|d| d.rows).unwrap_or_default());
    let filter_options = Signal::derive(move || {
        data.get()
            .map(|d| d.filter_options)
            .unwrap_or_else(|| vec![ALL_PRODUCTS.to_string()])
    });
    let selected = Signal::derive(move || selected_product.get());
    let value_bars = Signal::derive(move || data.get().map(|d| d.value_bars).unwrap_or_default());
    let composition_arcs =
        Signal::derive(move || data.get().map(|d| d.composition_arcs).unwrap_or_default());
    let map_points = Signal::derive(move || data.get().map(|d| d.map_points).unwrap_or_default());

    view! {
        <div id="d001_sales_overview--dashboard" class="d001-dashboard">
            <SaleEntryForm on_created=on_created />

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || loading.get().then(|| view! { <div class="loading">"Ładowanie danych..."</div> })}

            <SalesListing
                rows=rows
                filter_options=filter_options
                selected=selected
                on_filter=on_filter
            />
            <ValueChart bars=value_bars />
            <CompositionChart arcs=composition_arcs />
            <LocationMap points=map_points />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_for_old_filter_is_stale() {
        assert!(is_current("Laptop", "Laptop"));
        assert!(!is_current("Laptop", ALL_PRODUCTS));
    }
}
