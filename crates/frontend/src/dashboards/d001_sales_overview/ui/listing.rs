use crate::shared::date_utils::format_date;
use contracts::domain::a001_sale::aggregate::Sale;
use leptos::prelude::*;

const MISSING: &str = "—";

fn format_coordinate(v: Option<f64>) -> String {
    v.map(|v| format!("{:.4}", v)).unwrap_or_else(|| MISSING.to_string())
}

fn or_missing<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| MISSING.to_string())
}

/// Product filter plus the table of (filtered) sales in storage order
#[component]
pub fn SalesListing(
    #[prop(into)] rows: Signal<Vec<Sale>>,
    #[prop(into)] filter_options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    on_filter: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="listing">
            <h2>"📄 Lista sprzedaży"</h2>
            <div class="form-group">
                <label for="product_filter">"Filtruj po produkcie"</label>
                <select
                    id="product_filter"
                    on:change=move |ev| on_filter.run(event_target_value(&ev))
                >
                    {move || {
                        let current = selected.get();
                        filter_options
                            .get()
                            .into_iter()
                            .map(|p| {
                                let is_selected = p == current;
                                let label = p.clone();
                                view! { <option value=p selected=is_selected>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th>"id"</th>
                            <th>"product"</th>
                            <th>"quantity"</th>
                            <th>"unit_price"</th>
                            <th>"date"</th>
                            <th>"latitude"</th>
                            <th>"longitude"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <tr>
                                            <td>{s.id.value()}</td>
                                            <td>{or_missing(s.product.clone())}</td>
                                            <td class="num">{or_missing(s.quantity)}</td>
                                            <td class="num">
                                                {or_missing(s.unit_price.map(|p| format!("{:.2}", p)))}
                                            </td>
                                            <td>{or_missing(s.date.as_deref().map(format_date))}</td>
                                            <td class="num">{format_coordinate(s.latitude)}</td>
                                            <td class="num">{format_coordinate(s.longitude)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cells_show_a_dash() {
        assert_eq!(or_missing(None::<i64>), "—");
        assert_eq!(or_missing(Some(3)), "3");
        assert_eq!(format_coordinate(Some(52.22971)), "52.2297");
        assert_eq!(format_coordinate(None), "—");
    }
}
