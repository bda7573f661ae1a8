use crate::shared::chart_scale::{arc_path, palette_color};
use contracts::dashboards::d001_sales_overview::CompositionArc;
use leptos::prelude::*;

const SIZE: f64 = 300.0;
const RADIUS: f64 = 130.0;

/// Shown for sales stored without a product
const UNNAMED: &str = "(brak)";

fn product_label(arc: &CompositionArc) -> String {
    arc.product.clone().unwrap_or_else(|| UNNAMED.to_string())
}

/// Legend entries in first-appearance order, one per product
fn legend(arcs: &[CompositionArc]) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = Vec::new();
    for a in arcs {
        let label = product_label(a);
        if !out.iter().any(|(p, _)| *p == label) {
            out.push((label, a.color_index));
        }
    }
    out
}

/// Pie of quantities, one slice per sale, colored by product
#[component]
pub fn CompositionChart(#[prop(into)] arcs: Signal<Vec<CompositionArc>>) -> impl IntoView {
    let hovered = RwSignal::new(None::<String>);
    let center = SIZE / 2.0;

    view! {
        <section class="chart composition-chart">
            <h2>"📊 Liczba sprzedanych produktów wg typu"</h2>
            <div class="chart-row">
                <svg viewBox=format!("0 0 {} {}", SIZE, SIZE) width=SIZE height=SIZE>
                    {move || {
                        arcs.get()
                            .into_iter()
                            .filter(|a| a.end_angle > a.start_angle)
                            .map(|a| {
                                let tip = format!("product: {} | quantity: {}", product_label(&a), a.quantity);
                                view! {
                                    <path
                                        d=arc_path(center, center, RADIUS, a.start_angle, a.end_angle)
                                        fill=palette_color(a.color_index)
                                        stroke="#fff"
                                        on:mouseenter=move |_| hovered.set(Some(tip.clone()))
                                        on:mouseleave=move |_| hovered.set(None)
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </svg>
                <ul class="legend">
                    {move || {
                        legend(&arcs.get())
                            .into_iter()
                            .map(|(product, color)| {
                                view! {
                                    <li>
                                        <span
                                            class="swatch"
                                            style=format!("background:{}", palette_color(color))
                                        ></span>
                                        {product}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
            <div class="chart-tooltip">{move || hovered.get().unwrap_or_default()}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sale::aggregate::SaleId;

    fn arc(id: i64, product: Option<&str>, color_index: usize) -> CompositionArc {
        CompositionArc {
            id: SaleId(id),
            product: product.map(str::to_string),
            quantity: 1,
            color_index,
            start_angle: 0.0,
            end_angle: 1.0,
        }
    }

    #[test]
    fn test_legend_has_one_entry_per_product() {
        let l = legend(&[
            arc(1, Some("Laptop"), 0),
            arc(2, Some("Mysz"), 1),
            arc(3, Some("Laptop"), 0),
            arc(4, None, 2),
        ]);
        assert_eq!(
            l,
            vec![
                ("Laptop".to_string(), 0),
                ("Mysz".to_string(), 1),
                ("(brak)".to_string(), 2)
            ]
        );
    }
}
