use crate::shared::chart_scale::{palette_color, LinearScale};
use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d001_sales_overview::ValueBar;
use leptos::prelude::*;
use std::collections::HashMap;

const WIDTH: f64 = 700.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MAX_TICKS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
struct BarRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Tick {
    pos: f64,
    label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ValueChartLayout {
    bars: Vec<BarRect>,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>,
}

fn tooltip(b: &ValueBar) -> String {
    format!(
        "product: {} | quantity: {} | unit_price: {:.2} | value: {:.2}",
        b.product.as_deref().unwrap_or("—"),
        b.quantity,
        b.unit_price,
        b.value
    )
}

/// Place one rect per bar on a temporal x axis. Bars sharing a day are
/// stacked, each keeping its own rect. Bars without a day are not placed.
fn layout(bars: &[ValueBar]) -> ValueChartLayout {
    let placed: Vec<(&ValueBar, NaiveDate)> =
        bars.iter().filter_map(|b| b.day.map(|d| (b, d))).collect();
    if placed.is_empty() {
        return ValueChartLayout::default();
    }

    let day_num = |d: NaiveDate| d.num_days_from_ce() as f64;
    let min_day = placed.iter().map(|(_, d)| day_num(*d)).fold(f64::MAX, f64::min);
    let max_day = placed.iter().map(|(_, d)| day_num(*d)).fold(f64::MIN, f64::max);

    let mut day_totals: HashMap<NaiveDate, f64> = HashMap::new();
    for (b, d) in &placed {
        *day_totals.entry(*d).or_insert(0.0) += b.value.max(0.0);
    }
    let max_total = day_totals.values().cloned().fold(0.0, f64::max);
    let y_max = if max_total > 0.0 { max_total * 1.1 } else { 1.0 };

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let x = LinearScale::new(
        (min_day - 0.5, max_day + 0.5),
        (MARGIN_LEFT, WIDTH - MARGIN_RIGHT),
    );
    let y = LinearScale::new((0.0, y_max), (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP));
    let span = max_day - min_day + 1.0;
    let bar_width = (plot_width / span * 0.8).clamp(2.0, 40.0);

    let mut stacked: HashMap<NaiveDate, f64> = HashMap::new();
    let rects = placed
        .iter()
        .map(|(b, d)| {
            let base = stacked.entry(*d).or_insert(0.0);
            let value = b.value.max(0.0);
            let top = y.apply(*base + value);
            let bottom = y.apply(*base);
            *base += value;
            BarRect {
                x: x.apply(day_num(*d)) - bar_width / 2.0,
                y: top,
                width: bar_width,
                height: bottom - top,
                tooltip: tooltip(b),
            }
        })
        .collect();

    let mut days: Vec<NaiveDate> = day_totals.keys().cloned().collect();
    days.sort();
    let step = days.len().div_ceil(MAX_TICKS).max(1);
    let x_ticks = days
        .iter()
        .step_by(step)
        .map(|d| Tick {
            pos: x.apply(day_num(*d)),
            label: d.format("%d.%m.%Y").to_string(),
        })
        .collect();

    let y_ticks = (0..=4)
        .map(|i| {
            let v = y_max * i as f64 / 4.0;
            Tick {
                pos: y.apply(v),
                label: format!("{:.0}", v),
            }
        })
        .collect();

    ValueChartLayout {
        bars: rects,
        x_ticks,
        y_ticks,
    }
}

/// Bar per sale: x = date, y = quantity * unit_price
#[component]
pub fn ValueChart(#[prop(into)] bars: Signal<Vec<ValueBar>>) -> impl IntoView {
    let hovered = RwSignal::new(None::<String>);
    let chart = Memo::new(move |_| layout(&bars.get()));

    view! {
        <section class="chart value-chart">
            <h2>"📈 Sprzedaż dzienna (wartość)"</h2>
            <svg
                viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                width="100%"
                preserveAspectRatio="xMidYMid meet"
            >
                <line
                    x1=MARGIN_LEFT y1=HEIGHT - MARGIN_BOTTOM
                    x2=WIDTH - MARGIN_RIGHT y2=HEIGHT - MARGIN_BOTTOM
                    stroke="#888"
                />
                <line
                    x1=MARGIN_LEFT y1=MARGIN_TOP
                    x2=MARGIN_LEFT y2=HEIGHT - MARGIN_BOTTOM
                    stroke="#888"
                />
                {move || {
                    chart
                        .get()
                        .y_ticks
                        .into_iter()
                        .map(|t| {
                            view! {
                                <text x=MARGIN_LEFT - 6.0 y=t.pos + 4.0 text-anchor="end" font-size="11">
                                    {t.label}
                                </text>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    chart
                        .get()
                        .x_ticks
                        .into_iter()
                        .map(|t| {
                            view! {
                                <text x=t.pos y=HEIGHT - MARGIN_BOTTOM + 16.0 text-anchor="middle" font-size="11">
                                    {t.label}
                                </text>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    chart
                        .get()
                        .bars
                        .into_iter()
                        .map(|r| {
                            let tip = r.tooltip.clone();
                            view! {
                                <rect
                                    x=r.x y=r.y width=r.width height=r.height
                                    fill=palette_color(0)
                                    stroke="#fff"
                                    on:mouseenter=move |_| hovered.set(Some(tip.clone()))
                                    on:mouseleave=move |_| hovered.set(None)
                                />
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <div class="chart-tooltip">{move || hovered.get().unwrap_or_default()}</div>
        </section>
    }
}
