use crate::shared::chart_scale::{palette_color, GeoBounds, MapProjection, POLAND};
use contracts::dashboards::d001_sales_overview::MapPoint;
use contracts::domain::a001_sale::catalog::CITIES;
use leptos::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 450.0;

#[derive(Debug, Clone, PartialEq)]
struct GridLine {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    label: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Marker {
    x: f64,
    y: f64,
    label: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct MapLayout {
    grid: Vec<GridLine>,
    cities: Vec<Marker>,
    points: Vec<Marker>,
}

/// Whole-degree meridians and parallels inside `bounds`
fn graticule(bounds: GeoBounds, projection: &MapProjection) -> Vec<GridLine> {
    let mut lines = Vec::new();
    for lon in (bounds.min_lon.ceil() as i32)..=(bounds.max_lon.floor() as i32) {
        let (x1, y1) = projection.project(bounds.max_lat, lon as f64);
        let (x2, y2) = projection.project(bounds.min_lat, lon as f64);
        lines.push(GridLine { x1, y1, x2, y2, label: format!("{}°E", lon) });
    }
    for lat in (bounds.min_lat.ceil() as i32)..=(bounds.max_lat.floor() as i32) {
        let (x1, y1) = projection.project(lat as f64, bounds.min_lon);
        let (x2, y2) = projection.project(lat as f64, bounds.max_lon);
        lines.push(GridLine { x1, y1, x2, y2, label: format!("{}°N", lat) });
    }
    lines
}

/// The view starts on Poland and widens when a point falls outside it.
/// Catalog cities are drawn as labelled reference marks.
fn layout(points: &[MapPoint]) -> MapLayout {
    let coords: Vec<(f64, f64)> = points.iter().map(|p| (p.latitude, p.longitude)).collect();
    let bounds = POLAND.including(&coords);
    let projection = MapProjection::new(bounds, WIDTH, HEIGHT);

    let cities = CITIES
        .iter()
        .map(|c| {
            let (x, y) = projection.project(c.latitude, c.longitude);
            Marker { x, y, label: c.name.to_string() }
        })
        .collect();

    let points = points
        .iter()
        .map(|p| {
            let (x, y) = projection.project(p.latitude, p.longitude);
            Marker {
                x,
                y,
                label: format!("{:.4}, {:.4}", p.latitude, p.longitude),
            }
        })
        .collect();

    MapLayout {
        grid: graticule(bounds, &projection),
        cities,
        points,
    }
}

#[component]
pub fn LocationMap(#[prop(into)] points: Signal<Vec<MapPoint>>) -> impl IntoView {
    let hovered = RwSignal::new(None::<String>);
    let map = Memo::new(move |_| layout(&points.get()));

    view! {
        <section class="chart location-map">
            <h2>"🗺️ Mapa lokalizacji sprzedaży"</h2>
            <svg
                viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                width="100%"
                preserveAspectRatio="xMidYMid meet"
            >
                <rect x="0" y="0" width=WIDTH height=HEIGHT fill="#eef3f8" stroke="#ccc" />
                {move || {
                    map.get()
                        .grid
                        .into_iter()
                        .map(|g| {
                            view! {
                                <line x1=g.x1 y1=g.y1 x2=g.x2 y2=g.y2 stroke="#cfd8e3" stroke-width="0.5" />
                                <text x=g.x1 + 2.0 y=g.y1 + 10.0 font-size="9" fill="#8a99aa">
                                    {g.label}
                                </text>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    map.get()
                        .cities
                        .into_iter()
                        .map(|c| {
                            view! {
                                <circle cx=c.x cy=c.y r="2.5" fill="#555" />
                                <text x=c.x + 5.0 y=c.y - 5.0 font-size="11" fill="#555">
                                    {c.label}
                                </text>
                            }
                        })
                        .collect_view()
                }}
                {move || {
                    map.get()
                        .points
                        .into_iter()
                        .map(|p| {
                            let label = p.label;
                            view! {
                                <circle
                                    cx=p.x cy=p.y r="6"
                                    fill=palette_color(2)
                                    fill-opacity="0.8"
                                    stroke="#fff"
                                    on:mouseenter=move |_| hovered.set(Some(label.clone()))
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

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sale::aggregate::SaleId;

    fn point(id: i64, latitude: f64, longitude: f64) -> MapPoint {
        MapPoint {
            id: SaleId(id),
            latitude,
            longitude,
        }
    }

    fn on_canvas(m: &Marker) -> bool {
        (0.0..=WIDTH).contains(&m.x) && (0.0..=HEIGHT).contains(&m.y)
    }

    #[test]
    fn test_points_inside_canvas() {
        let l = layout(&[point(1, 52.2297, 21.0122), point(2, 54.3520, 18.6466)]);
        assert_eq!(l.points.len(), 2);
        assert!(l.points.iter().all(on_canvas));
        assert_eq!(l.points[0].label, "52.2297, 21.0122");
    }

    #[test]
    fn test_far_point_still_on_canvas() {
        let l = layout(&[point(1, 40.0, 0.0)]);
        assert!(on_canvas(&l.points[0]));
        assert!(l.cities.iter().all(on_canvas));
    }

    #[test]
    fn test_reference_cities_are_labelled() {
        let l = layout(&[]);
        let names: Vec<&str> = l.cities.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(names, vec!["Warszawa", "Kraków", "Wrocław", "Poznań", "Gdańsk"]);
        // Gdańsk north of Kraków, Warszawa east of Poznań
        assert!(l.cities[4].y < l.cities[1].y);
        assert!(l.cities[0].x > l.cities[3].x);
    }

    #[test]
    fn test_graticule_covers_poland() {
        let l = layout(&[]);
        // meridians 14..=24, parallels 49..=55
        assert_eq!(l.grid.len(), 11 + 7);
        assert!(l.grid.iter().any(|g| g.label == "19°E"));
        assert!(l.grid.iter().any(|g| g.label == "52°N"));
    }
}
