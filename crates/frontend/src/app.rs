use crate::dashboards::d001_sales_overview::ui::SalesOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <h1>"📊 Aplikacja Sprzedażowa"</h1>
            <SalesOverviewDashboard />
        </main>
    }
}
