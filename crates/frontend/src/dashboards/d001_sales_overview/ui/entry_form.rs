use super::form_model::SaleForm;
use crate::dashboards::d001_sales_overview::api;
use crate::shared::date_utils::today;
use contracts::domain::a001_sale::aggregate::SaleCreated;
use contracts::domain::a001_sale::catalog::FormOptions;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the celebration stays on screen
const CELEBRATION_MS: u32 = 3_000;

/// Entry form for a new sale. Edits stay local until "Dodaj" is pressed.
#[component]
pub fn SaleEntryForm(on_created: Callback<SaleCreated>) -> impl IntoView {
    let options = RwSignal::new(None::<FormOptions>);
    let form = RwSignal::new(None::<SaleForm>);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let celebrating = RwSignal::new(false);
    let saving = RwSignal::new(false);

    spawn_local(async move {
        match api::get_form_options().await {
            Ok(opts) => {
                form.set(Some(SaleForm::from_options(&opts, today())));
                options.set(Some(opts));
            }
            Err(e) => {
                log::error!("Failed to load form options: {}", e);
                error.set(Some(e));
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = form.get_untracked() else {
            return;
        };
        let dto = match current.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                success.set(None);
                error.set(Some(e));
                return;
            }
        };

        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::create_sale(&dto).await {
                Ok(created) => {
                    success.set(Some(format!("✅ {}", created.message)));
                    celebrating.set(true);
                    on_created.run(created);
                    TimeoutFuture::new(CELEBRATION_MS).await;
                    celebrating.set(false);
                }
                Err(e) => {
                    success.set(None);
                    error.set(Some(e));
                }
            }
            saving.set(false);
        });
    };

    let field = move |get: fn(&SaleForm) -> String| {
        move || form.get().map(|f| get(&f)).unwrap_or_default()
    };

    view! {
        <section class="entry-form">
            <h2>"➕ Dodaj nową sprzedaż"</h2>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || success.get().map(|s| view! { <div class="success">{s}</div> })}
            {move || {
                celebrating
                    .get()
                    .then(|| view! { <div class="celebration" aria-hidden="true">"🎈🎈🎈🎈🎈"</div> })
            }}

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="product">"Produkt"</label>
                    <select
                        id="product"
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| if let Some(f) = f { f.product = v });
                        }
                    >
                        {move || {
                            let selected = field(|f| f.product.clone())();
                            options
                                .get()
                                .map(|o| o.products)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|p| {
                                    let is_selected = p == selected;
                                    let label = p.clone();
                                    view! { <option value=p selected=is_selected>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="form-group">
                    <label for="quantity">"Ilość"</label>
                    <input
                        type="number"
                        id="quantity"
                        step="1"
                        min=move || options.get().map(|o| o.min_quantity).unwrap_or(1).to_string()
                        prop:value=field(|f| f.quantity.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| if let Some(f) = f { f.quantity = v });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="unit_price">"Cena jednostkowa"</label>
                    <input
                        type="number"
                        id="unit_price"
                        step="0.01"
                        min=move || options.get().map(|o| o.min_unit_price).unwrap_or(1.0).to_string()
                        prop:value=field(|f| f.unit_price.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| if let Some(f) = f { f.unit_price = v });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="sale_date">"Data sprzedaży"</label>
                    <input
                        type="date"
                        id="sale_date"
                        prop:value=field(|f| f.date.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| if let Some(f) = f { f.date = v });
                        }
                    />
                </div>

                <h4>"🌍 Lokalizacja sprzedaży"</h4>
                <div class="form-group">
                    <label for="city">"Wybierz miasto"</label>
                    <select
                        id="city"
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| if let Some(f) = f { f.city = v });
                        }
                    >
                        {move || {
                            let selected = field(|f| f.city.clone())();
                            options
                                .get()
                                .map(|o| o.cities)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|c| {
                                    let is_selected = c.name == selected;
                                    let label = c.name.clone();
                                    view! {
                                        <option value=c.name selected=is_selected>
                                            {label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || saving.get() || form.get().is_none()
                >
                    "Dodaj"
                </button>
            </form>
        </section>
    }
}
