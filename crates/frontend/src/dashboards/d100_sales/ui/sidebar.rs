use contracts::dashboards::d100_sales::{Region, Sidebar};
use leptos::prelude::*;

/// Filter controls; seller options come from the last successful response
#[component]
pub fn FilterSidebar(
    sidebar: Sidebar,
    region: RwSignal<Region>,
    all_periods: RwSignal<bool>,
    year: RwSignal<i32>,
    sellers: RwSignal<Vec<String>>,
) -> impl IntoView {
    let Sidebar {
        title,
        region: region_control,
        period,
        sellers: seller_control,
    } = sidebar;

    let region_options = region_control
        .options
        .into_iter()
        .map(|option| {
            let selected = option.value == region_control.selected;
            view! { <option value=option.value selected=selected>{option.label}</option> }
        })
        .collect_view();

    let year_min = period.year_min;
    let year_max = period.year_max;
    let year_slider = view! {
        <div class="form__group">
            <label class="form__label">{period.year_label} ": " {move || year.get()}</label>
            <input
                type="range"
                class="form__range"
                min=year_min
                max=year_max
                step=1
                disabled=move || all_periods.get()
                prop:value=move || year.get().to_string()
                on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                        year.set(value.clamp(year_min, year_max));
                    }
                }
            />
        </div>
    };

    let seller_options = seller_control
        .options
        .into_iter()
        .map(|name| {
            let checked_name = name.clone();
            let toggle_name = name.clone();
            view! {
                <label class="form__checkbox-wrapper">
                    <input
                        type="checkbox"
                        class="form__checkbox"
                        prop:checked=move || sellers.with(|s| s.contains(&checked_name))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            sellers.update(|s| {
                                s.retain(|n| n != &toggle_name);
                                if checked {
                                    s.push(toggle_name.clone());
                                }
                            });
                        }
                    />
                    <span class="form__checkbox-label">{name}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <aside class="d100-sidebar">
            <h2 class="d100-sidebar__title">{title}</h2>

            <div class="form__group">
                <label class="form__label">{region_control.label}</label>
                <select
                    class="form__select"
                    on:change=move |ev| {
                        if let Some(value) = Region::from_code(&event_target_value(&ev)) {
                            region.set(value);
                        }
                    }
                >
                    {region_options}
                </select>
            </div>

            <label class="form__checkbox-wrapper">
                <input
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || all_periods.get()
                    on:change=move |ev| all_periods.set(event_target_checked(&ev))
                />
                <span class="form__checkbox-label">{period.all_periods_label}</span>
            </label>

            {year_slider}

            <div class="form__group">
                <label class="form__label">
                    {seller_control.label}
                    {move || {
                        let count = sellers.with(Vec::len);
                        (count > 0)
                            .then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </label>
                <div class="d100-sidebar__sellers">{seller_options}</div>
                <button
                    class="button button--secondary"
                    disabled=move || sellers.with(Vec::is_empty)
                    on:click=move |_| sellers.set(Vec::new())
                >
                    "Clear"
                </button>
            </div>
        </aside>
    }
}
