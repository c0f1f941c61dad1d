use crate::dashboards::d100_sales::api;
use contracts::dashboards::d100_sales::{
    Column, DashboardView, NumberInput, SalesDashboardRequest, Sidebar, Tab, Widget,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::chart::ChartView;
use super::sidebar::FilterSidebar;

/// Sales Dashboard component
///
/// Every control change posts a fresh snapshot; the backend re-runs the
/// whole pipeline and returns the full render tree.
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let initial = SalesDashboardRequest::default();

    // Control state
    let region = RwSignal::new(initial.region);
    let all_periods = RwSignal::new(initial.all_periods);
    let year = RwSignal::new(initial.year);
    let sellers = RwSignal::new(initial.sellers.clone());
    let top_n = RwSignal::new(initial.top_n);
    let reload = RwSignal::new(0u32);

    // Data state; the sidebar is usable before the first response
    let data = RwSignal::new(None::<DashboardView>);
    let sidebar = RwSignal::new(Sidebar::for_request(&initial, Vec::new(), Vec::new()));
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let active_tab = RwSignal::new(0usize);
    let request_seq = StoredValue::new(0u64);

    // Reload whenever any control changes
    Effect::new(move |_| {
        reload.track();
        let request = SalesDashboardRequest {
            region: region.get(),
            all_periods: all_periods.get(),
            year: year.get(),
            sellers: sellers.get(),
            top_n: top_n.get(),
        };

        request_seq.update_value(|seq| *seq += 1);
        let seq = request_seq.get_value();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            let result = api::get_sales_dashboard(&request).await;
            // a newer snapshot is already in flight
            if request_seq.get_value() != seq {
                return;
            }
            if let Ok(dashboard) = &result {
                // the backend drops sellers that are gone from the current fetch
                if dashboard.sidebar.sellers.selected.len() != request.sellers.len() {
                    sellers.set(dashboard.sidebar.sellers.selected.clone());
                }
                set_document_title(&dashboard.title);
                sidebar.set(dashboard.sidebar.clone());
            }
            let (content, err) = settle(result);
            if let Some(e) = &err {
                log::error!("D100: failed to load sales dashboard: {}", e);
            }
            data.set(content);
            error.set(err);
            loading.set(false);
        });
    });

    let title = move || {
        data.with(|d| {
            d.as_ref()
                .map(|v| v.title.clone())
                .unwrap_or_else(|| "SALES DASHBOARD".to_string())
        })
    };

    view! {
        <div id="d100_sales--dashboard" class="d100-dashboard">
            {move || {
                view! {
                    <FilterSidebar
                        sidebar=sidebar.get()
                        region=region
                        all_periods=all_periods
                        year=year
                        sellers=sellers
                    />
                }
            }}

            <main class="d100-main">
                <h1 class="d100-title">{title} " 🛒"</h1>

                {move || {
                    loading
                        .get()
                        .then(|| {
                            view! {
                                <div class="d100-loading">
                                    <span>"Loading data..."</span>
                                </div>
                            }
                        })
                }}

                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="d100-error">
                                    <strong>"⚠ Error: "</strong>
                                    {err}
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| reload.update(|n| *n += 1)
                                    >
                                        "Retry"
                                    </button>
                                </div>
                            }
                        })
                }}

                {move || {
                    data.get()
                        .map(|dashboard| {
                            view! { <Tabs tabs=dashboard.tabs active_tab=active_tab top_n=top_n /> }
                        })
                }}
            </main>
        </div>
    }
}

/// Page content after a response; a failed request leaves no stale tabs behind
fn settle(result: Result<DashboardView, String>) -> (Option<DashboardView>, Option<String>) {
    match result {
        Ok(dashboard) => (Some(dashboard), None),
        Err(e) => (None, Some(e)),
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[component]
fn Tabs(tabs: Vec<Tab>, active_tab: RwSignal<usize>, top_n: RwSignal<u32>) -> impl IntoView {
    let headers = tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let class = move || {
                if active_tab.get() == i {
                    "d100-tabs__tab d100-tabs__tab--active"
                } else {
                    "d100-tabs__tab"
                }
            };
            view! {
                <button class=class on:click=move |_| active_tab.set(i)>
                    {tab.label.clone()}
                </button>
            }
        })
        .collect_view();

    let count = tabs.len();
    let body = move || {
        let idx = active_tab.get().min(count.saturating_sub(1));
        tabs.get(idx).cloned().map(|tab| {
            let input = tab
                .top_n
                .map(|input| view! { <TopNInput input=input top_n=top_n /> });
            view! {
                {input}
                <div class="d100-columns">
                    {tab.columns.into_iter().map(column_view).collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class="d100-tabs">
            <div class="d100-tabs__header">{headers}</div>
            <div class="d100-tabs__body">{body}</div>
        </div>
    }
}

fn column_view(column: Column) -> impl IntoView {
    let widgets = column
        .widgets
        .into_iter()
        .map(|widget| match widget {
            Widget::Metric(metric) => view! {
                <div class="d100-metric">
                    <div class="d100-metric__label">{metric.label}</div>
                    <div class="d100-metric__value">{metric.value}</div>
                </div>
            }
            .into_any(),
            Widget::Chart(spec) => view! { <ChartView spec=spec /> }.into_any(),
        })
        .collect_view();

    view! { <div class="d100-column">{widgets}</div> }
}

#[component]
fn TopNInput(input: NumberInput, top_n: RwSignal<u32>) -> impl IntoView {
    let NumberInput {
        label,
        min,
        max,
        value,
    } = input;

    view! {
        <div class="form__group d100-top-n">
            <label class="form__label">{label}</label>
            <input
                type="number"
                class="form__input"
                min=min
                max=max
                step=1
                prop:value=value.to_string()
                on:change=move |ev| {
                    if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                        top_n.set(n.clamp(min, max));
                    }
                }
            />
        </div>
    }
}
