//! Сводные отчёты: выбор отчёта, период, таблица с полосами.

use crate::dashboards::d400_reports::api;
use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::components::{ErrorBanner, FilterDate, LoadingBlock};
use crate::shared::date_utils::{date_input_days_ago, now_local};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_reports::dto::ReportBar;
use contracts::dashboards::d400_reports::{ReportKind, ReportQuery};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn format_value(kind: ReportKind, value: f64) -> String {
    if kind.is_money() {
        format_money(value)
    } else {
        format_number_int(value)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let kind = RwSignal::new(ReportKind::MonthlySales);
    let query = RwSignal::new(ReportQuery::default());
    let bars = RwSignal::new(Vec::<ReportBar>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    // Номер запроса: ответ на устаревший запрос отбрасывается
    let seq = StoredValue::new(0u64);

    let load = move || {
        let current_kind = kind.get_untracked();
        let current_query = query.get_untracked();
        let ticket = seq.get_value() + 1;
        seq.set_value(ticket);
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::fetch_report(current_kind, &current_query).await;
            if seq.get_value() != ticket {
                return;
            }
            loading.set(false);
            match result {
                Ok(rows) => bars.set(rows),
                Err(e) => {
                    log::warn!("report {}: {}", current_kind.path(), e);
                    error.set(Some(e));
                }
            }
        });
    };

    Effect::new(move |_| {
        kind.track();
        query.track();
        load();
    });

    let last_month = move |_| {
        let now = now_local();
        query.set(ReportQuery {
            fecha_desde: Some(date_input_days_ago(now, 30)),
            fecha_hasta: Some(date_input_days_ago(now, 0)),
        });
    };

    view! {
        <PageFrame page_id="d400_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Reportes"</h1>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            <div class="reports__kinds">
                {ReportKind::ALL
                    .into_iter()
                    .map(|k| {
                        view! {
                            <button
                                class="button button--small"
                                class:button--primary=move || kind.get() == k
                                class:button--ghost=move || kind.get() != k
                                on:click=move |_| kind.set(k)
                            >
                                {k.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="filter-panel-content reports__period">
                <FilterDate
                    label="Desde"
                    value=Signal::derive(move || query.with(|q| q.fecha_desde.clone().unwrap_or_default()))
                    on_change=Callback::new(move |v| query.update(|q| q.fecha_desde = non_empty(v)))
                />
                <FilterDate
                    label="Hasta"
                    value=Signal::derive(move || query.with(|q| q.fecha_hasta.clone().unwrap_or_default()))
                    on_change=Callback::new(move |v| query.update(|q| q.fecha_hasta = non_empty(v)))
                />
                <button class="button button--ghost button--small" on:click=last_month>
                    "Últimos 30 días"
                </button>
                <button
                    class="button button--ghost button--small"
                    on:click=move |_| query.set(ReportQuery::default())
                >
                    "Todo el período"
                </button>
            </div>

            <ErrorBanner error=error on_retry=Callback::new(move |_| load()) />

            <h2 class="section-title">{move || kind.get().title()}</h2>

            {move || {
                if loading.get() && bars.with(Vec::is_empty) {
                    return view! { <LoadingBlock /> }.into_any();
                }
                let current = kind.get();
                let (label_header, value_header) = current.columns();
                let rows = bars.get();
                if rows.is_empty() {
                    return view! { <p class="reports__empty">"Sin datos para el período"</p> }.into_any();
                }
                view! {
                    <table class="table__data reports__table">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{label_header}</th>
                                <th class="table__header-cell reports__bar-cell"></th>
                                <th class="table__header-cell table__header-cell--money">{value_header}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|bar| {
                                    let width = format!("width: {:.1}%", bar.percent);
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                {bar.label.clone()}
                                                {bar.detail.clone().map(|d| view! { <small class="reports__detail">{d}</small> })}
                                            </td>
                                            <td class="table__cell reports__bar-cell">
                                                <div class="reports__bar" style=width></div>
                                            </td>
                                            <td class="table__cell table__cell--money">
                                                {format_value(current, bar.value)}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_use_money_format_only_for_amounts() {
        assert_eq!(format_value(ReportKind::TopProducts, 12.0), "12");
        assert_eq!(format_value(ReportKind::WaiterBilling, 1500.0), "$ 1.500,00");
    }

    #[test]
    fn blank_dates_clear_the_bound() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty("2025-03-01".into()).as_deref(), Some("2025-03-01"));
    }
}
