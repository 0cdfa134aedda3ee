//! Панель серверных фильтров списка и поля для неё.
//!
//! Поля не хранят состояние: значение приходит из `ListState`, изменение
//! уходит колбэком в `ListController::set_filter`.

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Сворачиваемая панель: заголовок со счётчиком активных фильтров,
/// под ним поля фильтров.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    on_clear: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--ghost button--small"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| on_clear.run(())
                    >
                        "Limpiar filtros"
                    </button>
                </div>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}

/// Текстовый фильтр. Значение уходит по blur/Enter, а не на каждый символ:
/// иначе каждая буква давала бы запрос.
#[component]
pub fn FilterInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: Option<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class="filter-field">
            <label class="filter-field__label">{label}</label>
            <input
                class="filter-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Фильтр по дате (`YYYY-MM-DD`)
#[component]
pub fn FilterDate(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-field">
            <label class="filter-field__label">{label}</label>
            <input
                class="filter-field__input filter-field__input--date"
                type="date"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Выпадающий фильтр. Первая опция с пустым значением снимает фильтр.
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// (значение, подпись)
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)] all_label: Option<String>,
) -> impl IntoView {
    let all_label = all_label.unwrap_or_else(|| "Todos".to_string());
    view! {
        <div class="filter-field">
            <label class="filter-field__label">{label}</label>
            <select
                class="filter-field__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{all_label}</option>
                <For
                    each=move || options.get()
                    key=|(v, _)| v.clone()
                    children=move |(v, text)| {
                        let selected_value = v.clone();
                        view! {
                            <option value=v selected=move || value.get() == selected_value>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Опции из констант: `&[("numero", "Número")]`
pub fn static_options(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect()
}

/// Фильтр `activos`: "Todos" снимает его, единственная опция оставляет активные
pub fn active_options() -> Vec<(String, String)> {
    vec![("true".to_string(), "Solo activos".to_string())]
}
