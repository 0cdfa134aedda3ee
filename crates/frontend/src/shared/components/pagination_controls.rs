use crate::shared::icons::icon;
use contracts::shared::list_state::{ListState, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// "Mostrando 11-20 de 35"
pub fn range_label(state: &ListState) -> String {
    if state.total == 0 {
        return "Sin resultados".to_string();
    }
    let per_page = u64::from(state.per_page.max(1));
    let first = u64::from(state.page.max(1) - 1) * per_page + 1;
    let last = (first + per_page - 1).min(state.total);
    format!("Mostrando {}-{} de {}", first, last, state.total)
}

/// Навигация по страницам списка (страницы с 1).
///
/// Номера страниц - окно из `ListState::visible_pages`, размер страницы из
/// `PAGE_SIZE_OPTIONS`. Состояние меняет только владелец списка через колбэки.
#[component]
pub fn PaginationControls(
    #[prop(into)] state: Signal<ListState>,
    on_page_change: Callback<u32>,
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let page = move || state.with(|s| s.page);
    let total_pages = move || state.with(|s| s.total_pages);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || state.with(range_label)}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page().saturating_sub(1))
                disabled=move || state.with(|s| !s.has_prev)
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                state
                    .with(ListState::visible_pages)
                    .into_iter()
                    .map(|n| {
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=move || page() == n
                                on:click=move |_| on_page_change.run(n)
                            >
                                {n.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(page() + 1)
                disabled=move || state.with(|s| !s.has_next)
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || format!("Página {} de {}", page(), total_pages().max(1))}
            </span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || state.with(|s| s.per_page.to_string())
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || state.with(|s| s.per_page == size)
                            >
                                {format!("{} por página", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shows_row_range() {
        let mut state = ListState::new(10);
        assert_eq!(range_label(&state), "Sin resultados");
        state.total = 35;
        state.page = 2;
        assert_eq!(range_label(&state), "Mostrando 11-20 de 35");
        state.page = 4;
        assert_eq!(range_label(&state), "Mostrando 31-35 de 35");
    }
}
