use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::order_detail_key;
use crate::shared::components::filter_panel::static_options;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::{
    EmptyRow, ErrorBanner, FilterDate, FilterPanel, FilterSelect, LoadingRow,
    PaginationControls, StatusBadge,
};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{highlight_matches, SearchInput, Searchable};
use crate::shared::lookups::{display_options, load_options, to_options, ACTIVE_ONLY};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_dining_table::aggregate::Mesa;
use contracts::domain::a003_waiter::aggregate::Mozo;
use contracts::domain::a009_order::aggregate::Comanda;
use contracts::domain::a009_order::status::ESTADO_FILTER_OPTIONS;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_state::ListState;
use leptos::prelude::*;

impl Searchable for Comanda {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id_comanda.to_string(),
            self.mesa_label(),
            self.mozo_label(),
            self.observaciones.clone().unwrap_or_default(),
        ]
    }
}

#[component]
pub fn ComandaList() -> impl IntoView {
    let list = ListController::<Comanda>::new(Comanda::api_path(), ListState::default());
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let filters_open = RwSignal::new(false);
    let mesas = RwSignal::new(Vec::<Mesa>::new());
    let mozos = RwSignal::new(Vec::<Mozo>::new());
    load_options::<Mesa>("", mesas);
    load_options::<Mozo>(ACTIVE_ONLY, mozos);

    let open_editor = move |id: Option<i64>| {
        let key = order_detail_key(id);
        tabs.open_tab(&key, &tab_label_for_key(&key));
    };

    list.start();

    view! {
        <PageFrame page_id="a009_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">{Comanda::list_name()}</h1>
                <div class="header__actions">
                    <SearchInput
                        value=list.search()
                        on_change=Callback::new(move |s| list.set_search(s))
                    />
                    <button class="button button--primary" on:click=move |_| open_editor(None)>
                        {icon("plus")}
                        "Nueva comanda"
                    </button>
                    <button class="button button--secondary" on:click=move |_| list.refresh()>
                        {icon("refresh")}
                        "Actualizar"
                    </button>
                </div>
            </div>

            <ErrorBanner error=list.error on_retry=Callback::new(move |_| list.refresh()) />

            <FilterPanel
                is_expanded=filters_open
                active_filters_count=Signal::derive(move || list.state.with(|s| s.filters.len()))
                on_clear=Callback::new(move |_| list.clear_filters())
            >
                <FilterDate
                    label="Fecha"
                    value=list.filter("fecha")
                    on_change=Callback::new(move |v: String| list.set_filter("fecha", v))
                />
                <FilterSelect
                    label="Mesa"
                    value=list.filter("id_mesa")
                    on_change=Callback::new(move |v: String| list.set_filter("id_mesa", v))
                    options=Signal::derive(move || mesas.with(|m| display_options(m)))
                    all_label="Todas las mesas"
                />
                <FilterSelect
                    label="Mozo"
                    value=list.filter("id_mozo")
                    on_change=Callback::new(move |v: String| list.set_filter("id_mozo", v))
                    options=Signal::derive(move || mozos.with(|m| to_options(m, |x: &Mozo| x.nombre_apellido.clone())))
                    all_label="Todos los mozos"
                />
                <FilterSelect
                    label="Estado"
                    value=list.filter("estado")
                    on_change=Callback::new(move |v: String| list.set_filter("estado", v))
                    options=static_options(&ESTADO_FILTER_OPTIONS)
                />
                <FilterSelect
                    label="Ordenar por"
                    value=list.filter("ordenar_por")
                    on_change=Callback::new(move |v: String| list.set_filter("ordenar_por", v))
                    options=static_options(&[("fecha", "Fecha"), ("id_mozo", "Mozo")])
                    all_label="Predeterminado"
                />
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"N°"</th>
                            <th class="table__header-cell">"Fecha"</th>
                            <th class="table__header-cell">"Mesa"</th>
                            <th class="table__header-cell">"Mozo"</th>
                            <th class="table__header-cell table__header-cell--money">"Total"</th>
                            <th class="table__header-cell">"Estado"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if list.is_first_load() {
                                return view! { <LoadingRow colspan=6 /> }.into_any();
                            }
                            let search = list.state.with(|s| s.search.clone());
                            let rows = list.visible();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=6 text="No hay comandas" /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|comanda| {
                                    let id = comanda.id_comanda.0;
                                    let status = comanda.status();
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_editor(Some(id))>
                                            <td class="table__cell">{highlight_matches(&id.to_string(), &search)}</td>
                                            <td class="table__cell">{comanda.fecha_display()}</td>
                                            <td class="table__cell">{highlight_matches(&comanda.mesa_label(), &search)}</td>
                                            <td class="table__cell">{highlight_matches(&comanda.mozo_label(), &search)}</td>
                                            <TableCellMoney value=comanda.total() />
                                            <td class="table__cell">
                                                <StatusBadge label=status.label() variant=status.badge_variant() />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                state=list.state
                on_page_change=Callback::new(move |p| list.go_to_page(p))
                on_page_size_change=Callback::new(move |n| list.set_per_page(n))
            />
        </PageFrame>
    }
}
