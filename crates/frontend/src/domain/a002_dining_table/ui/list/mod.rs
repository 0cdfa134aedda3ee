use crate::domain::a002_dining_table::ui::details::MesaDetails;
use crate::shared::api_utils::deactivate_aggregate;
use crate::shared::components::filter_panel::static_options;
use crate::shared::components::{
    confirm, ActiveBadge, EmptyRow, ErrorBanner, FilterPanel, FilterSelect, LoadingRow,
    PaginationControls,
};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{highlight_matches, SearchInput, Searchable};
use crate::shared::lookups::{display_options, load_unpaged};
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_sector::aggregate::{Sector, ALL_SECTORS_PATH};
use contracts::domain::a002_dining_table::aggregate::{Mesa, MesaId};
use contracts::domain::common::{AggregateRoot, Deactivatable};
use contracts::shared::list_state::ListState;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

impl Searchable for Mesa {
    fn search_fields(&self) -> Vec<String> {
        vec![self.numero.to_string(), self.tipo.clone(), self.sector_label()]
    }
}

#[component]
pub fn MesaList() -> impl IntoView {
    let list = ListController::<Mesa>::new(Mesa::api_path(), ListState::default());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let filters_open = RwSignal::new(false);
    let sectores = RwSignal::new(Vec::<Sector>::new());
    load_unpaged(ALL_SECTORS_PATH, sectores);

    let open_details = move |id: Option<MesaId>| {
        modal_stack.push(ModalSize::Form, move |handle| {
            view! {
                <MesaDetails
                    id=id
                    on_saved=Callback::new(move |_| {
                        handle.close();
                        list.refresh();
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let deactivate = move |mesa: Mesa| {
        if !confirm(&format!("¿Dar de baja la {}?", mesa.display_name())) {
            return;
        }
        spawn_local(async move {
            match deactivate_aggregate::<Mesa>(mesa.id_mesa).await {
                Ok(()) => list.refresh(),
                Err(e) => list.error.set(Some(e)),
            }
        });
    };

    list.start();

    view! {
        <PageFrame page_id="a002_dining_table--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">{Mesa::list_name()}</h1>
                <div class="header__actions">
                    <SearchInput
                        value=list.search()
                        on_change=Callback::new(move |s| list.set_search(s))
                    />
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "Nueva mesa"
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
                <FilterSelect
                    label="Sector"
                    value=list.filter("sector_id")
                    on_change=Callback::new(move |v: String| list.set_filter("sector_id", v))
                    options=Signal::derive(move || sectores.with(|s| display_options(s)))
                    all_label="Todos los sectores"
                />
                <FilterSelect
                    label="Tipo"
                    value=list.filter("tipo")
                    on_change=Callback::new(move |v: String| list.set_filter("tipo", v))
                    options=static_options(&[("interior", "Interior"), ("exterior", "Exterior"), ("vip", "VIP")])
                    all_label="Todos los tipos"
                />
                <FilterSelect
                    label="Estado"
                    value=list.filter("estado")
                    on_change=Callback::new(move |v: String| list.set_filter("estado", v))
                    options=static_options(&[("activa", "Activas"), ("baja", "Dadas de baja")])
                />
                <FilterSelect
                    label="Ordenar por"
                    value=list.filter("ordenar_por")
                    on_change=Callback::new(move |v: String| list.set_filter("ordenar_por", v))
                    options=static_options(&[("numero", "Número"), ("sector", "Sector")])
                    all_label="Predeterminado"
                />
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Número"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Comensales"</th>
                            <th class="table__header-cell">"Sector"</th>
                            <th class="table__header-cell">"Estado"</th>
                            <th class="table__header-cell table__header-cell--actions">"Acciones"</th>
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
                                return view! { <EmptyRow colspan=6 text="No hay mesas" /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|mesa| {
                                    let id = mesa.id_mesa;
                                    let can_delete = mesa.can_delete();
                                    let for_delete = mesa.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_details(Some(id))>
                                            <td class="table__cell">{highlight_matches(&mesa.numero.to_string(), &search)}</td>
                                            <td class="table__cell">{highlight_matches(&mesa.tipo, &search)}</td>
                                            <td class="table__cell">{mesa.cant_comensales}</td>
                                            <td class="table__cell">{highlight_matches(&mesa.sector_label(), &search)}</td>
                                            <td class="table__cell"><ActiveBadge baja=mesa.baja /></td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Dar de baja"
                                                    disabled=!can_delete
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        deactivate(for_delete.clone());
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
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
