use crate::domain::a001_sector::ui::details::SectorDetails;
use crate::shared::api_utils::deactivate_aggregate;
use crate::shared::components::filter_panel::active_options;
use crate::shared::components::{
    confirm, ActiveBadge, EmptyRow, ErrorBanner, FilterPanel, FilterSelect, LoadingRow,
    PaginationControls,
};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_sector::aggregate::{Sector, SectorId};
use contracts::domain::common::{AggregateRoot, Deactivatable};
use contracts::shared::list_state::ListState;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn SectorList() -> impl IntoView {
    let list = ListController::<Sector>::new(
        Sector::api_path(),
        ListState::default().with_filter("activos", "true"),
    );
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let filters_open = RwSignal::new(false);

    let open_details = move |id: Option<SectorId>| {
        modal_stack.push(ModalSize::Narrow, move |handle| {
            view! {
                <SectorDetails
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

    let deactivate = move |sector: Sector| {
        if !confirm(&format!("¿Dar de baja el {}?", sector.display_name())) {
            return;
        }
        spawn_local(async move {
            match deactivate_aggregate::<Sector>(sector.id_sector).await {
                Ok(()) => list.refresh(),
                Err(e) => list.error.set(Some(e)),
            }
        });
    };

    list.start();

    view! {
        <PageFrame page_id="a001_sector--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">{Sector::list_name()}</h1>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "Nuevo sector"
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
                    label="Estado"
                    value=list.filter("activos")
                    on_change=Callback::new(move |v: String| list.set_filter("activos", v))
                    options=active_options()
                />
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Número"</th>
                            <th class="table__header-cell">"Estado"</th>
                            <th class="table__header-cell table__header-cell--actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if list.is_first_load() {
                                return view! { <LoadingRow colspan=3 /> }.into_any();
                            }
                            let rows = list.items.get();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=3 text="No hay sectores" /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|sector| {
                                    let id = sector.id_sector;
                                    let can_delete = sector.can_delete();
                                    let for_delete = sector.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_details(Some(id))>
                                            <td class="table__cell">{sector.numero}</td>
                                            <td class="table__cell"><ActiveBadge baja=sector.baja /></td>
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
