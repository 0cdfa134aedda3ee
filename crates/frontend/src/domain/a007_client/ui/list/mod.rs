use crate::domain::a007_client::ui::details::ClienteDetails;
use crate::shared::api_utils::deactivate_aggregate;
use crate::shared::components::filter_panel::static_options;
use crate::shared::components::{
    confirm, ActiveBadge, EmptyRow, ErrorBanner, FilterInput, FilterPanel, FilterSelect,
    LoadingRow, PaginationControls,
};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_client::aggregate::{Cliente, ClienteId};
use contracts::domain::common::{AggregateRoot, Deactivatable};
use contracts::shared::list_state::ListState;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ClienteList() -> impl IntoView {
    let list = ListController::<Cliente>::new(Cliente::api_path(), ListState::default());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let filters_open = RwSignal::new(false);

    let open_details = move |id: Option<ClienteId>| {
        modal_stack.push(ModalSize::Form, move |handle| {
            view! {
                <ClienteDetails
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

    let deactivate = move |cliente: Cliente| {
        if !confirm(&format!("¿Dar de baja al cliente {}?", cliente.full_name())) {
            return;
        }
        spawn_local(async move {
            match deactivate_aggregate::<Cliente>(cliente.id_cliente).await {
                Ok(()) => list.refresh(),
                Err(e) => list.error.set(Some(e)),
            }
        });
    };

    list.start();

    view! {
        <PageFrame page_id="a007_client--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">{Cliente::list_name()}</h1>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "Nuevo cliente"
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
                <FilterInput
                    label="Documento"
                    value=list.filter("documento")
                    on_change=Callback::new(move |v: String| list.set_filter("documento", v))
                />
                <FilterInput
                    label="Nombre"
                    value=list.filter("nombre")
                    on_change=Callback::new(move |v: String| list.set_filter("nombre", v))
                />
                <FilterInput
                    label="Apellido"
                    value=list.filter("apellido")
                    on_change=Callback::new(move |v: String| list.set_filter("apellido", v))
                />
                <FilterSelect
                    label="Ordenar por"
                    value=list.filter("ordenar_por")
                    on_change=Callback::new(move |v: String| list.set_filter("ordenar_por", v))
                    options=static_options(&[
                        ("apellido", "Apellido"),
                        ("nombre", "Nombre"),
                        ("documento", "Documento"),
                    ])
                    all_label="Predeterminado"
                />
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Documento"</th>
                            <th class="table__header-cell">"Apellido"</th>
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Teléfono"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Estado"</th>
                            <th class="table__header-cell table__header-cell--actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if list.is_first_load() {
                                return view! { <LoadingRow colspan=7 /> }.into_any();
                            }
                            let rows = list.items.get();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=7 text="No hay clientes" /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|cliente| {
                                    let id = cliente.id_cliente;
                                    let can_delete = cliente.can_delete();
                                    let for_delete = cliente.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_details(Some(id))>
                                            <td class="table__cell">{cliente.documento.clone()}</td>
                                            <td class="table__cell">{cliente.apellido.clone()}</td>
                                            <td class="table__cell">{cliente.nombre.clone()}</td>
                                            <td class="table__cell">{cliente.num_telefono.clone().unwrap_or_default()}</td>
                                            <td class="table__cell">{cliente.email.clone().unwrap_or_default()}</td>
                                            <td class="table__cell"><ActiveBadge baja=cliente.baja /></td>
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
