use crate::domain::a008_reservation::ui::details::{OrderFromReservation, ReservaDetails};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::order_detail_key;
use crate::shared::api_utils::{put_empty, put_json};
use crate::shared::components::filter_panel::static_options;
use crate::shared::components::{
    confirm, EmptyRow, ErrorBanner, FilterDate, FilterPanel, FilterSelect, LoadingRow,
    PaginationControls, ReasonDialog, StatusBadge,
};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::lookups::{display_options, load_options};
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a007_client::aggregate::Cliente;
use contracts::domain::a008_reservation::aggregate::{Reserva, ReservaId};
use contracts::domain::a009_order::aggregate::ComandaId;
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_state::ListState;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ReservaList() -> impl IntoView {
    let list = ListController::<Reserva>::new(
        Reserva::api_path(),
        ListState::default().with_filter("cancelado", "activo"),
    );
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let filters_open = RwSignal::new(false);
    let clientes = RwSignal::new(Vec::<Cliente>::new());
    load_options::<Cliente>("", clientes);

    let open_details = move |id: Option<ReservaId>| {
        modal_stack.push(ModalSize::Form, move |handle| {
            view! {
                <ReservaDetails
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

    let mark_attended = move |reserva: Reserva| {
        let mut checked = reserva.clone();
        if let Err(e) = checked.mark_attended() {
            list.error.set(Some(e.to_string()));
            return;
        }
        if !confirm(&format!("¿Marcar la {} como asistida?", reserva.display_name())) {
            return;
        }
        spawn_local(async move {
            match put_empty::<serde_json::Value>(&reserva.attend_path()).await {
                Ok(_) => list.refresh(),
                Err(e) => list.error.set(Some(e)),
            }
        });
    };

    let cancel = move |reserva: Reserva| {
        let reserva = StoredValue::new(reserva);
        modal_stack.push(ModalSize::Narrow, move |handle| {
            let dialog_error = RwSignal::new(None::<String>);
            view! {
                <ReasonDialog
                    title=reserva.with_value(|r| format!("Cancelar {}", r.display_name()))
                    label="Motivo de la cancelación"
                    confirm_label="Cancelar reserva"
                    required=true
                    error=dialog_error
                    on_confirm=Callback::new(move |motivo: String| {
                        let mut target = reserva.get_value();
                        let request = match target.cancel(&motivo) {
                            Ok(req) => req,
                            Err(e) => {
                                dialog_error.set(Some(e.to_string()));
                                return;
                            }
                        };
                        spawn_local(async move {
                            match put_json::<_, serde_json::Value>(&target.cancel_path(), &request).await {
                                Ok(_) => {
                                    handle.close();
                                    list.refresh();
                                }
                                Err(e) => dialog_error.set(Some(e)),
                            }
                        });
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let create_order = move |reserva: Reserva| {
        if let Err(e) = reserva.ensure_can_create_order() {
            list.error.set(Some(e.to_string()));
            return;
        }
        let reserva = StoredValue::new(reserva);
        modal_stack.push(ModalSize::Wide, move |handle| {
            view! {
                <OrderFromReservation
                    reserva=reserva.get_value()
                    on_created=Callback::new(move |created: Option<ComandaId>| {
                        handle.close();
                        list.refresh();
                        if let Some(id) = created {
                            let key = order_detail_key(Some(id.0));
                            tabs.open_tab(&key, &tab_label_for_key(&key));
                        }
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    list.start();

    view! {
        <PageFrame page_id="a008_reservation--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">{Reserva::list_name()}</h1>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        "Nueva reserva"
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
                    value=list.filter("cancelado")
                    on_change=Callback::new(move |v: String| list.set_filter("cancelado", v))
                    options=static_options(&[("activo", "Activas"), ("cancelado", "Canceladas")])
                />
                <FilterSelect
                    label="Cliente"
                    value=list.filter("cliente_id")
                    on_change=Callback::new(move |v: String| list.set_filter("cliente_id", v))
                    options=Signal::derive(move || clientes.with(|c| display_options(c)))
                    all_label="Todos los clientes"
                />
                <FilterDate
                    label="Desde"
                    value=list.filter("fecha_desde")
                    on_change=Callback::new(move |v: String| list.set_filter("fecha_desde", v))
                />
                <FilterDate
                    label="Hasta"
                    value=list.filter("fecha_hasta")
                    on_change=Callback::new(move |v: String| list.set_filter("fecha_hasta", v))
                />
                <FilterSelect
                    label="Ordenar por"
                    value=list.filter("order_by")
                    on_change=Callback::new(move |v: String| list.set_filter("order_by", v))
                    options=static_options(&[("fecha_hora", "Fecha"), ("numero", "Número")])
                    all_label="Predeterminado"
                />
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"N°"</th>
                            <th class="table__header-cell">"Fecha y hora"</th>
                            <th class="table__header-cell">"Cliente"</th>
                            <th class="table__header-cell">"Mesa"</th>
                            <th class="table__header-cell">"Personas"</th>
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
                                return view! { <EmptyRow colspan=7 text="No hay reservas" /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|reserva| {
                                    let id = reserva.id_reserva;
                                    let status = reserva.status();
                                    let (for_attend, for_cancel, for_order) =
                                        (reserva.clone(), reserva.clone(), reserva.clone());
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_details(Some(id))>
                                            <td class="table__cell">{reserva.numero}</td>
                                            <td class="table__cell">{reserva.fecha_hora_display()}</td>
                                            <td class="table__cell">{reserva.cliente_label()}</td>
                                            <td class="table__cell">{reserva.mesa_label()}</td>
                                            <td class="table__cell">{reserva.cant_personas}</td>
                                            <td class="table__cell">
                                                <StatusBadge label=status.label() variant=status.badge_variant() />
                                            </td>
                                            <td class="table__cell table__cell--actions" on:click=|ev| ev.stop_propagation()>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Marcar asistida"
                                                    disabled=!reserva.can_mark_attended()
                                                    on:click=move |_| mark_attended(for_attend.clone())
                                                >
                                                    {icon("user-check")}
                                                </button>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Crear comanda"
                                                    disabled=!reserva.can_create_order()
                                                    on:click=move |_| create_order(for_order.clone())
                                                >
                                                    {icon("clipboard")}
                                                </button>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Cancelar reserva"
                                                    disabled=!reserva.can_cancel()
                                                    on:click=move |_| cancel(for_cancel.clone())
                                                >
                                                    {icon("ban")}
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
