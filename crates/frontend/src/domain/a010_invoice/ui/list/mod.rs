use crate::domain::a010_invoice::ui::details::{invoice_badge_variant, FacturaView};
use crate::domain::a011_payment::ui::details::PagoDetails;
use crate::shared::api_utils::delete;
use crate::shared::components::filter_panel::static_options;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::{
    confirm, EmptyRow, ErrorBanner, FilterInput, FilterPanel, FilterSelect, LoadingRow,
    PaginationControls, StatusBadge,
};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a010_invoice::aggregate::{
    Factura, FacturaId, FILTER_ONLY_UNPAID, FILTER_ORDER,
};
use contracts::domain::common::{AggregateRoot, Deactivatable};
use contracts::shared::list_state::ListState;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Платёж можно принять только по действующему счёту с остатком
fn accepts_payment(factura: &Factura) -> bool {
    !factura.baja && !factura.is_paid()
}

#[component]
pub fn FacturaList() -> impl IntoView {
    let list = ListController::<Factura>::new(Factura::api_path(), ListState::default());
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let filters_open = RwSignal::new(false);

    let open_view = move |id: FacturaId| {
        modal_stack.push(ModalSize::Wide, move |handle| {
            view! { <FacturaView id=id on_close=Callback::new(move |_| handle.close()) /> }
                .into_any()
        });
    };

    let open_payment = move |factura: Factura| {
        let factura = StoredValue::new(factura);
        modal_stack.push(ModalSize::Form, move |handle| {
            view! {
                <PagoDetails
                    factura=factura.get_value()
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

    let annul = move |factura: Factura| {
        if !confirm(&format!("¿Anular la factura {}?", factura.codigo)) {
            return;
        }
        spawn_local(async move {
            match delete::<serde_json::Value>(&factura.annul_path()).await {
                Ok(_) => list.refresh(),
                Err(e) => list.error.set(Some(e)),
            }
        });
    };

    list.start();

    view! {
        <PageFrame page_id="a010_invoice--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1 class="page__title">{Factura::list_name()}</h1>
                <div class="header__actions">
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
                    label="Estado de pago"
                    value=list.filter(FILTER_ONLY_UNPAID.0)
                    on_change=Callback::new(move |v: String| list.set_filter(FILTER_ONLY_UNPAID.0, v))
                    options=static_options(&[(FILTER_ONLY_UNPAID.1, "Solo impagas")])
                    all_label="Todas"
                />
                <FilterInput
                    label="Comanda"
                    input_type="number"
                    placeholder="N° de comanda"
                    value=list.filter(FILTER_ORDER)
                    on_change=Callback::new(move |v: String| list.set_filter(FILTER_ORDER, v))
                />
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Código"</th>
                            <th class="table__header-cell">"Fecha"</th>
                            <th class="table__header-cell">"Cliente"</th>
                            <th class="table__header-cell">"Comanda"</th>
                            <th class="table__header-cell table__header-cell--money">"Total"</th>
                            <th class="table__header-cell table__header-cell--money">"Pagado"</th>
                            <th class="table__header-cell table__header-cell--money">"Saldo"</th>
                            <th class="table__header-cell">"Estado"</th>
                            <th class="table__header-cell table__header-cell--actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if list.is_first_load() {
                                return view! { <LoadingRow colspan=9 /> }.into_any();
                            }
                            let rows = list.items.get();
                            if rows.is_empty() {
                                return view! { <EmptyRow colspan=9 text="No hay facturas" /> }.into_any();
                            }
                            rows.into_iter()
                                .map(|factura| {
                                    let id = factura.id_factura;
                                    let payable = accepts_payment(&factura);
                                    let for_payment = factura.clone();
                                    let for_annul = factura.clone();
                                    view! {
                                        <tr class="table__row" on:click=move |_| open_view(id)>
                                            <td class="table__cell">{factura.codigo.clone()}</td>
                                            <td class="table__cell">{factura.fecha_display()}</td>
                                            <td class="table__cell">{factura.cliente_label()}</td>
                                            <td class="table__cell">{factura.comanda_label()}</td>
                                            <TableCellMoney value=factura.total bold=true />
                                            <TableCellMoney value=factura.paid_amount() />
                                            <TableCellMoney value=factura.outstanding() highlight_debt=true />
                                            <td class="table__cell">
                                                <StatusBadge
                                                    label=factura.status_label()
                                                    variant=invoice_badge_variant(&factura)
                                                />
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Ver"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        open_view(id);
                                                    }
                                                >
                                                    {icon("eye")}
                                                </button>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Registrar pago"
                                                    disabled=!payable
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        open_payment(for_payment.clone());
                                                    }
                                                >
                                                    {icon("dollar-sign")}
                                                </button>
                                                <button
                                                    class="button button--ghost button--small"
                                                    title="Anular"
                                                    disabled=factura.baja
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        annul(for_annul.clone());
                                                    }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn factura(total: &str, pagado: &str, baja: bool) -> Factura {
        serde_json::from_str(&format!(
            r#"{{"id_factura": 1, "codigo": "FACT-20250315-00001",
                "fecha": "2025-03-15 22:00:00", "total": "{}",
                "id_cliente": 1, "total_pagado": "{}", "baja": {}}}"#,
            total, pagado, baja
        ))
        .unwrap()
    }

    #[test]
    fn payment_only_for_open_balance() {
        assert!(accepts_payment(&factura("3500", "2000", false)));
        assert!(!accepts_payment(&factura("3500", "3500", false)));
        assert!(!accepts_payment(&factura("3500", "0", true)));

        let bare: Factura = serde_json::from_str(
            r#"{"id_factura": 2, "codigo": "FACT-20250315-00002",
                "fecha": "2025-03-15 22:00:00", "total": 900, "id_cliente": 1}"#,
        )
        .unwrap();
        assert!(accepts_payment(&bare));
    }
}
