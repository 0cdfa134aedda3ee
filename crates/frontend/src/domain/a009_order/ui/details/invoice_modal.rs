//! Выставление счёта по comanda в два шага: клиент, затем подтверждение.
//! Запрос уходит только со второго шага; ответ закрывает черновик.

use crate::shared::api_utils::post_json;
use crate::shared::components::table::format_money;
use crate::shared::components::{id_value, parse_id, FormSelect};
use crate::shared::icons::icon;
use crate::shared::lookups::{load_options, to_options};
use contracts::domain::a007_client::aggregate::Cliente;
use contracts::domain::a009_order::OrderDraft;
use contracts::domain::a010_invoice::aggregate::Factura;
use contracts::domain::a010_invoice::InvoiceWizard;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn InvoiceModal(draft: RwSignal<OrderDraft>, on_close: Callback<()>) -> impl IntoView {
    let wizard = RwSignal::new(InvoiceWizard::default());
    let error = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);
    let clientes = RwSignal::new(Vec::<Cliente>::new());
    load_options::<Cliente>("", clientes);

    let client_name = move || {
        let selected = wizard.with(|w| w.selected_client());
        clientes.with(|list| {
            selected
                .and_then(|id| list.iter().find(|c| c.id_cliente == id))
                .map(Cliente::full_name)
                .unwrap_or_default()
        })
    };

    let next = move |_| {
        let order = draft.get_untracked();
        if let Some(Err(e)) = wizard.try_update(|w| w.next(&order)) {
            error.set(Some(e.to_string()));
        } else {
            error.set(None);
        }
    };

    let generate = move |_| {
        if sending.get_untracked() || wizard.with_untracked(InvoiceWizard::is_done) {
            return;
        }
        let order = draft.get_untracked();
        let request = match wizard.with_untracked(|w| w.confirm(&order)) {
            Ok(r) => r,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        sending.set(true);
        spawn_local(async move {
            let result = post_json::<_, Factura>(&request.path(), &request).await;
            sending.set(false);
            match result {
                Ok(Some(factura)) => {
                    log::info!("factura {} generada para comanda {}", factura.codigo, request.id_comanda);
                    let mut order = draft.get_untracked();
                    match wizard.try_update(|w| w.complete(&mut order, factura)) {
                        Some(Err(e)) => error.set(Some(e.to_string())),
                        _ => {
                            error.set(None);
                            draft.set(order);
                        }
                    }
                }
                Ok(None) => error.set(Some("El servidor no devolvió la factura".to_string())),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-container invoice-wizard">
            <div class="details-header">
                <h3>"Generar factura"</h3>
                <span class="invoice-wizard__step">{move || wizard.with(|w| w.step_title())}</span>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match wizard.get() {
                InvoiceWizard::SelectClient { id_cliente } => view! {
                    <div class="details-form">
                        <FormSelect
                            label="Cliente"
                            required=true
                            value=id_value(id_cliente)
                            on_change=Callback::new(move |raw: String| {
                                wizard.update(|w| w.select_client(parse_id(&raw)))
                            })
                            options=Signal::derive(move || clientes.with(|c| to_options(c, Cliente::full_name)))
                        />
                        <p class="invoice-wizard__total">
                            "Total de la comanda: "
                            <strong>{move || format_money(draft.with(|d| d.total()))}</strong>
                        </p>
                    </div>
                    <div class="details-actions">
                        <button class="button button--primary" on:click=next>
                            "Siguiente"
                            {icon("chevron-right")}
                        </button>
                        <button class="button button--secondary" on:click=move |_| on_close.run(())>
                            "Cancelar"
                        </button>
                    </div>
                }
                .into_any(),
                InvoiceWizard::Confirm { .. } => view! {
                    <div class="details-form">
                        <p>"Se generará una factura y la comanda quedará cerrada."</p>
                        <dl class="invoice-wizard__summary">
                            <dt>"Cliente"</dt>
                            <dd>{client_name}</dd>
                            <dt>"Productos"</dt>
                            <dd>{move || draft.with(|d| d.lines().len())}</dd>
                            <dt>"Total"</dt>
                            <dd>{move || format_money(draft.with(|d| d.total()))}</dd>
                        </dl>
                    </div>
                    <div class="details-actions">
                        <button
                            class="button button--primary"
                            disabled=move || sending.get()
                            on:click=generate
                        >
                            {icon("check")}
                            "Generar factura"
                        </button>
                        <button
                            class="button button--secondary"
                            on:click=move |_| wizard.update(|w| w.back())
                        >
                            "Volver"
                        </button>
                    </div>
                }
                .into_any(),
                InvoiceWizard::Done { factura } => view! {
                    <div class="details-form">
                        <p>
                            "Factura " <strong>{factura.codigo.clone()}</strong> " generada para "
                            {factura.cliente_label()}
                        </p>
                        <p>"Total: " <strong>{format_money(factura.total)}</strong></p>
                    </div>
                    <div class="details-actions">
                        <button class="button button--primary" on:click=move |_| on_close.run(())>
                            "Cerrar"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
