//! Comanda из посещённой брони: mozo, необязательные productos и
//! observaciones. Сервер сам берёт mesa из брони.

use crate::domain::a009_order::ui::details::OrderLinesEditor;
use crate::shared::api_utils::post_json;
use crate::shared::components::{id_value, parse_id, FormInput, FormSelect};
use crate::shared::date_utils::now_local;
use crate::shared::icons::icon;
use crate::shared::lookups::{load_options, to_options, ACTIVE_ONLY};
use contracts::domain::a003_waiter::aggregate::Mozo;
use contracts::domain::a005_product::aggregate::Producto;
use contracts::domain::a008_reservation::aggregate::Reserva;
use contracts::domain::a009_order::aggregate::{Comanda, ComandaId, FROM_RESERVATION_PATH};
use contracts::domain::a009_order::OrderDraft;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn OrderFromReservation(
    reserva: Reserva,
    /// id созданной comanda, если сервер его вернул
    on_created: Callback<Option<ComandaId>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(OrderDraft::new(now_local()));
    let error = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);
    let mozos = RwSignal::new(Vec::<Mozo>::new());
    let productos = RwSignal::new(Vec::<Producto>::new());
    load_options::<Mozo>(ACTIVE_ONLY, mozos);
    load_options::<Producto>(ACTIVE_ONLY, productos);

    let title = format!("Crear comanda desde {}", reserva.display_name());
    let summary = format!(
        "Cliente: {} · Mesa: {} · Personas: {}",
        reserva.cliente_label(),
        reserva.mesa_label(),
        reserva.cant_personas
    );
    let reserva = StoredValue::new(reserva);

    let submit = move |_| {
        let request = match reserva.with_value(|r| draft.with_untracked(|d| d.reservation_request(r))) {
            Ok(req) => req,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        sending.set(true);
        spawn_local(async move {
            let result = post_json::<_, Comanda>(FROM_RESERVATION_PATH, &request).await;
            sending.set(false);
            match result {
                Ok(created) => {
                    log::info!("comanda creada desde reserva {}", request.id_reserva);
                    on_created.run(created.map(|c| c.id_comanda));
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-container order-from-reservation">
            <div class="details-header">
                <h3>{title}</h3>
            </div>
            <p class="details-summary">{summary}</p>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <FormSelect
                    label="Mozo"
                    required=true
                    value=Signal::derive(move || draft.with(|d| id_value(d.id_mozo)))
                    on_change=Callback::new(move |raw: String| draft.update(|d| d.id_mozo = parse_id(&raw)))
                    options=Signal::derive(move || mozos.with(|m| to_options(m, |x: &Mozo| x.nombre_apellido.clone())))
                />
                <FormInput
                    label="Observaciones"
                    placeholder="Ej: sin picante"
                    value=Signal::derive(move || draft.with(|d| d.observaciones.clone()))
                    on_input=Callback::new(move |v: String| draft.update(|d| d.observaciones = v))
                />
            </div>

            <OrderLinesEditor draft=draft productos=productos error=error />

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || sending.get()
                    on:click=submit
                >
                    {icon("check")}
                    "Crear comanda"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
