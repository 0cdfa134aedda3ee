use super::view_model::{mesa_option_label, ReservaDetailsViewModel};
use crate::shared::components::{id_value, FormInput, FormSelect};
use crate::shared::icons::icon;
use crate::shared::lookups::{display_options, to_options};
use contracts::domain::a008_reservation::aggregate::ReservaId;
use leptos::prelude::*;

#[component]
pub fn ReservaDetails(
    id: Option<ReservaId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ReservaDetailsViewModel::new();
    vm.load_if_needed(id);
    let locked = Signal::derive(move || vm.locked.get());

    view! {
        <div class="details-container reserva-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar reserva" } else { "Nueva reserva" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            <Show when=move || vm.locked.get()>
                <div class="info-banner">"La reserva no está activa y no puede modificarse"</div>
            </Show>

            <div class="details-form details-form--grid">
                <FormInput
                    label="Número"
                    required=true
                    input_type="number"
                    disabled=locked
                    value=Signal::derive(move || vm.form.with(|f| f.numero.map(|n| n.to_string()).unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.set_numero(v))
                />
                <FormInput
                    label="Fecha y hora"
                    required=true
                    input_type="datetime-local"
                    disabled=locked
                    value=Signal::derive(move || vm.form.with(|f| f.fecha_hora.clone()))
                    on_input=Callback::new(move |v| vm.set_fecha_hora(v))
                />
                <FormSelect
                    label="Cliente"
                    required=true
                    disabled=locked
                    value=Signal::derive(move || vm.form.with(|f| id_value(f.id_cliente)))
                    on_change=Callback::new(move |v| vm.set_cliente(v))
                    options=Signal::derive(move || vm.clientes.with(|c| display_options(c)))
                />
                <FormSelect
                    label="Mesa"
                    required=true
                    disabled=locked
                    value=Signal::derive(move || vm.form.with(|f| id_value(f.id_mesa)))
                    on_change=Callback::new(move |v| vm.set_mesa(v))
                    options=Signal::derive(move || vm.mesas.with(|m| to_options(m, mesa_option_label)))
                />
                <FormInput
                    label="Personas"
                    required=true
                    input_type="number"
                    disabled=locked
                    value=Signal::derive(move || vm.form.with(|f| f.cant_personas.map(|n| n.to_string()).unwrap_or_default()))
                    on_input=Callback::new(move |v| vm.set_personas(v))
                />
            </div>
            {move || vm.capacity_warning().map(|w| view! { <div class="info-banner">{w}</div> })}

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get() || vm.locked.get()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {icon("check")}
                    {move || if vm.is_edit_mode() { "Guardar" } else { "Crear" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
