use super::view_model::ClienteDetailsViewModel;
use crate::shared::components::FormInput;
use crate::shared::icons::icon;
use contracts::domain::a007_client::aggregate::ClienteId;
use leptos::prelude::*;

#[component]
pub fn ClienteDetails(
    id: Option<ClienteId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ClienteDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container cliente-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar cliente" } else { "Nuevo cliente" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form details-form--grid">
                <FormInput
                    label="Documento"
                    required=true
                    placeholder="Solo números, mínimo 7"
                    value=Signal::derive(move || vm.form.with(|f| f.documento.clone()))
                    on_input=vm.field(|f, v| f.documento = v)
                />
                <FormInput
                    label="Nombre"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.nombre.clone()))
                    on_input=vm.field(|f, v| f.nombre = v)
                />
                <FormInput
                    label="Apellido"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.apellido.clone()))
                    on_input=vm.field(|f, v| f.apellido = v)
                />
                <FormInput
                    label="Teléfono"
                    placeholder="7 a 15 dígitos"
                    value=Signal::derive(move || vm.form.with(|f| f.num_telefono.clone()))
                    on_input=vm.field(|f, v| f.num_telefono = v)
                />
                <FormInput
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                    on_input=vm.field(|f, v| f.email = v)
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
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
