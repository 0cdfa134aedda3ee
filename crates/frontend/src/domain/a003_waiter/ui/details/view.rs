use super::view_model::MozoDetailsViewModel;
use crate::shared::components::{id_value, FormInput, FormSelect};
use crate::shared::icons::icon;
use crate::shared::lookups::display_options;
use contracts::domain::a003_waiter::aggregate::MozoId;
use leptos::prelude::*;

#[component]
pub fn MozoDetails(
    id: Option<MozoId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = MozoDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container mozo-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar mozo" } else { "Nuevo mozo" }}</h3>
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
                    label="Nombre y apellido"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.nombre_apellido.clone()))
                    on_input=vm.field(|f, v| f.nombre_apellido = v)
                />
                <FormInput
                    label="Dirección"
                    value=Signal::derive(move || vm.form.with(|f| f.direccion.clone()))
                    on_input=vm.field(|f, v| f.direccion = v)
                />
                <FormInput
                    label="Teléfono"
                    placeholder="7 a 15 dígitos"
                    value=Signal::derive(move || vm.form.with(|f| f.telefono.clone()))
                    on_input=vm.field(|f, v| f.telefono = v)
                />
                <FormSelect
                    label="Sector"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| id_value(f.id_sector)))
                    on_change=Callback::new(move |v| vm.set_sector(v))
                    options=Signal::derive(move || vm.sectores.with(|s| display_options(s)))
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
