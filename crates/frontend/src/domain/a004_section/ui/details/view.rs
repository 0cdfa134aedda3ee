use super::view_model::SeccionDetailsViewModel;
use crate::shared::components::FormInput;
use crate::shared::icons::icon;
use contracts::domain::a004_section::aggregate::SeccionId;
use leptos::prelude::*;

#[component]
pub fn SeccionDetails(
    id: Option<SeccionId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SeccionDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container seccion-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar sección" } else { "Nueva sección" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <FormInput
                    label="Nombre"
                    required=true
                    placeholder="Ej: Entradas"
                    value=Signal::derive(move || vm.form.with(|f| f.nombre.clone()))
                    on_input=Callback::new(move |v| vm.set_nombre(v))
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
