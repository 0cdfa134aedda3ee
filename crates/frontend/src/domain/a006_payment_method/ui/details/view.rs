use super::view_model::MedioPagoDetailsViewModel;
use crate::shared::components::FormInput;
use crate::shared::icons::icon;
use contracts::domain::a006_payment_method::aggregate::MedioPagoId;
use leptos::prelude::*;

#[component]
pub fn MedioPagoDetails(
    id: Option<MedioPagoId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = MedioPagoDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container medio-pago-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar medio de pago" } else { "Nuevo medio de pago" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <FormInput
                    label="Nombre"
                    required=true
                    placeholder="Ej: Efectivo"
                    value=Signal::derive(move || vm.form.with(|f| f.nombre.clone()))
                    on_input=Callback::new(move |v| vm.set_nombre(v))
                />
                <div class="form-group">
                    <label for="medio_pago_descripcion">"Descripción"</label>
                    <textarea
                        id="medio_pago_descripcion"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.descripcion.clone())
                        on:input=move |ev| vm.set_descripcion(event_target_value(&ev))
                    />
                </div>
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
