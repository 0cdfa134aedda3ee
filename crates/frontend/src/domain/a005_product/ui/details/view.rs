use super::view_model::{kind_options, ProductoDetailsViewModel};
use crate::shared::components::{id_value, FormInput, FormSelect};
use crate::shared::icons::icon;
use crate::shared::lookups::to_options;
use contracts::domain::a005_product::aggregate::ProductoId;
use leptos::prelude::*;

#[component]
pub fn ProductoDetails(
    id: Option<ProductoId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductoDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container producto-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar producto" } else { "Nuevo producto" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form details-form--grid">
                <FormInput
                    label="Código"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.codigo.clone()))
                    on_input=vm.field(|f, v| f.codigo = v)
                />
                <FormInput
                    label="Nombre"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.nombre.clone()))
                    on_input=vm.field(|f, v| f.nombre = v)
                />
                <FormInput
                    label="Precio"
                    required=true
                    placeholder="0,00"
                    value=vm.precio_text
                    on_input=Callback::new(move |v| vm.set_precio(v))
                />
                <FormSelect
                    label="Sección"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| id_value(f.id_seccion)))
                    on_change=Callback::new(move |v| vm.set_seccion(v))
                    options=Signal::derive(move || vm.secciones.with(|s| to_options(s, |x| x.nombre.clone())))
                />
                <FormSelect
                    label="Tipo"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.tipo.as_str().to_string()))
                    on_change=Callback::new(move |v| vm.set_tipo(v))
                    options=kind_options()
                />
                <Show when=move || vm.is_drink()>
                    <FormInput
                        label="Volumen (cm3)"
                        required=true
                        input_type="number"
                        value=Signal::derive(move || vm.form.with(|f| f.cm3.map(|c| c.to_string()).unwrap_or_default()))
                        on_input=Callback::new(move |v| vm.set_cm3(v))
                    />
                </Show>
                <FormInput
                    label="Descripción"
                    value=Signal::derive(move || vm.form.with(|f| f.descripcion.clone()))
                    on_input=vm.field(|f, v| f.descripcion = v)
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
