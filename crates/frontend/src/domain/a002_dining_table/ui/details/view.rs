use super::view_model::MesaDetailsViewModel;
use crate::shared::components::{id_value, FormSelect};
use crate::shared::icons::icon;
use crate::shared::lookups::display_options;
use contracts::domain::a002_dining_table::aggregate::{MesaId, MAX_GUESTS_PER_TABLE};
use leptos::prelude::*;

#[component]
pub fn MesaDetails(
    id: Option<MesaId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = MesaDetailsViewModel::new();
    vm.load_options();
    vm.load_if_needed(id);

    let tipo_options = Signal::derive(move || {
        vm.tipos
            .get()
            .into_iter()
            .map(|t| (t.clone(), t))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="details-container mesa-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar mesa" } else { "Nueva mesa" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form details-form--grid">
                <div class="form-group">
                    <label for="mesa_numero">"Número *"</label>
                    <input
                        type="number"
                        id="mesa_numero"
                        min="1"
                        prop:value=move || vm.form.with(|f| f.numero.map(|n| n.to_string()).unwrap_or_default())
                        on:input=move |ev| vm.set_numero(event_target_value(&ev))
                    />
                </div>

                <FormSelect
                    label="Tipo"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| f.tipo.clone()))
                    on_change=Callback::new(move |v: String| vm.form.update(|f| f.tipo = v))
                    options=tipo_options
                />

                <div class="form-group">
                    <label for="mesa_comensales">"Comensales *"</label>
                    <input
                        type="number"
                        id="mesa_comensales"
                        min="1"
                        max=MAX_GUESTS_PER_TABLE.to_string()
                        prop:value=move || vm.form.with(|f| f.cant_comensales.map(|n| n.to_string()).unwrap_or_default())
                        on:input=move |ev| vm.set_comensales(event_target_value(&ev))
                    />
                </div>

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
