use super::view_model::SectorDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_sector::aggregate::SectorId;
use leptos::prelude::*;

#[component]
pub fn SectorDetails(
    id: Option<SectorId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SectorDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container sector-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar sector" } else { "Nuevo sector" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="sector_numero">"Número *"</label>
                    <input
                        type="number"
                        id="sector_numero"
                        min="1"
                        prop:value=move || vm.form.with(|f| f.numero.map(|n| n.to_string()).unwrap_or_default())
                        on:input=move |ev| vm.set_numero(event_target_value(&ev))
                        placeholder="Ej: 1"
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
