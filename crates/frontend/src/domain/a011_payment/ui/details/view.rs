use super::view_model::PagoDetailsViewModel;
use crate::shared::components::table::{format_money, format_opt_money};
use crate::shared::components::{id_value, FormInput, FormSelect, LoadingBlock};
use crate::shared::icons::icon;
use crate::shared::lookups::{display_options, to_options};
use contracts::domain::a010_invoice::aggregate::Factura;
use leptos::prelude::*;

#[component]
pub fn PagoDetails(
    #[prop(optional)] factura: Option<Factura>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let locked = factura.is_some();
    let vm = PagoDetailsViewModel::new();
    vm.load(factura);

    view! {
        <div class="details-container pago-details">
            <div class="details-header">
                <h3>"Registrar pago"</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <FormSelect
                    label="Factura"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| id_value(f.id_factura)))
                    on_change=Callback::new(move |v| vm.set_factura(v))
                    options=Signal::derive(move || vm.facturas.with(|l| to_options(l, Factura::option_label)))
                    disabled=locked
                />
                {move || {
                    if vm.resolving.get() {
                        return view! { <LoadingBlock /> }.into_any();
                    }
                    vm.selected_factura()
                        .map(|f| {
                            view! {
                                <div class="details-summary">
                                    <span>{format!("Total: {}", format_money(f.total))}</span>
                                    <span>{format!("Pagado: {}", format_opt_money(f.paid_amount()))}</span>
                                    <strong>{format!("Saldo: {}", format_opt_money(f.outstanding()))}</strong>
                                </div>
                            }
                        })
                        .into_any()
                }}
                <FormSelect
                    label="Medio de pago"
                    required=true
                    value=Signal::derive(move || vm.form.with(|f| id_value(f.id_medio_pago)))
                    on_change=Callback::new(move |v| vm.set_medio(v))
                    options=Signal::derive(move || vm.medios.with(|l| display_options(l)))
                />
                <FormInput
                    label="Monto"
                    required=true
                    input_type="number"
                    value=Signal::derive(move || vm.form.with(|f| f.monto.clone()))
                    on_input=Callback::new(move |v| vm.set_monto(v))
                />
                <FormInput
                    label="Fecha"
                    required=true
                    input_type="datetime-local"
                    value=Signal::derive(move || vm.form.with(|f| f.fecha.clone()))
                    on_input=Callback::new(move |v| vm.set_fecha(v))
                />
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get() || vm.resolving.get()
                    on:click=move |_| vm.save_command(on_saved)
                >
                    {icon("check")}
                    "Registrar"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
