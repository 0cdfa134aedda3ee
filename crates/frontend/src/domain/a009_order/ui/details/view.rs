use super::invoice_modal::InvoiceModal;
use super::lines::OrderLinesEditor;
use super::view_model::ComandaEditorViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::order_detail_key;
use crate::shared::components::{
    id_value, ErrorBanner, FormInput, FormSelect, LoadingBlock, ReasonDialog, StatusBadge,
};
use crate::shared::icons::icon;
use crate::shared::lookups::{display_options, to_options};
use crate::shared::modal_stack::{ModalSize, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_waiter::aggregate::Mozo;
use contracts::domain::a009_order::aggregate::ComandaId;
use contracts::domain::a009_order::OrderStatus;
use leptos::prelude::*;

/// Вкладка comanda: новая (`id = None`) или существующая.
#[component]
pub fn ComandaEditor(id: Option<ComandaId>, on_close: Callback<()>) -> impl IntoView {
    let vm = ComandaEditorViewModel::new();
    vm.load(id);
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    // После первого сохранения новая comanda переезжает в свою вкладку
    let on_saved = Callback::new(move |saved: ComandaId| {
        if id.is_none() {
            let key = order_detail_key(Some(saved.0));
            tabs.replace_tab(&order_detail_key(None), &key, &tab_label_for_key(&key));
        }
    });

    let open_cancel_dialog = move |_| {
        modal_stack.push(ModalSize::Narrow, move |handle| {
            view! {
                <ReasonDialog
                    title="Dar de baja la comanda"
                    label="Motivo (opcional)"
                    confirm_label="Confirmar baja"
                    error=vm.error
                    on_confirm=Callback::new(move |reason: String| {
                        vm.cancel_command(reason, Callback::new(move |_| handle.close()))
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        });
    };

    let open_invoice = move |_| {
        modal_stack.push(ModalSize::Form, move |handle| {
            view! {
                <InvoiceModal draft=vm.draft on_close=Callback::new(move |_| handle.close()) />
            }
            .into_any()
        });
    };

    let header_locked = move || !vm.is_open();

    view! {
        <PageFrame page_id="a009_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h1 class="page__title">
                    {move || match vm.draft.with(|d| d.id) {
                        Some(id) => format!("Comanda {}", id),
                        None => "Nueva comanda".to_string(),
                    }}
                </h1>
                {move || {
                    let status = vm.status();
                    view! { <StatusBadge label=status.label() variant=status.badge_variant() /> }
                }}
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        disabled=move || vm.saving.get() || header_locked()
                        on:click=move |_| vm.save_command(on_saved)
                    >
                        {icon("save")}
                        "Guardar"
                    </button>
                    <Show when=move || vm.is_edit_mode()>
                        <button
                            class="button button--secondary"
                            disabled=move || !vm.can_invoice()
                            title=move || vm.draft.with(|d| d.is_dirty()).then_some("Guarde los cambios antes de facturar")
                            on:click=open_invoice
                        >
                            {icon("file-text")}
                            "Generar factura"
                        </button>
                        <button
                            class="button button--danger"
                            disabled=header_locked
                            on:click=open_cancel_dialog
                        >
                            {icon("trash")}
                            "Dar de baja"
                        </button>
                    </Show>
                    <button class="button button--ghost" on:click=move |_| on_close.run(())>
                        {icon("x")}
                        "Cerrar"
                    </button>
                </div>
            </div>

            <ErrorBanner error=vm.error />

            {move || match vm.status() {
                OrderStatus::Closed { invoice_id: Some(f) } => Some(view! {
                    <div class="info-banner">{format!("Comanda cerrada con la factura #{}", f)}</div>
                }.into_any()),
                OrderStatus::Cancelled { reason } => Some(view! {
                    <div class="info-banner info-banner--error">
                        {format!("Comanda dada de baja{}", reason.map(|r| format!(": {}", r)).unwrap_or_default())}
                    </div>
                }.into_any()),
                _ => None,
            }}

            <Show when=move || !vm.loading.get() fallback=|| view! { <LoadingBlock /> }>
                <div class="details-form details-form--grid">
                    <FormSelect
                        label="Mesa"
                        required=true
                        disabled=Signal::derive(header_locked)
                        value=Signal::derive(move || vm.draft.with(|d| id_value(d.id_mesa)))
                        on_change=Callback::new(move |v| vm.set_mesa(v))
                        options=Signal::derive(move || vm.mesas.with(|m| display_options(m)))
                    />
                    <FormSelect
                        label="Mozo"
                        required=true
                        disabled=Signal::derive(header_locked)
                        value=Signal::derive(move || vm.draft.with(|d| id_value(d.id_mozo)))
                        on_change=Callback::new(move |v| vm.set_mozo(v))
                        options=Signal::derive(move || vm.mozos.with(|m| to_options(m, |x: &Mozo| x.nombre_apellido.clone())))
                    />
                    <FormInput
                        label="Fecha"
                        required=true
                        input_type="datetime-local"
                        disabled=Signal::derive(header_locked)
                        value=Signal::derive(move || vm.draft.with(|d| d.fecha.clone()))
                        on_input=Callback::new(move |v| vm.set_fecha(v))
                    />
                    <FormInput
                        label="Observaciones"
                        disabled=Signal::derive(header_locked)
                        value=Signal::derive(move || vm.draft.with(|d| d.observaciones.clone()))
                        on_input=Callback::new(move |v| vm.set_observaciones(v))
                    />
                </div>

                <h3 class="section-title">"Productos"</h3>
                <OrderLinesEditor
                    draft=vm.draft
                    productos=vm.productos
                    error=vm.error
                    show_delivered=true
                />
            </Show>
        </PageFrame>
    }
}
