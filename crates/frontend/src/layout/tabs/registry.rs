//! tab.key → View. Все ключи вкладок собраны здесь.

use super::tab_labels::ORDER_DETAIL_PREFIX;
use crate::dashboards::d400_reports::ReportsDashboard;
use crate::domain::a001_sector::ui::list::SectorList;
use crate::domain::a002_dining_table::ui::list::MesaList;
use crate::domain::a003_waiter::ui::list::MozoList;
use crate::domain::a004_section::ui::list::SeccionList;
use crate::domain::a005_product::ui::list::ProductoList;
use crate::domain::a006_payment_method::ui::list::MedioPagoList;
use crate::domain::a007_client::ui::list::ClienteList;
use crate::domain::a008_reservation::ui::list::ReservaList;
use crate::domain::a009_order::ui::details::ComandaEditor;
use crate::domain::a009_order::ui::list::ComandaList;
use crate::domain::a010_invoice::ui::list::FacturaList;
use crate::domain::a011_payment::ui::list::PagoList;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a009_order::aggregate::ComandaId;
use contracts::domain::common::AggregateId;
use leptos::logging::log;
use leptos::prelude::*;

/// Контент вкладки по ключу; для неизвестных ключей - заглушка.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Operación
        // ═══════════════════════════════════════════════════════════════════
        "a008_reservation" => view! { <ReservaList /> }.into_any(),
        "a009_order" => view! { <ComandaList /> }.into_any(),
        k if k.starts_with(ORDER_DETAIL_PREFIX) => {
            let raw = &k[ORDER_DETAIL_PREFIX.len()..];
            let id = if raw == "new" {
                None
            } else {
                match ComandaId::from_string(raw) {
                    Ok(id) => Some(id),
                    Err(e) => {
                        log!("bad order tab key '{}': {}", k, e);
                        return view! { <div class="placeholder">{e}</div> }.into_any();
                    }
                }
            };
            view! {
                <ComandaEditor
                    id=id
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }
        "a010_invoice" => view! { <FacturaList /> }.into_any(),
        "a011_payment" => view! { <PagoList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Catálogo
        // ═══════════════════════════════════════════════════════════════════
        "a001_sector" => view! { <SectorList /> }.into_any(),
        "a002_dining_table" => view! { <MesaList /> }.into_any(),
        "a003_waiter" => view! { <MozoList /> }.into_any(),
        "a004_section" => view! { <SeccionList /> }.into_any(),
        "a005_product" => view! { <ProductoList /> }.into_any(),
        "a006_payment_method" => view! { <MedioPagoList /> }.into_any(),
        "a007_client" => view! { <ClienteList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Reportes
        // ═══════════════════════════════════════════════════════════════════
        "d400_reports" => view! { <ReportsDashboard /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">"Sección no disponible"</div> }.into_any()
        }
    }
}
