//! Счёт только для чтения: шапка, снимок строк comanda, платежи, остаток.

use crate::domain::a010_invoice::payments::resolve_payments;
use crate::shared::api_utils::fetch_aggregate;
use crate::shared::components::table::{format_money, format_opt_money, TableCellMoney};
use crate::shared::components::{ErrorBanner, LoadingBlock, StatusBadge};
use contracts::domain::a010_invoice::aggregate::{Factura, FacturaId};
use contracts::domain::common::Deactivatable;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Вариант бейджа по состоянию оплаты
pub fn invoice_badge_variant(factura: &Factura) -> &'static str {
    if factura.baja {
        "error"
    } else if factura.is_paid() {
        "success"
    } else {
        "warning"
    }
}

#[component]
pub fn FacturaView(id: FacturaId, on_close: Callback<()>) -> impl IntoView {
    let factura = RwSignal::new(None::<Factura>);
    let error = RwSignal::new(None::<String>);
    spawn_local(async move {
        match fetch_aggregate::<Factura>(id).await {
            Ok(mut f) => {
                if let Err(e) = resolve_payments(&mut f).await {
                    error.set(Some(format!("No se pudieron obtener los pagos: {}", e)));
                }
                factura.set(Some(f));
            }
            Err(e) => error.set(Some(format!("Error al cargar la factura: {}", e))),
        }
    });

    view! {
        <div class="details-container factura-view">
            <ErrorBanner error=error />
            {move || match factura.get() {
                None => view! { <LoadingBlock /> }.into_any(),
                Some(f) => render_invoice(f).into_any(),
            }}
            <div class="details-actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cerrar"
                </button>
            </div>
        </div>
    }
}

fn render_invoice(f: Factura) -> impl IntoView {
    let detalles = f.detalles.clone();
    let pagos = f.pagos.clone();
    let has_pagos = !pagos.is_empty();

    view! {
        <div class="details-header">
            <h3>{format!("Factura {}", f.codigo)}</h3>
            <StatusBadge label=f.status_label() variant=invoice_badge_variant(&f) />
        </div>
        <dl class="factura-view__header">
            <dt>"Fecha"</dt>
            <dd>{f.fecha_display()}</dd>
            <dt>"Cliente"</dt>
            <dd>{f.cliente_label()}</dd>
            <dt>"Comanda"</dt>
            <dd>{f.comanda_label()}</dd>
        </dl>

        <h4 class="section-title">"Detalle"</h4>
        <table class="table__data table--striped">
            <thead class="table__head">
                <tr>
                    <th class="table__header-cell">"Producto"</th>
                    <th class="table__header-cell">"Cantidad"</th>
                    <th class="table__header-cell table__header-cell--money">"Precio"</th>
                    <th class="table__header-cell table__header-cell--money">"Subtotal"</th>
                </tr>
            </thead>
            <tbody>
                {detalles
                    .into_iter()
                    .map(|d| {
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{d.producto.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td class="table__cell">{d.cantidad}</td>
                                <TableCellMoney value=d.precio_unitario />
                                <TableCellMoney value=d.subtotal() />
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>

        <Show when=move || has_pagos>
            <h4 class="section-title">"Pagos"</h4>
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Fecha"</th>
                        <th class="table__header-cell">"Medio de pago"</th>
                        <th class="table__header-cell table__header-cell--money">"Monto"</th>
                    </tr>
                </thead>
                <tbody>
                    {pagos
                        .iter()
                        .map(|p| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{p.fecha_display()}</td>
                                    <td class="table__cell">{p.medio_pago_label()}</td>
                                    <TableCellMoney value=p.monto />
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </Show>

        <dl class="factura-view__totals">
            <dt>"Total"</dt>
            <dd><strong>{format_money(f.total)}</strong></dd>
            <dt>"Pagado"</dt>
            <dd>{format_opt_money(f.paid_amount())}</dd>
            <dt>"Saldo"</dt>
            <dd class:factura-view__debt={f.outstanding().is_some_and(|o| o > 0.0)}>
                {format_opt_money(f.outstanding())}
            </dd>
        </dl>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factura(pagado: &str, baja: bool) -> Factura {
        serde_json::from_str(&format!(
            r#"{{"id_factura": 1, "codigo": "FACT-20250315-00001",
                "fecha": "2025-03-15 22:00:00", "total": "3500.00",
                "id_cliente": 1, "total_pagado": "{}", "baja": {}}}"#,
            pagado, baja
        ))
        .unwrap()
    }

    #[test]
    fn badge_follows_payment_state() {
        assert_eq!(invoice_badge_variant(&factura("2000", false)), "warning");
        assert_eq!(invoice_badge_variant(&factura("3500", false)), "success");
        assert_eq!(invoice_badge_variant(&factura("0", true)), "error");

        let bare: Factura = serde_json::from_str(
            r#"{"id_factura": 2, "codigo": "FACT-20250315-00002",
                "fecha": "2025-03-15 22:00:00", "total": 900, "id_cliente": 1}"#,
        )
        .unwrap();
        assert_eq!(invoice_badge_variant(&bare), "warning");
    }
}
