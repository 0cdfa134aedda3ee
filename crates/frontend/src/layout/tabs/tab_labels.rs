//! Заголовки вкладок.
//!
//! Для агрегатов берётся `list_name()` из contracts, для отчётов - строка.

use contracts::domain::a001_sector::aggregate::Sector;
use contracts::domain::a002_dining_table::aggregate::Mesa;
use contracts::domain::a003_waiter::aggregate::Mozo;
use contracts::domain::a004_section::aggregate::Seccion;
use contracts::domain::a005_product::aggregate::Producto;
use contracts::domain::a006_payment_method::aggregate::MedioPago;
use contracts::domain::a007_client::aggregate::Cliente;
use contracts::domain::a008_reservation::aggregate::Reserva;
use contracts::domain::a009_order::aggregate::Comanda;
use contracts::domain::a010_invoice::aggregate::Factura;
use contracts::domain::a011_payment::aggregate::Pago;
use contracts::domain::common::AggregateRoot;

/// Префикс вкладки редактора comanda: `a009_order_detail_{id|new}`
pub const ORDER_DETAIL_PREFIX: &str = "a009_order_detail_";

/// Заголовок вкладки по ключу. Неизвестный ключ отдаётся как есть.
pub fn tab_label_for_key(key: &str) -> String {
    let label = match key {
        // ── Operación ─────────────────────────────────────────────────────
        "a008_reservation" => Reserva::list_name(),
        "a009_order" => Comanda::list_name(),
        "a010_invoice" => Factura::list_name(),
        "a011_payment" => Pago::list_name(),

        // ── Catálogo ──────────────────────────────────────────────────────
        "a001_sector" => Sector::list_name(),
        "a002_dining_table" => Mesa::list_name(),
        "a003_waiter" => Mozo::list_name(),
        "a004_section" => Seccion::list_name(),
        "a005_product" => Producto::list_name(),
        "a006_payment_method" => MedioPago::list_name(),
        "a007_client" => Cliente::list_name(),

        // ── Reportes ──────────────────────────────────────────────────────
        "d400_reports" => "Reportes",

        k if k.starts_with(ORDER_DETAIL_PREFIX) => {
            let id = &k[ORDER_DETAIL_PREFIX.len()..];
            return if id == "new" {
                detail_tab_label(Comanda::element_name(), "nueva")
            } else {
                detail_tab_label(Comanda::element_name(), id)
            };
        }

        _ => key,
    };
    label.to_string()
}

/// `detail_tab_label("Comanda", "12")` → `"Comanda · 12"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Ключ вкладки редактора comanda
pub fn order_detail_key(id: Option<i64>) -> String {
    match id {
        Some(id) => format!("{}{}", ORDER_DETAIL_PREFIX, id),
        None => format!("{}new", ORDER_DETAIL_PREFIX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keys_use_aggregate_names() {
        assert_eq!(tab_label_for_key("a003_waiter"), "Mozos");
        assert_eq!(tab_label_for_key("a006_payment_method"), "Medios de pago");
        assert_eq!(tab_label_for_key("d400_reports"), "Reportes");
        assert_eq!(tab_label_for_key("zzz"), "zzz");
    }

    #[test]
    fn order_detail_keys() {
        assert_eq!(order_detail_key(Some(12)), "a009_order_detail_12");
        assert_eq!(tab_label_for_key(&order_detail_key(Some(12))), "Comanda · 12");
        assert_eq!(tab_label_for_key(&order_detail_key(None)), "Comanda · nueva");
    }
}
