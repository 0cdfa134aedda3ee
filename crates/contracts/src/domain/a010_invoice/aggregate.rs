use crate::domain::a007_client::aggregate::{Cliente, ClienteId};
use crate::domain::a009_order::aggregate::{Comanda, ComandaId};
use crate::domain::a011_payment::aggregate::Pago;
use crate::domain::common::{AggregateRoot, Deactivatable};
use crate::shared::api::Page;
use crate::shared::datetime;
use crate::shared::money::{deserialize_money, deserialize_opt_money, round_money, sum_money};
use serde::{Deserialize, Serialize};

/// Максимальный `per_page`, который принимает сервер
const PAYMENTS_LOOKUP_PAGE: u32 = 100;

crate::int_id!(
    /// Идентификатор счёта
    FacturaId
);

/// Счёт. Создаётся только сервером при закрытии comanda; дальше меняется
/// лишь набор платежей.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factura {
    pub id_factura: FacturaId,
    /// `FACT-YYYYMMDD-NNNNN`
    pub codigo: String,
    pub fecha: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub total: f64,
    pub id_cliente: ClienteId,
    #[serde(default)]
    pub cliente: Option<Cliente>,
    #[serde(default)]
    pub id_comanda: Option<ComandaId>,
    #[serde(default)]
    pub comanda: Option<Comanda>,
    #[serde(default)]
    pub detalles: Vec<DetalleFactura>,
    #[serde(default)]
    pub pagos: Vec<Pago>,
    #[serde(default, deserialize_with = "deserialize_opt_money")]
    pub total_pagado: Option<f64>,
    /// Счёт аннулирован
    #[serde(default, alias = "anulada")]
    pub baja: bool,
}

impl Factura {
    /// Оплачено: по списку платежей, если он пришёл, иначе по `total_pagado`.
    /// `None`, когда сервер не прислал ни того, ни другого.
    pub fn paid_amount(&self) -> Option<f64> {
        if self.pagos.is_empty() {
            return self.total_pagado.map(round_money);
        }
        Some(sum_money(self.pagos.iter().map(|p| p.monto)))
    }

    /// `total − Σ pagos`, не меньше нуля; `None`, пока сумма платежей неизвестна
    pub fn outstanding(&self) -> Option<f64> {
        self.paid_amount()
            .map(|paid| round_money(self.total - paid).max(0.0))
    }

    pub fn is_paid(&self) -> bool {
        self.outstanding().is_some_and(|rest| rest <= 0.0)
    }

    /// Учитывает платёж, принятый сервером
    pub fn apply_payment(&mut self, pago: Pago) {
        self.pagos.push(pago);
        self.total_pagado = Some(sum_money(self.pagos.iter().map(|p| p.monto)));
    }

    /// Запрос к `/api/pagos/`: сервер ищет платежи только по коду счёта
    pub fn payments_query(&self) -> String {
        format!(
            "search={}&per_page={}",
            urlencoding::encode(&self.codigo),
            PAYMENTS_LOOKUP_PAGE
        )
    }

    /// Переносит в счёт его платежи из ответа поиска. Поиск по коду может
    /// вернуть чужие счета, они отбрасываются. Если ответ не уместился в
    /// одну страницу, сумма остаётся неизвестной и возвращается `false`.
    pub fn settle_payments(&mut self, page: Page<Pago>) -> bool {
        if page.pagination.has_next {
            return false;
        }
        self.pagos = page
            .items
            .into_iter()
            .filter(|p| p.id_factura == self.id_factura)
            .collect();
        self.total_pagado = Some(sum_money(self.pagos.iter().map(|p| p.monto)));
        true
    }

    pub fn cliente_label(&self) -> String {
        self.cliente
            .as_ref()
            .map(Cliente::full_name)
            .unwrap_or_else(|| format!("#{}", self.id_cliente))
    }

    pub fn comanda_label(&self) -> String {
        self.id_comanda
            .map(|id| format!("Comanda {}", id))
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn fecha_display(&self) -> String {
        datetime::format_display_datetime(&self.fecha)
    }

    /// Подпись для выпадающих списков формы платежа
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.codigo, self.cliente_label())
    }

    /// `DELETE /api/facturas/{id}`: аннулирование
    pub fn annul_path(&self) -> String {
        Self::item_path(self.id_factura)
    }
}

impl Deactivatable for Factura {
    fn is_deactivated(&self) -> bool {
        self.baja
    }

    fn deactivate(&mut self) {
        self.baja = true;
    }

    fn can_edit(&self) -> bool {
        false
    }

    fn status_label(&self) -> &'static str {
        if self.baja {
            "Anulada"
        } else if self.is_paid() {
            "Pagada"
        } else {
            "Impaga"
        }
    }
}

impl AggregateRoot for Factura {
    type Id = FacturaId;

    fn id(&self) -> Self::Id {
        self.id_factura
    }

    fn display_name(&self) -> String {
        self.codigo.clone()
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "facturas"
    }

    fn element_name() -> &'static str {
        "Factura"
    }

    fn list_name() -> &'static str {
        "Facturas"
    }
}

/// Снимок строки comanda на момент выставления счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetalleFactura {
    #[serde(default)]
    pub id_detalle_factura: Option<i64>,
    #[serde(default)]
    pub id_detalle_comanda: Option<i64>,
    #[serde(default)]
    pub producto: Option<String>,
    #[serde(default)]
    pub cantidad: i32,
    #[serde(default, deserialize_with = "deserialize_money")]
    pub precio_unitario: f64,
    #[serde(default, deserialize_with = "deserialize_opt_money")]
    pub subtotal: Option<f64>,
}

impl DetalleFactura {
    pub fn subtotal(&self) -> f64 {
        self.subtotal
            .unwrap_or_else(|| round_money(self.precio_unitario * f64::from(self.cantidad)))
    }
}

/// `POST /api/facturas/generar-desde-comanda/{id_comanda}` с телом `{id_cliente}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateInvoiceRequest {
    #[serde(skip)]
    pub id_comanda: ComandaId,
    pub id_cliente: ClienteId,
}

impl GenerateInvoiceRequest {
    pub fn path(&self) -> String {
        format!("/api/facturas/generar-desde-comanda/{}", self.id_comanda)
    }
}

/// Фильтр "только неоплаченные" для списка счетов
pub const FILTER_ONLY_UNPAID: (&str, &str) = ("solo_impagas", "true");
pub const FILTER_ORDER: &str = "id_comanda";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_payment_method::aggregate::MedioPagoId;
    use crate::domain::a011_payment::aggregate::PagoId;
    use crate::shared::api::Pagination;

    fn factura() -> Factura {
        serde_json::from_str(
            r#"{"id_factura": 40, "codigo": "FACT-20250315-00001",
                "fecha": "2025-03-15 22:00:00", "total": "3500.00",
                "id_cliente": 1, "id_comanda": 7}"#,
        )
        .unwrap()
    }

    fn pago(id: i64, monto: f64) -> Pago {
        Pago {
            id_pago: PagoId(id),
            id_factura: FacturaId(40),
            factura_codigo: None,
            id_medio_pago: MedioPagoId(1),
            medio_pago_nombre: None,
            monto,
            fecha: "2025-03-15 22:05:00".into(),
        }
    }

    #[test]
    fn outstanding_goes_down_with_payments() {
        let mut f = Factura { total_pagado: Some(0.0), ..factura() };
        assert_eq!(f.total, 3500.0);
        assert_eq!(f.outstanding(), Some(3500.0));
        assert_eq!(f.status_label(), "Impaga");

        f.apply_payment(pago(1, 2000.0));
        assert_eq!(f.paid_amount(), Some(2000.0));
        assert_eq!(f.outstanding(), Some(1500.0));

        f.apply_payment(pago(2, 1500.0));
        assert_eq!(f.outstanding(), Some(0.0));
        assert!(f.is_paid());
        assert_eq!(f.status_label(), "Pagada");
    }

    #[test]
    fn server_total_pagado_is_used_without_payment_list() {
        let f = Factura { total_pagado: Some(1000.0), ..factura() };
        assert_eq!(f.outstanding(), Some(2500.0));
        let over = Factura { total_pagado: Some(4000.0), ..factura() };
        assert_eq!(over.outstanding(), Some(0.0));
    }

    #[test]
    fn bare_invoice_payload_has_unknown_balance() {
        let f = factura();
        assert_eq!(f.paid_amount(), None);
        assert_eq!(f.outstanding(), None);
        assert!(!f.is_paid());
        assert_eq!(f.status_label(), "Impaga");
    }

    #[test]
    fn settles_payments_found_by_code() {
        let mut f = factura();
        assert_eq!(f.payments_query(), "search=FACT-20250315-00001&per_page=100");

        let mut foreign = pago(9, 700.0);
        foreign.id_factura = FacturaId(41);
        let page = Page {
            items: vec![pago(1, 2000.0), foreign],
            pagination: Pagination::single_page(2),
        };
        assert!(f.settle_payments(page));
        assert_eq!(f.pagos.len(), 1);
        assert_eq!(f.paid_amount(), Some(2000.0));
        assert_eq!(f.outstanding(), Some(1500.0));

        let mut none_yet = factura();
        assert!(none_yet.settle_payments(Page { items: vec![], pagination: Pagination::single_page(0) }));
        assert_eq!(none_yet.outstanding(), Some(3500.0));
    }

    #[test]
    fn truncated_payment_search_keeps_balance_unknown() {
        let mut f = factura();
        let page = Page {
            items: vec![pago(1, 2000.0)],
            pagination: Pagination { page: 1, per_page: 100, total: 150, total_pages: 2, has_next: true, has_prev: false },
        };
        assert!(!f.settle_payments(page));
        assert_eq!(f.outstanding(), None);
    }

    #[test]
    fn request_path_carries_order_id() {
        let req = GenerateInvoiceRequest {
            id_comanda: ComandaId(7),
            id_cliente: ClienteId(1),
        };
        assert_eq!(req.path(), "/api/facturas/generar-desde-comanda/7");
        assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({"id_cliente": 1}));
        assert_eq!(factura().annul_path(), "/api/facturas/40");
        assert_eq!(factura().comanda_label(), "Comanda 7");
    }
}
