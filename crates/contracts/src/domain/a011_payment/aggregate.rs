use crate::domain::a006_payment_method::aggregate::MedioPagoId;
use crate::domain::a010_invoice::aggregate::FacturaId;
use crate::domain::common::AggregateRoot;
use crate::shared::datetime;
use crate::shared::money::deserialize_money;
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор платежа
    PagoId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pago {
    pub id_pago: PagoId,
    pub id_factura: FacturaId,
    #[serde(default)]
    pub factura_codigo: Option<String>,
    pub id_medio_pago: MedioPagoId,
    #[serde(default)]
    pub medio_pago_nombre: Option<String>,
    #[serde(deserialize_with = "deserialize_money")]
    pub monto: f64,
    pub fecha: String,
}

impl Pago {
    pub fn factura_label(&self) -> String {
        self.factura_codigo
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id_factura))
    }

    pub fn medio_pago_label(&self) -> String {
        self.medio_pago_nombre
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id_medio_pago))
    }

    pub fn fecha_display(&self) -> String {
        datetime::format_display_datetime(&self.fecha)
    }
}

impl AggregateRoot for Pago {
    type Id = PagoId;

    fn id(&self) -> Self::Id {
        self.id_pago
    }

    fn display_name(&self) -> String {
        format!("Pago {}", self.id_pago)
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "pagos"
    }

    fn element_name() -> &'static str {
        "Pago"
    }

    fn list_name() -> &'static str {
        "Pagos"
    }
}

/// Тело `POST /api/pagos/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagoPayload {
    pub id_factura: FacturaId,
    pub id_medio_pago: MedioPagoId,
    pub monto: f64,
    pub fecha: String,
}

/// Фильтры списка платежей: (ключ запроса, подпись)
pub const FILTER_KEYS: [(&str, &str); 4] = [
    ("id_medio_pago", "Medio de pago"),
    ("fecha_desde", "Desde"),
    ("fecha_hasta", "Hasta"),
    ("search", "Buscar"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_payment() {
        let p: Pago = serde_json::from_str(
            r#"{"id_pago": 3, "id_factura": 40, "factura_codigo": "FACT-20250315-00001",
                "id_medio_pago": 1, "medio_pago_nombre": "Efectivo",
                "monto": "2000.00", "fecha": "2025-03-15 22:05:00"}"#,
        )
        .unwrap();
        assert_eq!(p.monto, 2000.0);
        assert_eq!(p.factura_label(), "FACT-20250315-00001");
        assert_eq!(p.medio_pago_label(), "Efectivo");
        assert_eq!(p.fecha_display(), "15/03/2025 22:05");
        assert_eq!(Pago::api_path(), "/api/pagos/");
    }
}
