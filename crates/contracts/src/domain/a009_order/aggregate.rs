use super::status::OrderStatus;
use crate::domain::a002_dining_table::aggregate::{Mesa, MesaId};
use crate::domain::a003_waiter::aggregate::{Mozo, MozoId};
use crate::domain::a005_product::aggregate::{Producto, ProductoId};
use crate::domain::a008_reservation::aggregate::ReservaId;
use crate::domain::a010_invoice::aggregate::FacturaId;
use crate::domain::common::{AggregateRoot, Deactivatable};
use crate::shared::datetime;
use crate::shared::money::{deserialize_money, deserialize_opt_money, round_money, sum_money};
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор comanda
    ComandaId
);

crate::int_id!(
    /// Идентификатор строки comanda
    DetalleComandaId
);

/// Comanda в том виде, как её отдаёт API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comanda {
    pub id_comanda: ComandaId,
    pub fecha: String,
    pub id_mozo: MozoId,
    #[serde(default)]
    pub mozo: Option<Mozo>,
    pub id_mesa: MesaId,
    #[serde(default)]
    pub mesa: Option<Mesa>,
    /// "Abierta" / "Cerrada"; старые записи приходят без поля
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub baja: bool,
    #[serde(default)]
    pub motivo_baja: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub detalles: Vec<DetalleComanda>,
    #[serde(default)]
    pub id_factura: Option<FacturaId>,
    #[serde(default, deserialize_with = "deserialize_opt_money")]
    pub total: Option<f64>,
}

impl Comanda {
    /// `baja` старше `estado`: снятая comanda остаётся снятой.
    pub fn status(&self) -> OrderStatus {
        if self.baja {
            return OrderStatus::Cancelled {
                reason: self.motivo_baja.clone(),
            };
        }
        let closed = self
            .estado
            .as_deref()
            .map(|e| e.trim().eq_ignore_ascii_case("cerrada"))
            .unwrap_or(false);
        if closed || self.id_factura.is_some() {
            OrderStatus::Closed {
                invoice_id: self.id_factura,
            }
        } else {
            OrderStatus::Open
        }
    }

    /// Итог по строкам; если строк в ответе нет, берём `total` сервера.
    pub fn total(&self) -> f64 {
        if self.detalles.is_empty() {
            return self.total.unwrap_or(0.0);
        }
        sum_money(self.detalles.iter().map(DetalleComanda::subtotal))
    }

    pub fn mozo_label(&self) -> String {
        self.mozo
            .as_ref()
            .map(|m| m.nombre_apellido.clone())
            .unwrap_or_else(|| format!("#{}", self.id_mozo))
    }

    pub fn mesa_label(&self) -> String {
        self.mesa
            .as_ref()
            .map(|m| m.numero.to_string())
            .unwrap_or_else(|| format!("#{}", self.id_mesa))
    }

    pub fn fecha_display(&self) -> String {
        datetime::format_display_datetime(&self.fecha)
    }
}

impl Deactivatable for Comanda {
    fn is_deactivated(&self) -> bool {
        self.baja
    }

    fn deactivate(&mut self) {
        self.baja = true;
    }

    fn can_edit(&self) -> bool {
        self.status().is_open()
    }

    fn can_delete(&self) -> bool {
        self.status().is_open()
    }
}

impl AggregateRoot for Comanda {
    type Id = ComandaId;

    fn id(&self) -> Self::Id {
        self.id_comanda
    }

    fn display_name(&self) -> String {
        format!("Comanda {}", self.id_comanda)
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "comandas"
    }

    fn element_name() -> &'static str {
        "Comanda"
    }

    fn list_name() -> &'static str {
        "Comandas"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetalleComanda {
    #[serde(default)]
    pub id_detalle_comanda: Option<DetalleComandaId>,
    pub id_producto: ProductoId,
    #[serde(default)]
    pub producto: Option<Producto>,
    pub cantidad: i32,
    #[serde(deserialize_with = "deserialize_money")]
    pub precio_unitario: f64,
    #[serde(default)]
    pub entregado: bool,
}

impl DetalleComanda {
    pub fn subtotal(&self) -> f64 {
        round_money(self.precio_unitario * f64::from(self.cantidad))
    }

    pub fn producto_label(&self) -> String {
        self.producto
            .as_ref()
            .map(|p| p.nombre.clone())
            .unwrap_or_else(|| format!("#{}", self.id_producto))
    }
}

/// Тело `POST /api/comandas/` и `PUT /api/comandas/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComandaPayload {
    pub fecha: String,
    pub id_mozo: MozoId,
    pub id_mesa: MesaId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    pub detalles: Vec<DetallePayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetallePayload {
    pub id_producto: ProductoId,
    pub cantidad: i32,
    pub precio_unitario: f64,
    pub entregado: bool,
}

/// `POST /api/comandas/desde-reserva`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateComandaDesdeReserva {
    pub id_reserva: ReservaId,
    pub id_mozo: MozoId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    pub productos: Vec<ProductoCantidad>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductoCantidad {
    pub id_producto: ProductoId,
    pub cantidad: i32,
}

pub const FROM_RESERVATION_PATH: &str = "/api/comandas/desde-reserva";

/// Фильтры списка comandas: (ключ запроса, подпись)
pub const FILTER_KEYS: [(&str, &str); 5] = [
    ("fecha", "Fecha"),
    ("id_mesa", "Mesa"),
    ("id_mozo", "Mozo"),
    ("estado", "Estado"),
    ("ordenar_por", "Ordenar por"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn comanda_json() -> &'static str {
        r#"{
            "id_comanda": 7,
            "fecha": "2025-03-15 21:10:00",
            "id_mozo": 2,
            "mozo": {"id": 2, "documento": "30111222", "nombre_apellido": "Juan Pérez",
                     "id_sector": 1, "baja": false},
            "id_mesa": 3,
            "mesa": null,
            "baja": false,
            "detalles": [
                {"id_detalle_comanda": 1, "id_producto": 10, "cantidad": 2,
                 "precio_unitario": "1500.00", "entregado": true, "subtotal": 3000.0},
                {"id_detalle_comanda": 2, "id_producto": 11, "cantidad": 1,
                 "precio_unitario": 500.0, "entregado": false, "subtotal": 500.0}
            ]
        }"#
    }

    #[test]
    fn parses_wire_comanda() {
        let c: Comanda = serde_json::from_str(comanda_json()).unwrap();
        assert_eq!(c.id_comanda, ComandaId(7));
        assert_eq!(c.total(), 3500.0);
        assert_eq!(c.status(), OrderStatus::Open);
        assert_eq!(c.mozo_label(), "Juan Pérez");
        assert_eq!(c.mesa_label(), "#3");
        assert!(c.can_edit());
    }

    #[test]
    fn status_follows_wire_flags() {
        let mut c: Comanda = serde_json::from_str(comanda_json()).unwrap();
        c.estado = Some("Cerrada".into());
        assert_eq!(c.status(), OrderStatus::Closed { invoice_id: None });
        c.id_factura = Some(FacturaId(4));
        assert_eq!(c.status(), OrderStatus::Closed { invoice_id: Some(FacturaId(4)) });
        assert!(!c.can_edit());

        c.baja = true;
        c.motivo_baja = Some("error de carga".into());
        assert!(matches!(c.status(), OrderStatus::Cancelled { reason: Some(_) }));
    }

    #[test]
    fn reservation_request_shape() {
        let req = CreateComandaDesdeReserva {
            id_reserva: ReservaId(5),
            id_mozo: MozoId(2),
            observaciones: None,
            productos: vec![ProductoCantidad {
                id_producto: ProductoId(10),
                cantidad: 2,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["id_reserva"], 5);
        assert_eq!(json["productos"][0]["cantidad"], 2);
        assert!(json.get("observaciones").is_none());
    }
}
