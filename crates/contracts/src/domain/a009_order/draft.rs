//! Редактируемая comanda.
//!
//! `OrderDraft` живёт на экране детали: строки, итог и переходы состояния
//! считаются локально, на сервер уходит готовый payload. Любая мутация
//! проходит через `OrderStatus::ensure_open`, поэтому закрытая или снятая
//! comanda не меняется и второй счёт на неё не выставить.
//!
//! Сервер выставляет счёт по сохранённым строкам, поэтому черновик
//! помнит последний сохранённый набор и не даёт фактурировать правки,
//! которые ещё не ушли на сервер.

use super::aggregate::{
    Comanda, ComandaId, ComandaPayload, CreateComandaDesdeReserva, DetallePayload,
    ProductoCantidad,
};
use super::status::{OrderError, OrderStatus};
use crate::domain::a002_dining_table::aggregate::MesaId;
use crate::domain::a003_waiter::aggregate::MozoId;
use crate::domain::a005_product::aggregate::{Producto, ProductoId};
use crate::domain::a007_client::aggregate::ClienteId;
use crate::domain::a008_reservation::aggregate::Reserva;
use crate::domain::a010_invoice::aggregate::{FacturaId, GenerateInvoiceRequest};
use crate::domain::common::Deactivatable;
use crate::shared::datetime;
use crate::shared::money::{round_money, sum_money};
use crate::shared::validation;
use chrono::NaiveDateTime;

/// Строка comanda. Цена фиксируется в момент добавления.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub id_producto: ProductoId,
    pub nombre: String,
    pub cantidad: i32,
    pub precio_unitario: f64,
    pub entregado: bool,
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        round_money(self.precio_unitario * f64::from(self.cantidad))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub id: Option<ComandaId>,
    /// Значение поля datetime-local
    pub fecha: String,
    pub id_mesa: Option<MesaId>,
    pub id_mozo: Option<MozoId>,
    pub observaciones: String,
    lines: Vec<OrderLine>,
    /// Строки в том виде, в каком они лежат на сервере
    saved_lines: Vec<OrderLine>,
    status: OrderStatus,
}

impl OrderDraft {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            id: None,
            fecha: now.format(datetime::INPUT_DATETIME).to_string(),
            id_mesa: None,
            id_mozo: None,
            observaciones: String::new(),
            lines: Vec::new(),
            saved_lines: Vec::new(),
            status: OrderStatus::Open,
        }
    }

    pub fn from_comanda(c: &Comanda) -> Self {
        let lines: Vec<OrderLine> = c
            .detalles
            .iter()
            .map(|d| OrderLine {
                id_producto: d.id_producto,
                nombre: d.producto_label(),
                cantidad: d.cantidad,
                precio_unitario: d.precio_unitario,
                entregado: d.entregado,
            })
            .collect();
        Self {
            id: Some(c.id_comanda),
            fecha: datetime::backend_to_input(&c.fecha),
            id_mesa: Some(c.id_mesa),
            id_mozo: Some(c.id_mozo),
            observaciones: c.observaciones.clone().unwrap_or_default(),
            saved_lines: lines.clone(),
            lines,
            status: c.status(),
        }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Есть строки, которых нет на сервере
    pub fn is_dirty(&self) -> bool {
        self.lines != self.saved_lines
    }

    /// Сервер принял текущие строки
    pub fn mark_saved(&mut self) {
        self.saved_lines = self.lines.clone();
    }

    /// Σ(precio_unitario × cantidad) по строкам
    pub fn total(&self) -> f64 {
        sum_money(self.lines.iter().map(OrderLine::subtotal))
    }

    pub fn add_line(&mut self, producto: &Producto, cantidad: i32) -> Result<(), OrderError> {
        self.status.ensure_open()?;
        if cantidad < 1 {
            return Err(OrderError::InvalidQuantity);
        }
        if producto.is_deactivated() {
            return Err(OrderError::InactiveProduct);
        }
        if self.lines.iter().any(|l| l.id_producto == producto.id_producto) {
            return Err(OrderError::DuplicateProduct);
        }
        self.lines.push(OrderLine {
            id_producto: producto.id_producto,
            nombre: producto.nombre.clone(),
            cantidad,
            precio_unitario: producto.precio,
            entregado: false,
        });
        Ok(())
    }

    pub fn remove_line(&mut self, index: usize) -> Result<OrderLine, OrderError> {
        self.status.ensure_open()?;
        if index >= self.lines.len() {
            return Err(OrderError::LineNotFound(index));
        }
        Ok(self.lines.remove(index))
    }

    pub fn set_quantity(&mut self, index: usize, cantidad: i32) -> Result<(), OrderError> {
        self.status.ensure_open()?;
        if cantidad < 1 {
            return Err(OrderError::InvalidQuantity);
        }
        let line = self
            .lines
            .get_mut(index)
            .ok_or(OrderError::LineNotFound(index))?;
        line.cantidad = cantidad;
        Ok(())
    }

    pub fn toggle_delivered(&mut self, index: usize) -> Result<bool, OrderError> {
        self.status.ensure_open()?;
        let line = self
            .lines
            .get_mut(index)
            .ok_or(OrderError::LineNotFound(index))?;
        line.entregado = !line.entregado;
        Ok(line.entregado)
    }

    /// Шапка: mesa, mozo и fecha
    pub fn validate_header(&self) -> Result<(), String> {
        validation::required_id(self.id_mesa, "Debe seleccionar una mesa")?;
        validation::required_id(self.id_mozo, "Debe seleccionar un mozo")?;
        validation::required(&self.fecha, "La fecha es obligatoria")?;
        if datetime::parse_datetime(&self.fecha).is_none() {
            return Err("La fecha no es válida".into());
        }
        Ok(())
    }

    pub fn to_payload(&self) -> Result<ComandaPayload, String> {
        self.status.ensure_open().map_err(|e| e.to_string())?;
        self.validate_header()?;
        let id_mesa = validation::required_id(self.id_mesa, "Debe seleccionar una mesa")?;
        let id_mozo = validation::required_id(self.id_mozo, "Debe seleccionar un mozo")?;
        let fecha = datetime::input_to_backend(&self.fecha)
            .ok_or_else(|| "La fecha no es válida".to_string())?;
        let observaciones = Some(self.observaciones.trim().to_string()).filter(|s| !s.is_empty());
        Ok(ComandaPayload {
            fecha,
            id_mozo,
            id_mesa,
            observaciones,
            detalles: self
                .lines
                .iter()
                .map(|l| DetallePayload {
                    id_producto: l.id_producto,
                    cantidad: l.cantidad,
                    precio_unitario: l.precio_unitario,
                    entregado: l.entregado,
                })
                .collect(),
        })
    }

    /// Запрос на создание comanda из посещённой брони
    pub fn reservation_request(&self, reserva: &Reserva) -> Result<CreateComandaDesdeReserva, String> {
        reserva.ensure_can_create_order().map_err(|e| e.to_string())?;
        let id_mozo = validation::required_id(self.id_mozo, "Debe seleccionar un mozo")?;
        Ok(CreateComandaDesdeReserva {
            id_reserva: reserva.id_reserva,
            id_mozo,
            observaciones: Some(self.observaciones.trim().to_string()).filter(|s| !s.is_empty()),
            productos: self
                .lines
                .iter()
                .map(|l| ProductoCantidad {
                    id_producto: l.id_producto,
                    cantidad: l.cantidad,
                })
                .collect(),
        })
    }

    /// `Open → Cancelled`. Необратимо.
    pub fn cancel(&mut self, reason: &str) -> Result<(), OrderError> {
        self.status.ensure_open()?;
        let reason = reason.trim();
        self.status = OrderStatus::Cancelled {
            reason: (!reason.is_empty()).then(|| reason.to_string()),
        };
        Ok(())
    }

    /// Проверяет, что по comanda можно выставить счёт, и строит запрос.
    pub fn prepare_invoice(
        &self,
        id_cliente: Option<ClienteId>,
    ) -> Result<GenerateInvoiceRequest, OrderError> {
        self.status.ensure_open()?;
        let id_comanda = self.id.ok_or(OrderError::NotSaved)?;
        if self.is_dirty() {
            return Err(OrderError::UnsavedChanges);
        }
        if self.saved_lines.is_empty() {
            return Err(OrderError::NoLines);
        }
        let id_cliente = id_cliente.ok_or(OrderError::NoClient)?;
        Ok(GenerateInvoiceRequest {
            id_comanda,
            id_cliente,
        })
    }

    /// `Open → Closed`, после ответа сервера с созданным счётом
    pub fn close_with_invoice(&mut self, invoice_id: FacturaId) -> Result<(), OrderError> {
        self.status.ensure_open()?;
        self.status = OrderStatus::Closed {
            invoice_id: Some(invoice_id),
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_section::aggregate::SeccionId;
    use crate::domain::a008_reservation::aggregate::ReservaId;
    use crate::domain::a008_reservation::ReservationError;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15)
            .and_then(|d| d.and_hms_opt(21, 10, 0))
            .unwrap()
    }

    fn producto(id: i64, nombre: &str, precio: f64) -> Producto {
        Producto {
            id_producto: ProductoId(id),
            codigo: format!("P{}", id),
            nombre: nombre.into(),
            precio,
            id_seccion: SeccionId(1),
            seccion: None,
            descripcion: None,
            tipo: None,
            cm3: None,
            baja: false,
        }
    }

    fn milanesa() -> Producto {
        producto(10, "Milanesa", 1500.0)
    }

    fn coca() -> Producto {
        producto(11, "Coca-Cola", 500.0)
    }

    fn saved_draft() -> OrderDraft {
        let mut d = OrderDraft::new(now());
        d.id = Some(ComandaId(7));
        d.id_mesa = Some(MesaId(3));
        d.id_mozo = Some(MozoId(2));
        d
    }

    #[test]
    fn total_follows_every_mutation() {
        let mut d = saved_draft();
        d.add_line(&milanesa(), 2).unwrap();
        d.add_line(&coca(), 1).unwrap();
        assert_eq!(d.total(), 3500.0);

        d.set_quantity(1, 3).unwrap();
        assert_eq!(d.total(), 4500.0);

        let removed = d.remove_line(0).unwrap();
        assert_eq!(removed.nombre, "Milanesa");
        assert_eq!(d.total(), 1500.0);

        let expected: f64 = d.lines().iter().map(|l| l.precio_unitario * l.cantidad as f64).sum();
        assert_eq!(d.total(), expected);
    }

    #[test]
    fn duplicate_product_must_be_removed_first() {
        let mut d = saved_draft();
        d.add_line(&milanesa(), 2).unwrap();
        assert_eq!(d.add_line(&milanesa(), 1), Err(OrderError::DuplicateProduct));
        d.remove_line(0).unwrap();
        assert!(d.add_line(&milanesa(), 1).is_ok());
    }

    #[test]
    fn rejects_bad_quantities_and_inactive_products() {
        let mut d = saved_draft();
        assert_eq!(d.add_line(&milanesa(), 0), Err(OrderError::InvalidQuantity));
        let inactive = Producto { baja: true, ..coca() };
        assert_eq!(d.add_line(&inactive, 1), Err(OrderError::InactiveProduct));
        d.add_line(&milanesa(), 1).unwrap();
        assert_eq!(d.set_quantity(0, -1), Err(OrderError::InvalidQuantity));
        assert_eq!(d.set_quantity(4, 1), Err(OrderError::LineNotFound(4)));
        assert_eq!(d.toggle_delivered(0), Ok(true));
    }

    #[test]
    fn header_requires_table_waiter_and_date() {
        let mut d = OrderDraft::new(now());
        assert_eq!(d.validate_header().unwrap_err(), "Debe seleccionar una mesa");
        d.id_mesa = Some(MesaId(3));
        assert_eq!(d.validate_header().unwrap_err(), "Debe seleccionar un mozo");
        d.id_mozo = Some(MozoId(2));
        d.fecha.clear();
        assert_eq!(d.validate_header().unwrap_err(), "La fecha es obligatoria");
        d.fecha = "2025-03-15T21:10".into();
        let payload = d.to_payload().unwrap();
        assert_eq!(payload.fecha, "2025-03-15 21:10:00");
        assert!(payload.observaciones.is_none());
    }

    #[test]
    fn invoice_needs_lines_and_client() {
        let mut d = saved_draft();
        assert_eq!(d.prepare_invoice(Some(ClienteId(1))), Err(OrderError::NoLines));
        d.add_line(&milanesa(), 2).unwrap();
        d.mark_saved();
        assert_eq!(d.prepare_invoice(None), Err(OrderError::NoClient));

        let unsaved = OrderDraft { id: None, ..d.clone() };
        assert_eq!(unsaved.prepare_invoice(Some(ClienteId(1))), Err(OrderError::NotSaved));

        let req = d.prepare_invoice(Some(ClienteId(1))).unwrap();
        assert_eq!(req.path(), "/api/facturas/generar-desde-comanda/7");
    }

    #[test]
    fn invoice_uses_saved_lines_only() {
        let comanda: Comanda = serde_json::from_str(
            r#"{"id_comanda": 7, "fecha": "2025-03-15 21:10:00", "id_mesa": 3,
                "id_mozo": 2, "estado": "abierta", "detalles": []}"#,
        )
        .unwrap();
        let mut d = OrderDraft::from_comanda(&comanda);
        assert!(!d.is_dirty());
        assert_eq!(d.prepare_invoice(Some(ClienteId(1))), Err(OrderError::NoLines));

        d.add_line(&milanesa(), 2).unwrap();
        assert!(d.is_dirty());
        assert_eq!(d.prepare_invoice(Some(ClienteId(1))), Err(OrderError::UnsavedChanges));

        d.mark_saved();
        assert!(d.prepare_invoice(Some(ClienteId(1))).is_ok());

        d.set_quantity(0, 3).unwrap();
        assert_eq!(d.prepare_invoice(Some(ClienteId(1))), Err(OrderError::UnsavedChanges));
        d.set_quantity(0, 2).unwrap();
        assert!(!d.is_dirty());
    }

    #[test]
    fn closed_order_is_immutable() {
        let mut d = saved_draft();
        d.add_line(&milanesa(), 2).unwrap();
        d.add_line(&coca(), 1).unwrap();
        d.mark_saved();
        d.prepare_invoice(Some(ClienteId(1))).unwrap();
        d.close_with_invoice(FacturaId(40)).unwrap();

        assert_eq!(
            d.status(),
            &OrderStatus::Closed { invoice_id: Some(FacturaId(40)) }
        );
        assert_eq!(d.add_line(&producto(12, "Flan", 800.0), 1), Err(OrderError::Closed));
        assert_eq!(d.remove_line(0), Err(OrderError::Closed));
        assert_eq!(d.set_quantity(0, 5), Err(OrderError::Closed));
        assert_eq!(d.prepare_invoice(Some(ClienteId(1))), Err(OrderError::Closed));
        assert_eq!(d.close_with_invoice(FacturaId(41)), Err(OrderError::Closed));
        assert_eq!(d.cancel("tarde"), Err(OrderError::Closed));
        assert_eq!(d.total(), 3500.0);
    }

    #[test]
    fn cancelled_order_is_terminal() {
        let mut d = saved_draft();
        d.add_line(&milanesa(), 1).unwrap();
        d.cancel("  ").unwrap();
        assert_eq!(d.status(), &OrderStatus::Cancelled { reason: None });
        assert_eq!(d.cancel("otra"), Err(OrderError::Cancelled));
        assert_eq!(d.prepare_invoice(Some(ClienteId(1))), Err(OrderError::Cancelled));
        assert_eq!(d.toggle_delivered(0), Err(OrderError::Cancelled));
        assert!(d.to_payload().is_err());
    }

    #[test]
    fn reservation_must_be_attended() {
        let json = r#"{"id_reserva": 5, "numero": 101, "fecha_hora": "2025-03-15 21:00:00",
                       "cant_personas": 4, "id_cliente": 1, "id_mesa": 3, "estado": "activa"}"#;
        let mut reserva: Reserva = serde_json::from_str(json).unwrap();
        let mut d = OrderDraft::new(now());
        d.id_mozo = Some(MozoId(2));
        d.add_line(&milanesa(), 2).unwrap();

        assert_eq!(
            d.reservation_request(&reserva).unwrap_err(),
            ReservationError::NotAttended.to_string()
        );
        reserva.mark_attended().unwrap();
        let req = d.reservation_request(&reserva).unwrap();
        assert_eq!(req.id_reserva, ReservaId(5));
        assert_eq!(req.productos.len(), 1);
    }
}
