//! Двухшаговый диалог выставления счёта: выбор клиента, затем подтверждение.

use super::aggregate::{Factura, GenerateInvoiceRequest};
use crate::domain::a007_client::aggregate::ClienteId;
use crate::domain::a009_order::{OrderDraft, OrderError};

#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceWizard {
    SelectClient { id_cliente: Option<ClienteId> },
    Confirm { id_cliente: ClienteId },
    Done { factura: Box<Factura> },
}

impl Default for InvoiceWizard {
    fn default() -> Self {
        InvoiceWizard::SelectClient { id_cliente: None }
    }
}

impl InvoiceWizard {
    pub fn step_title(&self) -> &'static str {
        match self {
            InvoiceWizard::SelectClient { .. } => "1. Seleccionar cliente",
            InvoiceWizard::Confirm { .. } => "2. Confirmar facturación",
            InvoiceWizard::Done { .. } => "Factura generada",
        }
    }

    pub fn selected_client(&self) -> Option<ClienteId> {
        match self {
            InvoiceWizard::SelectClient { id_cliente } => *id_cliente,
            InvoiceWizard::Confirm { id_cliente } => Some(*id_cliente),
            InvoiceWizard::Done { factura } => Some(factura.id_cliente),
        }
    }

    /// Выбор клиента возможен только на первом шаге
    pub fn select_client(&mut self, id: Option<ClienteId>) {
        if let InvoiceWizard::SelectClient { id_cliente } = self {
            *id_cliente = id;
        }
    }

    /// Переход к подтверждению. Проверяет comanda заранее, чтобы ошибка
    /// была видна до второго шага.
    pub fn next(&mut self, order: &OrderDraft) -> Result<(), OrderError> {
        if let InvoiceWizard::SelectClient { id_cliente } = self {
            let req = order.prepare_invoice(*id_cliente)?;
            *self = InvoiceWizard::Confirm {
                id_cliente: req.id_cliente,
            };
        }
        Ok(())
    }

    pub fn back(&mut self) {
        if let InvoiceWizard::Confirm { id_cliente } = self {
            *self = InvoiceWizard::SelectClient {
                id_cliente: Some(*id_cliente),
            };
        }
    }

    /// Запрос отправляется только со второго шага
    pub fn confirm(&self, order: &OrderDraft) -> Result<GenerateInvoiceRequest, OrderError> {
        match self {
            InvoiceWizard::Confirm { id_cliente } => order.prepare_invoice(Some(*id_cliente)),
            InvoiceWizard::SelectClient { .. } => Err(OrderError::NoClient),
            InvoiceWizard::Done { .. } => Err(OrderError::Closed),
        }
    }

    /// Сервер создал счёт: comanda закрывается, диалог показывает результат
    pub fn complete(&mut self, order: &mut OrderDraft, factura: Factura) -> Result<(), OrderError> {
        order.close_with_invoice(factura.id_factura)?;
        *self = InvoiceWizard::Done {
            factura: Box::new(factura),
        };
        Ok(())
    }

    pub fn is_done(&self) -> bool {
        matches!(self, InvoiceWizard::Done { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_dining_table::aggregate::MesaId;
    use crate::domain::a003_waiter::aggregate::MozoId;
    use crate::domain::a004_section::aggregate::SeccionId;
    use crate::domain::a005_product::aggregate::{Producto, ProductoId};
    use crate::domain::a009_order::aggregate::ComandaId;
    use crate::domain::a009_order::OrderStatus;
    use crate::domain::a010_invoice::aggregate::FacturaId;
    use chrono::NaiveDate;

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

    fn order() -> OrderDraft {
        let now = NaiveDate::from_ymd_opt(2025, 3, 15)
            .and_then(|d| d.and_hms_opt(21, 10, 0))
            .unwrap();
        let mut d = OrderDraft::new(now);
        d.id = Some(ComandaId(7));
        d.id_mesa = Some(MesaId(3));
        d.id_mozo = Some(MozoId(2));
        d.add_line(&producto(10, "Milanesa", 1500.0), 2).unwrap();
        d.add_line(&producto(11, "Coca-Cola", 500.0), 1).unwrap();
        d.mark_saved();
        d
    }

    fn factura_for(total: f64) -> Factura {
        serde_json::from_value(serde_json::json!({
            "id_factura": 40, "codigo": "FACT-20250315-00001",
            "fecha": "2025-03-15 22:00:00", "total": total,
            "id_cliente": 1, "id_comanda": 7
        }))
        .unwrap()
    }

    #[test]
    fn cannot_skip_client_selection() {
        let mut w = InvoiceWizard::default();
        let order = order();
        assert_eq!(w.confirm(&order), Err(OrderError::NoClient));
        assert_eq!(w.next(&order), Err(OrderError::NoClient));
        assert_eq!(w, InvoiceWizard::SelectClient { id_cliente: None });
    }

    #[test]
    fn back_keeps_selected_client() {
        let mut w = InvoiceWizard::default();
        w.select_client(Some(ClienteId(1)));
        w.next(&order()).unwrap();
        w.back();
        assert_eq!(w.selected_client(), Some(ClienteId(1)));
        assert!(matches!(w, InvoiceWizard::SelectClient { .. }));
    }

    #[test]
    fn full_flow_closes_order_once() {
        let mut order = order();
        let mut w = InvoiceWizard::default();
        w.select_client(Some(ClienteId(1)));
        w.next(&order).unwrap();
        let req = w.confirm(&order).unwrap();
        assert_eq!(req.id_cliente, ClienteId(1));

        let factura = factura_for(order.total());
        w.complete(&mut order, factura).unwrap();
        assert!(w.is_done());
        assert_eq!(
            order.status(),
            &OrderStatus::Closed { invoice_id: Some(FacturaId(40)) }
        );
        assert_eq!(w.confirm(&order), Err(OrderError::Closed));

        let mut again = InvoiceWizard::default();
        again.select_client(Some(ClienteId(1)));
        assert_eq!(again.next(&order), Err(OrderError::Closed));
        assert_eq!(
            again.complete(&mut order, factura_for(3500.0)),
            Err(OrderError::Closed)
        );
    }
}
