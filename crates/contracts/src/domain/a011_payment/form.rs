//! Форма регистрации платежа.
//!
//! При выборе счёта сумма подставляется из остатка; пользователь может её
//! изменить, но не больше остатка и не меньше копейки.

use super::aggregate::PagoPayload;
use crate::domain::a006_payment_method::aggregate::MedioPagoId;
use crate::domain::a010_invoice::aggregate::{Factura, FacturaId};
use crate::shared::datetime;
use crate::shared::money::{format_amount, parse_money};
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    #[error("Debe seleccionar una factura")]
    NoInvoice,
    #[error("Debe seleccionar un medio de pago")]
    NoMethod,
    #[error("La fecha del pago es obligatoria")]
    NoDate,
    #[error("{0}")]
    InvalidAmount(String),
    #[error("El monto debe ser mayor a 0")]
    NonPositive,
    #[error("El monto supera el saldo pendiente de {0}")]
    Overpayment(String),
    #[error("La factura ya está pagada")]
    AlreadyPaid,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagoForm {
    pub id_factura: Option<FacturaId>,
    pub id_medio_pago: Option<MedioPagoId>,
    /// Текст поля суммы, как его ввёл пользователь
    pub monto: String,
    /// Значение поля datetime-local
    pub fecha: String,
    /// Остаток выбранного счёта, если известен
    pub outstanding: Option<f64>,
}

impl PagoForm {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            fecha: now.format(datetime::INPUT_DATETIME).to_string(),
            ..Self::default()
        }
    }

    /// Выбор счёта: сумма = total − Σ pagos. Пока платежи счёта не
    /// известны, сумма пустая и проверка переплаты не действует.
    pub fn prefill(&mut self, factura: &Factura) {
        self.id_factura = Some(factura.id_factura);
        self.outstanding = factura.outstanding();
        self.monto = self.outstanding.map(format_amount).unwrap_or_default();
    }

    pub fn clear_invoice(&mut self) {
        self.id_factura = None;
        self.outstanding = None;
        self.monto.clear();
    }

    pub fn validate(&self) -> Result<(), PaymentError> {
        self.to_payload().map(|_| ())
    }

    pub fn to_payload(&self) -> Result<PagoPayload, PaymentError> {
        let id_factura = self.id_factura.ok_or(PaymentError::NoInvoice)?;
        let id_medio_pago = self.id_medio_pago.ok_or(PaymentError::NoMethod)?;
        let fecha = datetime::input_to_backend(&self.fecha).ok_or(PaymentError::NoDate)?;
        let monto = parse_money(&self.monto).map_err(PaymentError::InvalidAmount)?;
        if monto <= 0.0 {
            return Err(PaymentError::NonPositive);
        }
        if let Some(outstanding) = self.outstanding {
            if outstanding <= 0.0 {
                return Err(PaymentError::AlreadyPaid);
            }
            if monto > outstanding {
                return Err(PaymentError::Overpayment(format_amount(outstanding)));
            }
        }
        Ok(PagoPayload {
            id_factura,
            id_medio_pago,
            monto,
            fecha,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a010_invoice::aggregate::FacturaId;
    use crate::domain::a011_payment::aggregate::{Pago, PagoId};
    use crate::shared::api::{Page, Pagination};
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15)
            .and_then(|d| d.and_hms_opt(22, 5, 0))
            .unwrap()
    }

    fn factura() -> Factura {
        serde_json::from_str(
            r#"{"id_factura": 40, "codigo": "FACT-20250315-00001",
                "fecha": "2025-03-15 22:00:00", "total": 3500,
                "id_cliente": 1, "id_comanda": 7}"#,
        )
        .unwrap()
    }

    fn accepted(payload: &PagoPayload, id: i64) -> Pago {
        Pago {
            id_pago: PagoId(id),
            id_factura: payload.id_factura,
            factura_codigo: None,
            id_medio_pago: payload.id_medio_pago,
            medio_pago_nombre: None,
            monto: payload.monto,
            fecha: payload.fecha.clone(),
        }
    }

    #[test]
    fn prefill_uses_outstanding_balance() {
        let mut f = Factura { total_pagado: Some(0.0), ..factura() };
        let mut form = PagoForm::new(now());
        form.prefill(&f);
        assert_eq!(form.monto, "3500.00");

        form.id_medio_pago = Some(MedioPagoId(1));
        form.monto = "2000".into();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.fecha, "2025-03-15 22:05:00");
        f.apply_payment(accepted(&payload, 1));
        assert_eq!(f.outstanding(), Some(1500.0));

        form.prefill(&f);
        assert_eq!(form.monto, "1500.00");
        let payload = form.to_payload().unwrap();
        f.apply_payment(accepted(&payload, 2));
        assert_eq!(f.outstanding(), Some(0.0));

        form.prefill(&f);
        assert_eq!(form.validate(), Err(PaymentError::NonPositive));
        form.monto = "10".into();
        assert_eq!(form.validate(), Err(PaymentError::AlreadyPaid));
    }

    #[test]
    fn requires_method_and_positive_amount() {
        let mut form = PagoForm::new(now());
        assert_eq!(form.validate(), Err(PaymentError::NoInvoice));
        form.prefill(&factura());
        assert_eq!(form.validate(), Err(PaymentError::NoMethod));
        form.id_medio_pago = Some(MedioPagoId(1));
        form.monto = "0".into();
        assert_eq!(form.validate(), Err(PaymentError::NonPositive));
        form.monto = "-5".into();
        assert_eq!(form.validate(), Err(PaymentError::NonPositive));
        form.monto = "abc".into();
        assert!(matches!(form.validate(), Err(PaymentError::InvalidAmount(_))));
        form.fecha.clear();
        form.monto = "100".into();
        assert_eq!(form.validate(), Err(PaymentError::NoDate));
    }

    #[test]
    fn rejects_overpayment() {
        let mut form = PagoForm::new(now());
        form.prefill(&Factura { total_pagado: Some(0.0), ..factura() });
        form.id_medio_pago = Some(MedioPagoId(1));
        form.monto = "3500.01".into();
        assert_eq!(
            form.validate(),
            Err(PaymentError::Overpayment("3500.00".into()))
        );
        form.clear_invoice();
        assert_eq!(form.validate(), Err(PaymentError::NoInvoice));
    }

    #[test]
    fn partly_paid_invoice_without_payment_data() {
        let mut f = factura();
        let mut form = PagoForm::new(now());
        form.id_medio_pago = Some(MedioPagoId(1));

        form.prefill(&f);
        assert_eq!(form.outstanding, None);
        assert_eq!(form.monto, "");
        assert!(matches!(form.validate(), Err(PaymentError::InvalidAmount(_))));

        let page = Page {
            items: vec![Pago { id_factura: f.id_factura, ..accepted_stub(2000.0) }],
            pagination: Pagination::single_page(1),
        };
        assert!(f.settle_payments(page));
        form.prefill(&f);
        assert_eq!(form.outstanding, Some(1500.0));
        assert_eq!(form.monto, "1500.00");
        form.monto = "3500".into();
        assert_eq!(
            form.validate(),
            Err(PaymentError::Overpayment("1500.00".into()))
        );
    }

    fn accepted_stub(monto: f64) -> Pago {
        Pago {
            id_pago: PagoId(1),
            id_factura: FacturaId(0),
            factura_codigo: Some("FACT-20250315-00001".into()),
            id_medio_pago: MedioPagoId(2),
            medio_pago_nombre: None,
            monto,
            fecha: "2025-03-15 22:01:00".into(),
        }
    }
}
