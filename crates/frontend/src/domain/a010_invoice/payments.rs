//! Платежи счёта. Сервер отдаёт счёт без них, поэтому сумма оплаты
//! дозапрашивается через `/api/pagos/`.

use crate::shared::api_utils::fetch_page;
use contracts::domain::a010_invoice::aggregate::Factura;
use contracts::domain::a011_payment::aggregate::Pago;
use contracts::domain::common::AggregateRoot;

/// Заполняет `pagos` счёта. `Ok(false)`, если остаток так и не удалось узнать.
pub async fn resolve_payments(factura: &mut Factura) -> Result<bool, String> {
    if factura.paid_amount().is_some() {
        return Ok(true);
    }
    let page = fetch_page::<Pago>(&Pago::api_path(), &factura.payments_query()).await?;
    let settled = factura.settle_payments(page);
    if !settled {
        log::warn!("factura {}: pagos en más de una página, saldo desconocido", factura.codigo);
    }
    Ok(settled)
}
