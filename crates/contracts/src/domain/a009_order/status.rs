use crate::domain::a010_invoice::aggregate::FacturaId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Состояние comanda.
///
/// `Open → Closed` (выставлен счёт) или `Open → Cancelled` (baja).
/// Из `Closed` и `Cancelled` переходов нет; у закрытой comanda ровно один счёт.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OrderStatus {
    Open,
    Closed { invoice_id: Option<FacturaId> },
    Cancelled { reason: Option<String> },
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Open
    }
}

impl OrderStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, OrderStatus::Open)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Open => "Abierta",
            OrderStatus::Closed { .. } => "Cerrada",
            OrderStatus::Cancelled { .. } => "Anulada",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            OrderStatus::Open => "success",
            OrderStatus::Closed { .. } => "primary",
            OrderStatus::Cancelled { .. } => "error",
        }
    }

    /// Ошибка для мутации в текущем состоянии
    pub fn ensure_open(&self) -> Result<(), OrderError> {
        match self {
            OrderStatus::Open => Ok(()),
            OrderStatus::Closed { .. } => Err(OrderError::Closed),
            OrderStatus::Cancelled { .. } => Err(OrderError::Cancelled),
        }
    }
}

/// Значения фильтра `estado` списка comandas
pub const ESTADO_FILTER_OPTIONS: [(&str, &str); 2] = [("abierta", "Abierta"), ("cerrada", "Cerrada")];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("La comanda está cerrada y no puede modificarse")]
    Closed,
    #[error("La comanda está dada de baja y no puede modificarse")]
    Cancelled,
    #[error("El producto ya está en la comanda; quítelo antes de volver a agregarlo")]
    DuplicateProduct,
    #[error("La cantidad debe ser un entero mayor a 0")]
    InvalidQuantity,
    #[error("El producto está dado de baja")]
    InactiveProduct,
    #[error("No existe la línea {0}")]
    LineNotFound(usize),
    #[error("La comanda no tiene productos para facturar")]
    NoLines,
    #[error("Debe seleccionar un cliente para generar la factura")]
    NoClient,
    #[error("La comanda aún no fue guardada")]
    NotSaved,
    #[error("Guarde los cambios de la comanda antes de facturar")]
    UnsavedChanges,
}
