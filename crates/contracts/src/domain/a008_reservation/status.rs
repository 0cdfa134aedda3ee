use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Жизненный цикл резерва.
///
/// `Activa → Asistida → EnCurso → Completada`, либо `Activa → Cancelada`.
/// `Cancelada` и `Completada` конечные.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservaEstado {
    #[default]
    Activa,
    Asistida,
    EnCurso,
    Completada,
    Cancelada,
}

impl ReservaEstado {
    pub const ALL: [ReservaEstado; 5] = [
        ReservaEstado::Activa,
        ReservaEstado::Asistida,
        ReservaEstado::EnCurso,
        ReservaEstado::Completada,
        ReservaEstado::Cancelada,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ReservaEstado::Activa => "activa",
            ReservaEstado::Asistida => "asistida",
            ReservaEstado::EnCurso => "en_curso",
            ReservaEstado::Completada => "completada",
            ReservaEstado::Cancelada => "cancelada",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReservaEstado::Activa => "Activa",
            ReservaEstado::Asistida => "Asistida",
            ReservaEstado::EnCurso => "En curso",
            ReservaEstado::Completada => "Completada",
            ReservaEstado::Cancelada => "Cancelada",
        }
    }

    /// Вариант бейджа для таблиц
    pub fn badge_variant(&self) -> &'static str {
        match self {
            ReservaEstado::Activa => "primary",
            ReservaEstado::Asistida | ReservaEstado::EnCurso => "warning",
            ReservaEstado::Completada => "success",
            ReservaEstado::Cancelada => "error",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("La reserva está cancelada y no admite cambios")]
    Cancelled,
    #[error("La reserva ya fue completada")]
    Completed,
    #[error("Solo se puede marcar como asistida una reserva activa")]
    NotActive,
    #[error("La reserva debe estar marcada como asistida para crear una comanda")]
    NotAttended,
    #[error("Debe indicar el motivo de la cancelación")]
    MissingReason,
}
