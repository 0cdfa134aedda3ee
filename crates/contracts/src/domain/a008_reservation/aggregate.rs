use super::status::{ReservaEstado, ReservationError};
use crate::domain::a002_dining_table::aggregate::{Mesa, MesaId};
use crate::domain::a007_client::aggregate::{Cliente, ClienteId};
use crate::domain::common::{AggregateRoot, Deactivatable};
use crate::shared::datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор резерва
    ReservaId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reserva {
    pub id_reserva: ReservaId,
    pub numero: i32,
    pub fecha_hora: String,
    pub cant_personas: i32,
    pub id_cliente: ClienteId,
    #[serde(default)]
    pub cliente: Option<Cliente>,
    pub id_mesa: MesaId,
    #[serde(default)]
    pub mesa: Option<Mesa>,
    #[serde(default)]
    pub cancelado: bool,
    #[serde(default)]
    pub motivo_cancelacion: Option<String>,
    #[serde(default)]
    pub senia_devuelta: bool,
    #[serde(default)]
    pub senia_recuperada: bool,
    #[serde(default)]
    pub asistida: bool,
    #[serde(default)]
    pub estado: Option<String>,
}

impl Reserva {
    /// Текущее состояние. Флаг `cancelado` старше строки `estado`;
    /// для старых записей без `estado` смотрим на `asistida`.
    pub fn status(&self) -> ReservaEstado {
        if self.cancelado {
            return ReservaEstado::Cancelada;
        }
        match self.estado.as_deref().and_then(ReservaEstado::from_code) {
            Some(estado) => estado,
            None if self.asistida => ReservaEstado::Asistida,
            None => ReservaEstado::Activa,
        }
    }

    pub fn cliente_label(&self) -> String {
        self.cliente
            .as_ref()
            .map(Cliente::full_name)
            .unwrap_or_else(|| format!("#{}", self.id_cliente))
    }

    pub fn mesa_label(&self) -> String {
        self.mesa
            .as_ref()
            .map(|m| m.numero.to_string())
            .unwrap_or_else(|| format!("#{}", self.id_mesa))
    }

    pub fn fecha_hora_display(&self) -> String {
        datetime::format_display_datetime(&self.fecha_hora)
    }

    fn guard_not_terminal(&self) -> Result<(), ReservationError> {
        match self.status() {
            ReservaEstado::Cancelada => Err(ReservationError::Cancelled),
            ReservaEstado::Completada => Err(ReservationError::Completed),
            _ => Ok(()),
        }
    }

    pub fn can_mark_attended(&self) -> bool {
        self.status() == ReservaEstado::Activa
    }

    pub fn can_cancel(&self) -> bool {
        self.status() == ReservaEstado::Activa
    }

    /// Comanda можно создать только из посещённой брони
    pub fn can_create_order(&self) -> bool {
        self.status() == ReservaEstado::Asistida
    }

    /// `Activa → Asistida`
    pub fn mark_attended(&mut self) -> Result<(), ReservationError> {
        self.guard_not_terminal()?;
        if self.status() != ReservaEstado::Activa {
            return Err(ReservationError::NotActive);
        }
        self.asistida = true;
        self.estado = Some(ReservaEstado::Asistida.code().to_string());
        Ok(())
    }

    /// `Activa → Cancelada`, причина обязательна
    pub fn cancel(&mut self, motivo: &str) -> Result<CancelReservaRequest, ReservationError> {
        self.guard_not_terminal()?;
        if self.status() != ReservaEstado::Activa {
            return Err(ReservationError::NotActive);
        }
        let motivo = motivo.trim();
        if motivo.is_empty() {
            return Err(ReservationError::MissingReason);
        }
        self.cancelado = true;
        self.motivo_cancelacion = Some(motivo.to_string());
        self.estado = Some(ReservaEstado::Cancelada.code().to_string());
        Ok(CancelReservaRequest {
            motivo: motivo.to_string(),
        })
    }

    /// Проверка перед созданием comanda из брони
    pub fn ensure_can_create_order(&self) -> Result<(), ReservationError> {
        self.guard_not_terminal()?;
        if self.can_create_order() {
            Ok(())
        } else {
            Err(ReservationError::NotAttended)
        }
    }

    /// Путь `PUT /api/reservas/{id}/asistida`
    pub fn attend_path(&self) -> String {
        format!("/api/reservas/{}/asistida", self.id_reserva)
    }

    /// Путь `PUT /api/reservas/{id}/cancelar`
    pub fn cancel_path(&self) -> String {
        format!("/api/reservas/{}/cancelar", self.id_reserva)
    }
}

impl Deactivatable for Reserva {
    fn is_deactivated(&self) -> bool {
        self.cancelado
    }

    fn deactivate(&mut self) {
        self.cancelado = true;
        self.estado = Some(ReservaEstado::Cancelada.code().to_string());
    }

    fn can_edit(&self) -> bool {
        self.status() == ReservaEstado::Activa
    }
}

impl AggregateRoot for Reserva {
    type Id = ReservaId;

    fn id(&self) -> Self::Id {
        self.id_reserva
    }

    fn display_name(&self) -> String {
        format!("Reserva {}", self.numero)
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "reservas"
    }

    fn element_name() -> &'static str {
        "Reserva"
    }

    fn list_name() -> &'static str {
        "Reservas"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelReservaRequest {
    pub motivo: String,
}

/// Форма брони. `fecha_hora` хранится в формате datetime-local.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReservaDto {
    #[serde(skip_serializing)]
    pub id: Option<ReservaId>,
    pub numero: Option<i32>,
    pub fecha_hora: String,
    pub cant_personas: Option<i32>,
    pub id_cliente: Option<ClienteId>,
    pub id_mesa: Option<MesaId>,
}

/// Тело запроса в формате бэкенда
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservaPayload {
    pub numero: i32,
    pub fecha_hora: String,
    pub cant_personas: i32,
    pub id_cliente: ClienteId,
    pub id_mesa: MesaId,
}

impl ReservaDto {
    /// `capacity`: вместимость выбранного стола, если известна.
    pub fn validate(&self, now: NaiveDateTime, capacity: Option<i32>) -> Result<(), String> {
        self.to_payload(now, capacity).map(|_| ())
    }

    pub fn to_payload(
        &self,
        now: NaiveDateTime,
        capacity: Option<i32>,
    ) -> Result<ReservaPayload, String> {
        let numero = match self.numero {
            Some(n) if n > 0 => n,
            _ => return Err("El número de reserva es obligatorio".into()),
        };
        let fecha = datetime::parse_datetime(&self.fecha_hora)
            .ok_or_else(|| "La fecha y hora son obligatorias".to_string())?;
        if fecha <= now {
            return Err("La fecha y hora de la reserva debe ser futura".into());
        }
        let cant_personas = match self.cant_personas {
            Some(n) if n > 0 => n,
            _ => return Err("La cantidad de personas debe ser mayor a 0".into()),
        };
        let id_cliente = self
            .id_cliente
            .ok_or_else(|| "Debe seleccionar un cliente".to_string())?;
        let id_mesa = self
            .id_mesa
            .ok_or_else(|| "Debe seleccionar una mesa".to_string())?;
        if let Some(capacity) = capacity {
            if cant_personas > capacity {
                return Err("Capacidad de mesa insuficiente".into());
            }
        }
        Ok(ReservaPayload {
            numero,
            fecha_hora: fecha.format(datetime::BACKEND_DATETIME).to_string(),
            cant_personas,
            id_cliente,
            id_mesa,
        })
    }
}

impl From<&Reserva> for ReservaDto {
    fn from(r: &Reserva) -> Self {
        Self {
            id: Some(r.id_reserva),
            numero: Some(r.numero),
            fecha_hora: datetime::backend_to_input(&r.fecha_hora),
            cant_personas: Some(r.cant_personas),
            id_cliente: Some(r.id_cliente),
            id_mesa: Some(r.id_mesa),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reserva() -> Reserva {
        Reserva {
            id_reserva: ReservaId(5),
            numero: 101,
            fecha_hora: "2025-03-15 21:00:00".into(),
            cant_personas: 4,
            id_cliente: ClienteId(1),
            cliente: None,
            id_mesa: MesaId(3),
            mesa: None,
            cancelado: false,
            motivo_cancelacion: None,
            senia_devuelta: false,
            senia_recuperada: false,
            asistida: false,
            estado: Some("activa".into()),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn order_requires_attended_reservation() {
        let mut r = reserva();
        assert_eq!(r.ensure_can_create_order(), Err(ReservationError::NotAttended));
        r.mark_attended().unwrap();
        assert_eq!(r.status(), ReservaEstado::Asistida);
        assert!(r.ensure_can_create_order().is_ok());
        assert_eq!(r.mark_attended(), Err(ReservationError::NotActive));
    }

    #[test]
    fn cancelled_reservation_is_terminal() {
        let mut r = reserva();
        assert_eq!(r.cancel("  "), Err(ReservationError::MissingReason));
        let req = r.cancel("Cliente avisó").unwrap();
        assert_eq!(req.motivo, "Cliente avisó");
        assert_eq!(r.status(), ReservaEstado::Cancelada);
        assert_eq!(r.mark_attended(), Err(ReservationError::Cancelled));
        assert_eq!(r.cancel("otra vez"), Err(ReservationError::Cancelled));
        assert_eq!(r.ensure_can_create_order(), Err(ReservationError::Cancelled));
        assert!(!r.can_edit());
    }

    #[test]
    fn attended_reservation_cannot_be_cancelled() {
        let mut r = reserva();
        r.mark_attended().unwrap();
        assert!(!r.can_cancel());
        assert_eq!(r.cancel("tarde"), Err(ReservationError::NotActive));
    }

    #[test]
    fn legacy_flags_map_to_status() {
        let r = Reserva { estado: None, asistida: true, ..reserva() };
        assert_eq!(r.status(), ReservaEstado::Asistida);
        let r = Reserva { estado: Some("activa".into()), cancelado: true, ..reserva() };
        assert_eq!(r.status(), ReservaEstado::Cancelada);
        let r = Reserva { estado: Some("en_curso".into()), ..reserva() };
        assert_eq!(r.status(), ReservaEstado::EnCurso);
        assert!(!r.can_create_order());
    }

    #[test]
    fn form_converts_datetime_local_to_backend_format() {
        let dto = ReservaDto {
            id: None,
            numero: Some(101),
            fecha_hora: "2025-03-15T21:00".into(),
            cant_personas: Some(4),
            id_cliente: Some(ClienteId(1)),
            id_mesa: Some(MesaId(3)),
        };
        let payload = dto.to_payload(now(), Some(4)).unwrap();
        assert_eq!(payload.fecha_hora, "2025-03-15 21:00:00");

        assert_eq!(
            dto.validate(now(), Some(2)).unwrap_err(),
            "Capacidad de mesa insuficiente"
        );
        let past = ReservaDto { fecha_hora: "2025-03-13T21:00".into(), ..dto.clone() };
        assert_eq!(
            past.validate(now(), None).unwrap_err(),
            "La fecha y hora de la reserva debe ser futura"
        );
        let nobody = ReservaDto { cant_personas: Some(0), ..dto };
        assert!(nobody.validate(now(), None).is_err());
    }

    #[test]
    fn edit_form_uses_input_format() {
        let dto = ReservaDto::from(&reserva());
        assert_eq!(dto.fecha_hora, "2025-03-15T21:00");
        assert_eq!(reserva().attend_path(), "/api/reservas/5/asistida");
    }
}
