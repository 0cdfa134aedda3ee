use crate::domain::common::AggregateRoot;
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор способа оплаты
    MedioPagoId
);

/// Способ оплаты (efectivo, tarjeta, transferencia...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedioPago {
    pub id_medio_pago: MedioPagoId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub baja: bool,
}

crate::impl_deactivatable_by_baja!(MedioPago);

impl AggregateRoot for MedioPago {
    type Id = MedioPagoId;

    fn id(&self) -> Self::Id {
        self.id_medio_pago
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "medio-pagos"
    }

    fn element_name() -> &'static str {
        "Medio de pago"
    }

    fn list_name() -> &'static str {
        "Medios de pago"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedioPagoDto {
    #[serde(skip_serializing)]
    pub id: Option<MedioPagoId>,
    pub nombre: String,
    pub descripcion: String,
    #[serde(default)]
    pub baja: bool,
}

impl MedioPagoDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.nombre, "El nombre es obligatorio")
    }
}

impl From<&MedioPago> for MedioPagoDto {
    fn from(m: &MedioPago) -> Self {
        Self {
            id: Some(m.id_medio_pago),
            nombre: m.nombre.clone(),
            descripcion: m.descripcion.clone().unwrap_or_default(),
            baja: m.baja,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_form() {
        let medio = MedioPago {
            id_medio_pago: MedioPagoId(2),
            nombre: "Tarjeta".into(),
            descripcion: None,
            baja: false,
        };
        let dto = MedioPagoDto::from(&medio);
        assert_eq!(dto.id, Some(MedioPagoId(2)));
        assert!(dto.validate().is_ok());
        assert!(MedioPagoDto::default().validate().is_err());
        assert_eq!(MedioPago::api_path(), "/api/medio-pagos/");
    }
}
