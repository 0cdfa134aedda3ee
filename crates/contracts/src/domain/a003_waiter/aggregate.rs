use crate::domain::a001_sector::aggregate::SectorId;
use crate::domain::common::AggregateRoot;
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор официанта
    MozoId
);

/// Официант. Бэкенд отдаёт ключ как `id`, в теле comandas приходит `id_mozo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mozo {
    #[serde(rename = "id", alias = "id_mozo")]
    pub id_mozo: MozoId,
    pub documento: String,
    pub nombre_apellido: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub id_sector: Option<SectorId>,
    #[serde(default)]
    pub baja: bool,
}

crate::impl_deactivatable_by_baja!(Mozo);

impl AggregateRoot for Mozo {
    type Id = MozoId;

    fn id(&self) -> Self::Id {
        self.id_mozo
    }

    fn display_name(&self) -> String {
        self.nombre_apellido.clone()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "mozos"
    }

    fn element_name() -> &'static str {
        "Mozo"
    }

    fn list_name() -> &'static str {
        "Mozos"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MozoDto {
    #[serde(skip_serializing)]
    pub id: Option<MozoId>,
    pub documento: String,
    pub nombre_apellido: String,
    pub direccion: String,
    pub telefono: String,
    pub id_sector: Option<SectorId>,
    #[serde(default)]
    pub baja: bool,
}

impl MozoDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::document(&self.documento, 7)?;
        validation::required(&self.nombre_apellido, "El nombre y apellido es obligatorio")?;
        validation::min_chars(&self.nombre_apellido, 3, "El nombre y apellido")?;
        if !self.telefono.trim().is_empty() {
            validation::phone(&self.telefono)?;
        }
        if self.id_sector.is_none() {
            return Err("Debe seleccionar un sector".into());
        }
        Ok(())
    }
}

impl From<&Mozo> for MozoDto {
    fn from(m: &Mozo) -> Self {
        Self {
            id: Some(m.id_mozo),
            documento: m.documento.clone(),
            nombre_apellido: m.nombre_apellido.clone(),
            direccion: m.direccion.clone().unwrap_or_default(),
            telefono: m.telefono.clone().unwrap_or_default(),
            id_sector: m.id_sector,
            baja: m.baja,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Deactivatable;

    fn juan() -> MozoDto {
        MozoDto {
            id: None,
            documento: "30111222".into(),
            nombre_apellido: "Juan Pérez".into(),
            direccion: String::new(),
            telefono: "351-5551234".into(),
            id_sector: Some(SectorId(1)),
            baja: false,
        }
    }

    #[test]
    fn validates_waiter_form() {
        assert!(juan().validate().is_ok());
        assert!(MozoDto { telefono: String::new(), ..juan() }.validate().is_ok());
        assert!(MozoDto { telefono: "123".into(), ..juan() }.validate().is_err());
        assert!(MozoDto { documento: "12a".into(), ..juan() }.validate().is_err());
        assert!(MozoDto { id_sector: None, ..juan() }.validate().is_err());
    }

    #[test]
    fn reads_backend_id_field() {
        let json = r#"{"id": 7, "documento": "30111222", "nombre_apellido": "Juan Pérez",
                       "direccion": null, "telefono": null, "id_sector": 1, "baja": true}"#;
        let mozo: Mozo = serde_json::from_str(json).unwrap();
        assert_eq!(mozo.id(), MozoId(7));
        assert!(!mozo.can_edit());
        let dto = MozoDto::from(&mozo);
        assert_eq!(dto.telefono, "");
    }
}
