use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор сектора зала
    SectorId
);

/// Сектор зала (терраса, salón principal...). Определяется номером.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id_sector: SectorId,
    pub numero: i32,
    #[serde(default)]
    pub baja: bool,
}

crate::impl_deactivatable_by_baja!(Sector);

impl AggregateRoot for Sector {
    type Id = SectorId;

    fn id(&self) -> Self::Id {
        self.id_sector
    }

    fn display_name(&self) -> String {
        format!("Sector {}", self.numero)
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "sectores"
    }

    fn element_name() -> &'static str {
        "Sector"
    }

    fn list_name() -> &'static str {
        "Sectores"
    }
}

/// Форма создания/редактирования сектора
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorDto {
    #[serde(skip_serializing)]
    pub id: Option<SectorId>,
    pub numero: Option<i32>,
    #[serde(default)]
    pub baja: bool,
}

impl SectorDto {
    pub fn validate(&self) -> Result<(), String> {
        match self.numero {
            Some(n) if n > 0 => Ok(()),
            Some(_) => Err("El número de sector debe ser mayor a 0".into()),
            None => Err("El número de sector es obligatorio".into()),
        }
    }
}

impl From<&Sector> for SectorDto {
    fn from(s: &Sector) -> Self {
        Self {
            id: Some(s.id_sector),
            numero: Some(s.numero),
            baja: s.baja,
        }
    }
}

/// Путь `/api/sectores/todos`: все активные сектора без пагинации (для select'ов)
pub const ALL_SECTORS_PATH: &str = "/api/sectores/todos";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Deactivatable;

    #[test]
    fn validates_number() {
        assert!(SectorDto { numero: Some(3), ..Default::default() }.validate().is_ok());
        assert!(SectorDto { numero: Some(0), ..Default::default() }.validate().is_err());
        assert!(SectorDto::default().validate().is_err());
    }

    #[test]
    fn soft_delete_blocks_edit() {
        let mut sector = Sector { id_sector: SectorId(1), numero: 2, baja: false };
        assert!(sector.can_edit());
        sector.deactivate();
        assert!(!sector.can_edit());
        assert!(!sector.can_delete());
        assert_eq!(sector.status_label(), "Inactivo");
        assert_eq!(Sector::item_path(sector.id()), "/api/sectores/1");
    }
}
