use crate::domain::a001_sector::aggregate::{Sector, SectorId};
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор стола
    MesaId
);

/// Стол зала
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesa {
    pub id_mesa: MesaId,
    pub numero: i32,
    #[serde(default)]
    pub tipo: String,
    pub cant_comensales: i32,
    #[serde(default)]
    pub id_sector: Option<SectorId>,
    #[serde(default)]
    pub sector: Option<Sector>,
    #[serde(default)]
    pub baja: bool,
}

crate::impl_deactivatable_by_baja!(Mesa);

impl Mesa {
    pub fn sector_label(&self) -> String {
        self.sector
            .as_ref()
            .map(|s| s.numero.to_string())
            .or_else(|| self.id_sector.map(|id| format!("#{}", id)))
            .unwrap_or_else(|| "-".to_string())
    }

    /// Вмещает ли стол указанное число гостей
    pub fn fits(&self, guests: i32) -> bool {
        guests > 0 && guests <= self.cant_comensales
    }
}

impl AggregateRoot for Mesa {
    type Id = MesaId;

    fn id(&self) -> Self::Id {
        self.id_mesa
    }

    fn display_name(&self) -> String {
        format!("Mesa {}", self.numero)
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "mesas"
    }

    fn element_name() -> &'static str {
        "Mesa"
    }

    fn list_name() -> &'static str {
        "Mesas"
    }
}

pub const MAX_GUESTS_PER_TABLE: i32 = 50;

/// Форма стола
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MesaDto {
    #[serde(skip_serializing)]
    pub id: Option<MesaId>,
    pub numero: Option<i32>,
    pub tipo: String,
    pub cant_comensales: Option<i32>,
    pub id_sector: Option<SectorId>,
    #[serde(default)]
    pub baja: bool,
}

impl MesaDto {
    pub fn validate(&self) -> Result<(), String> {
        match self.numero {
            Some(n) if n > 0 => {}
            Some(_) => return Err("El número de mesa debe ser mayor a 0".into()),
            None => return Err("El número de mesa es obligatorio".into()),
        }
        if self.tipo.trim().is_empty() {
            return Err("El tipo de mesa es obligatorio".into());
        }
        match self.cant_comensales {
            Some(n) if (1..=MAX_GUESTS_PER_TABLE).contains(&n) => {}
            Some(_) => {
                return Err(format!(
                    "La cantidad de comensales debe estar entre 1 y {}",
                    MAX_GUESTS_PER_TABLE
                ))
            }
            None => return Err("La cantidad de comensales es obligatoria".into()),
        }
        if self.id_sector.is_none() {
            return Err("Debe seleccionar un sector".into());
        }
        Ok(())
    }
}

impl From<&Mesa> for MesaDto {
    fn from(m: &Mesa) -> Self {
        Self {
            id: Some(m.id_mesa),
            numero: Some(m.numero),
            tipo: m.tipo.clone(),
            cant_comensales: Some(m.cant_comensales),
            id_sector: m.id_sector,
            baja: m.baja,
        }
    }
}

/// `/api/mesas/tipos`
pub const TABLE_TYPES_PATH: &str = "/api/mesas/tipos";

/// Запрос свободных столов: `/api/mesas/disponibles`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailableTablesQuery {
    pub cant_comensales: Option<i32>,
    pub sector_id: Option<SectorId>,
}

impl AvailableTablesQuery {
    pub fn path(&self) -> String {
        let mut params = Vec::new();
        if let Some(n) = self.cant_comensales {
            params.push(format!("cant_comensales={}", n));
        }
        if let Some(id) = self.sector_id {
            params.push(format!("sector_id={}", id));
        }
        if params.is_empty() {
            "/api/mesas/disponibles".to_string()
        } else {
            format!("/api/mesas/disponibles?{}", params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Deactivatable;

    fn valid_dto() -> MesaDto {
        MesaDto {
            id: None,
            numero: Some(3),
            tipo: "interior".into(),
            cant_comensales: Some(4),
            id_sector: Some(SectorId(1)),
            baja: false,
        }
    }

    #[test]
    fn validates_required_fields() {
        assert!(valid_dto().validate().is_ok());
        assert!(MesaDto { tipo: " ".into(), ..valid_dto() }.validate().is_err());
        assert!(MesaDto { cant_comensales: Some(0), ..valid_dto() }.validate().is_err());
        assert!(MesaDto { cant_comensales: Some(51), ..valid_dto() }.validate().is_err());
        assert_eq!(
            MesaDto { id_sector: None, ..valid_dto() }.validate().unwrap_err(),
            "Debe seleccionar un sector"
        );
    }

    #[test]
    fn deserializes_nested_sector() {
        let json = r#"{"id_mesa": 3, "numero": 3, "tipo": "interior", "cant_comensales": 4,
                       "id_sector": 1, "sector": {"id_sector": 1, "numero": 1, "baja": false},
                       "baja": false}"#;
        let mesa: Mesa = serde_json::from_str(json).unwrap();
        assert_eq!(mesa.sector_label(), "1");
        assert!(mesa.fits(4));
        assert!(!mesa.fits(5));
        assert!(mesa.can_edit());
    }

    #[test]
    fn available_tables_path() {
        assert_eq!(AvailableTablesQuery::default().path(), "/api/mesas/disponibles");
        let q = AvailableTablesQuery { cant_comensales: Some(4), sector_id: Some(SectorId(2)) };
        assert_eq!(q.path(), "/api/mesas/disponibles?cant_comensales=4&sector_id=2");
    }

    #[test]
    fn id_is_not_sent_in_body() {
        let json = serde_json::to_value(MesaDto { id: Some(MesaId(9)), ..valid_dto() }).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["numero"], 3);
    }
}
