use crate::domain::common::AggregateRoot;
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор раздела меню
    SeccionId
);

/// Раздел меню (entradas, parrilla, bebidas...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seccion {
    pub id_seccion: SeccionId,
    pub nombre: String,
    #[serde(default)]
    pub baja: bool,
}

crate::impl_deactivatable_by_baja!(Seccion);

impl AggregateRoot for Seccion {
    type Id = SeccionId;

    fn id(&self) -> Self::Id {
        self.id_seccion
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "secciones"
    }

    fn element_name() -> &'static str {
        "Sección"
    }

    fn list_name() -> &'static str {
        "Secciones"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeccionDto {
    #[serde(skip_serializing)]
    pub id: Option<SeccionId>,
    pub nombre: String,
    #[serde(default)]
    pub baja: bool,
}

impl SeccionDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.nombre, "El nombre de la sección es obligatorio")?;
        validation::min_chars(&self.nombre, 2, "El nombre")
    }
}

impl From<&Seccion> for SeccionDto {
    fn from(s: &Seccion) -> Self {
        Self {
            id: Some(s.id_seccion),
            nombre: s.nombre.clone(),
            baja: s.baja,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        assert!(SeccionDto { nombre: "Postres".into(), ..Default::default() }.validate().is_ok());
        assert_eq!(
            SeccionDto::default().validate().unwrap_err(),
            "El nombre de la sección es obligatorio"
        );
        assert!(SeccionDto { nombre: "P".into(), ..Default::default() }.validate().is_err());
    }
}
