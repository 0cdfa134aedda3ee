use crate::domain::a004_section::aggregate::{Seccion, SeccionId};
use crate::domain::common::AggregateRoot;
use crate::shared::money::deserialize_money;
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор продукта
    ProductoId
);

/// Вид продукта. Для напитков обязателен объём `cm3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Plato,
    Postre,
    Bebida,
}

impl ProductKind {
    pub const ALL: [ProductKind; 3] = [ProductKind::Plato, ProductKind::Postre, ProductKind::Bebida];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Plato => "plato",
            ProductKind::Postre => "postre",
            ProductKind::Bebida => "bebida",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Plato => "Plato",
            ProductKind::Postre => "Postre",
            ProductKind::Bebida => "Bebida",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == code.trim().to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id_producto: ProductoId,
    pub codigo: String,
    pub nombre: String,
    #[serde(deserialize_with = "deserialize_money")]
    pub precio: f64,
    pub id_seccion: SeccionId,
    #[serde(default)]
    pub seccion: Option<Seccion>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub tipo: Option<ProductKind>,
    #[serde(default)]
    pub cm3: Option<i32>,
    #[serde(default)]
    pub baja: bool,
}

crate::impl_deactivatable_by_baja!(Producto);

impl AggregateRoot for Producto {
    type Id = ProductoId;

    fn id(&self) -> Self::Id {
        self.id_producto
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.codigo, self.nombre)
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "productos"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductoDto {
    #[serde(skip_serializing)]
    pub id: Option<ProductoId>,
    pub codigo: String,
    pub nombre: String,
    pub precio: Option<f64>,
    pub id_seccion: Option<SeccionId>,
    pub descripcion: String,
    pub tipo: ProductKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cm3: Option<i32>,
    #[serde(default)]
    pub baja: bool,
}

impl ProductoDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.codigo, "El código es obligatorio")?;
        validation::required(&self.nombre, "El nombre es obligatorio")?;
        let precio = validation::required_id(self.precio, "El precio es obligatorio")?;
        validation::positive_amount(precio, "El precio debe ser mayor a 0")?;
        if self.id_seccion.is_none() {
            return Err("Debe seleccionar una sección".into());
        }
        if self.tipo == ProductKind::Bebida {
            match self.cm3 {
                Some(cm3) if cm3 > 0 => {}
                _ => return Err("Los cm3 son obligatorios para una bebida".into()),
            }
        }
        Ok(())
    }

    /// Тело запроса: `cm3` уходит только для напитков
    pub fn to_payload(&self) -> ProductoDto {
        let mut payload = self.clone();
        if payload.tipo != ProductKind::Bebida {
            payload.cm3 = None;
        }
        payload
    }
}

impl From<&Producto> for ProductoDto {
    fn from(p: &Producto) -> Self {
        Self {
            id: Some(p.id_producto),
            codigo: p.codigo.clone(),
            nombre: p.nombre.clone(),
            precio: Some(p.precio),
            id_seccion: Some(p.id_seccion),
            descripcion: p.descripcion.clone().unwrap_or_default(),
            tipo: p.tipo.unwrap_or_default(),
            cm3: p.cm3,
            baja: p.baja,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milanesa() -> ProductoDto {
        ProductoDto {
            id: None,
            codigo: "MIL01".into(),
            nombre: "Milanesa".into(),
            precio: Some(1500.0),
            id_seccion: Some(SeccionId(1)),
            descripcion: String::new(),
            tipo: ProductKind::Plato,
            cm3: Some(500),
            baja: false,
        }
    }

    #[test]
    fn price_must_be_positive() {
        assert!(milanesa().validate().is_ok());
        assert!(ProductoDto { precio: Some(0.0), ..milanesa() }.validate().is_err());
        assert!(ProductoDto { precio: None, ..milanesa() }.validate().is_err());
    }

    #[test]
    fn drinks_need_volume() {
        let coca = ProductoDto { tipo: ProductKind::Bebida, cm3: None, ..milanesa() };
        assert_eq!(coca.validate().unwrap_err(), "Los cm3 son obligatorios para una bebida");
        let coca = ProductoDto { cm3: Some(500), ..coca };
        assert!(coca.validate().is_ok());
        assert_eq!(coca.to_payload().cm3, Some(500));
    }

    #[test]
    fn volume_is_dropped_for_dishes() {
        let json = serde_json::to_value(milanesa().to_payload()).unwrap();
        assert!(json.get("cm3").is_none());
        assert_eq!(json["tipo"], "plato");
    }

    #[test]
    fn kind_codes() {
        assert_eq!(ProductKind::from_code("Bebida"), Some(ProductKind::Bebida));
        assert_eq!(ProductKind::from_code("pizza"), None);
    }

    #[test]
    fn reads_price_as_number_or_string() {
        let json = r#"{"id_producto": 1, "codigo": "MIL01", "nombre": "Milanesa",
                       "precio": "1500.00", "id_seccion": 2, "descripcion": null, "baja": false}"#;
        let p: Producto = serde_json::from_str(json).unwrap();
        assert_eq!(p.precio, 1500.0);
        assert_eq!(p.tipo, None);
    }
}
