use crate::domain::common::AggregateRoot;
use crate::shared::validation;
use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Идентификатор клиента
    ClienteId
);

/// Клиент ресторана (для reservas и facturas)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(alias = "id")]
    pub id_cliente: ClienteId,
    pub documento: String,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub num_telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub baja: bool,
}

crate::impl_deactivatable_by_baja!(Cliente);

impl Cliente {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido).trim().to_string()
    }
}

impl AggregateRoot for Cliente {
    type Id = ClienteId;

    fn id(&self) -> Self::Id {
        self.id_cliente
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.full_name(), self.documento)
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "clientes"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClienteDto {
    #[serde(skip_serializing)]
    pub id: Option<ClienteId>,
    pub documento: String,
    pub nombre: String,
    pub apellido: String,
    pub num_telefono: String,
    pub email: String,
    #[serde(default)]
    pub baja: bool,
}

impl ClienteDto {
    pub fn validate(&self) -> Result<(), String> {
        validation::document(&self.documento, 7)?;
        validation::min_chars(&self.nombre, 2, "El nombre")?;
        validation::min_chars(&self.apellido, 2, "El apellido")?;
        if !self.num_telefono.trim().is_empty() {
            validation::phone(&self.num_telefono)?;
        }
        if !self.email.trim().is_empty() {
            validation::email(&self.email)?;
        }
        Ok(())
    }
}

impl From<&Cliente> for ClienteDto {
    fn from(c: &Cliente) -> Self {
        Self {
            id: Some(c.id_cliente),
            documento: c.documento.clone(),
            nombre: c.nombre.clone(),
            apellido: c.apellido.clone(),
            num_telefono: c.num_telefono.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            baja: c.baja,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maria() -> ClienteDto {
        ClienteDto {
            id: None,
            documento: "27444555".into(),
            nombre: "María".into(),
            apellido: "Gómez".into(),
            num_telefono: String::new(),
            email: "maria@example.com".into(),
            baja: false,
        }
    }

    #[test]
    fn validates_client_form() {
        assert!(maria().validate().is_ok());
        assert!(ClienteDto { email: String::new(), ..maria() }.validate().is_ok());
        assert!(ClienteDto { email: "maria@".into(), ..maria() }.validate().is_err());
        assert!(ClienteDto { documento: "27.444.555".into(), ..maria() }.validate().is_err());
        assert!(ClienteDto { apellido: "G".into(), ..maria() }.validate().is_err());
    }

    #[test]
    fn full_name_and_display() {
        let c = Cliente {
            id_cliente: ClienteId(1),
            documento: "27444555".into(),
            nombre: "María".into(),
            apellido: "Gómez".into(),
            num_telefono: None,
            email: None,
            baja: false,
        };
        assert_eq!(c.full_name(), "María Gómez");
        assert_eq!(c.display_name(), "María Gómez (27444555)");
    }
}
