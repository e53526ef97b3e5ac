//! DTOs de clientes

use crate::models::Sexo;
use serde::{Deserialize, Serialize};

/// Request para registrar un cliente
///
/// El servidor sólo exige nombre y teléfono; el resto del formulario
/// viaja tal cual para guardarse sin transformación.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearClienteRequest {
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub codigo_postal: Option<String>,
    pub rfc: Option<String>,
    pub sexo: Option<Sexo>,
    pub fecha_nacimiento: Option<String>,
}

impl CrearClienteRequest {
    /// Campos obligatorios del registro: nombre y teléfono
    pub fn datos_obligatorios(&self) -> Option<(&str, &str)> {
        let nombre = self.nombre.as_deref().filter(|v| !v.is_empty())?;
        let telefono = self.telefono.as_deref().filter(|v| !v.is_empty())?;
        Some((nombre, telefono))
    }
}

/// Respuesta de registro de cliente
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteCreadoResponse {
    pub mensaje: String,
    pub cliente_id: String,
}

/// Query string de la verificación de RFC
#[derive(Debug, Deserialize)]
pub struct RfcQuery {
    pub rfc: Option<String>,
}

/// Respuesta de la verificación de RFC
#[derive(Debug, Serialize)]
pub struct RfcExisteResponse {
    pub exists: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registro_requiere_nombre_y_telefono() {
        let request = CrearClienteRequest {
            nombre: Some("Ana".to_string()),
            telefono: Some("555-1".to_string()),
            direccion: None,
            codigo_postal: None,
            rfc: None,
            sexo: None,
            fecha_nacimiento: None,
        };
        assert_eq!(request.datos_obligatorios(), Some(("Ana", "555-1")));
    }

    #[test]
    fn telefono_vacio_cuenta_como_faltante() {
        let request = CrearClienteRequest {
            nombre: Some("Ana".to_string()),
            telefono: Some("".to_string()),
            direccion: None,
            codigo_postal: None,
            rfc: None,
            sexo: None,
            fecha_nacimiento: None,
        };
        assert_eq!(request.datos_obligatorios(), None);
    }

    #[test]
    fn request_acepta_el_formulario_completo_en_camel_case() {
        let json = serde_json::json!({
            "nombre": "Ana",
            "telefono": "555-1",
            "direccion": "Reforma 1",
            "codigoPostal": "06600",
            "rfc": "GOMC860101AAA",
            "sexo": "Femenino",
            "fechaNacimiento": "1986-01-01T00:00:00.000Z"
        });
        let request: CrearClienteRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.codigo_postal.as_deref(), Some("06600"));
        assert_eq!(request.sexo, Some(Sexo::Femenino));
    }
}
