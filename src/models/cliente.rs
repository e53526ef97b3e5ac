//! Modelo de Cliente
//!
//! Este módulo contiene el struct Cliente y el catálogo de sexo.
//! Mapea exactamente a la tabla clientes con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Sexo del cliente - catálogo cerrado del formulario de registro
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
pub enum Sexo {
    Masculino,
    Femenino,
}

/// Cliente principal - mapea exactamente a la tabla clientes
///
/// Los nombres en el API conservan el camelCase que espera el cliente
/// móvil (`codigoPostal`, `fechaNacimiento`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[serde(rename = "_id")]
    pub id: String,
    pub nombre: String,
    pub telefono: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_postal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sexo: Option<Sexo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
}
