//! Modelo de Carro
//!
//! Este módulo contiene el struct Carro tal como lo consume el cliente móvil.
//! Mapea exactamente a la tabla carros con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado de disponibilidad del carro
///
/// El conjunto es cerrado: un carro nace `Disponible` y sólo la
/// creación de una renta lo pasa a `Rentado`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
pub enum EstadoCarro {
    Disponible,
    Rentado,
}

/// Carro principal - mapea exactamente a la tabla carros
///
/// En el API el identificador se expone como `_id`, la llave que el
/// cliente móvil usa para armar sus listas.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Carro {
    #[serde(rename = "_id")]
    pub id: String,
    pub matricula: String,
    pub marca: String,
    pub modelo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub estado: EstadoCarro,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
}
