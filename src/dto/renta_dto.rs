//! DTOs de rentas

use serde::{Deserialize, Serialize};

/// Request para registrar una renta
///
/// `precio` y `total` llegan como texto ya calculado por el cliente.
/// `forma_pago` es opcional: la pantalla de rentas del cliente móvil
/// no la incluye en el payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearRentaRequest {
    pub cliente_id: Option<String>,
    pub carro_id: Option<String>,
    pub precio: Option<String>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub total: Option<String>,
    pub forma_pago: Option<String>,
}

impl CrearRentaRequest {
    /// Referencias obligatorias de la renta: cliente y carro
    pub fn referencias(&self) -> Option<(&str, &str)> {
        let cliente_id = self.cliente_id.as_deref().filter(|v| !v.is_empty())?;
        let carro_id = self.carro_id.as_deref().filter(|v| !v.is_empty())?;
        Some((cliente_id, carro_id))
    }
}

/// Respuesta de registro de renta
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentaCreadaResponse {
    pub mensaje: String,
    pub renta_id: String,
}
