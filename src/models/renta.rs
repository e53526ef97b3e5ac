//! Modelo de Renta
//!
//! Este módulo contiene el struct Renta que liga un cliente con un carro.
//! Mapea exactamente a la tabla rentas con primary key 'id'.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Renta principal - mapea exactamente a la tabla rentas
///
/// `precio` y `total` se guardan tal cual llegaron del cliente: el
/// servidor no recalcula importes. `forma_pago` puede faltar porque
/// una de las pantallas del cliente móvil no la envía.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Renta {
    #[serde(rename = "_id")]
    pub id: String,
    pub cliente_id: String,
    pub carro_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forma_pago: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renta_usa_camel_case_y_omite_opcionales() {
        let renta = Renta {
            id: "r1".to_string(),
            cliente_id: "c1".to_string(),
            carro_id: "a1".to_string(),
            precio: Some("850".to_string()),
            fecha_inicio: Some("2024-05-01".to_string()),
            fecha_fin: Some("2024-05-03".to_string()),
            total: Some("1700".to_string()),
            forma_pago: None,
        };

        let json = serde_json::to_value(&renta).unwrap();
        assert_eq!(json["_id"], "r1");
        assert_eq!(json["clienteId"], "c1");
        assert_eq!(json["carroId"], "a1");
        assert_eq!(json["fechaInicio"], "2024-05-01");
        assert!(json.get("formaPago").is_none());
    }
}
