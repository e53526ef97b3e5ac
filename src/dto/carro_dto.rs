//! DTOs de carros

use serde::Serialize;

/// Campos del formulario multipart de alta de carro
///
/// Todos llegan como texto; `imagen` se resuelve aparte porque el
/// archivo se guarda en disco antes de insertar el registro.
#[derive(Debug, Default)]
pub struct CarroForm {
    pub matricula: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub color: Option<String>,
    pub precio: Option<String>,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}

impl CarroForm {
    /// Campos obligatorios del alta: matrícula, marca y modelo
    ///
    /// Una cadena vacía cuenta como faltante, igual que un campo ausente.
    pub fn datos_obligatorios(&self) -> Option<(&str, &str, &str)> {
        let matricula = self.matricula.as_deref().filter(|v| !v.is_empty())?;
        let marca = self.marca.as_deref().filter(|v| !v.is_empty())?;
        let modelo = self.modelo.as_deref().filter(|v| !v.is_empty())?;
        Some((matricula, marca, modelo))
    }
}

/// Respuesta de alta de carro
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarroCreadoResponse {
    pub mensaje: String,
    pub carro_id: String,
}
