//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores compartido por todo el API.

pub mod errors;

pub use errors::{AppError, AppResult};
