//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS del servidor.

pub mod cors;

pub use cors::*;
