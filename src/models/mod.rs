//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema SQLite y al contrato JSON del cliente móvil.

pub mod carro;
pub mod cliente;
pub mod renta;

pub use carro::{Carro, EstadoCarro};
pub use cliente::{Cliente, Sexo};
pub use renta::Renta;
