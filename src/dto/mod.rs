//! DTOs del API
//!
//! Requests y responses del contrato JSON que consume el cliente móvil.

pub mod carro_dto;
pub mod cliente_dto;
pub mod renta_dto;

pub use carro_dto::*;
pub use cliente_dto::*;
pub use renta_dto::*;
