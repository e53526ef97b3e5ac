//! Repositorios de acceso a datos
//!
//! Cada colección tiene su repositorio sobre el pool compartido de SQLite.

pub mod carro_repository;
pub mod cliente_repository;
pub mod renta_repository;

pub use carro_repository::CarroRepository;
pub use cliente_repository::ClienteRepository;
pub use renta_repository::RentaRepository;
