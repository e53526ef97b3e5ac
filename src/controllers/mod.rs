//! Controladores del API
//!
//! La capa de negocio entre las rutas y los repositorios. Cada controlador
//! valida la petición, habla con su repositorio y arma la respuesta.

pub mod carro_controller;
pub mod cliente_controller;
pub mod renta_controller;

pub use carro_controller::CarroController;
pub use cliente_controller::ClienteController;
pub use renta_controller::RentaController;
