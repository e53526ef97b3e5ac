pub mod carro_routes;
pub mod cliente_routes;
pub mod renta_routes;
