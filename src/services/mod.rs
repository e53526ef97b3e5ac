//! Services module
//!
//! Este módulo contiene los servicios de la aplicación que no son
//! acceso a datos, como el guardado de imágenes subidas.

pub mod image_storage;

pub use image_storage::ImageStorage;
