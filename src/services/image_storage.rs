//! Almacenamiento de imágenes de carros
//!
//! Las imágenes del formulario de alta se guardan en el directorio de
//! uploads y el carro sólo registra la ruta pública `/uploads/<nombre>`.

use crate::utils::errors::AppResult;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Escribe imágenes subidas y produce su ruta pública
pub struct ImageStorage {
    dir: PathBuf,
}

impl ImageStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Crea el directorio de uploads si todavía no existe
    pub async fn ensure_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Guarda los bytes de la imagen y devuelve la ruta pública
    ///
    /// El nombre del archivo es el timestamp en milisegundos más la
    /// extensión original; del nombre que mandó el cliente no se
    /// conserva nada más, así que no puede escapar del directorio.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> AppResult<String> {
        let filename = nombre_con_timestamp(original_name, Utc::now().timestamp_millis());
        let destino = self.dir.join(&filename);

        fs::write(&destino, data).await?;
        debug!("🖼️ Imagen guardada en {}", destino.display());

        Ok(format!("/uploads/{}", filename))
    }
}

/// Milisegundos de época + extensión original (si la hay)
fn nombre_con_timestamp(original_name: &str, millis: i64) -> String {
    match Path::new(original_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", millis, ext),
        None => millis.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn nombre_conserva_la_extension() {
        assert_eq!(nombre_con_timestamp("carro.jpg", 1700000000123), "1700000000123.jpg");
        assert_eq!(nombre_con_timestamp("foto.final.png", 99), "99.png");
    }

    #[test]
    fn nombre_sin_extension_queda_solo_el_timestamp() {
        assert_eq!(nombre_con_timestamp("imagen", 1700000000123), "1700000000123");
    }

    #[test]
    fn nombre_ignora_directorios_del_cliente() {
        let nombre = nombre_con_timestamp("../../etc/passwd.png", 55);
        assert_eq!(nombre, "55.png");
    }

    #[tokio::test]
    async fn save_escribe_el_archivo_y_devuelve_la_ruta_publica() {
        let dir = TempDir::new().unwrap();
        let storage = ImageStorage::new(dir.path());

        let ruta = storage.save("carro.jpg", b"bytes-de-imagen").await.unwrap();

        assert!(ruta.starts_with("/uploads/"));
        assert!(ruta.ends_with(".jpg"));

        let nombre = ruta.trim_start_matches("/uploads/");
        let contenido = std::fs::read(dir.path().join(nombre)).unwrap();
        assert_eq!(contenido, b"bytes-de-imagen");
    }

    #[tokio::test]
    async fn ensure_dir_crea_el_directorio() {
        let dir = TempDir::new().unwrap();
        let anidado = dir.path().join("uploads");
        let storage = ImageStorage::new(&anidado);

        storage.ensure_dir().await.unwrap();

        assert!(anidado.is_dir());
    }
}
