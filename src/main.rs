use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use rentcar_api::config::database::DatabaseConfig;
use rentcar_api::config::environment::EnvironmentConfig;
use rentcar_api::create_app;
use rentcar_api::services::ImageStorage;
use rentcar_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 RentCar API - Servidor de renta de carros");
    info!("============================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match DatabaseConfig::new(&config.database_url).create_pool().await {
        Ok(pool) => {
            info!("✅ Base de datos conectada: {}", config.database_url);
            pool
        }
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Preparar el directorio de imágenes
    let storage = ImageStorage::new(&config.uploads_dir);
    if let Err(e) = storage.ensure_dir().await {
        error!("❌ Error creando el directorio de uploads: {}", e);
        return Err(anyhow::anyhow!("Error de uploads: {}", e));
    }

    warn!("⚠️ Sin flujo de devolución: un carro Rentado no regresa a Disponible");

    let state = AppState::new(pool, config.clone());
    let app = create_app(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Carros:");
    info!("   GET  /carros - Listar carros");
    info!("   POST /carros - Alta de carro (multipart con imagen)");
    info!("👤 Clientes:");
    info!("   GET  /clientes - Listar clientes");
    info!("   POST /clientes - Registrar cliente");
    info!("   GET  /rfc?rfc= - Verificar RFC");
    info!("📋 Rentas:");
    info!("   GET  /rentas - Listar rentas");
    info!("   POST /rentas - Registrar renta");
    info!("🖼️ Estáticos:");
    info!("   GET  /uploads/* - Imágenes de carros");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
