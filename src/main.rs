use anyhow::Result;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tracing::{error, info};

use vehicle_registry::config::environment::EnvironmentConfig;
use vehicle_registry::controllers::vehicle_controller::VehicleController;
use vehicle_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging (stdout queda reservado para las respuestas)
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚚 Vehicle Registry - host de comandos");
    info!("================================================");
    info!("   Entorno: {}", config.environment);
    info!("   Altura inicial: {}", config.initial_block_height);
    if let Some(sender) = &config.default_sender {
        info!("   Sender por defecto: {}", sender);
    }

    let state = AppState::new(config);
    let controller = VehicleController::new(state.clone());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut shutdown => break,
        };

        let Some(line) = line else { break };

        if let Some(response) = controller.handle_line(&line).await {
            stdout.write_all(response.to_string().as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    let registry = state.registry.read().await;
    info!(
        "✅ Host finalizado: {} vehículos registrados, altura final {}",
        registry.vehicle_count(),
        state.clock.current()
    );

    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, cerrando host...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, cerrando host...");
        },
    }
}
