//! Interval Timer - A repeating work/rest countdown with an HTTP control surface
//! 
//! This is the main entry point for the interval-timer daemon.

use tokio::net::TcpListener;
use tracing::info;

use interval_timer::{
    api::create_router,
    config::Config,
    format::format_duration,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("interval_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting interval-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, work={}s, rest={}s, sets={}, tick={}ms",
          config.host, config.port, format_duration(config.work),
          format_duration(config.rest), config.sets, config.tick_ms);

    // Create application state; the timer stays stopped until /start
    let state = AppState::new(
        config.port,
        config.host.clone(),
        config.timer_config(),
        config.tick_period(),
    );

    // Create HTTP router with all endpoints
    let app = create_router(state.clone());

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start, /pause, /stop       - Control the timer");
    info!("  PUT  /running                    - Play/pause toggle");
    info!("  POST /{{work,rest,sets}}/increase - Step a setting up");
    info!("  POST /{{work,rest,sets}}/decrease - Step a setting down");
    info!("  PUT  /work, /rest, /sets         - Enter a setting as text");
    info!("  GET  /status                     - Current timer state");
    info!("  GET  /events                     - Property change stream");
    info!("  GET  /health                     - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = state.stop() {
        tracing::warn!("Failed to stop timer on shutdown: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
