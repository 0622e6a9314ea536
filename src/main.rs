use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use mergington::{build_router, logger, ActivityDirectory, AppState, ConfigError, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    // 1. Logging
    logger::init_logger();

    // 2. Config + seed
    let config = ServerConfig::from_env()?;
    let seed = config.load_seed()?;
    match &config.seed_file {
        Some(path) => info!("Loaded {} activities from {}", seed.len(), path.display()),
        None => info!("Loaded {} built-in activities", seed.len()),
    }

    // 3. Router
    let state = AppState::new(ActivityDirectory::new(seed));
    let app = build_router(state, &config.static_dir);

    // 4. Serve (with fallback port)
    let listener = bind(&config).await?;
    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);
    info!("Open http://{}/ to browse activities", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn bind(config: &ServerConfig) -> Result<TcpListener, ConfigError> {
    let addr = socket_addr(&config.host, config.port)?;
    match TcpListener::bind(addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let Some(fallback_port) = config.port.checked_add(1) else {
                return Err(ConfigError::Bind {
                    addr: addr.to_string(),
                    source: e,
                });
            };
            let fallback = socket_addr(&config.host, fallback_port)?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback)
                .await
                .map_err(|source| ConfigError::Bind {
                    addr: fallback.to_string(),
                    source,
                })
        }
    }
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let raw = format!("{}:{}", host, port);
    raw.parse().map_err(|_| ConfigError::InvalidVar {
        key: "HOST",
        value: raw,
    })
}
