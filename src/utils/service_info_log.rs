//! This module contains the function to log service information at startup.
use log::info;
use std::env;

use crate::config::ServerConfig;

/// Logs service information at startup
pub fn log_service_info(config: &ServerConfig) {
    let service_name = env!("CARGO_PKG_NAME");
    let service_version = env!("CARGO_PKG_VERSION");

    info!("=== Cats API Service Starting ===");
    info!("🚀 Service: {} v{}", service_name, service_version);

    info!("💻 Platform: {}", env::consts::OS);
    info!("💻 Architecture: {}", env::consts::ARCH);

    if let Ok(cwd) = env::current_dir() {
        info!("📁 Working Directory: {}", cwd.display());
    }

    info!("🗄️ Cat store: {}", config.repository_storage_type);
    info!(
        "🔐 Authentication: {}",
        if config.api_key.is_some() {
            "bearer API key"
        } else {
            "disabled"
        }
    );
    info!(
        "🚦 Rate limit: {} req/s, burst {}",
        config.rate_limit_requests_per_second, config.rate_limit_burst_size
    );

    info!(
        "🕒 Started at: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
}
