//! Function API server entry point.

use function_api::api::{ApiFacade, create_router};
use function_api::infrastructure::{self, AppConfig};
use function_api::library;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting Function API server");

    let config = load_config();

    let registry = library::registry()?;
    tracing::info!(functions = registry.len(), "Function registry loaded");

    let router = create_router(ApiFacade::new(registry));

    infrastructure::run(&config, router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("function_api=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn load_config() -> AppConfig {
    match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: host={}, port={}",
                config.app_host,
                config.app_port
            );
            config
        }
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    }
}
