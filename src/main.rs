use tracing_subscriber::EnvFilter;

use clinicd::api::types::ApiContext;
use clinicd::{api, config, store::ClinicStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let store = if config::seed_demo_data() {
        tracing::info!("Loading demo seed data");
        ClinicStore::seeded()
    } else {
        ClinicStore::new()
    };

    if let Err(err) = api::server::run(config::bind_addr(), ApiContext::new(store)).await {
        tracing::error!(error = %err, "Server failed");
        std::process::exit(1);
    }
}
