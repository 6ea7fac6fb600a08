use clap::Parser;
use csv_data_service::config::Config;
use csv_data_service::ingestion::{LoadOptions, load_table_state};
use csv_data_service::query::QueryService;
use csv_data_service::{logging, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    logging::register_logger();
    let config = Config::parse();

    // The table is fully loaded before the listener is bound.
    let state = load_table_state(&config.data_dir, &LoadOptions::default());
    let service = QueryService::new(state);

    let (addr, server) = server::serve(config.addr, service)
        .await
        .map_err(|err| format!("failed to bind {}: {err}", config.addr))?;
    tracing::info!(%addr, "serving");

    server.await?;
    Ok(())
}
