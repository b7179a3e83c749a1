#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use workload_chart::config::{self, AppConfig};
    use workload_chart::{PlanningSnapshot, http_api, load_snapshot_from_json};

    let config = AppConfig::from_env()?;
    config::init_tracing(&config.log_filter);

    let snapshot = match &config.snapshot_path {
        Some(path) => load_snapshot_from_json(path)?,
        None => PlanningSnapshot::new(),
    };

    http_api::serve(config.http_addr, snapshot).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
