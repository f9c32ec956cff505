use pos_server::{Config, Server, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; env vars win either way
    let _ = dotenv::dotenv();

    init_logger();

    let config = Config::from_env();
    tracing::info!(
        port = config.http_port,
        db = %config.database_path,
        tz = %config.timezone,
        "POS server starting"
    );

    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
