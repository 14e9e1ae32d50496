use room_service::{Config, Server, ServerState, init_logger, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env)
    setup_environment();

    // 2. Configuration, then logging from it
    let config = Config::from_env()?;
    init_logger(config.log_filter.as_deref(), config.log_dir.as_deref());

    tracing::info!(environment = %config.environment, "Room service starting...");

    // 3. Server state (pool, migrations, seed data)
    let state = ServerState::initialize(&config).await?;

    // 4. HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
