use tokio::net::TcpListener;
use todo_server::{logging::init_logging, ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    init_logging(&config);

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, seed = config.seed, "listening");
    todo_server::serve(listener, &config).await?;
    tracing::info!("server stopped");
    Ok(())
}
