use cafezinho_api::{infrastructure::logger::Logger, server, ServerConfig};
use tracing::Level;

#[tokio::main(flavor = "current_thread")]
async fn main() -> cafezinho_api::Result<()> {
    Logger::init(Level::INFO);
    server::run(&ServerConfig::default()).await
}
