use gz_dropzone::config::ServerConfig;
use gz_dropzone::{logging, server};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    logging::init("gz_dropzone=debug,tower_http=debug");

    let config = ServerConfig::from_env()?;
    server::serve(config).await?;
    Ok(())
}
