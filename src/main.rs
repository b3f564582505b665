use link_api::config;
use link_api::infrastructure::logging::init_logging;
use link_api::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_logging(&config.log_level, config.log_format())?;
    config.print_summary();

    server::run(config).await
}
