use clap::Parser;
use tour_agency::config::ServerConfig;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();
    if let Err(e) = tour_agency::run(config).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
