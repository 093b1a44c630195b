//! Server configuration from CLI flags and environment.

use clap::Parser;
use std::path::PathBuf;

const DB_FILE_NAME: &str = "db_tours.sqlite";

#[derive(Debug, Clone, Parser)]
#[command(name = "tour-agency", version, about = "Tour Agency catalog server")]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(long, env = "TOUR_AGENCY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "TOUR_AGENCY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// SQLite database file (default: <data dir>/tour-agency/db_tours.sqlite)
    #[arg(long, env = "TOUR_AGENCY_DATABASE")]
    pub database: Option<PathBuf>,

    /// Directory served under /static
    #[arg(long, env = "TOUR_AGENCY_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            database: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| app_data_dir().join(DB_FILE_NAME))
    }
}

fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("tour-agency")
}
