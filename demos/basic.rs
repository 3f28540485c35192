//! Basic usage example

use envlookup::Env;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub max_connections: i32,
    pub debug_mode: bool,
    pub allowed_origins: Vec<String>,
}

impl Config {
    fn load(env: &Env) -> envlookup::Result<Self> {
        Ok(Self {
            // Required: loaded from DATABASE_URL or DATABASE_URL_FILE
            database_url: env.get_required("DATABASE_URL")?,
            server_addr: env.get_or("SERVER_ADDR", "127.0.0.1:8080")?,
            max_connections: env.get_i32_or("MAX_CONNECTIONS", 10)?,
            debug_mode: env.get_bool_or("DEBUG_MODE", false)?,
            allowed_origins: env.get_slice_or("ALLOWED_ORIGINS", vec!["*".to_string()])?,
        })
    }
}

fn main() -> anyhow::Result<()> {
    // RUST_LOG=envlookup=debug shows where each value came from
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");
    std::env::set_var("ALLOWED_ORIGINS", "https://a.example,https://b.example");

    let config = Config::load(&Env::system())?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Allowed Origins: {:?}", config.allowed_origins);

    Ok(())
}
