//! File-based secrets example

use envlookup::{read_secret_from_file, Env};
use std::io::Write;
use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Save API key to file, as a mounted secret would be
    let mut api_key_file = NamedTempFile::new()?;
    write!(api_key_file, "super_secret_api_key_12345")?;

    // Numeric secret, also from a file
    let mut node_key_file = NamedTempFile::new()?;
    write!(node_key_file, "157816845615315818")?;

    // Set environment variables (with _FILE suffix)
    std::env::set_var("API_KEY_FILE", api_key_file.path());
    std::env::set_var("NODE_KEY_FILE", node_key_file.path());
    // Regular environment variable
    std::env::set_var("DATABASE_HOST", "localhost");

    let env = Env::system();
    let api_key = env.get_secret_required("API_KEY")?;
    let node_key = env.get_secret_u64_required("NODE_KEY")?;
    let database_host = env.get_required("DATABASE_HOST")?;

    println!("Configuration loaded from files:");
    println!("  API Key: {} bytes", api_key.len());
    println!("  Node Key: {node_key}");
    println!("  Database Host: {database_host}");

    // Reading a secret file directly, without an env var
    let direct = read_secret_from_file(api_key_file.path())?;
    assert_eq!(direct, api_key);

    Ok(())
}
