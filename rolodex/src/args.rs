use std::path::PathBuf;

use clap::Parser;

/// Rolodex contact management API
#[derive(Debug, Parser)]
#[command(name = "rolodex", about = "HTTP API for contacts and users")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "rolodex.toml", env = "ROLODEX_CONFIG")]
    pub config: PathBuf,

    /// Override the listen port
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Override the deployment environment label
    #[arg(long, env = "APP_ENV")]
    pub environment: Option<String>,
}
