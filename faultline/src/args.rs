use std::path::PathBuf;

use clap::Parser;

/// faultline error-dispatch service
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "HTTP service with a typed error-dispatch layer")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "faultline.toml", env = "FAULTLINE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "FAULTLINE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
