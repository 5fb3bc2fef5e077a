use std::net::SocketAddr;

use serde::Deserialize;

use crate::health::HealthConfig;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the server binds; defaults to `0.0.0.0:3000` when unset
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub health: HealthConfig,
}
