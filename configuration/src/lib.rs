use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use serde::Deserialize;

pub const DEFAULT_IP_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 2053;
pub const ENV_PREFIX: &str = "DNS_SERVER";

/// Layers, lowest priority first: built-in defaults, the TOML file (may be
/// missing), then `DNS_SERVER__<SECTION>__<KEY>` environment variables.
pub fn get_config<'de, T: Deserialize<'de>>(config_path: PathBuf) -> Result<T, config::ConfigError> {
    get_config_with_env_prefix(config_path, ENV_PREFIX)
}

fn get_config_with_env_prefix<'de, T: Deserialize<'de>>(
    config_path: PathBuf,
    env_prefix: &str,
) -> Result<T, config::ConfigError> {
    let f = config::File::from(config_path)
        .format(config::FileFormat::Toml)
        .required(false);
    let config = config::Config::builder()
        .set_default("server.ip_address", DEFAULT_IP_ADDRESS)?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .add_source(f)
        .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
        .build()?;
    config.try_deserialize::<T>()
}

#[derive(Debug, Deserialize)]
pub struct DnsServerConfiguration {
    pub server: ServerConfiguration,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfiguration {
    ip_address: IpAddr,
    port: u16,
}

impl ServerConfiguration {
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.ip_address, self.port)
    }
}
