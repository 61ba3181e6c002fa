use std::net::SocketAddr;
use std::path::PathBuf;
use argh::FromArgs;

fn default_config_path () -> PathBuf {
    PathBuf::from("./dns_server_config.toml")
}

#[derive(Debug, FromArgs)]
#[argh(description = "answers DNS queries over UDP with a header-only response")]
pub struct CliArgs {
    #[argh(
        option,
        description = "config file path, default: './dns_server_config.toml'",
        default = "default_config_path()"
    )]
    pub config: PathBuf,

    #[argh(
        option,
        description = "address to listen on, overrides the config file, e.g. 127.0.0.1:2053"
    )]
    pub bind: Option<SocketAddr>,
}
