//! Service Configuration
//!
//! Values come from command-line flags, each with an environment-variable
//! fallback. `ServiceConfig` is the plain struct the rest of the crate consumes.

use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

pub const DEFAULT_BIND: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 8000));
pub const DEFAULT_DATA_PATH: &str = "data/base_docs.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "bo7_knowledge", about = "BO7 Knowledge API", version)]
pub struct CliArgs {
    /// Address the HTTP server listens on
    #[arg(long, env = "BO7_BIND", default_value_t = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// JSON file holding the document corpus
    #[arg(long, env = "BO7_DATA_PATH", default_value = DEFAULT_DATA_PATH)]
    pub data_path: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "BO7_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub log_level: String,
}

impl From<CliArgs> for ServiceConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            bind_addr: args.bind,
            data_path: args.data_path,
            log_level: args.log_level,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let args = CliArgs::try_parse_from(["bo7_knowledge"]).unwrap();

        assert_eq!(ServiceConfig::from(args), ServiceConfig::default());
    }

    #[test]
    fn test_default_bind_is_loopback_8000() {
        assert_eq!(ServiceConfig::default().bind_addr.to_string(), "127.0.0.1:8000");
        assert_eq!(
            CliArgs::try_parse_from(["bo7_knowledge"]).unwrap().bind,
            DEFAULT_BIND
        );
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "bo7_knowledge",
            "--bind",
            "0.0.0.0:9000",
            "--data-path",
            "/srv/docs.json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = ServiceConfig::from(args);

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.data_path, PathBuf::from("/srv/docs.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        let result = CliArgs::try_parse_from(["bo7_knowledge", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }
}
