use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use farmos_mcp::server::McpHttpConfig;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_SSE_RETRY_SECS: u64 = 3;

#[derive(Parser, Debug)]
#[command(name = "farmos-mcpd", version, about = "Farm OS MCP daemon.")]
struct CliArgs {
    #[arg(
        long = "stdio",
        env = "FARMOS_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "FARMOS_HTTP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    http_serve: bool,

    #[arg(long, env = "FARMOS_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "FARMOS_HTTP_STATEFUL",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    http_stateful: bool,

    /// Zero disables SSE keep-alive pings.
    #[arg(
        long,
        env = "FARMOS_SSE_KEEP_ALIVE_SECS",
        default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS
    )]
    sse_keep_alive_secs: u64,

    /// Zero disables the SSE retry hint.
    #[arg(
        long,
        env = "FARMOS_SSE_RETRY_SECS",
        default_value_t = DEFAULT_SSE_RETRY_SECS
    )]
    sse_retry_secs: u64,

    /// Path to a JSON dataset document; the built-in reference dataset is
    /// served when omitted.
    #[arg(long, env = "FARMOS_DATASET")]
    dataset: Option<PathBuf>,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct FarmOsConfig {
    pub enable_stdio: bool,
    pub http_serve: bool,
    pub http: McpHttpConfig,
    pub dataset: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    NoTransport,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransport => {
                write!(f, "every transport is disabled; enable --stdio or --http-serve")
            }
        }
    }
}

impl Error for ConfigError {}

impl FarmOsConfig {
    /// Parses configuration from the process arguments and environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the parsed settings are unserveable.
    pub fn from_args() -> Result<Self, ConfigError> {
        Self::try_from(CliArgs::parse())
    }
}

impl TryFrom<CliArgs> for FarmOsConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.enable_stdio && !args.http_serve {
            return Err(ConfigError::NoTransport);
        }

        let secs_or_off = |secs: u64| (secs > 0).then_some(Duration::from_secs(secs));
        let http = McpHttpConfig {
            addr: args.mcp_http_addr,
            stateful_mode: args.http_stateful,
            sse_keep_alive: secs_or_off(args.sse_keep_alive_secs),
            sse_retry: secs_or_off(args.sse_retry_secs),
        };

        Ok(Self {
            enable_stdio: args.enable_stdio,
            http_serve: args.http_serve,
            http,
            dataset: args.dataset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            enable_stdio: true,
            http_serve: false,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            http_stateful: true,
            sse_keep_alive_secs: DEFAULT_SSE_KEEP_ALIVE_SECS,
            sse_retry_secs: DEFAULT_SSE_RETRY_SECS,
            dataset: None,
        }
    }

    #[test]
    fn rejects_config_with_every_transport_disabled() {
        let mut args = base_args();
        args.enable_stdio = false;
        args.http_serve = false;

        let err = FarmOsConfig::try_from(args).expect_err("config should be rejected");
        assert!(matches!(err, ConfigError::NoTransport));
    }

    #[test]
    fn zero_sse_seconds_disable_the_timers() {
        let mut args = base_args();
        args.http_serve = true;
        args.sse_keep_alive_secs = 0;
        args.sse_retry_secs = 0;

        let config = FarmOsConfig::try_from(args).expect("config should parse");
        assert!(config.http.sse_keep_alive.is_none());
        assert!(config.http.sse_retry.is_none());
    }
}
