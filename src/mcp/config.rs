//! Environment-based configuration for the leave MCP server.
//!
//! Values are read once, after `.env` has been loaded, and validated together
//! by [`Settings::load`] so a bad value stops the server before it binds.

use std::{env, fmt, net::SocketAddr, str::FromStr, sync::LazyLock};

use anyhow::{Result, anyhow};

use crate::mcp::error::LeaveError;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_MCP_PATH: &str = "/mcp";

pub static LEAVE_MCP_TRANSPORT: LazyLock<Result<Transport>> = LazyLock::new(|| {
    env_or("LEAVE_MCP_TRANSPORT", "http")
        .parse()
        .map_err(|e| anyhow!("LEAVE_MCP_TRANSPORT: {e}"))
});

pub static LEAVE_MCP_BIND_ADDRESS: LazyLock<Result<SocketAddr>> = LazyLock::new(|| {
    env_or("LEAVE_MCP_BIND_ADDRESS", DEFAULT_BIND_ADDRESS)
        .parse()
        .map_err(|e| anyhow!("LEAVE_MCP_BIND_ADDRESS must be a socket address: {e}"))
});

pub static LEAVE_MCP_PATH: LazyLock<Result<String>> =
    LazyLock::new(|| parse_mcp_path(&env_or("LEAVE_MCP_PATH", DEFAULT_MCP_PATH)));

pub static LEAVE_MCP_LOG_FORMAT: LazyLock<Result<LogFormat>> = LazyLock::new(|| {
    env_or("LEAVE_MCP_LOG_FORMAT", "pretty")
        .parse()
        .map_err(|e| anyhow!("LEAVE_MCP_LOG_FORMAT: {e}"))
});

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_mcp_path(path: &str) -> Result<String> {
    let route = path.trim().trim_end_matches('/');
    if !route.starts_with('/') {
        return Err(anyhow!(
            "LEAVE_MCP_PATH must start with '/' and name a route, got '{path}'"
        ));
    }
    Ok(route.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Streamable HTTP, served by axum.
    Http,
    /// JSON-RPC over stdin/stdout.
    Stdio,
}

impl FromStr for Transport {
    type Err = LeaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "stdio" => Ok(Self::Stdio),
            other => Err(LeaveError::InvalidConfig(format!(
                "unknown transport '{other}', expected 'http' or 'stdio'"
            ))),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Http => "http",
            Self::Stdio => "stdio",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = LeaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(LeaveError::InvalidConfig(format!(
                "unknown log format '{other}', expected 'pretty' or 'json'"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub transport: Transport,
    pub bind_address: SocketAddr,
    pub mcp_path: String,
    pub log_format: LogFormat,
}

impl Settings {
    /// Evaluates every configuration value.
    ///
    /// # Errors
    /// Returns `LeaveError::InvalidConfig` naming the first value that could
    /// not be parsed.
    pub fn load() -> Result<Self, LeaveError> {
        let invalid = |e: &anyhow::Error| LeaveError::InvalidConfig(e.to_string());

        Ok(Self {
            transport: *LEAVE_MCP_TRANSPORT.as_ref().map_err(invalid)?,
            bind_address: *LEAVE_MCP_BIND_ADDRESS.as_ref().map_err(invalid)?,
            mcp_path: LEAVE_MCP_PATH.as_ref().map_err(invalid)?.clone(),
            log_format: *LEAVE_MCP_LOG_FORMAT.as_ref().map_err(invalid)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_parses_case_insensitively() {
        assert!(matches!("http".parse::<Transport>(), Ok(Transport::Http)));
        assert!(matches!(" STDIO ".parse::<Transport>(), Ok(Transport::Stdio)));
        assert!(matches!(
            "sse".parse::<Transport>(),
            Err(LeaveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn transport_displays_its_config_name() {
        assert_eq!(Transport::Http.to_string(), "http");
        assert_eq!(Transport::Stdio.to_string(), "stdio");
    }

    #[test]
    fn log_format_parses_known_values() {
        assert!(matches!("json".parse::<LogFormat>(), Ok(LogFormat::Json)));
        assert!(matches!("Pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty)));
        assert!(matches!("text".parse::<LogFormat>(), Ok(LogFormat::Pretty)));
        assert!(matches!(
            "xml".parse::<LogFormat>(),
            Err(LeaveError::InvalidConfig(_))
        ));
    }

    #[test]
    fn mcp_path_must_be_a_route() {
        assert_eq!(parse_mcp_path("/mcp").ok().as_deref(), Some("/mcp"));
        assert_eq!(parse_mcp_path("/leave/mcp/").ok().as_deref(), Some("/leave/mcp"));
        assert!(parse_mcp_path("mcp").is_err());
        assert!(parse_mcp_path("/").is_err());
        assert!(parse_mcp_path("").is_err());
    }

    #[test]
    fn default_bind_address_is_valid() {
        assert!(DEFAULT_BIND_ADDRESS.parse::<SocketAddr>().is_ok());
    }
}
