use std::env;
use std::io::{Error, ErrorKind};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// # Server Configuration
///
/// Bind address for the HTTP server, resolved from environment variables.
///
/// ## Environment Variables
/// - `HOST`: Interface to bind to (default `127.0.0.1`)
/// - `PORT`: TCP port to listen on (default `8080`)
///
/// A `PORT` value that does not parse as a valid port number is a startup
/// error; it is never silently replaced with the default.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> std::io::Result<Self> {
        Self::build(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn build(host: Option<String>, port: Option<String>) -> std::io::Result<Self> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                Error::new(
                    ErrorKind::InvalidInput,
                    format!("invalid PORT value {:?}: {}", raw, e),
                )
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::build(None, None).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_explicit_host_and_port() {
        let config =
            ServerConfig::build(Some("0.0.0.0".to_string()), Some("9090".to_string())).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = ServerConfig::build(None, Some("not-a-port".to_string())).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_out_of_range_port_is_an_error() {
        let err = ServerConfig::build(None, Some("70000".to_string())).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
