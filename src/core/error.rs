//! Error types for server startup.

use thiserror::Error;

/// Invalid environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("leptos configuration error: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts_into_server_error() {
        let err: ServerError = ConfigError::InvalidValue {
            key: "COMPRESSION",
            value: "sometimes".to_string(),
            expected: "a boolean",
        }
        .into();

        let message = err.to_string();
        assert!(message.starts_with("configuration error:"));
        assert!(message.contains("\"sometimes\""));
    }

    #[test]
    fn test_bind_error_names_address() {
        let err = ServerError::Bind {
            addr: "127.0.0.1:3000".parse().unwrap(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert!(err.to_string().contains("127.0.0.1:3000"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
