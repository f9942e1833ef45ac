use serde::Deserialize;
use url::Url;

use estimo_core::error::{EstimoError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        self.server.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
            path: default_path(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scheme != "ws" && self.scheme != "wss" {
            return Err(EstimoError::Config(
                "server.scheme must be ws or wss".into(),
            ));
        }
        if self.host.is_empty() {
            return Err(EstimoError::Config("server.host must not be empty".into()));
        }
        if !self.path.starts_with('/') {
            return Err(EstimoError::Config(
                "server.path must start with '/'".into(),
            ));
        }
        Ok(())
    }

    /// Base WebSocket endpoint (query parameters are appended during
    /// the handshake).
    pub fn endpoint(&self) -> Result<Url> {
        Url::parse(&format!("{}://{}{}", self.scheme, self.host, self.path))
            .map_err(|e| EstimoError::Config(format!("invalid server endpoint: {e}")))
    }
}

fn default_scheme() -> String {
    "ws".into()
}
fn default_host() -> String {
    "localhost:8080".into()
}
fn default_path() -> String {
    "/ws".into()
}
