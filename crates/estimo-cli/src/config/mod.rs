//! Client config loader (strict parsing).
//!
//! A missing config file is fine (defaults point at a local server);
//! a config file that exists but does not parse or validate is a
//! startup error.

pub mod schema;

use std::fs;
use std::io;

use estimo_core::error::{EstimoError, Result};

pub use schema::{ClientConfig, ServerConfig};

pub fn load_or_default(path: &str) -> Result<ClientConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ClientConfig::default()),
        Err(e) => Err(EstimoError::Config(format!("read {path} failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ClientConfig> {
    let cfg: ClientConfig = serde_yaml::from_str(s)
        .map_err(|e| EstimoError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
