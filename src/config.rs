use anyhow::Context;
use std::env;

const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let mongodb_uri =
            env::var("MONGODB_URI").context("MONGODB_URI is not set in the environment")?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { mongodb_uri, port })
    }
}
