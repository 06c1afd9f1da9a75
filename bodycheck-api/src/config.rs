use std::env;

use dotenv::dotenv;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid port \"{0}\"")]
    InvalidPort(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `BODYCHECK_HOST` and `BODYCHECK_PORT`, after loading `.env`
    /// if one is present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv().ok();
        Self::from_vars(
            env::var("BODYCHECK_HOST").ok(),
            env::var("BODYCHECK_PORT").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, Error> {
        let port = match port {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| Error::InvalidPort(port.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
        })
    }
}
