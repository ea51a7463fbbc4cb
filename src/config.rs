use std::env;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;

pub const ADDR_VAR: &str = "LOCALCV_ADDR";
pub const MAX_WORKERS_VAR: &str = "LOCALCV_MAX_WORKERS";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug)]
pub enum ConfigError {
    InvalidAddr(String),
    InvalidWorkers(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAddr(v) => write!(f, "{ADDR_VAR} is not a socket address: {v}"),
            ConfigError::InvalidWorkers(v) => {
                write!(f, "{MAX_WORKERS_VAR} must be a positive integer: {v}")
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr: SocketAddr = match lookup(ADDR_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(raw.clone()))?,
            None => DEFAULT_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(DEFAULT_ADDR.to_string()))?,
        };

        let max_workers = match lookup(MAX_WORKERS_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(raw)),
            },
            None => DEFAULT_MAX_WORKERS,
        };

        Ok(Self { addr, max_workers })
    }
}
