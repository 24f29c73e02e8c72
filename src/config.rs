//! # Configuration
//!
//! Server settings read from environment variables. `main` loads a `.env`
//! file (if present) through `dotenvy` before calling [`Config::from_env`].
//!
//! ## Environment Variables
//!
//! - `APP_HOST` - Address to bind, defaults to `0.0.0.0`
//! - `APP_PORT` - Port to bind, defaults to `8080`
//! - `APP_ENV` - `production` enables JSON logs, anything else is development

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for `{name}`")]
    Invalid { name: &'static str, value: String },
}

/// Deployment environment, selected by `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            AppEnv::Production
        } else {
            AppEnv::Development
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub app_env: AppEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            app_env: AppEnv::Development,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Unset variables fall back to their defaults; set but unparsable ones
    /// are reported as [`ConfigError::Invalid`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();

        let host: IpAddr = match lookup("APP_HOST") {
            Some(value) => parse_var("APP_HOST", value)?,
            None => defaults.host,
        };

        let port: u16 = match lookup("APP_PORT") {
            Some(value) => parse_var("APP_PORT", value)?,
            None => defaults.port,
        };

        let app_env = lookup("APP_ENV")
            .map(|value| AppEnv::parse(&value))
            .unwrap_or(defaults.app_env);

        Ok(Self {
            host,
            port,
            app_env,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::Invalid { name, value }),
    }
}
