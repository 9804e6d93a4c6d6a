use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use wormhole_telemetry::Environment;

pub const LISTEN_ADDR_ENV: &str = "WORMHOLE_GATEWAY_LISTEN_ADDR";
pub const ENV_ENV: &str = "WORMHOLE_GATEWAY_ENV";
pub const STORAGE_BACKEND_ENV: &str = "WORMHOLE_GATEWAY_STORAGE_BACKEND";
pub const SQLITE_PATH_ENV: &str = "WORMHOLE_GATEWAY_SQLITE_PATH";
pub const ALIAS_LENGTH_ENV: &str = "WORMHOLE_GATEWAY_ALIAS_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "WORMHOLE_GATEWAY_MAX_ATTEMPTS";
pub const AUTH_USER_ENV: &str = "WORMHOLE_GATEWAY_AUTH_USER";
pub const AUTH_PASSWORD_ENV: &str = "WORMHOLE_GATEWAY_AUTH_PASSWORD";
pub const REQUEST_TIMEOUT_ENV: &str = "WORMHOLE_GATEWAY_REQUEST_TIMEOUT_SECS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8082";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvArg {
    #[value(name = "local")]
    Local,
    #[value(name = "dev")]
    Dev,
    #[value(name = "prod")]
    Prod,
}

impl From<EnvArg> for Environment {
    fn from(value: EnvArg) -> Self {
        match value {
            EnvArg::Local => Environment::Local,
            EnvArg::Dev => Environment::Dev,
            EnvArg::Prod => Environment::Prod,
        }
    }
}

impl Display for EnvArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvArg::Local => write!(f, "local"),
            EnvArg::Dev => write!(f, "dev"),
            EnvArg::Prod => write!(f, "prod"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "sqlite")]
    Sqlite,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "wormhole-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(long, env = ENV_ENV, value_enum, default_value_t = EnvArg::Local)]
    pub env: EnvArg,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = SQLITE_PATH_ENV, required_if_eq("storage", "sqlite"))]
    pub sqlite_path: Option<String>,

    #[arg(
        long,
        env = ALIAS_LENGTH_ENV,
        default_value_t = wormhole_generator::DEFAULT_ALIAS_LENGTH as u16,
        value_parser = clap::value_parser!(u16).range(1..=32),
    )]
    pub alias_length: u16,

    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = wormhole_shortener::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub max_attempts: u32,

    #[arg(long, env = AUTH_USER_ENV, requires = "auth_password")]
    pub auth_user: Option<String>,

    #[arg(long, env = AUTH_PASSWORD_ENV, requires = "auth_user", hide_env_values = true)]
    pub auth_password: Option<String>,

    #[arg(long, env = REQUEST_TIMEOUT_ENV, default_value_t = 4)]
    pub request_timeout_secs: u64,
}
