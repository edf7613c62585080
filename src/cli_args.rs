use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

use crate::error::ErrorVerbosity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    /// Runs against the Postgres database from `DATABASE_URL`.
    Production,
    /// Runs against the in-memory test database.
    Test,
}

#[derive(Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Address to listen on.
    #[clap(long, env = "LISTEN_ADDRESS", default_value = "127.0.0.1:5000")]
    pub listen_address: SocketAddr,

    /// Postgres connection string. Required outside the test environment.
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Selects the test or runtime database.
    #[clap(long, env = "APP_ENV", value_enum, default_value = "production")]
    pub environment: Environment,

    /// Error response verbosity.
    #[clap(long, env = "ERROR_VERBOSITY", value_enum, default_value = "full")]
    pub error_verbosity: ErrorVerbosity,
}
