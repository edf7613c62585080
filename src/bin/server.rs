use std::sync::Arc;

use anyhow::Context;
use bookstore::{
    cli_args::{CliArgs, Environment},
    repository::{BookRepository, InMemoryBookRepository, PostgresBookRepository},
    server::{Server, ServerConfig},
};
use clap::Parser;

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=trace,bookstore=trace,tower_http=trace");
    }

    init_tracing()?;

    tracing::info!("Starting ...");

    let args = CliArgs::parse();

    let repository: Arc<dyn BookRepository> = match args.environment {
        Environment::Test => {
            tracing::info!("Using the in-memory test database");

            Arc::new(InMemoryBookRepository::new())
        }
        Environment::Production => {
            let database_url = args
                .database_url
                .context("DATABASE_URL is required outside the test environment")?;

            Arc::new(
                PostgresBookRepository::connect(&database_url)
                    .await
                    .context("Failed to connect to the database")?,
            )
        }
    };

    let server_config = ServerConfig::new(args.listen_address, args.error_verbosity);
    let server = Server::new(server_config, repository);

    server.run().await?;

    Ok(())
}
