pub mod cli_args;
pub mod error;
mod extractor;
mod middleware;
pub mod repository;
mod route;
mod schema;
pub mod server;
pub mod state;
mod traits;
