pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod resume;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::AppState;
