pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod observability;
pub mod routes;
pub mod template;

pub use self::config::Config;
pub use routes::AppState;

/// Create app router for testing
///
/// Opens the data files from `config.storage` and returns the router without
/// binding a listener.
pub async fn create_app(config: Config) -> axum::Router {
    routes::router(AppState::new(config).await)
}
