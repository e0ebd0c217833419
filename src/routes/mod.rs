use axum::{
    Router,
    routing::{get, post},
};
use eventboard_db::JsonStore;

mod account;
mod events;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user_command: eventboard_user::Command<JsonStore>,
    pub event_command: eventboard_event::Command<JsonStore>,
}

impl AppState {
    /// Opens the data files named in `config.storage` and wires both commands
    /// to the same store.
    pub async fn new(config: crate::config::Config) -> Self {
        let store = JsonStore::open(&config.storage.users_path, &config.storage.events_path).await;

        Self {
            user_command: eventboard_user::Command::new(store.clone(), config.session.ttl()),
            event_command: eventboard_event::Command::new(store),
            config,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/register", post(account::register))
        .route("/login", post(account::login))
        .route("/logout", post(account::logout))
        .route("/events", get(events::list))
        .route("/events/create", post(events::create))
        .route("/events/details", get(events::details))
        .route("/events/join", post(events::join))
        .route("/events/participants", get(events::participants))
        .with_state(app_state)
}
