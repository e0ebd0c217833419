use std::time::Duration;

use eventboard_db::Store;
use eventboard_shared::user::{User, UserId};

use crate::session::Sessions;

mod login;
mod register;

pub use login::LoginInput;
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command<S: Store> {
    store: S,
    sessions: Sessions,
}

impl<S: Store> Command<S> {
    /// Sessions opened by `login` stay valid for `session_ttl`.
    pub fn new(store: S, session_ttl: Duration) -> Self {
        Self {
            store,
            sessions: Sessions::new(session_ttl),
        }
    }

    pub async fn load(&self, id: UserId) -> Option<User> {
        self.store.find_user(id).await
    }

    pub fn sessions(&self) -> &Sessions {
        &self.sessions
    }
}
