use eventboard_db::Store;
use eventboard_shared::user::User;
use serde::Deserialize;

use crate::password::hash_password;

/// Registration payload. Nothing is validated: empty and repeated usernames
/// are accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

impl<S: Store> super::Command<S> {
    pub async fn register(&self, input: RegisterInput) -> eventboard_shared::Result<User> {
        let password_hash = hash_password(&input.password)?;
        let user = self.store.create_user(input.username, password_hash).await;

        tracing::info!(user.id = user.id, user.name = %user.username, "user registered");

        Ok(user)
    }
}
