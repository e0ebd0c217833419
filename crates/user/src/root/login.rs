use eventboard_db::Store;
use eventboard_shared::user::{User, UserId};
use serde::Deserialize;

use crate::password::verify_password;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

impl<S: Store> super::Command<S> {
    /// Checks credentials against users in registration order and opens a
    /// session for the first match. Returns the user and its access id.
    pub async fn login(&self, input: LoginInput) -> eventboard_shared::Result<(User, String)> {
        let users = self.store.users().await;

        let Some(user) = users
            .into_iter()
            .filter(|user| user.username == input.username)
            .find(|user| match verify_password(&input.password, &user.password) {
                Ok(valid) => valid,
                Err(e) => {
                    tracing::warn!(user.id = user.id, "stored password is not a valid hash: {e}");
                    false
                }
            })
        else {
            eventboard_shared::unauthorized!("invalid credentials");
        };

        let access_id = self.sessions.open(user.id).await;

        tracing::info!(user.id = user.id, "user logged in");

        Ok((user, access_id))
    }

    /// Closes one session. Other sessions of the same user stay open.
    pub async fn logout(&self, access_id: &str) -> Option<UserId> {
        let user_id = self.sessions.close(access_id).await;

        if let Some(user_id) = user_id {
            tracing::info!(user.id = user_id, "user logged out");
        }

        user_id
    }

    /// Resolves an access id to the user it was opened for.
    pub async fn authenticate(&self, access_id: &str) -> Option<UserId> {
        self.sessions.get(access_id).await
    }
}
