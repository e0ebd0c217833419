use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use eventboard_shared::user::UserId;
use tokio::sync::RwLock;
use ulid::Ulid;

struct Session {
    user_id: UserId,
    /// Unix seconds.
    expires_at: u64,
}

/// Live logins keyed by access id.
///
/// Each login gets its own access id, so closing one never affects another
/// client, even for the same user. An entry older than `ttl` counts as
/// closed and is dropped on the next `open`.
#[derive(Clone)]
pub struct Sessions {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<String, Session>>>,
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

impl Sessions {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::default(),
        }
    }

    pub async fn open(&self, user_id: UserId) -> String {
        let now = now();
        let access_id = Ulid::new().to_string();
        let mut entries = self.entries.write().await;

        entries.retain(|_, session| session.expires_at > now);
        entries.insert(
            access_id.to_owned(),
            Session {
                user_id,
                expires_at: now.saturating_add(self.ttl.as_secs()),
            },
        );

        access_id
    }

    pub async fn get(&self, access_id: &str) -> Option<UserId> {
        self.entries
            .read()
            .await
            .get(access_id)
            .filter(|session| session.expires_at > now())
            .map(|session| session.user_id)
    }

    pub async fn close(&self, access_id: &str) -> Option<UserId> {
        self.entries
            .write()
            .await
            .remove(access_id)
            .map(|session| session.user_id)
    }

    /// Stored entries, expired ones not yet purged included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let sessions = Sessions::new(Duration::from_secs(60));
        let first = sessions.open(1).await;
        let second = sessions.open(1).await;

        assert_ne!(first, second);
        assert_eq!(sessions.len().await, 2);

        assert_eq!(sessions.close(&first).await, Some(1));
        assert_eq!(sessions.get(&first).await, None);
        assert_eq!(sessions.get(&second).await, Some(1));
        assert_eq!(sessions.close(&first).await, None);
    }

    #[tokio::test]
    async fn test_expired_sessions_are_rejected_and_purged() {
        let sessions = Sessions::new(Duration::ZERO);

        let first = sessions.open(1).await;
        assert_eq!(sessions.get(&first).await, None);

        for _ in 0..50 {
            sessions.open(1).await;
        }

        assert_eq!(sessions.len().await, 1);
    }
}
