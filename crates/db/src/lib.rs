use std::{io::ErrorKind, path::Path, sync::Arc};

use async_trait::async_trait;
use eventboard_shared::{
    event::{Event, EventId},
    user::{User, UserId},
};

mod collection;

pub use collection::{Collection, Record};

/// Fields a caller supplies when creating an event.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub creator_id: UserId,
}

/// Persistence for the two collections.
///
/// Every mutating call is atomic with respect to other calls on the same
/// collection, including the write to disk.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(&self, username: String, password: String) -> User;

    /// All users in registration order.
    async fn users(&self) -> Vec<User>;

    async fn find_user(&self, id: UserId) -> Option<User>;

    async fn create_event(&self, input: NewEvent) -> Event;

    /// All events in creation order.
    async fn events(&self) -> Vec<Event>;

    async fn find_event(&self, id: EventId) -> Option<Event>;

    /// Appends `user_id` to the event's participants, duplicates included.
    async fn add_participant(&self, event_id: EventId, user_id: UserId) -> Option<Event>;
}

#[derive(Clone)]
pub struct JsonStore {
    users: Arc<Collection<User>>,
    events: Arc<Collection<Event>>,
}

impl JsonStore {
    pub async fn open(users_path: impl AsRef<Path>, events_path: impl AsRef<Path>) -> Self {
        let users = Collection::open(users_path.as_ref()).await;
        let events = Collection::open(events_path.as_ref()).await;

        Self {
            users: Arc::new(users),
            events: Arc::new(events),
        }
    }

    /// Deletes both data files. Files that do not exist are skipped.
    pub async fn destroy(
        users_path: impl AsRef<Path>,
        events_path: impl AsRef<Path>,
    ) -> anyhow::Result<()> {
        for path in [users_path.as_ref(), events_path.as_ref()] {
            match tokio::fs::remove_file(path).await {
                Ok(()) => tracing::info!(path = %path.display(), "data file removed"),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::info!(path = %path.display(), "data file does not exist, skipping")
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Store for JsonStore {
    async fn create_user(&self, username: String, password: String) -> User {
        self.users
            .insert(|id| User {
                id,
                username,
                password,
            })
            .await
    }

    async fn users(&self) -> Vec<User> {
        self.users.all().await
    }

    async fn find_user(&self, id: UserId) -> Option<User> {
        self.users.find(id).await
    }

    async fn create_event(&self, input: NewEvent) -> Event {
        self.events
            .insert(|id| Event {
                id,
                title: input.title,
                description: input.description,
                date: input.date,
                location: input.location,
                creator_id: input.creator_id,
                participants: vec![],
            })
            .await
    }

    async fn events(&self) -> Vec<Event> {
        self.events.all().await
    }

    async fn find_event(&self, id: EventId) -> Option<Event> {
        self.events.find(id).await
    }

    async fn add_participant(&self, event_id: EventId, user_id: UserId) -> Option<Event> {
        self.events
            .update(event_id, |event| event.participants.push(user_id))
            .await
    }
}
