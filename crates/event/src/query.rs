use eventboard_db::Store;
use eventboard_shared::event::{Event, EventId};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    /// Empty when the creator is not a known user.
    pub creator_username: String,
}

impl<S: Store> super::Command<S> {
    pub async fn list(&self) -> Vec<Event> {
        self.store.events().await
    }

    pub async fn details(&self, id: EventId) -> eventboard_shared::Result<EventDetails> {
        let Some(event) = self.store.find_event(id).await else {
            eventboard_shared::not_found!("event not found");
        };

        let creator_username = self
            .store
            .find_user(event.creator_id)
            .await
            .map(|user| user.username)
            .unwrap_or_default();

        Ok(EventDetails {
            event,
            creator_username,
        })
    }

    /// Usernames of the participants in join order. Ids without a matching
    /// user are skipped.
    pub async fn participants(&self, id: EventId) -> eventboard_shared::Result<Vec<String>> {
        let Some(event) = self.store.find_event(id).await else {
            eventboard_shared::not_found!("event not found");
        };

        let users = self.store.users().await;

        Ok(event
            .participants
            .iter()
            .filter_map(|id| users.iter().find(|user| user.id == *id))
            .map(|user| user.username.to_owned())
            .collect())
    }
}
