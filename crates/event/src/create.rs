use eventboard_db::{NewEvent, Store};
use eventboard_shared::{event::Event, user::UserId};
use serde::Deserialize;

/// Client supplied event fields. `date` is free text; ids, creator and
/// participants sent by the client are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateEventInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

impl<S: Store> super::Command<S> {
    pub async fn create(&self, input: CreateEventInput, creator_id: UserId) -> Event {
        let event = self
            .store
            .create_event(NewEvent {
                title: input.title,
                description: input.description,
                date: input.date,
                location: input.location,
                creator_id,
            })
            .await;

        tracing::info!(event.id = event.id, event.creator = creator_id, "event created");

        event
    }
}
