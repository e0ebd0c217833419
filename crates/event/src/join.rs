use eventboard_db::Store;
use eventboard_shared::{
    event::{Event, EventId},
    user::UserId,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JoinEventInput {
    pub event_id: EventId,
}

impl<S: Store> super::Command<S> {
    /// Adds `user_id` to the participants. Joining again adds the id again.
    pub async fn join(
        &self,
        input: JoinEventInput,
        user_id: UserId,
    ) -> eventboard_shared::Result<Event> {
        let Some(event) = self.store.add_participant(input.event_id, user_id).await else {
            eventboard_shared::not_found!("event not found");
        };

        tracing::info!(event.id = event.id, user.id = user_id, "event joined");

        Ok(event)
    }
}
