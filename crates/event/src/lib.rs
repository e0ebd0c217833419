use eventboard_db::Store;
use eventboard_shared::event::{Event, EventId};

mod create;
mod join;
mod query;

pub use create::CreateEventInput;
pub use join::JoinEventInput;
pub use query::EventDetails;

#[derive(Clone)]
pub struct Command<S: Store> {
    store: S,
}

impl<S: Store> Command<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn load(&self, id: EventId) -> Option<Event> {
        self.store.find_event(id).await
    }
}
