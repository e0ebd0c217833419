use std::path::Path;

use eventboard_db::{JsonStore, Store};
use eventboard_event::{Command, CreateEventInput};

pub struct TestState {
    pub store: JsonStore,
    pub command: Command<JsonStore>,
}

pub async fn setup_test_state(dir: &Path) -> TestState {
    let store = JsonStore::open(dir.join("data.json"), dir.join("events.json")).await;

    TestState {
        command: Command::new(store.clone()),
        store,
    }
}

#[allow(dead_code)]
pub async fn create_user(state: &TestState, name: impl Into<String>) -> i64 {
    state
        .store
        .create_user(name.into(), "not-a-hash".to_owned())
        .await
        .id
}

#[allow(dead_code)]
pub async fn create_event(state: &TestState, title: impl Into<String>, creator_id: i64) -> i64 {
    state
        .command
        .create(
            CreateEventInput {
                title: title.into(),
                description: "Ein Testevent".to_owned(),
                date: "2023-09-22".to_owned(),
                location: "Testort".to_owned(),
            },
            creator_id,
        )
        .await
        .id
}
