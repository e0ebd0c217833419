use std::{path::Path, time::Duration};

use eventboard_db::JsonStore;
use eventboard_user::{Command, RegisterInput};

pub async fn setup_test_command(dir: &Path) -> Command<JsonStore> {
    setup_test_command_with_ttl(dir, Duration::from_secs(60 * 60)).await
}

#[allow(dead_code)]
pub async fn setup_test_command_with_ttl(dir: &Path, ttl: Duration) -> Command<JsonStore> {
    let store = JsonStore::open(dir.join("data.json"), dir.join("events.json")).await;

    Command::new(store, ttl)
}

#[allow(dead_code)]
pub async fn create_user(
    command: &Command<JsonStore>,
    name: impl Into<String>,
) -> anyhow::Result<i64> {
    let ids = create_users(command, vec![name]).await?;

    Ok(ids[0])
}

#[allow(dead_code)]
pub async fn create_users(
    command: &Command<JsonStore>,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<i64>> {
    let mut ids = vec![];
    for name in names.into_iter() {
        let user = command
            .register(RegisterInput {
                username: name.into(),
                password: "my_password".to_owned(),
            })
            .await?;
        ids.push(user.id);
    }

    Ok(ids)
}
