use std::{
    ffi::OsString,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use eventboard_shared::{event::Event, user::User};
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

/// A row that can live in a [`Collection`].
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Event {
    fn id(&self) -> i64 {
        self.id
    }
}

struct Rows<T> {
    items: Vec<T>,
    next_id: i64,
}

/// An ordered list of records mirrored to a single JSON array file.
///
/// The lock is held across the whole mutate-then-save cycle, so two writers
/// never interleave and id allocation cannot race.
pub struct Collection<T> {
    path: PathBuf,
    rows: Mutex<Rows<T>>,
}

impl<T: Record> Collection<T> {
    /// Loads the file at `path`.
    ///
    /// A missing, unreadable or corrupt file yields an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = load::<T>(&path).await;
        let next_id = items.iter().map(Record::id).max().unwrap_or(0) + 1;

        tracing::debug!(path = %path.display(), count = items.len(), "collection loaded");

        Self {
            path,
            rows: Mutex::new(Rows { items, next_id }),
        }
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.lock().await.items.clone()
    }

    pub async fn find(&self, id: i64) -> Option<T> {
        self.rows
            .lock()
            .await
            .items
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Allocates the next id, builds the record with it, appends and saves.
    pub async fn insert(&self, build: impl FnOnce(i64) -> T + Send) -> T {
        let mut rows = self.rows.lock().await;
        let id = rows.next_id;
        rows.next_id += 1;

        let record = build(id);
        rows.items.push(record.clone());
        self.save(&rows.items).await;

        record
    }

    /// Applies `change` to the record with `id` and saves. `None` leaves the
    /// collection and the file untouched.
    pub async fn update(&self, id: i64, change: impl FnOnce(&mut T) + Send) -> Option<T> {
        let mut rows = self.rows.lock().await;
        let record = rows.items.iter_mut().find(|record| record.id() == id)?;
        change(record);
        let updated = record.clone();
        self.save(&rows.items).await;

        Some(updated)
    }

    async fn save(&self, items: &[T]) {
        if let Err(e) = write(&self.path, items).await {
            tracing::error!(path = %self.path.display(), "failed to save collection: {e}");
        }
    }
}

async fn load<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return vec![],
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to read collection: {e}");
            return vec![];
        }
    };

    match serde_json::from_slice::<Option<Vec<T>>>(&bytes) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), "failed to decode collection: {e}");
            vec![]
        }
    }
}

// Write to a sibling file then rename, a crash never leaves half an array.
async fn write<T: Serialize>(path: &Path, items: &[T]) -> anyhow::Result<()> {
    let data = serde_json::to_vec(items)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let tmp = tmp_path(path);
    tokio::fs::write(&tmp, data).await?;
    tokio::fs::rename(&tmp, path).await?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
