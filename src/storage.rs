use crate::errors::PersistenceError;
use crate::models::CheckinState;
use std::{collections::BTreeMap, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub const STORAGE_KEY: &str = "intelSummitCheckin.v1";

/// String values under string keys, kept in one JSON file.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    pub async fn set_item(&self, key: &str, value: String) -> Result<(), PersistenceError> {
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(err) => {
                warn!("overwriting unreadable store: {err}");
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value);

        let payload = serde_json::to_vec_pretty(&entries).map_err(PersistenceError::Encode)?;
        fs::write(&self.path, payload)
            .await
            .map_err(|source| PersistenceError::Write {
                path: self.path.clone(),
                source,
            })
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>, PersistenceError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(PersistenceError::CorruptStore),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(PersistenceError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

pub async fn try_load(store: &LocalStore) -> Result<Option<CheckinState>, PersistenceError> {
    let Some(raw) = store.get_item(STORAGE_KEY).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PersistenceError::Parse {
            key: STORAGE_KEY.to_string(),
            source,
        })
}

/// Falls back to an empty tally on any failure.
pub async fn load(store: &LocalStore) -> CheckinState {
    match try_load(store).await {
        Ok(Some(state)) => {
            if !state.is_consistent() {
                warn!(
                    total = state.total,
                    team_sum = state.teams.sum(),
                    attendees = state.attendees.len(),
                    "stored tally is inconsistent; keeping it as-is"
                );
            }
            state
        }
        Ok(None) => CheckinState::default(),
        Err(err) => {
            error!("starting with an empty tally: {err}");
            CheckinState::default()
        }
    }
}

pub async fn save(store: &LocalStore, state: &CheckinState) -> Result<(), PersistenceError> {
    let payload = serde_json::to_string(state).map_err(PersistenceError::Encode)?;
    store.set_item(STORAGE_KEY, payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamId;

    fn unique_store_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("checkin_store_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_default() {
        let store = LocalStore::new(unique_store_path("missing"));
        assert!(try_load(&store).await.unwrap().is_none());
        assert_eq!(load(&store).await, CheckinState::default());
    }

    #[tokio::test]
    async fn save_then_load_restores_tally() {
        let path = unique_store_path("roundtrip");
        let store = LocalStore::new(&path);
        let mut state = CheckinState::default();
        state.record("Dana".to_string(), TeamId::Power);
        state.record("Lee".to_string(), TeamId::Water);

        save(&store, &state).await.unwrap();
        assert_eq!(load(&store).await, state);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn corrupt_blob_loads_default() {
        let path = unique_store_path("corrupt_blob");
        let store = LocalStore::new(&path);
        store
            .set_item(STORAGE_KEY, "{\"total\": oops".to_string())
            .await
            .unwrap();

        assert!(matches!(
            try_load(&store).await,
            Err(PersistenceError::Parse { .. })
        ));
        assert_eq!(load(&store).await, CheckinState::default());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn corrupt_store_file_loads_default_and_is_replaced_on_save() {
        let path = unique_store_path("corrupt_file");
        std::fs::write(&path, b"not json at all").unwrap();
        let store = LocalStore::new(&path);

        assert!(matches!(
            try_load(&store).await,
            Err(PersistenceError::CorruptStore(_))
        ));
        assert_eq!(load(&store).await, CheckinState::default());

        let mut state = CheckinState::default();
        state.record("Dana".to_string(), TeamId::Zero);
        save(&store, &state).await.unwrap();
        assert_eq!(load(&store).await, state);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn set_item_keeps_other_keys() {
        let path = unique_store_path("other_keys");
        let store = LocalStore::new(&path);
        store.set_item("theme", "dark".to_string()).await.unwrap();
        save(&store, &CheckinState::default()).await.unwrap();

        assert_eq!(store.get_item("theme").await.unwrap().as_deref(), Some("dark"));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn write_failure_is_reported() {
        let mut path = unique_store_path("no_dir");
        path.push("nested");
        path.push("store.json");
        let store = LocalStore::new(path);

        let result = save(&store, &CheckinState::default()).await;
        assert!(matches!(result, Err(PersistenceError::Write { .. })));
    }
}
