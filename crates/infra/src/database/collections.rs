//! JSON (de)serialization helpers shared by the key-value-backed repositories.
//!
//! Every entity collection is stored as one JSON document under a fixed key;
//! an absent key reads as the empty collection.

use cobrix_domain::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::InfraError;

pub(crate) async fn load_collection<T>(
    store: &dyn cobrix_core::KeyValueStore,
    key: &str,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => {
            let items = serde_json::from_str(&raw).map_err(InfraError::from)?;
            Ok(items)
        }
        None => Ok(Vec::new()),
    }
}

pub(crate) async fn save_collection<T>(
    store: &dyn cobrix_core::KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<()>
where
    T: Serialize,
{
    let raw = serde_json::to_string(items).map_err(InfraError::from)?;
    store.set(key, &raw).await
}

pub(crate) async fn load_value<T>(
    store: &dyn cobrix_core::KeyValueStore,
    key: &str,
) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => {
            let value = serde_json::from_str(&raw).map_err(InfraError::from)?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

pub(crate) async fn save_value<T>(
    store: &dyn cobrix_core::KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()>
where
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(InfraError::from)?;
    store.set(key, &raw).await
}
