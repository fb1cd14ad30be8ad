use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

use site::theme::storage_key;

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = storage_key(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a key that was never written is not an error, just nothing to restore
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = storage_key(key);

    match LocalStorage::get(key.clone()) {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

// a single user preference that survives reloads
pub trait StoredPreference
where
    Self: Serialize,
    Self: for<'a> Deserialize<'a>,
{
    fn store(&self) -> ();

    fn fetch() -> Self;
}
