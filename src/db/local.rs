// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value storage backed by JSON files in a directory.
//!
//! Each key maps to `{dir}/{key}.json`. Writes go to a temporary sibling
//! and are renamed into place, so a crash never leaves a torn blob.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

/// Local key-value store.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    backend: Backend,
}

#[derive(Debug, Clone)]
enum Backend {
    Dir(PathBuf),
    Memory(HashMap<String, String>),
}

impl LocalStorage {
    /// Open (creating if needed) a storage directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, AppError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            AppError::Storage(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        tracing::info!(dir = %dir.display(), "Opened local storage");

        Ok(Self {
            backend: Backend::Dir(dir.to_path_buf()),
        })
    }

    /// Create a storage that lives only in memory (for tests and previews).
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(HashMap::new()),
        }
    }

    /// Whether writes survive the process.
    pub fn is_durable(&self) -> bool {
        matches!(self.backend, Backend::Dir(_))
    }

    fn path_for(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{key}.json"))
    }

    /// Raw string stored under `key`, or `None` if the key was never written.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, AppError> {
        match &self.backend {
            Backend::Memory(map) => Ok(map.get(key).cloned()),
            Backend::Dir(dir) => {
                let path = Self::path_for(dir, key);
                match fs::read_to_string(&path) {
                    Ok(data) => Ok(Some(data)),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(AppError::Storage(format!(
                        "Failed to read {}: {}",
                        path.display(),
                        e
                    ))),
                }
            }
        }
    }

    /// Store a raw string under `key`, replacing any previous value.
    pub fn put_raw(&mut self, key: &str, value: String) -> Result<(), AppError> {
        match &mut self.backend {
            Backend::Memory(map) => {
                map.insert(key.to_string(), value);
                Ok(())
            }
            Backend::Dir(dir) => {
                let path = Self::path_for(dir, key);
                let tmp = dir.join(format!(".{key}.json.tmp"));
                fs::write(&tmp, value.as_bytes()).map_err(|e| {
                    AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e))
                })?;
                fs::rename(&tmp, &path).map_err(|e| {
                    AppError::Storage(format!("Failed to replace {}: {}", path.display(), e))
                })
            }
        }
    }

    // ─── Typed Operations ────────────────────────────────────────

    /// Deserialize the JSON value under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.get_raw(key)? {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON under `key`.
    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), AppError> {
        let data = serde_json::to_string(value)?;
        self.put_raw(key, data)
    }
}
