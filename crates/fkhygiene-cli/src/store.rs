//! Raw-payload artifact store.
//!
//! One pretty-printed JSON file per (FSN, pincode) pair, named
//! `{fsn}_{pincode}.json`. File presence doubles as the dedup check: a pair
//! with an artifact on disk is never re-fetched.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use fkhygiene_scraper::FetchKey;

pub(crate) struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Opens the store, creating the directory if needed.
    pub(crate) fn open(dir: &Path) -> anyhow::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_owned(),
        })
    }

    /// Keys that already have an artifact on disk.
    pub(crate) fn existing_keys(&self) -> anyhow::Result<HashSet<FetchKey>> {
        Ok(self
            .enumerate_basenames()?
            .iter()
            .filter_map(|name| FetchKey::from_basename(name))
            .collect())
    }

    /// All artifacts as (key, path) pairs, sorted by basename so export
    /// output is deterministic.
    pub(crate) fn artifacts(&self) -> anyhow::Result<Vec<(FetchKey, PathBuf)>> {
        Ok(self
            .enumerate_basenames()?
            .iter()
            .filter_map(|name| Some((FetchKey::from_basename(name)?, self.dir.join(name))))
            .collect())
    }

    pub(crate) fn write(&self, key: &FetchKey, payload: &Value) -> anyhow::Result<()> {
        let path = self.dir.join(key.artifact_basename());
        fs::write(&path, serde_json::to_string_pretty(payload)?)?;
        Ok(())
    }

    pub(crate) fn read(&self, path: &Path) -> anyhow::Result<Value> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn enumerate_basenames(&self) -> anyhow::Result<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.ends_with(".json"))
            .collect();
        names.sort();
        Ok(names)
    }
}
