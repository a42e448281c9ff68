// src/xam/settings/store.rs
// Persistence backends for setting records - in-memory and directory-backed

use log::{debug, trace};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::exceptions::{ProfileError, Result};

/// Byte-level persistence collaborator for setting records
///
/// The collection encodes and decodes; a store only moves opaque bytes keyed
/// by setting id. Absence is a normal result, not an error.
pub trait SettingStore {
    /// Read the stored bytes for a setting id, if any
    fn read(&self, setting_id: u32) -> Result<Option<Vec<u8>>>;

    /// Write (or replace) the stored bytes for a setting id
    fn write(&mut self, setting_id: u32, data: &[u8]) -> Result<()>;
}

/// Volatile store, mainly for tests and session-scoped profiles
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<u32, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingStore for MemoryStore {
    fn read(&self, setting_id: u32) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(&setting_id).cloned())
    }

    fn write(&mut self, setting_id: u32, data: &[u8]) -> Result<()> {
        trace!("memory store: write {:#010x}, {} bytes", setting_id, data.len());
        self.entries.insert(setting_id, data.to_vec());
        Ok(())
    }
}

/// Directory-backed store: one `XXXXXXXX.setting` file per setting id
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a settings directory, creating it if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(ProfileError::IoError)?;
        debug!("file store opened at {:?}", root);
        Ok(FileStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, setting_id: u32) -> PathBuf {
        self.root.join(format!("{setting_id:08X}.setting"))
    }

    /// List every setting id present in the directory, ascending
    pub fn scan(&self) -> Result<Vec<u32>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(ProfileError::IoError)? {
            let entry = entry.map_err(ProfileError::IoError)?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(stem) = name.strip_suffix(".setting") else {
                continue;
            };
            match u32::from_str_radix(stem, 16) {
                Ok(id) => ids.push(id),
                Err(_) => trace!("skipping non-setting file {:?}", name),
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }
}

impl SettingStore for FileStore {
    fn read(&self, setting_id: u32) -> Result<Option<Vec<u8>>> {
        match fs::read(self.entry_path(setting_id)) {
            Ok(bytes) => {
                trace!("file store: read {:#010x}, {} bytes", setting_id, bytes.len());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ProfileError::IoError(e)),
        }
    }

    fn write(&mut self, setting_id: u32, data: &[u8]) -> Result<()> {
        trace!("file store: write {:#010x}, {} bytes", setting_id, data.len());
        fs::write(self.entry_path(setting_id), data).map_err(ProfileError::IoError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.read(0x1000).unwrap().is_none());

        store.write(0x1000, &[1, 2, 3]).unwrap();
        assert_eq!(store.read(0x1000).unwrap().unwrap(), vec![1, 2, 3]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_round_trip_and_scan() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert!(store.read(0x3F00).unwrap().is_none());
        store.write(0x3F00, &[0xAB; 48]).unwrap();
        store.write(0x1004_0003, &[0xCD; 40]).unwrap();

        assert_eq!(store.read(0x3F00).unwrap().unwrap(), vec![0xAB; 48]);
        assert_eq!(store.scan().unwrap(), vec![0x3F00, 0x1004_0003]);
    }

    #[test]
    fn test_scan_skips_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("zzzz.setting"), b"x").unwrap();
        std::fs::write(dir.path().join("00001000.setting"), b"x").unwrap();
        assert_eq!(store.scan().unwrap(), vec![0x1000]);
    }
}

// 🎮💾🗄️
