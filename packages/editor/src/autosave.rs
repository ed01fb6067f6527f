//! # Draft Autosave
//!
//! Unsaved work is mirrored into scratch storage after a quiet period, so a
//! crashed tab or closed window can be restored. Writes are trailing
//! debounced: every change aborts the pending write and schedules a new
//! one, so at most one write is ever pending and it carries the latest
//! tree.

use crate::errors::EditorError;
use recruitify_common::{BuilderNode, ROOT_TYPE};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(600);

/// Scratch slot for one template of one agency
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DraftKey {
    pub agency_id: String,
    /// `None` until the template is first saved
    pub template_id: Option<String>,
}

impl DraftKey {
    pub fn new(agency_id: impl Into<String>, template_id: Option<String>) -> Self {
        Self {
            agency_id: agency_id.into(),
            template_id,
        }
    }
}

impl fmt::Display for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recruitify:draft:{}:{}",
            self.agency_id,
            self.template_id.as_deref().unwrap_or("new")
        )
    }
}

/// Key-value scratch space, the server-side stand-in for browser local
/// storage
pub trait ScratchStorage: Send + Sync {
    fn get(&self, key: &DraftKey) -> Result<Option<String>, EditorError>;
    fn set(&self, key: &DraftKey, value: &str) -> Result<(), EditorError>;
    fn remove(&self, key: &DraftKey) -> Result<(), EditorError>;
}

#[derive(Debug, Default)]
pub struct MemoryScratchStorage {
    entries: Mutex<HashMap<DraftKey, String>>,
    writes: Mutex<usize>,
}

impl MemoryScratchStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ScratchStorage for MemoryScratchStorage {
    fn get(&self, key: &DraftKey) -> Result<Option<String>, EditorError> {
        Ok(lock(&self.entries).get(key).cloned())
    }

    fn set(&self, key: &DraftKey, value: &str) -> Result<(), EditorError> {
        lock(&self.entries).insert(key.clone(), value.to_string());
        *lock(&self.writes) += 1;
        Ok(())
    }

    fn remove(&self, key: &DraftKey) -> Result<(), EditorError> {
        lock(&self.entries).remove(key);
        Ok(())
    }
}

/// One file per draft under a directory
#[derive(Debug, Clone)]
pub struct FileScratchStorage {
    dir: PathBuf,
}

impl FileScratchStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &DraftKey) -> PathBuf {
        let name: String = key
            .to_string()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl ScratchStorage for FileScratchStorage {
    fn get(&self, key: &DraftKey) -> Result<Option<String>, EditorError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &DraftKey, value: &str) -> Result<(), EditorError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &DraftKey) -> Result<(), EditorError> {
        match std::fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// Parse a stored draft. Anything that is not a root-typed tree is rejected.
pub fn parse_draft(content: &str) -> Option<BuilderNode> {
    match BuilderNode::from_json(content) {
        Ok(tree) if tree.node_type == ROOT_TYPE => Some(tree),
        Ok(tree) => {
            tracing::warn!(node_type = %tree.node_type, "draft root has wrong type, discarding");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "malformed draft, discarding");
            None
        }
    }
}

/// Trailing-debounce writer for one draft key
pub struct DraftAutosave {
    key: DraftKey,
    storage: Arc<dyn ScratchStorage>,
    debounce: Duration,
    pending: Option<JoinHandle<()>>,
}

impl DraftAutosave {
    pub fn new(key: DraftKey, storage: Arc<dyn ScratchStorage>, debounce: Duration) -> Self {
        Self {
            key,
            storage,
            debounce,
            pending: None,
        }
    }

    pub fn key(&self) -> &DraftKey {
        &self.key
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn set_key(&mut self, key: DraftKey) {
        self.key = key;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Replace any pending write with one of `tree` after the debounce
    pub fn schedule(&mut self, tree: &BuilderNode) -> Result<(), EditorError> {
        self.cancel();
        let json = tree.to_json()?;

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            // no timer outside a runtime
            return self.storage.set(&self.key, &json);
        };

        let storage = Arc::clone(&self.storage);
        let key = self.key.clone();
        let debounce = self.debounce;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(debounce).await;
            match storage.set(&key, &json) {
                Ok(()) => tracing::debug!(key = %key, bytes = json.len(), "draft written"),
                Err(e) => tracing::warn!(key = %key, error = %e, "draft write failed"),
            }
        }));
        Ok(())
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn load(&self) -> Result<Option<String>, EditorError> {
        self.storage.get(&self.key)
    }

    /// Cancel any pending write and drop the stored draft
    pub fn discard(&mut self) -> Result<(), EditorError> {
        self.cancel();
        self.storage.remove(&self.key)
    }
}

impl Drop for DraftAutosave {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for DraftAutosave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftAutosave")
            .field("key", &self.key)
            .field("debounce", &self.debounce)
            .field("pending", &self.is_pending())
            .finish()
    }
}
