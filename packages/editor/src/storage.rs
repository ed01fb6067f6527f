//! # Template Storage
//!
//! Where saved templates live. The editor only needs "load tree by id" and
//! "save tree by id"; the record around the tree carries the metadata an
//! agency sees in its template list.

use crate::errors::EditorError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use recruitify_common::{new_node_id, BuilderNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    pub id: String,
    pub agency_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tree: BuilderNode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TemplateRecord {
    pub fn new(agency_id: &str, title: &str, description: Option<&str>, tree: BuilderNode) -> Self {
        let now = Utc::now();
        Self {
            id: new_node_id(),
            agency_id: agency_id.to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
            tree,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
pub trait TemplateStorage: Send + Sync {
    async fn load(&self, id: &str) -> Result<Option<TemplateRecord>, EditorError>;

    async fn create(
        &self,
        agency_id: &str,
        title: &str,
        description: Option<&str>,
        tree: &BuilderNode,
    ) -> Result<TemplateRecord, EditorError>;

    async fn update(&self, id: &str, tree: &BuilderNode) -> Result<TemplateRecord, EditorError>;

    async fn update_metadata(
        &self,
        id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<TemplateRecord, EditorError>;
}

/// In-memory storage for tests and previews
#[derive(Debug, Default)]
pub struct MemoryTemplateStorage {
    records: RwLock<HashMap<String, TemplateRecord>>,
}

impl MemoryTemplateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: TemplateRecord) {
        self.records.write().await.insert(record.id.clone(), record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl TemplateStorage for MemoryTemplateStorage {
    async fn load(&self, id: &str) -> Result<Option<TemplateRecord>, EditorError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn create(
        &self,
        agency_id: &str,
        title: &str,
        description: Option<&str>,
        tree: &BuilderNode,
    ) -> Result<TemplateRecord, EditorError> {
        let record = TemplateRecord::new(agency_id, title, description, tree.clone());
        self.insert(record.clone()).await;
        Ok(record)
    }

    async fn update(&self, id: &str, tree: &BuilderNode) -> Result<TemplateRecord, EditorError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| EditorError::TemplateNotFound(id.to_string()))?;
        record.tree = tree.clone();
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn update_metadata(
        &self,
        id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<TemplateRecord, EditorError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| EditorError::TemplateNotFound(id.to_string()))?;
        record.title = title.to_string();
        record.description = description.map(str::to_string);
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}

/// One pretty-printed JSON file per template, named `<id>.json`
#[derive(Debug, Clone)]
pub struct FileTemplateStorage {
    dir: PathBuf,
}

impl FileTemplateStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, EditorError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(EditorError::storage(format!("invalid template id `{}`", id)));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    async fn write(&self, record: &TemplateRecord) -> Result<(), EditorError> {
        let path = self.path_for(&record.id)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, serde_json::to_string_pretty(record)?).await?;
        tracing::debug!(template_id = %record.id, path = %path.display(), "wrote template");
        Ok(())
    }

    async fn load_existing(&self, id: &str) -> Result<TemplateRecord, EditorError> {
        self.load(id)
            .await?
            .ok_or_else(|| EditorError::TemplateNotFound(id.to_string()))
    }

    /// Every template in the directory, oldest first
    pub async fn list(&self) -> Result<Vec<TemplateRecord>, EditorError> {
        let mut records = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(records),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let content = tokio::fs::read_to_string(&path).await?;
            match serde_json::from_str::<TemplateRecord>(&content) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable template"),
            }
        }

        records.sort_by_key(|record| record.created_at);
        Ok(records)
    }
}

#[async_trait]
impl TemplateStorage for FileTemplateStorage {
    #[tracing::instrument(skip(self))]
    async fn load(&self, id: &str) -> Result<Option<TemplateRecord>, EditorError> {
        let path = self.path_for(id)?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    #[tracing::instrument(skip(self, tree))]
    async fn create(
        &self,
        agency_id: &str,
        title: &str,
        description: Option<&str>,
        tree: &BuilderNode,
    ) -> Result<TemplateRecord, EditorError> {
        let record = TemplateRecord::new(agency_id, title, description, tree.clone());
        self.write(&record).await?;
        Ok(record)
    }

    #[tracing::instrument(skip(self, tree))]
    async fn update(&self, id: &str, tree: &BuilderNode) -> Result<TemplateRecord, EditorError> {
        let mut record = self.load_existing(id).await?;
        record.tree = tree.clone();
        record.updated_at = Utc::now();
        self.write(&record).await?;
        Ok(record)
    }

    #[tracing::instrument(skip(self))]
    async fn update_metadata(
        &self,
        id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<TemplateRecord, EditorError> {
        let mut record = self.load_existing(id).await?;
        record.title = title.to_string();
        record.description = description.map(str::to_string);
        record.updated_at = Utc::now();
        self.write(&record).await?;
        Ok(record)
    }
}
