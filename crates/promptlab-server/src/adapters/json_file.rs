//! JSON file implementation of Storage
//!
//! Entities live in memory and are mirrored to two files, one JSON array per
//! entity type. Both files are read fully on open; every successful mutation
//! rewrites the affected file from the in-memory state while the write lock
//! is still held, so the file always reflects a serialized history.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use tokio::sync::RwLock;

use promptlab::{Collection, DomainError, Prompt, Storage};

use super::tables::Tables;

pub const PROMPT_FILE: &str = "prompts.json";
pub const COLLECTION_FILE: &str = "collections.json";

/// Durable storage backend
#[derive(Debug)]
pub struct JsonFileStorage {
    tables: RwLock<Tables>,
    prompt_file: PathBuf,
    collection_file: PathBuf,
}

impl JsonFileStorage {
    /// Open (or start) a store in `data_dir`
    ///
    /// Fails if either file exists but cannot be read or holds an invalid record.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir).await.map_err(|e| {
            DomainError::Persistence(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        Self::open_files(data_dir.join(PROMPT_FILE), data_dir.join(COLLECTION_FILE)).await
    }

    /// Open a store backed by explicit file paths
    pub async fn open_files(
        prompt_file: impl Into<PathBuf>,
        collection_file: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let prompt_file = prompt_file.into();
        let collection_file = collection_file.into();

        let mut tables = Tables::default();
        for prompt in load_records::<Prompt>(&prompt_file).await? {
            prompt.validate().map_err(|e| invalid_record(&prompt_file, e))?;
            if let Some(previous) = tables.prompts.insert(prompt.id.clone(), prompt) {
                tracing::warn!(
                    "⚠️  Duplicate prompt id {} in {}",
                    previous.id,
                    prompt_file.display()
                );
            }
        }
        for collection in load_records::<Collection>(&collection_file).await? {
            collection
                .validate()
                .map_err(|e| invalid_record(&collection_file, e))?;
            if let Some(previous) = tables.collections.insert(collection.id.clone(), collection) {
                tracing::warn!(
                    "⚠️  Duplicate collection id {} in {}",
                    previous.id,
                    collection_file.display()
                );
            }
        }

        tracing::info!(
            "📁 Loaded {} prompts and {} collections ({}, {})",
            tables.prompts.len(),
            tables.collections.len(),
            prompt_file.display(),
            collection_file.display()
        );

        Ok(Self {
            tables: RwLock::new(tables),
            prompt_file,
            collection_file,
        })
    }

    async fn save_prompts(&self, tables: &Tables) -> Result<(), DomainError> {
        write_records(&self.prompt_file, &tables.prompts_in_order()).await
    }

    async fn save_collections(&self, tables: &Tables) -> Result<(), DomainError> {
        write_records(&self.collection_file, &tables.collections_in_order()).await
    }
}

fn invalid_record(path: &Path, err: DomainError) -> DomainError {
    DomainError::Persistence(format!("Invalid record in {}: {}", path.display(), err))
}

/// Read a JSON array of records; a missing file is an empty store
async fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DomainError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(DomainError::Persistence(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_str(&content).map_err(|e| {
        DomainError::Persistence(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Rewrite `path` with all `records`, indented by four spaces
async fn write_records<T: Serialize>(path: &Path, records: &[&T]) -> Result<(), DomainError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer).map_err(|e| {
        DomainError::Persistence(format!("Failed to serialize {}: {}", path.display(), e))
    })?;
    buf.push(b'\n');

    // write-then-rename: the previous file stays intact if the write fails
    let tmp = path.with_extension("json.tmp");
    let result = async {
        tokio::fs::write(&tmp, &buf).await?;
        tokio::fs::rename(&tmp, path).await
    }
    .await;

    if let Err(e) = result {
        tracing::error!("Failed to write {}: {}", path.display(), e);
        return Err(DomainError::Persistence(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    tracing::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn create_prompt(&self, prompt: Prompt) -> Result<Prompt, DomainError> {
        let mut tables = self.tables.write().await;
        tables.prompts.insert(prompt.id.clone(), prompt.clone());
        self.save_prompts(&tables).await?;
        Ok(prompt)
    }

    async fn get_prompt(&self, id: &str) -> Result<Option<Prompt>, DomainError> {
        Ok(self.tables.read().await.prompts.get(id).cloned())
    }

    async fn get_all_prompts(&self) -> Result<Vec<Prompt>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.prompts_in_order().into_iter().cloned().collect())
    }

    async fn update_prompt(
        &self,
        id: &str,
        prompt: Prompt,
    ) -> Result<Option<Prompt>, DomainError> {
        let mut tables = self.tables.write().await;
        let Some(updated) = tables.replace_prompt(id, prompt) else {
            return Ok(None);
        };
        self.save_prompts(&tables).await?;
        Ok(Some(updated))
    }

    async fn delete_prompt(&self, id: &str) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.prompts.remove(id).is_none() {
            return Ok(false);
        }
        self.save_prompts(&tables).await?;
        Ok(true)
    }

    async fn create_collection(&self, collection: Collection) -> Result<Collection, DomainError> {
        let mut tables = self.tables.write().await;
        tables
            .collections
            .insert(collection.id.clone(), collection.clone());
        self.save_collections(&tables).await?;
        Ok(collection)
    }

    async fn get_collection(&self, id: &str) -> Result<Option<Collection>, DomainError> {
        Ok(self.tables.read().await.collections.get(id).cloned())
    }

    async fn get_all_collections(&self) -> Result<Vec<Collection>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.collections_in_order().into_iter().cloned().collect())
    }

    async fn delete_collection(&self, id: &str) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.collections.remove(id).is_none() {
            return Ok(false);
        }
        self.save_collections(&tables).await?;
        Ok(true)
    }
}
