//! Per-kind JSON array files holding CLI-saved generations.
//!
//! Single writer only. Every append loads the whole array, pushes one record
//! and rewrites the file, so a crash mid-write can lose the file's contents.

use crate::error::ArchiveError;
use crate::prompts::{ContentKind, GenerationRequest};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A saved generation: the request's input fields plus the raw model text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedItem {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub result: String,
}

impl ArchivedItem {
    pub fn new(request: &GenerationRequest, result: impl Into<String>) -> Self {
        Self {
            fields: request.archive_fields(),
            result: result.into(),
        }
    }

    /// Pretty JSON, the same layout the file uses.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.result.clone())
    }
}

#[derive(Debug, Clone)]
pub struct Archive {
    dir: PathBuf,
}

impl Archive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, kind: ContentKind) -> PathBuf {
        self.dir.join(kind.archive_file_name())
    }

    /// Append one record and return the new number of saved items.
    pub fn append(&self, kind: ContentKind, item: ArchivedItem) -> Result<usize, ArchiveError> {
        let path = self.path_for(kind);
        let mut items = load(&path)?;
        items.push(item);

        fs::create_dir_all(&self.dir).map_err(|source| ArchiveError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(&items).map_err(|source| ArchiveError::Format {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| ArchiveError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(kind = %kind, count = items.len(), "archived item");
        Ok(items.len())
    }

    /// All saved items in insertion order. A missing file is an empty list.
    pub fn list_all(&self, kind: ContentKind) -> Result<Vec<ArchivedItem>, ArchiveError> {
        load(&self.path_for(kind))
    }

    /// The item at zero-based `index`, or `None` when out of range.
    pub fn view_detail(
        &self,
        kind: ContentKind,
        index: usize,
    ) -> Result<Option<ArchivedItem>, ArchiveError> {
        Ok(self.list_all(kind)?.into_iter().nth(index))
    }
}

fn load(path: &Path) -> Result<Vec<ArchivedItem>, ArchiveError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path).map_err(|source| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ArchiveError::Format {
        path: path.to_path_buf(),
        source,
    })
}
