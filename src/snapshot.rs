use crate::catalog::Catalog;
use crate::error::SnapshotError;
use crate::index::RecipeIndex;
use crate::recipe::{Recipe, RecipeId};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// A flat `id -> recipe` mapping persisted by the offline build step, so a server can
/// start without re-parsing the raw source.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub recipes: BTreeMap<RecipeId, Recipe>,
}

impl CatalogSnapshot {
    /// Captures every entry of a built index.
    pub fn from_index(index: &dyn RecipeIndex) -> Self {
        Self {
            recipes: index
                .all_items()
                .into_iter()
                .map(|(id, recipe)| (id, Recipe::clone(&recipe)))
                .collect(),
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            recipes: catalog
                .all()
                .map(|(id, recipe)| (id, Recipe::clone(recipe)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn into_catalog(self) -> Catalog {
        Catalog::from_entries(self.recipes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Saves the snapshot to a file using the bincode format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| {
            SnapshotError::Io(format!("Could not create file '{}': {}", path.display(), e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            SnapshotError::Io(format!("Could not write to file '{}': {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| {
            SnapshotError::Io(format!("Could not open file '{}': {}", path.display(), e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            SnapshotError::Io(format!("Could not read from file '{}': {}", path.display(), e))
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns (value, bytes_read)
            .map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}
