//! Name-keyed collection of tile sets.

use std::collections::HashMap;

use crate::error::ConfigError;

use super::TileSet;

/// Registry of configured tile sets.
///
/// Iteration follows insertion order, so documents rendered from the same
/// configuration are identical.
#[derive(Debug, Clone, Default)]
pub struct TileSetRegistry {
    tilesets: Vec<TileSet>,
    index: HashMap<String, usize>,
}

impl TileSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile set, rejecting duplicate names.
    pub fn insert(&mut self, tileset: TileSet) -> Result<(), ConfigError> {
        if self.index.contains_key(&tileset.name) {
            return Err(ConfigError::DuplicateTileSet(tileset.name));
        }
        self.index.insert(tileset.name.clone(), self.tilesets.len());
        self.tilesets.push(tileset);
        Ok(())
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_tileset(mut self, tileset: TileSet) -> Result<Self, ConfigError> {
        self.insert(tileset)?;
        Ok(self)
    }

    /// Look up a tile set by name.
    pub fn get(&self, name: &str) -> Option<&TileSet> {
        self.index.get(name).map(|&i| &self.tilesets[i])
    }

    /// Tile sets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TileSet> {
        self.tilesets.iter()
    }

    pub fn len(&self) -> usize {
        self.tilesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tilesets.is_empty()
    }
}
