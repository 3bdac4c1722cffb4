//! The durable wishlist set.
//!
//! A set of product ids persisted under a single key: the full set is
//! written after every toggle and loaded once at startup. Storage failures
//! never propagate; a wishlist that cannot be read starts empty, and a
//! write that fails is logged and dropped.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use ecuruza_core::ProductId;

/// Errors a wishlist store can produce.
///
/// These stay internal to the wishlist; callers of [`Wishlist`] never see
/// them.
#[derive(Debug, Error)]
pub enum WishlistError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Durable key-value backend for the wishlist.
pub trait WishlistStore {
    /// Read the persisted id set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing key cannot be read or parsed.
    fn load(&self) -> Result<Vec<ProductId>, WishlistError>;

    /// Overwrite the persisted id set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing key cannot be written.
    fn save(&mut self, ids: &[ProductId]) -> Result<(), WishlistError>;
}

/// File-backed store: one JSON array of id strings.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WishlistStore for JsonFileStore {
    fn load(&self) -> Result<Vec<ProductId>, WishlistError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            // A missing file is a fresh install, not a failure.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, ids: &[ProductId]) -> Result<(), WishlistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec(ids)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    ids: Vec<ProductId>,
}

impl WishlistStore for MemoryStore {
    fn load(&self) -> Result<Vec<ProductId>, WishlistError> {
        Ok(self.ids.clone())
    }

    fn save(&mut self, ids: &[ProductId]) -> Result<(), WishlistError> {
        self.ids = ids.to_vec();
        Ok(())
    }
}

/// The wishlist: a set of product ids with fire-and-forget persistence.
pub struct Wishlist {
    ids: BTreeSet<ProductId>,
    store: Box<dyn WishlistStore + Send>,
}

impl Wishlist {
    /// Open a wishlist, loading the persisted set once.
    ///
    /// Load failures degrade to an empty set.
    pub fn open(store: Box<dyn WishlistStore + Send>) -> Self {
        let ids = match store.load() {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load wishlist, starting empty");
                BTreeSet::new()
            }
        };
        Self { ids, store }
    }

    /// A wishlist with no durable backing.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::default()))
    }

    /// Add the id if absent, remove it if present. Returns whether the id
    /// is in the set afterwards.
    ///
    /// Every toggle writes the full set through the store; write failures
    /// are logged and swallowed.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        let now_present = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        self.persist();
        now_present
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Saved ids in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<ProductId> {
        self.ids.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&mut self) {
        let ids: Vec<ProductId> = self.ids.iter().cloned().collect();
        if let Err(e) = self.store.save(&ids) {
            tracing::warn!(error = %e, "Failed to persist wishlist");
        }
    }
}

impl std::fmt::Debug for Wishlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wishlist").field("ids", &self.ids).finish()
    }
}
