use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Storage for the single favorites slot. The store hands over the already
/// serialized JSON array; a repository only moves text in and out.
pub trait FavoritesRepository {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> anyhow::Result<Option<String>>;
    fn save(&mut self, payload: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesRepository for JsonFileRepository {
    fn load(&self) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).context("reading favorites file failed"),
        }
    }

    fn save(&mut self, payload: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("creating favorites directory failed")?;
        }
        fs::write(&self.path, payload).context("writing favorites file failed")
    }
}

/// In-memory slot, for tests and for runs without a writable config dir.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    slot: Option<String>,
}

impl MemoryRepository {
    pub fn with_slot(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }

    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl FavoritesRepository for MemoryRepository {
    fn load(&self) -> anyhow::Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, payload: &str) -> anyhow::Result<()> {
        self.slot = Some(payload.to_string());
        Ok(())
    }
}

/// Repository picked at startup: the config file when a path is known,
/// memory otherwise.
#[derive(Debug, Clone)]
pub enum FavoritesSlot {
    File(JsonFileRepository),
    Memory(MemoryRepository),
}

impl FavoritesSlot {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(JsonFileRepository::new(path)),
            None => {
                tracing::warn!("no config directory found, favorites will not be saved");
                Self::Memory(MemoryRepository::default())
            }
        }
    }
}

impl FavoritesRepository for FavoritesSlot {
    fn load(&self) -> anyhow::Result<Option<String>> {
        match self {
            Self::File(repo) => repo.load(),
            Self::Memory(repo) => repo.load(),
        }
    }

    fn save(&mut self, payload: &str) -> anyhow::Result<()> {
        match self {
            Self::File(repo) => repo.save(payload),
            Self::Memory(repo) => repo.save(payload),
        }
    }
}

/// Ordered, duplicate-free list of favorite city names.
///
/// Names compare by exact string equality, so "Paris" and "paris" are two
/// different favorites. Every mutation writes the whole list back through
/// the repository.
#[derive(Debug)]
pub struct FavoritesStore<R> {
    repository: R,
    cities: Vec<String>,
}

impl<R: FavoritesRepository> FavoritesStore<R> {
    /// Loads the saved list. A missing, unreadable or malformed slot starts
    /// the store empty.
    pub fn open(repository: R) -> Self {
        let cities = match repository.load() {
            Ok(Some(content)) => serde_json::from_str::<Vec<String>>(&content).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "favorites slot is corrupt, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "favorites slot unreadable, starting empty");
                Vec::new()
            }
        };
        Self { repository, cities }
    }

    pub fn list(&self) -> &[String] {
        &self.cities
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    /// Appends `city` unless it is already present. Returns whether the list
    /// changed.
    pub fn add(&mut self, city: &str) -> anyhow::Result<bool> {
        if self.contains(city) {
            return Ok(false);
        }
        self.cities.push(city.to_string());
        if let Err(err) = self.persist() {
            self.cities.pop();
            return Err(err);
        }
        Ok(true)
    }

    /// Drops every entry equal to `city`; a non-member is a no-op. A failed
    /// save leaves the list as it was.
    pub fn remove(&mut self, city: &str) -> anyhow::Result<bool> {
        let previous = self.cities.clone();
        self.cities.retain(|c| c != city);
        if let Err(err) = self.persist() {
            self.cities = previous;
            return Err(err);
        }
        Ok(self.cities.len() != previous.len())
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn persist(&mut self) -> anyhow::Result<()> {
        let payload =
            serde_json::to_string(&self.cities).context("serializing favorites failed")?;
        self.repository.save(&payload)
    }
}
