//! Generic in-memory entity store with simulated latency.

use std::sync::atomic::{AtomicI64, AtomicU8, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use streakboard_core::badges::Badge;
use streakboard_core::completions::Completion;
use streakboard_core::errors::{Error, Result, StorageError};
use streakboard_core::goals::Goal;

use crate::latency::{LatencyProfile, StoreOperation};

/// A record that can live in an [`EntityStore`].
pub trait StoredEntity: Clone + Send + Sync + 'static {
    /// Display name used in log lines and NotFound messages.
    const KIND: &'static str;

    fn id(&self) -> i64;
}

impl StoredEntity for Goal {
    const KIND: &'static str = "Goal";

    fn id(&self) -> i64 {
        self.id
    }
}

impl StoredEntity for Completion {
    const KIND: &'static str = "Completion";

    fn id(&self) -> i64 {
        self.id
    }
}

impl StoredEntity for Badge {
    const KIND: &'static str = "Badge";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Ordered collection of entities keyed by a surrogate integer id.
///
/// Every operation sleeps for its configured latency first, then runs its
/// synchronous body under the internal lock. The lock is never held across
/// an `.await`, and callers only ever receive copies.
///
/// Ids start at `max(seeded ids) + 1` (or 1) and are never reused, even
/// after deletes.
pub struct EntityStore<T: StoredEntity> {
    entities: RwLock<Vec<T>>,
    next_id: AtomicI64,
    latency: LatencyProfile,
    failing: AtomicU8,
}

impl<T: StoredEntity> EntityStore<T> {
    pub fn new(seed: Vec<T>, latency: LatencyProfile) -> Self {
        let next_id = seed.iter().map(StoredEntity::id).max().unwrap_or(0) + 1;
        Self {
            entities: RwLock::new(seed),
            next_id: AtomicI64::new(next_id),
            latency,
            failing: AtomicU8::new(0),
        }
    }

    pub fn empty(latency: LatencyProfile) -> Self {
        Self::new(Vec::new(), latency)
    }

    pub fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    /// Makes `operation` fail with `StorageError::Unavailable` until reset.
    pub fn set_failing(&self, operation: StoreOperation, failing: bool) {
        if failing {
            self.failing.fetch_or(operation.bit(), Ordering::SeqCst);
        } else {
            self.failing.fetch_and(!operation.bit(), Ordering::SeqCst);
        }
    }

    async fn enter(&self, operation: StoreOperation) -> Result<()> {
        let delay = self.latency.for_operation(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) & operation.bit() != 0 {
            return Err(StorageError::Unavailable(format!(
                "{} store rejected {}",
                T::KIND,
                operation.as_str()
            ))
            .into());
        }
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>> {
        self.entities.read().map_err(|_| Self::poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>> {
        self.entities.write().map_err(|_| Self::poisoned())
    }

    fn poisoned() -> Error {
        StorageError::Internal(format!("{} store lock poisoned", T::KIND)).into()
    }

    pub async fn get_all(&self) -> Result<Vec<T>> {
        self.enter(StoreOperation::GetAll).await?;
        Ok(self.read()?.clone())
    }

    /// Copies of the entities matching `predicate`. Costs the same as `get_all`.
    pub async fn filter<P>(&self, predicate: P) -> Result<Vec<T>>
    where
        P: Fn(&T) -> bool + Send,
    {
        self.enter(StoreOperation::GetAll).await?;
        Ok(self
            .read()?
            .iter()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<T> {
        self.enter(StoreOperation::GetById).await?;
        self.read()?
            .iter()
            .find(|entity| entity.id() == id)
            .cloned()
            .ok_or_else(|| Error::not_found(T::KIND, id))
    }

    /// Inserts the entity produced by `build` for the next free id.
    pub async fn create<F>(&self, build: F) -> Result<T>
    where
        F: FnOnce(i64) -> T + Send,
    {
        self.enter(StoreOperation::Create).await?;
        let mut entities = self.write()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entity = build(id);
        entities.push(entity.clone());
        debug!("Created {} {}", T::KIND, id);
        Ok(entity)
    }

    /// Applies `patch` to the entity with `id` and returns the result.
    pub async fn update<F>(&self, id: i64, patch: F) -> Result<T>
    where
        F: FnOnce(&mut T) + Send,
    {
        self.enter(StoreOperation::Update).await?;
        let mut entities = self.write()?;
        let entity = entities
            .iter_mut()
            .find(|entity| entity.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        patch(entity);
        debug!("Updated {} {}", T::KIND, id);
        Ok(entity.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<T> {
        self.enter(StoreOperation::Delete).await?;
        let mut entities = self.write()?;
        let index = entities
            .iter()
            .position(|entity| entity.id() == id)
            .ok_or_else(|| Error::not_found(T::KIND, id))?;
        debug!("Deleted {} {}", T::KIND, id);
        Ok(entities.remove(index))
    }
}
