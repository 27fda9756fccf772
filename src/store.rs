use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::clock::Clock;
use crate::model::election::{Election, ElectionId, NewElection, Timestamp};

/// An election with this ID has already been commenced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("election ({0}) already exists")]
pub struct DuplicateIdError(pub ElectionId);

/// A point-in-time view of every stored election, in insertion order.
pub type Snapshot = Vec<Arc<Election>>;

#[derive(Debug, Default)]
struct Registry {
    /// Position of each election in `elections`.
    index: HashMap<ElectionId, usize>,
    /// Every election ever inserted, oldest first.
    elections: Vec<Arc<Election>>,
    /// The most recent commencement time handed out.
    last_commenced_at: Option<Timestamp>,
}

/// The in-process registry of open elections.
///
/// Cloning the store produces another handle onto the same registry.
/// Records are immutable once inserted and are shared out as `Arc`s, so a
/// reader holding a snapshot never blocks later inserts.
#[derive(Debug, Clone, Default)]
pub struct ElectionStore {
    registry: Arc<RwLock<Registry>>,
}

impl ElectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `election` with the current time and insert it.
    ///
    /// The uniqueness check, the clock read and the insertion happen under one
    /// write lock, so a duplicate never overwrites the existing record and
    /// commencement times never decrease in insertion order.
    pub fn insert(
        &self,
        election: NewElection,
        clock: &dyn Clock,
    ) -> Result<Arc<Election>, DuplicateIdError> {
        self.insert_and_notify(election, clock, |_| {})
    }

    /// As [`ElectionStore::insert`], calling `on_commit` with the new record
    /// before the write lock is released.
    ///
    /// Notifications therefore happen in insertion order. `on_commit` must not
    /// block or touch the store.
    pub fn insert_and_notify(
        &self,
        election: NewElection,
        clock: &dyn Clock,
        on_commit: impl FnOnce(&Arc<Election>),
    ) -> Result<Arc<Election>, DuplicateIdError> {
        let mut registry = self.write();
        if registry.index.contains_key(&election.election_id) {
            return Err(DuplicateIdError(election.election_id));
        }

        let now = clock.now().timestamp();
        let commenced_at = match registry.last_commenced_at {
            Some(last) if last > now => last,
            _ => now,
        };
        let election = Arc::new(election.commence(commenced_at));

        let position = registry.elections.len();
        registry
            .index
            .insert(election.election_id.clone(), position);
        registry.elections.push(Arc::clone(&election));
        registry.last_commenced_at = Some(commenced_at);
        on_commit(&election);
        Ok(election)
    }

    /// Every stored election, oldest first.
    pub fn snapshot(&self) -> Snapshot {
        self.read().elections.clone()
    }

    /// Look up a single election.
    pub fn get(&self, election_id: &str) -> Option<Arc<Election>> {
        let registry = self.read();
        registry
            .index
            .get(election_id)
            .map(|&position| Arc::clone(&registry.elections[position]))
    }

    pub fn len(&self) -> usize {
        self.read().elections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while the lock is held cannot leave a half-written record:
    // the only mutation is `insert`, and its pushes cannot fail part-way.
    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}
