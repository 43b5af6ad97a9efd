//! Per-game mutual exclusion for mutating operations.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Registry of one async mutex per game id.
///
/// Every load -> validate -> persist sequence on a game holds that game's
/// guard. Different games never contend. Entries for ended games are
/// dropped by `prune` once nobody holds or waits on them.
#[derive(Default)]
pub struct GameLocks {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `game_id`.
    pub async fn acquire(&self, game_id: Uuid) -> OwnedMutexGuard<()> {
        // Clone the Arc out first so the shard lock is released before awaiting.
        let lock = self
            .locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Remove the entry for `game_id` if no guard or waiter still shares it.
    ///
    /// `acquire` clones the mutex under the same shard lock `remove_if` takes,
    /// so a strong count of one means the map holds the only reference.
    pub fn prune(&self, game_id: Uuid) -> bool {
        self.locks
            .remove_if(&game_id, |_, lock| Arc::strong_count(lock) == 1)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
