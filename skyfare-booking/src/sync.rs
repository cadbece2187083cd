use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// Keyed mutual exclusion over aggregate ids. Operations touching the same
/// flight or customer serialize here; waiting is bounded so a stuck caller
/// gets a retryable error instead of blocking forever.
pub struct LockRegistry {
    slots: Mutex<HashMap<Uuid, Arc<AtomicBool>>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Acquires every key within `wait`. Keys are sorted and deduplicated
    /// first, so overlapping key sets can never deadlock each other. The
    /// keys release when the returned guard drops.
    pub fn acquire(&self, keys: &[Uuid], wait: Duration) -> Result<LockGuard, LockContention> {
        let mut keys = keys.to_vec();
        keys.sort();
        keys.dedup();

        let deadline = Instant::now() + wait;
        let mut held = Vec::with_capacity(keys.len());

        for key in keys {
            let slot = self.slot(key);
            loop {
                if slot
                    .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
                    .is_ok()
                {
                    held.push(slot);
                    break;
                }
                if Instant::now() >= deadline {
                    release(&held);
                    return Err(LockContention { key });
                }
                thread::sleep(Duration::from_micros(200));
            }
        }

        Ok(LockGuard { held })
    }

    fn slot(&self, key: Uuid) -> Arc<AtomicBool> {
        let mut slots = match self.slots.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slots
            .entry(key)
            .or_insert_with(|| Arc::new(AtomicBool::new(false)))
            .clone()
    }
}

impl Default for LockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn release(held: &[Arc<AtomicBool>]) {
    for slot in held {
        slot.store(false, Ordering::Release);
    }
}

/// Holds the acquired keys until dropped.
#[derive(Debug)]
pub struct LockGuard {
    held: Vec<Arc<AtomicBool>>,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        release(&self.held);
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Timed out waiting for aggregate {key}")]
pub struct LockContention {
    pub key: Uuid,
}
