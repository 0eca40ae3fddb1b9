use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Keys of destructive requests that are still waiting on the directory.
#[derive(Debug, Default)]
pub struct InFlight {
    keys: Mutex<HashSet<String>>,
}

/// Releases its key when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    registry: Arc<InFlight>,
    key: String,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    fn keys(&self) -> MutexGuard<'_, HashSet<String>> {
        self.keys.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Claims `key`, or returns `None` when a request for it is already pending.
    pub fn try_claim(self: &Arc<Self>, key: impl Into<String>) -> Option<InFlightGuard> {
        let key = key.into();
        if !self.keys().insert(key.clone()) {
            return None;
        }

        Some(InFlightGuard {
            registry: Arc::clone(self),
            key,
        })
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.keys().contains(key)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry.keys().remove(&self.key);
    }
}
