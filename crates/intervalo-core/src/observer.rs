//! Typed publish/subscribe lists.
//!
//! Each subject keeps its subscribers keyed by [`SubscriptionId`]. Ids are
//! handed out in increasing order, so iterating the map invokes callbacks in
//! subscription order. A subscriber that returns an error is logged and
//! skipped; the remaining subscribers still run and the publisher never sees
//! the failure.

use std::collections::BTreeMap;
use std::fmt;

/// Error type observers may return.
pub type ObserverError = Box<dyn std::error::Error>;

type Callback<T> = Box<dyn FnMut(&T) -> Result<(), ObserverError>>;

/// Identity of one subscription on one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

pub struct Subject<T> {
    name: &'static str,
    next_id: u64,
    subscribers: BTreeMap<SubscriptionId, Callback<T>>,
}

impl<T> Subject<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_id: 0,
            subscribers: BTreeMap::new(),
        }
    }

    /// Register a fallible callback.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) -> Result<(), ObserverError> + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(id, Box::new(callback));
        id
    }

    /// Register a callback that cannot fail.
    pub fn subscribe_fn<F>(&mut self, mut callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        self.subscribe(move |value| {
            callback(value);
            Ok(())
        })
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver `value` to every subscriber. Returns how many failed.
    pub fn notify(&mut self, value: &T) -> usize {
        let mut failures = 0;
        for (id, callback) in self.subscribers.iter_mut() {
            if let Err(e) = callback(value) {
                failures += 1;
                tracing::warn!(subject = self.name, subscriber = id.0, error = %e, "observer failed");
            }
        }
        failures
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("name", &self.name)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
