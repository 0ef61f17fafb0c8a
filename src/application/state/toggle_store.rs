use crate::catalog::domain::{MetadataToggles, ToggleKey};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`ToggleStore::subscribe`], used to cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&MetadataToggles, ToggleKey)>;

struct StoreInner {
    toggles: RefCell<MetadataToggles>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

/// ToggleStore - The single source of the metadata toggles
///
/// Cloning the store hands out another handle to the same state. The store
/// is single-threaded (`Rc`/`RefCell`) and is not `Send`.
///
/// Every `set` replaces the whole mapping at once and then notifies every
/// subscriber, even when no value changed. Subscribers may read the store
/// from inside their callback.
#[derive(Clone)]
pub struct ToggleStore {
    inner: Rc<StoreInner>,
}

impl Default for ToggleStore {
    fn default() -> Self {
        Self::new(MetadataToggles::default())
    }
}

impl ToggleStore {
    pub fn new(initial: MetadataToggles) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                toggles: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Current snapshot
    pub fn read(&self) -> MetadataToggles {
        *self.inner.toggles.borrow()
    }

    /// Sets `key` to `value`; the master key cascades to its children
    pub fn set(&self, key: ToggleKey, value: bool) {
        let next = self.read().with(key, value);
        self.inner.toggles.replace(next);

        // Snapshot the listeners so callbacks can subscribe or unsubscribe
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next, key);
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&MetadataToggles, ToggleKey) + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Cancels a subscription. Returns false if it was already cancelled.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// True when both handles point at the same store
    pub fn same_store(&self, other: &ToggleStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ToggleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleStore")
            .field("toggles", &self.read())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
