use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::store::app::{AppAction, AppReducer, AppState};
use crate::store::mvi::Reducer;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// Cheaply clonable handle to the application state.
///
/// Uses a read-write lock for the state so selectors never block each
/// other, and a separate dispatch lock that is held from reducer
/// application through subscriber notification.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<AppState>,
    dispatch_lock: Mutex<()>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                dispatch_lock: Mutex::new(()),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
            }),
        }
    }

    /// Apply one action and notify subscribers.
    ///
    /// Listeners run while the dispatch lock is held and must not dispatch.
    pub fn dispatch(&self, action: impl Into<AppAction>) {
        let action = action.into();
        let _serial = self.inner.dispatch_lock.lock();

        tracing::trace!(action = %action.type_name(), "dispatch");

        let snapshot = {
            let mut state = self.inner.state.write();
            let current = std::mem::take(&mut *state);
            *state = AppReducer::reduce(current, action);
            state.clone()
        };

        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(&snapshot);
        }
    }

    /// Read a projection of the current state.
    pub fn select<R>(&self, selector: impl FnOnce(&AppState) -> R) -> R {
        selector(&self.inner.state.read())
    }

    /// Snapshot of the whole state.
    pub fn state(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Register a listener called with the new state after every dispatch.
    pub fn subscribe(&self, listener: impl Fn(&AppState) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::cart::CartAction;
    use crate::slices::user::UserAction;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn dispatch_updates_state_and_notifies() {
        let store = Store::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        store.subscribe(move |state| {
            assert!(state.cart.is_empty());
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CartAction::ClearCart);
        store.dispatch(UserAction::Logout);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = Store::default();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CartAction::ClearCart);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(CartAction::ClearCart);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_share_state() {
        let store = Store::default();
        let other = store.clone();
        other.dispatch(UserAction::Logout);
        assert_eq!(store.state(), other.state());
        assert!(!store.select(|s| s.users.loading));
    }
}
