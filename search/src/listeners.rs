use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::Weak;

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Listeners<E> {
    next_id: u64,
    entries: Vec<(u64, Callback<E>)>,
}

/// Document-level event source with scoped subscriptions.
///
/// Every [`EventHub::attach`] returns a [`ListenerGuard`]; the listener stays
/// registered exactly as long as the guard lives. Hubs are per document, so
/// two mounted inputs never share listener state.
pub struct EventHub<E> {
    listeners: Arc<Mutex<Listeners<E>>>,
}

impl<E> Default for EventHub<E> {
    fn default() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }
}

impl<E> Clone for EventHub<E> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

fn lock<E>(listeners: &Mutex<Listeners<E>>) -> MutexGuard<'_, Listeners<E>> {
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<E: 'static> EventHub<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach<F>(&self, listener: F) -> ListenerGuard
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let id = {
            let mut guard = lock(&self.listeners);
            let id = guard.next_id;
            guard.next_id += 1;
            guard.entries.push((id, Arc::new(listener)));
            id
        };
        let weak: Weak<Mutex<Listeners<E>>> = Arc::downgrade(&self.listeners);
        ListenerGuard {
            detach: Some(Box::new(move || {
                if let Some(listeners) = weak.upgrade() {
                    lock(&listeners).entries.retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    /// Delivers `event` to every attached listener in attach order.
    ///
    /// Listeners run outside the hub lock, so they may attach or detach.
    pub fn dispatch(&self, event: &E) {
        let snapshot: Vec<Callback<E>> = lock(&self.listeners)
            .entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in snapshot {
            callback(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).entries.len()
    }
}

/// Keeps a listener attached; dropping it detaches the listener.
#[must_use = "dropping the guard detaches the listener immediately"]
pub struct ListenerGuard {
    detach: Option<Box<dyn FnOnce() + Send>>,
}

impl ListenerGuard {
    pub fn detach(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    #[test]
    fn guard_scopes_the_listener() {
        let hub: EventHub<u32> = EventHub::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        let guard = hub.attach(move |value| {
            counter.fetch_add(*value as usize, Ordering::SeqCst);
        });
        hub.dispatch(&2);
        assert_eq!(hub.listener_count(), 1);

        drop(guard);
        hub.dispatch(&40);

        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn remounting_does_not_accumulate_listeners() {
        let hub: EventHub<()> = EventHub::new();
        for _ in 0..5 {
            let guard = hub.attach(|_| {});
            assert_eq!(hub.listener_count(), 1);
            guard.detach();
        }
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn guard_outliving_hub_is_harmless() {
        let hub: EventHub<()> = EventHub::new();
        let guard = hub.attach(|_| {});
        drop(hub);
        drop(guard);
    }
}
