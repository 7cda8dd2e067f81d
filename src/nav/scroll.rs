use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::{ev, prelude::window};
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};

pub type ScrollListener = Arc<dyn Fn(f64) + Send + Sync>;

/// Anything that can report vertical scroll offsets.
pub trait ScrollSource {
    /// Registers `listener` until the returned subscription is released or dropped.
    fn subscribe(&self, listener: ScrollListener) -> ScrollSubscription;
}

/// Keeps a scroll listener registered. Releasing happens once, on whichever comes first of
/// [`ScrollSubscription::release`] or drop.
#[must_use = "dropping the subscription deregisters the listener"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            log::debug!("scroll listener released");
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

/// Browser scroll events on `window`. Does nothing while rendering on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn subscribe(&self, listener: ScrollListener) -> ScrollSubscription {
        let stop = use_event_listener_with_options(
            use_window(),
            ev::scroll,
            move |_| {
                let offset = window().scroll_y().unwrap_or_default();
                listener(offset);
            },
            UseEventListenerOptions::default().passive(true),
        );
        ScrollSubscription::new(stop)
    }
}

#[derive(Default)]
struct HubListeners {
    next_id: u64,
    entries: Vec<(u64, ScrollListener)>,
}

/// In-process scroll signal for hosts without a window.
#[derive(Clone, Default)]
pub struct ScrollHub {
    listeners: Arc<Mutex<HubListeners>>,
}

impl ScrollHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `offset` to every registered listener, in registration order.
    pub fn dispatch(&self, offset: f64) {
        // snapshot so listeners are free to touch the hub
        let listeners = {
            let guard = self.lock();
            guard
                .entries
                .iter()
                .map(|(_, l)| l.clone())
                .collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(offset);
        }
    }

    fn lock(&self) -> MutexGuard<'_, HubListeners> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn listener_count(&self) -> usize {
        self.lock().entries.len()
    }
}

impl ScrollSource for ScrollHub {
    fn subscribe(&self, listener: ScrollListener) -> ScrollSubscription {
        let id = {
            let mut guard = self.lock();
            let id = guard.next_id;
            guard.next_id += 1;
            guard.entries.push((id, listener));
            id
        };
        let listeners = Arc::clone(&self.listeners);
        ScrollSubscription::new(move || {
            // a listener that panicked must not keep others registered
            listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .entries
                .retain(|(i, _)| *i != id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_listener(count: &Arc<AtomicUsize>) -> ScrollListener {
        let count = Arc::clone(count);
        Arc::new(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_hub_dispatches_to_live_listeners() {
        let hub = ScrollHub::new();
        let count = Arc::new(AtomicUsize::new(0));
        let sub = hub.subscribe(counting_listener(&count));
        assert_eq!(hub.listener_count(), 1);

        hub.dispatch(10.0);
        hub.dispatch(80.0);
        assert_eq!(count.load(Ordering::SeqCst), 2);

        sub.release();
        assert_eq!(hub.listener_count(), 0);
        hub.dispatch(90.0);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_releases() {
        let hub = ScrollHub::new();
        let count = Arc::new(AtomicUsize::new(0));
        {
            let _sub = hub.subscribe(counting_listener(&count));
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
        hub.dispatch(1.0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_release_only_removes_own_listener() {
        let hub = ScrollHub::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let a = hub.subscribe(counting_listener(&first));
        let _b = hub.subscribe(counting_listener(&second));
        drop(a);
        hub.dispatch(5.0);
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn test_release_after_poisoned_lock() {
        let hub = ScrollHub::new();
        let count = Arc::new(AtomicUsize::new(0));
        let sub = hub.subscribe(counting_listener(&count));

        let listeners = Arc::clone(&hub.listeners);
        let res = std::thread::spawn(move || {
            let _guard = listeners.lock().unwrap();
            panic!("listener panicked while holding the hub");
        })
        .join();
        assert!(res.is_err());
        assert!(hub.listeners.is_poisoned());

        drop(sub);
        assert_eq!(hub.listener_count(), 0);
        hub.dispatch(60.0);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_release_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let sub = {
            let calls = Arc::clone(&calls);
            ScrollSubscription::new(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            })
        };
        sub.release();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
