//! Single-threaded listener registry with RAII unsubscription.
//!
//! A [`Subscription`] removes its handler when dropped, so a component that
//! holds its subscriptions releases them on teardown no matter how the
//! teardown happens.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Handler<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Registry<E> {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(u64, Handler<E>)>>,
}

/// Broadcasts events of type `E` to every live subscriber, in subscription
/// order.
pub struct EventHub<E> {
    registry: Rc<Registry<E>>,
}

impl<E: 'static> EventHub<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry {
                next_id: Cell::new(0),
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn subscribe(&self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        let handler: Handler<E> = Rc::new(RefCell::new(handler));
        self.registry.handlers.borrow_mut().push((id, handler));

        let registry = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || remove(&registry, id))),
        }
    }

    /// Deliver `event` to the handlers subscribed when the call starts.
    ///
    /// Handlers unsubscribed by an earlier handler in the same dispatch are
    /// skipped.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<(u64, Handler<E>)> = self.registry.handlers.borrow().clone();
        for (id, handler) in snapshot {
            let still_subscribed = self
                .registry
                .handlers
                .borrow()
                .iter()
                .any(|(live, _)| *live == id);
            if !still_subscribed {
                continue;
            }
            // A handler re-entering its own hub would alias; skip instead.
            if let Ok(mut guard) = handler.try_borrow_mut() {
                (&mut *guard)(event);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.handlers.borrow().len()
    }
}

impl<E: 'static> Default for EventHub<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn remove<E>(registry: &Weak<Registry<E>>, id: u64) {
    if let Some(registry) = registry.upgrade() {
        registry.handlers.borrow_mut().retain(|(live, _)| *live != id);
    }
}

/// Handle to a live subscription. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap an arbitrary release action, e.g. removing a DOM listener.
    pub fn from_release(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.release.is_some())
            .finish()
    }
}
