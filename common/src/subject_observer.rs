use std::{cell::RefCell, fmt, rc::Rc};

use log::trace;

pub trait Observer<E> {
    fn update(&self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: Fn(&E),
{
    fn update(&self, event: &E) {
        self(event)
    }
}

pub type SharedObserver<E> = Rc<dyn Observer<E>>;

pub trait Subject<E> {
    fn register_observer(&self, observer: SharedObserver<E>);

    /// Returns `false` when the observer was not registered.
    fn unregister_observer(&self, observer: &SharedObserver<E>) -> bool;

    fn notify_observers(&self, event: E);
}

/// Ordered observer registry.
///
/// Observers are identified by their `Rc` allocation and notified in
/// registration order. Notification walks a snapshot of the list taken when
/// the broadcast starts and holds no borrow while an observer runs, so an
/// observer may register or unregister observers (itself included) from
/// within `update`. Such changes apply to the next broadcast only.
pub struct Observers<E> {
    observers: RefCell<Vec<SharedObserver<E>>>,
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Observers {
            observers: RefCell::new(vec![]),
        }
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    pub fn contains(&self, observer: &SharedObserver<E>) -> bool {
        self.observers
            .borrow()
            .iter()
            .any(|obs| Rc::ptr_eq(obs, observer))
    }

    fn snapshot(&self) -> Vec<SharedObserver<E>> {
        self.observers.borrow().clone()
    }
}

impl<E> Subject<E> for Observers<E> {
    fn register_observer(&self, observer: SharedObserver<E>) {
        self.observers.borrow_mut().push(observer);
    }

    // Registering the same observer twice means it has to be unregistered
    // twice; the most recent registration goes first.
    fn unregister_observer(&self, observer: &SharedObserver<E>) -> bool {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().rposition(|obs| Rc::ptr_eq(obs, observer)) {
            Some(index) => {
                observers.remove(index);
                true
            }
            None => false,
        }
    }

    fn notify_observers(&self, event: E) {
        let observers = self.snapshot();
        trace!("Notifying {} observer(s)", observers.len());
        for obs in &observers {
            obs.update(&event);
        }
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.len())
            .finish()
    }
}
