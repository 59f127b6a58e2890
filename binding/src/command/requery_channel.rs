use std::{cell::RefCell, rc::Rc};

use common::subject_observer::{Observer, Observers, SharedObserver, Subject};
use log::trace;

/// Signal asking every command to re-evaluate whether it can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequerySuggested;

/// Application-wide "re-check all commands" broadcast.
///
/// The host builds one channel, shares it as `Rc<RequeryChannel>` with every
/// command that has a `can_execute` predicate and calls [`trigger`] whenever
/// something that may affect command permissions changed. The signal is not
/// diffed: every listener runs on every trigger.
///
/// [`trigger`]: RequeryChannel::trigger
#[derive(Debug, Default)]
pub struct RequeryChannel {
    observers: Observers<RequerySuggested>,
}

impl RequeryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    pub fn trigger(&self) {
        self.notify_observers(RequerySuggested);
    }

    pub fn listener_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject<RequerySuggested> for RequeryChannel {
    fn register_observer(&self, observer: SharedObserver<RequerySuggested>) {
        self.observers.register_observer(observer);
        trace!("Requery listener attached ({} total)", self.observers.len());
    }

    fn unregister_observer(&self, observer: &SharedObserver<RequerySuggested>) -> bool {
        let removed = self.observers.unregister_observer(observer);
        trace!("Requery listener detached ({} left)", self.observers.len());
        removed
    }

    fn notify_observers(&self, event: RequerySuggested) {
        self.observers.notify_observers(event);
    }
}

/// Channel registration standing for one listener attached by a command.
struct Forwarder {
    listener: SharedObserver<RequerySuggested>,
}

impl Observer<RequerySuggested> for Forwarder {
    fn update(&self, event: &RequerySuggested) {
        self.listener.update(event);
    }
}

/// Listeners a single command attached to a channel.
///
/// The channel only sees a forwarder per attached listener, so registrations
/// the host makes directly on the channel are never touched. Whatever is still
/// attached when the command goes away is detached.
pub(crate) struct RequeryListeners {
    channel: Rc<RequeryChannel>,
    attached: RefCell<Vec<Rc<Forwarder>>>,
}

impl RequeryListeners {
    pub(crate) fn new(channel: Rc<RequeryChannel>) -> Self {
        RequeryListeners {
            channel,
            attached: RefCell::new(vec![]),
        }
    }

    pub(crate) fn attach(&self, listener: SharedObserver<RequerySuggested>) {
        let forwarder = Rc::new(Forwarder { listener });
        self.attached.borrow_mut().push(forwarder.clone());
        self.channel.register_observer(forwarder);
    }

    pub(crate) fn detach(&self, listener: &SharedObserver<RequerySuggested>) -> bool {
        let mut attached = self.attached.borrow_mut();
        let position = attached
            .iter()
            .rposition(|forwarder| Rc::ptr_eq(&forwarder.listener, listener));
        match position {
            Some(index) => {
                let forwarder: SharedObserver<RequerySuggested> = attached.remove(index);
                drop(attached);
                self.channel.unregister_observer(&forwarder)
            }
            None => false,
        }
    }
}

impl Drop for RequeryListeners {
    fn drop(&mut self) {
        for forwarder in self.attached.get_mut().drain(..) {
            let forwarder: SharedObserver<RequerySuggested> = forwarder;
            self.channel.unregister_observer(&forwarder);
        }
    }
}
