use std::rc::Rc;

use common::subject_observer::SharedObserver;
use log::debug;

use super::{
    requery_channel::RequeryListeners, CommandError, CommandResult, RequeryChannel,
    RequerySuggested,
};

pub(crate) type Action<P, R> = Box<dyn Fn(P) -> R>;
pub(crate) type Predicate<P> = Box<dyn Fn(&P) -> bool>;

/// Predicate of a guarded command, tied to the channel its listeners go to.
pub(crate) struct Permission<P> {
    predicate: Predicate<P>,
    listeners: RequeryListeners,
}

impl<P> Permission<P> {
    pub(crate) fn new(predicate: Predicate<P>, channel: &Rc<RequeryChannel>) -> Self {
        Permission {
            predicate,
            listeners: RequeryListeners::new(channel.clone()),
        }
    }
}

/// Action and optional permission behind both relay commands.
pub(crate) struct Relay<P, R> {
    action: Action<P, R>,
    permission: Option<Permission<P>>,
}

impl<P, R> Relay<P, R> {
    pub(crate) fn new(
        kind: &'static str,
        action: Action<P, R>,
        permission: Option<Permission<P>>,
    ) -> Self {
        debug!("{} created (can_execute: {})", kind, permission.is_some());
        Relay { action, permission }
    }

    pub(crate) fn has_can_execute(&self) -> bool {
        self.permission.is_some()
    }

    pub(crate) fn can_execute(&self, parameter: &P) -> bool {
        self.permission
            .as_ref()
            .is_none_or(|permission| (permission.predicate)(parameter))
    }

    pub(crate) fn execute(&self, parameter: P) -> R {
        (self.action)(parameter)
    }

    pub(crate) fn attach(&self, listener: SharedObserver<RequerySuggested>) {
        if let Some(permission) = &self.permission {
            permission.listeners.attach(listener);
        }
    }

    pub(crate) fn detach(&self, listener: &SharedObserver<RequerySuggested>) -> bool {
        self.permission
            .as_ref()
            .is_some_and(|permission| permission.listeners.detach(listener))
    }
}

/// What a command builder collected so far.
pub(crate) struct RelayParts<P, R> {
    pub(crate) action: Option<Action<P, R>>,
    pub(crate) permission: Option<Permission<P>>,
}

impl<P, R> Default for RelayParts<P, R> {
    fn default() -> Self {
        RelayParts {
            action: None,
            permission: None,
        }
    }
}

impl<P, R> RelayParts<P, R> {
    pub(crate) fn build(self, kind: &'static str) -> CommandResult<Relay<P, R>> {
        let action = self.action.ok_or(CommandError::MissingAction)?;
        Ok(Relay::new(kind, action, self.permission))
    }
}
