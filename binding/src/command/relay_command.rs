use std::{fmt, rc::Rc};

use common::subject_observer::SharedObserver;

use super::{
    relay::{Permission, Relay, RelayParts},
    Command, CommandResult, RequeryChannel, RequerySuggested,
};

const KIND: &str = "Relay command";

/// Command without parameter relaying to a closure.
///
/// Without a `can_execute` predicate the command is always executable and
/// never touches a [`RequeryChannel`].
pub struct RelayCommand<R = ()> {
    relay: Relay<(), R>,
}

impl<R> RelayCommand<R> {
    pub fn new<A>(action: A) -> Self
    where
        A: Fn() -> R + 'static,
    {
        RelayCommand {
            relay: Relay::new(KIND, Box::new(move |()| action()), None),
        }
    }

    pub fn with_can_execute<A, P>(
        action: A,
        can_execute: P,
        channel: &Rc<RequeryChannel>,
    ) -> Self
    where
        A: Fn() -> R + 'static,
        P: Fn() -> bool + 'static,
    {
        let permission = Permission::new(Box::new(move |_: &()| can_execute()), channel);
        RelayCommand {
            relay: Relay::new(KIND, Box::new(move |()| action()), Some(permission)),
        }
    }

    pub fn builder() -> RelayCommandBuilder<R> {
        RelayCommandBuilder::default()
    }

    pub fn has_can_execute(&self) -> bool {
        self.relay.has_can_execute()
    }
}

impl<R> Command for RelayCommand<R> {
    type Parameter = ();
    type Output = R;

    fn can_execute(&self, parameter: &()) -> bool {
        self.relay.can_execute(parameter)
    }

    fn execute(&self, parameter: ()) -> R {
        self.relay.execute(parameter)
    }

    fn subscribe_can_execute_changed(&self, listener: SharedObserver<RequerySuggested>) {
        self.relay.attach(listener);
    }

    fn unsubscribe_can_execute_changed(
        &self,
        listener: &SharedObserver<RequerySuggested>,
    ) -> bool {
        self.relay.detach(listener)
    }
}

impl<R> fmt::Debug for RelayCommand<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCommand")
            .field("has_can_execute", &self.has_can_execute())
            .finish()
    }
}

pub struct RelayCommandBuilder<R = ()> {
    parts: RelayParts<(), R>,
}

impl<R> Default for RelayCommandBuilder<R> {
    fn default() -> Self {
        RelayCommandBuilder {
            parts: RelayParts::default(),
        }
    }
}

impl<R> RelayCommandBuilder<R> {
    pub fn execute<A>(mut self, action: A) -> Self
    where
        A: Fn() -> R + 'static,
    {
        self.parts.action = Some(Box::new(move |()| action()));
        self
    }

    pub fn can_execute<P>(mut self, can_execute: P, channel: &Rc<RequeryChannel>) -> Self
    where
        P: Fn() -> bool + 'static,
    {
        let predicate = Box::new(move |_: &()| can_execute());
        self.parts.permission = Some(Permission::new(predicate, channel));
        self
    }

    pub fn build(self) -> CommandResult<RelayCommand<R>> {
        let relay = self.parts.build(KIND)?;
        Ok(RelayCommand { relay })
    }
}
