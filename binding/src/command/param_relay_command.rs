use std::{fmt, rc::Rc};

use common::subject_observer::SharedObserver;

use super::{
    relay::{Permission, Relay, RelayParts},
    Command, CommandResult, RequeryChannel, RequerySuggested,
};

const KIND: &str = "Parameterized relay command";

/// Command taking a `P` parameter, relaying to a closure.
pub struct ParamRelayCommand<P, R = ()> {
    relay: Relay<P, R>,
}

impl<P, R> ParamRelayCommand<P, R> {
    pub fn new<A>(action: A) -> Self
    where
        A: Fn(P) -> R + 'static,
    {
        ParamRelayCommand {
            relay: Relay::new(KIND, Box::new(action), None),
        }
    }

    pub fn with_can_execute<A, C>(
        action: A,
        can_execute: C,
        channel: &Rc<RequeryChannel>,
    ) -> Self
    where
        A: Fn(P) -> R + 'static,
        C: Fn(&P) -> bool + 'static,
    {
        let permission = Permission::new(Box::new(can_execute), channel);
        ParamRelayCommand {
            relay: Relay::new(KIND, Box::new(action), Some(permission)),
        }
    }

    pub fn builder() -> ParamRelayCommandBuilder<P, R> {
        ParamRelayCommandBuilder::default()
    }

    pub fn has_can_execute(&self) -> bool {
        self.relay.has_can_execute()
    }
}

impl<P, R> Command for ParamRelayCommand<P, R> {
    type Parameter = P;
    type Output = R;

    fn can_execute(&self, parameter: &P) -> bool {
        self.relay.can_execute(parameter)
    }

    fn execute(&self, parameter: P) -> R {
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

impl<P, R> fmt::Debug for ParamRelayCommand<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamRelayCommand")
            .field("parameter", &std::any::type_name::<P>())
            .field("has_can_execute", &self.has_can_execute())
            .finish()
    }
}

pub struct ParamRelayCommandBuilder<P, R = ()> {
    parts: RelayParts<P, R>,
}

impl<P, R> Default for ParamRelayCommandBuilder<P, R> {
    fn default() -> Self {
        ParamRelayCommandBuilder {
            parts: RelayParts::default(),
        }
    }
}

impl<P, R> ParamRelayCommandBuilder<P, R> {
    pub fn execute<A>(mut self, action: A) -> Self
    where
        A: Fn(P) -> R + 'static,
    {
        self.parts.action = Some(Box::new(action));
        self
    }

    pub fn can_execute<C>(mut self, can_execute: C, channel: &Rc<RequeryChannel>) -> Self
    where
        C: Fn(&P) -> bool + 'static,
    {
        self.parts.permission = Some(Permission::new(Box::new(can_execute), channel));
        self
    }

    pub fn build(self) -> CommandResult<ParamRelayCommand<P, R>> {
        let relay = self.parts.build(KIND)?;
        Ok(ParamRelayCommand { relay })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use common::subject_observer::{Observer, SharedObserver};
    use common_test::EventRecorder;
    use mockall::{mock, predicate::eq};

    use crate::command::{Command, CommandError, RequeryChannel, RequerySuggested};

    use super::ParamRelayCommand;

    mock! {
        Handler {
            fn handle(&self, value: Option<String>);
        }
    }

    mock! {
        Listener {}

        impl Observer<RequerySuggested> for Listener {
            fn update(&self, event: &RequerySuggested);
        }
    }

    #[test]
    fn test_execute_should_pass_parameter_unchanged() {
        // Given
        let mut handler = MockHandler::new();
        handler
            .expect_handle()
            .with(eq(Some(String::from("payload"))))
            .times(1)
            .return_const(());
        let command = ParamRelayCommand::new(move |value| handler.handle(value));

        // When
        command.execute(Some(String::from("payload")));
    }

    #[test]
    fn test_execute_should_run_even_when_not_allowed() {
        // Given
        let received = Rc::new(RefCell::new(vec![]));
        let command = {
            let received = received.clone();
            ParamRelayCommand::with_can_execute(
                move |value: u32| received.borrow_mut().push(value),
                |_| false,
                &RequeryChannel::shared(),
            )
        };

        // When
        command.execute(7);
        let guarded = command.execute_if_allowed(8);

        // Then
        assert!(!command.can_execute(&7));
        assert_eq!(None, guarded);
        assert_eq!(vec![7], *received.borrow(), "No implicit veto on execute");
    }

    #[test]
    fn test_can_execute_should_evaluate_predicate_with_parameter() {
        // Given
        let command = ParamRelayCommand::with_can_execute(
            |value: i64| value * 2,
            |value| *value > 0,
            &RequeryChannel::shared(),
        );

        // Then
        assert!(command.can_execute(&1));
        assert!(!command.can_execute(&-1));
        assert_eq!(Some(4), command.execute_if_allowed(2));
    }

    #[test]
    fn test_can_execute_should_accept_missing_parameter() {
        // Given
        let command = ParamRelayCommand::<Option<&str>>::builder()
            .execute(|_| ())
            .can_execute(|value| value.is_none(), &RequeryChannel::shared())
            .build()
            .unwrap();

        // Then
        assert!(command.can_execute(&None));
        assert!(!command.can_execute(&Some("x")));
    }

    #[test]
    fn test_command_without_predicate_should_always_be_executable() {
        // Given
        let command = ParamRelayCommand::new(|value: String| value.len());

        // Then
        assert!(!command.has_can_execute());
        assert!(command.can_execute(&String::new()));
        assert_eq!(Some(3), command.execute_if_allowed(String::from("abc")));
    }

    #[test]
    fn test_command_without_predicate_should_ignore_listeners() {
        // Given
        let channel = RequeryChannel::shared();
        let command = ParamRelayCommand::new(|value: u8| value);
        let mut listener = MockListener::new();
        listener.expect_update().times(0).return_const(());
        let listener: SharedObserver<RequerySuggested> = Rc::new(listener);

        // When
        command.subscribe_can_execute_changed(listener.clone());
        channel.trigger();

        // Then
        assert!(
            !command.unsubscribe_can_execute_changed(&listener),
            "Nothing should have been attached"
        );
        assert_eq!(0, channel.listener_count());
        assert_eq!(1, Rc::strong_count(&listener), "Listener should not be kept");
    }

    #[test]
    fn test_builder_without_action_should_fail() {
        // When
        let result = ParamRelayCommand::<u8>::builder().build();

        // Then
        assert!(matches!(result, Err(CommandError::MissingAction)));
    }

    #[test]
    fn test_listeners_should_follow_shared_channel() {
        // Given
        let channel = RequeryChannel::shared();
        let first = ParamRelayCommand::with_can_execute(|_: u8| (), |_| true, &channel);
        let second = ParamRelayCommand::with_can_execute(|_: u8| (), |_| true, &channel);
        let recorder = EventRecorder::<RequerySuggested>::new();
        first.subscribe_can_execute_changed(recorder.as_observer());
        second.subscribe_can_execute_changed(recorder.as_observer());

        // When
        channel.trigger();
        drop(first);
        channel.trigger();

        // Then
        assert_eq!(
            3,
            recorder.count(),
            "Every trigger should reach the listeners of live commands"
        );
        drop(second);
        assert_eq!(0, channel.listener_count());
    }
}
