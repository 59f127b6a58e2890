mod command_error;
mod param_relay_command;
mod relay;
mod relay_command;
mod requery_channel;

pub use command_error::{CommandError, CommandResult};
pub use param_relay_command::{ParamRelayCommand, ParamRelayCommandBuilder};
pub use relay_command::{RelayCommand, RelayCommandBuilder};
pub use requery_channel::{RequeryChannel, RequerySuggested};

use common::subject_observer::SharedObserver;

/// Invocable action exposed to a binding layer.
///
/// `execute` never consults `can_execute`: the caller decides whether to check
/// first, and [`execute_if_allowed`](Command::execute_if_allowed) does both.
pub trait Command {
    type Parameter;
    type Output;

    fn can_execute(&self, parameter: &Self::Parameter) -> bool;

    fn execute(&self, parameter: Self::Parameter) -> Self::Output;

    /// Listener for "can execute may have changed". Ignored by commands that
    /// are always executable.
    fn subscribe_can_execute_changed(&self, listener: SharedObserver<RequerySuggested>);

    fn unsubscribe_can_execute_changed(&self, listener: &SharedObserver<RequerySuggested>)
        -> bool;

    fn execute_if_allowed(&self, parameter: Self::Parameter) -> Option<Self::Output> {
        if self.can_execute(&parameter) {
            Some(self.execute(parameter))
        } else {
            None
        }
    }
}
