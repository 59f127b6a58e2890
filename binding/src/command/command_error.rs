use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Invalid command: an execute action is required")]
    MissingAction,
}

pub type CommandResult<C> = Result<C, CommandError>;
