pub mod command;
pub mod observable;

pub use common::subject_observer::{Observer, SharedObserver, Subject};
