pub mod person_editor;
mod person_error;

pub use person_editor::{Person, PersonEditor, PersonProperty, SharedPersonEditor};
pub use person_error::PersonError;
