use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PersonError {
    #[error("{0} must not be blank")]
    BlankName(&'static str),
    #[error("{property} is longer than {max} characters")]
    NameTooLong { property: &'static str, max: usize },
    #[error("The person editor was closed")]
    EditorClosed,
}
