use thiserror::Error;
use viewmodels::PersonError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("Save was not allowed: {0}")]
    SaveVetoed(String),
    #[error(transparent)]
    Person(#[from] PersonError),
}
