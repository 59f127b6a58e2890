use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(range(min = 1, max = 256))]
    pub max_name_length: usize,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;

    use super::AppConfig;

    #[test]
    fn test_new() {
        temp_env::with_var_unset("APP_MAX_NAME_LENGTH", || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(ref x) if x.first_name == "Ada" && x.max_name_length == 32),
                "By default, it should return the embedded config"
            );
        });

        temp_env::with_var("APP_MAX_NAME_LENGTH", Some("8"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Ok(x) if x.max_name_length == 8),
                "Should take into account env vars"
            )
        });

        temp_env::with_var("APP_MAX_NAME_LENGTH", Some("invalid"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "Should return error when config is not valid"
            )
        });
    }

    #[test]
    fn test_new_should_validate_values() {
        temp_env::with_var("APP_MAX_NAME_LENGTH", Some("0"), || {
            let result = AppConfig::new();
            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "Should refuse a zero name length"
            )
        });
    }
}
