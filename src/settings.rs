use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub debug: bool,
    pub auth_token: String,
    pub enable_swagger: bool,
    pub port: u16,
    pub gym_title: String,
    pub default_class_capacity: usize,
    pub notification_message: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP").separator("_"))
            .set_default("debug", false)?
            .set_default("auth_token", "default-token-change-me")?
            .set_default("enable_swagger", true)?
            .set_default("port", 8080)?
            .set_default("gym_title", "Cardinal Fitness")?
            .set_default("default_class_capacity", 5)?
            .set_default(
                "notification_message",
                "Welcome to Cardinal Fitness! Your membership is now active.",
            )?
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validated()
    }

    /// A class that can hold nobody is a configuration mistake, caught at
    /// startup rather than on first enrollment.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.default_class_capacity == 0 {
            return Err(ConfigError::Message(
                "default_class_capacity must be at least 1".into(),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings() -> Settings {
        Settings {
            debug: false,
            auth_token: "secret".to_string(),
            enable_swagger: true,
            port: 8080,
            gym_title: "Cardinal Fitness".to_string(),
            default_class_capacity: 5,
            notification_message: "Welcome!".to_string(),
        }
    }

    #[test]
    fn test_validated_accepts_positive_capacity() {
        assert!(base_settings().validated().is_ok());
    }

    #[test]
    fn test_validated_rejects_zero_capacity() {
        let settings = Settings {
            default_class_capacity: 0,
            ..base_settings()
        };
        assert!(settings.validated().is_err());
    }
}
