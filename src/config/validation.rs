//! Runtime configuration for the customer validation rules.
//!
//! Supplied once at startup and immutable afterwards. Missing or unparsable
//! settings abort initialisation rather than surfacing per request.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::{
    constants,
    error::{ServiceError, ServiceResult},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub minimum_name_length: usize,
    pub maximum_name_length: usize,
    pub policy_reference_pattern: String,
    pub email_pattern: String,
    pub minimum_customer_age: u32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            minimum_name_length: constants::DEFAULT_MINIMUM_NAME_LENGTH,
            maximum_name_length: constants::DEFAULT_MAXIMUM_NAME_LENGTH,
            policy_reference_pattern: constants::DEFAULT_POLICY_REFERENCE_PATTERN.to_string(),
            email_pattern: constants::DEFAULT_EMAIL_PATTERN.to_string(),
            minimum_customer_age: constants::DEFAULT_MINIMUM_CUSTOMER_AGE,
        }
    }
}

impl ValidatorConfig {
    /// Reads the VALIDATION_* overrides, falling back to the defaults.
    pub fn from_env() -> ServiceResult<Self> {
        let defaults = Self::default();
        let config = Self {
            minimum_name_length: read_env(
                constants::ENV_MINIMUM_NAME_LENGTH,
                defaults.minimum_name_length,
            )?,
            maximum_name_length: read_env(
                constants::ENV_MAXIMUM_NAME_LENGTH,
                defaults.maximum_name_length,
            )?,
            policy_reference_pattern: env::var(constants::ENV_POLICY_REFERENCE_PATTERN)
                .unwrap_or(defaults.policy_reference_pattern),
            email_pattern: env::var(constants::ENV_EMAIL_PATTERN)
                .unwrap_or(defaults.email_pattern),
            minimum_customer_age: read_env(
                constants::ENV_MINIMUM_CUSTOMER_AGE,
                defaults.minimum_customer_age,
            )?,
        };
        config.ensure_consistent()?;
        Ok(config)
    }

    fn ensure_consistent(&self) -> ServiceResult<()> {
        if self.minimum_name_length > self.maximum_name_length {
            return Err(
                ServiceError::internal_server_error("Invalid validation configuration")
                    .with_context(|ctx| {
                        ctx.with_tag("validation").with_detail(format!(
                            "minimum name length {} exceeds maximum name length {}",
                            self.minimum_name_length, self.maximum_name_length
                        ))
                    }),
            );
        }
        Ok(())
    }
}

fn read_env<T>(key: &str, default: T) -> ServiceResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().map_err(|err| {
            ServiceError::internal_server_error("Invalid validation configuration").with_context(
                |ctx| {
                    ctx.with_tag("validation")
                        .with_metadata("key", key)
                        .with_detail(format!("failed to parse {}: {}", key, err))
                },
            )
        }),
        Err(_) => Ok(default),
    }
}
