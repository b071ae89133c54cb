use crate::error::AppError;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable, falling back to a default when it is
/// absent or cannot be parsed
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value to use when the variable is missing or unparseable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {env_var}: {val}, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Gets a required environment variable, failing when it is absent or empty
///
/// # Arguments
/// * `env_var` - Name of the environment variable
///
/// # Returns
/// * `Ok(String)` - The variable's value
/// * `Err(AppError::MissingEnvVar)` - If the variable is unset or empty
pub fn require_env(env_var: &'static str) -> Result<String, AppError> {
    match env::var(env_var) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(AppError::MissingEnvVar(env_var)),
    }
}
