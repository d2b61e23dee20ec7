/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable and parses it, falling back to `default`
///
/// Unset and blank variables yield the default silently. Values that do not
/// parse are logged and also yield the default.
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - Value used when the variable is unset, blank or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Display,
{
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => match val.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("Failed to parse {}={:?} ({}), using default", env_var, val, e);
                default
            }
        },
        _ => default,
    }
}
