use std::env;
use std::str::FromStr;
use tracing::warn;

/// Retrieves an environment variable and splits it into a vector of strings based on a delimiter.
///
/// Segments are trimmed and empty ones dropped.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `delimiter`: The character to split the environment variable's value by.
///
/// # Returns
/// - `Option<Vec<String>>`: `None` when the variable is not set.
pub fn get_env_var_as_vec(var: &str, delimiter: char) -> Option<Vec<String>> {
    env::var(var).ok().map(|value| {
        value
            .split(delimiter)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}

/// Reads and parses an environment variable, falling back to `default` when it
/// is unset or does not parse.
pub fn get_env_var_or<T: FromStr>(var: &str, default: T) -> T {
    match env::var(var) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparseable value '{}' for {}", value, var);
            default
        }),
        Err(_) => default,
    }
}
