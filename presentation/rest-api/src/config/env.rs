use std::env;
use std::str::FromStr;

use anyhow::{Context, anyhow};

/// Reads `key`, falling back to `default` when unset or empty.
pub fn var_or<T: FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(key, env::var(key).ok(), default)
}

pub fn required_var(key: &str) -> anyhow::Result<String> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| anyhow!("{} must be set", key))
}

pub fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .with_context(|| format!("{} has an invalid value: {}", key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_when_unset_or_blank() {
        assert_eq!(parse_or("JWT_TTL_MINUTES", None, 60_i64).unwrap(), 60);
        assert_eq!(
            parse_or("JWT_TTL_MINUTES", Some("  ".to_string()), 60_i64).unwrap(),
            60
        );
    }

    #[test]
    fn should_parse_present_value() {
        let value = parse_or("DATABASE_MAX_CONNECTIONS", Some(" 12 ".to_string()), 5_u32);

        assert_eq!(value.unwrap(), 12);
    }

    #[test]
    fn should_name_the_variable_on_parse_failure() {
        let err = parse_or("OTP_TTL_MINUTES", Some("ten".to_string()), 10_i64).unwrap_err();

        assert!(err.to_string().contains("OTP_TTL_MINUTES"));
    }
}
