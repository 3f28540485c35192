//! Typed configuration accessors

use crate::error::{EnvError, Result};
use crate::resolve::{parse_bool, resolve, split_list};
use crate::source::{ReadEnv, SystemEnv};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::str::FromStr;

/// Typed lookups over an environment source.
///
/// Every accessor honors the `{KEY}_FILE` indirection. Each type comes in
/// two forms:
/// - `get_*_or(key, default)` returns `default` when the value is absent
/// - `get_*_required(key)` fails with [`EnvError::MissingConfiguration`]
///
/// Both forms fail with [`EnvError::TypeMismatch`] when a value is present
/// but malformed; a default never hides a bad value.
#[derive(Debug, Clone, Default)]
pub struct Env<E = SystemEnv> {
    source: E,
}

impl Env<SystemEnv> {
    /// Accessor over the process environment.
    pub fn system() -> Self {
        Self { source: SystemEnv }
    }
}

impl<E: ReadEnv> Env<E> {
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// Resolve the raw string value of `key`, or `None` if absent.
    ///
    /// `{key}_FILE` wins over `key` when both are set. File contents are
    /// returned as-is, including any trailing newline.
    pub fn lookup(&self, key: &str) -> Result<Option<String>> {
        resolve(&self.source, key)
    }

    pub fn get_or(&self, key: &str, default: impl Into<String>) -> Result<String> {
        Ok(or_default(key, self.lookup(key)?, || default.into()))
    }

    pub fn get_required(&self, key: &str) -> Result<String> {
        required(key, self.lookup(key)?)
    }

    /// Parse with `FromStr`, `None` if absent.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get_with(key, str::parse::<T>)
    }

    pub fn get_parsed_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        Ok(or_default(key, self.get_parsed(key)?, || default))
    }

    pub fn get_parsed_required<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        required(key, self.get_parsed(key)?)
    }

    /// Parse with a caller-supplied deserializer, `None` if absent.
    ///
    /// ```rust
    /// use envlookup::{Env, MapEnv};
    ///
    /// fn parse_level(s: &str) -> Result<u8, String> {
    ///     match s {
    ///         "low" => Ok(1),
    ///         "high" => Ok(9),
    ///         other => Err(format!("unknown level {other}")),
    ///     }
    /// }
    ///
    /// let env = Env::new(MapEnv::new().with("LEVEL", "high"));
    /// assert_eq!(env.get_with("LEVEL", parse_level).unwrap(), Some(9));
    /// ```
    pub fn get_with<T, F, DE>(&self, key: &str, deserializer: F) -> Result<Option<T>>
    where
        F: FnOnce(&str) -> std::result::Result<T, DE>,
        DE: Display,
    {
        self.lookup(key)?
            .map(|value| {
                deserializer(value.as_str()).map_err(|e| EnvError::type_mismatch::<T>(key, e))
            })
            .transpose()
    }

    pub fn get_with_or<T, F, DE>(&self, key: &str, default: T, deserializer: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, DE>,
        DE: Display,
    {
        Ok(or_default(key, self.get_with(key, deserializer)?, || default))
    }

    pub fn get_with_required<T, F, DE>(&self, key: &str, deserializer: F) -> Result<T>
    where
        F: FnOnce(&str) -> std::result::Result<T, DE>,
        DE: Display,
    {
        required(key, self.get_with(key, deserializer)?)
    }

    /// Accepts `true`, `false`, `1` and `0`.
    pub fn get_bool_or(&self, key: &str, default: bool) -> Result<bool> {
        Ok(or_default(key, self.get_bool(key)?, || default))
    }

    pub fn get_bool_required(&self, key: &str) -> Result<bool> {
        required(key, self.get_bool(key)?)
    }

    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.lookup(key)?
            .map(|value| parse_bool(key, &value))
            .transpose()
    }

    /// Platform-width signed integer.
    pub fn get_int_or(&self, key: &str, default: isize) -> Result<isize> {
        self.get_parsed_or(key, default)
    }

    pub fn get_int_required(&self, key: &str) -> Result<isize> {
        self.get_parsed_required(key)
    }

    pub fn get_i32_or(&self, key: &str, default: i32) -> Result<i32> {
        self.get_parsed_or(key, default)
    }

    pub fn get_i32_required(&self, key: &str) -> Result<i32> {
        self.get_parsed_required(key)
    }

    pub fn get_i64_or(&self, key: &str, default: i64) -> Result<i64> {
        self.get_parsed_or(key, default)
    }

    pub fn get_i64_required(&self, key: &str) -> Result<i64> {
        self.get_parsed_required(key)
    }

    /// Comma-separated list, items are not trimmed.
    ///
    /// The default is returned as given when the value is absent.
    pub fn get_slice_or(&self, key: &str, default: Vec<String>) -> Result<Vec<String>> {
        let value = self.lookup(key)?.map(|value| split_list(&value));
        Ok(or_default(key, value, || default))
    }

    pub fn get_slice_required(&self, key: &str) -> Result<Vec<String>> {
        self.get_required(key).map(|value| split_list(&value))
    }

    /// JSON-encoded value.
    pub fn get_json_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        self.get_with_or(key, default, |s: &str| serde_json::from_str::<T>(s))
    }

    pub fn get_json_required<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.get_with_required(key, |s: &str| serde_json::from_str::<T>(s))
    }
}

pub(crate) fn or_default<T>(key: &str, value: Option<T>, default: impl FnOnce() -> T) -> T {
    value.unwrap_or_else(|| {
        tracing::debug!(key, "using default");
        default()
    })
}

pub(crate) fn required<T>(key: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| EnvError::missing(key))
}
