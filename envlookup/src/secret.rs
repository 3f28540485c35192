//! Secret accessors
//!
//! Secrets resolve exactly like any other value (`{KEY}_FILE` first, then
//! `KEY`). These accessors exist so call sites read as what they load, and
//! to cover the `u64` secrets some services use as numeric keys.

use crate::config::{or_default, required, Env};
use crate::error::Result;
use crate::resolve::{parse_u64, read_file};
use crate::source::ReadEnv;
use std::path::Path;

impl<E: ReadEnv> Env<E> {
    pub fn get_secret_required(&self, key: &str) -> Result<String> {
        self.get_required(key)
    }

    pub fn get_secret_or(&self, key: &str, default: impl Into<String>) -> Result<String> {
        self.get_or(key, default)
    }

    /// Unsigned base-10 secret, no sign allowed.
    pub fn get_secret_u64_required(&self, key: &str) -> Result<u64> {
        required(key, self.get_secret_u64(key)?)
    }

    pub fn get_secret_u64_or(&self, key: &str, default: u64) -> Result<u64> {
        Ok(or_default(key, self.get_secret_u64(key)?, || default))
    }

    fn get_secret_u64(&self, key: &str) -> Result<Option<u64>> {
        self.lookup(key)?
            .map(|value| parse_u64(key, &value))
            .transpose()
    }
}

/// Read a secret straight from a file, untrimmed.
///
/// Fails with [`EnvError::MissingSecretFile`](crate::EnvError::MissingSecretFile)
/// if the file cannot be read.
pub fn read_secret_from_file(path: impl AsRef<Path>) -> Result<String> {
    read_file(path.as_ref())
}

/// Read a `u64` secret straight from a file.
///
/// Parse failures are reported against the file path.
pub fn read_secret_u64_from_file(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    parse_u64(&path.display().to_string(), &contents)
}
