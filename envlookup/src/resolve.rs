//! Value resolution and parsing shared by every accessor

use crate::error::{EnvError, Result};
use crate::source::ReadEnv;
use std::env::VarError;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Suffix of the sibling variable holding a file path.
pub(crate) const FILE_SUFFIX: &str = "_FILE";

/// Name of the `{key}_FILE` sibling variable.
pub(crate) fn file_var_name(key: &str) -> String {
    format!("{key}{FILE_SUFFIX}")
}

/// Resolve `key` to its raw string value.
///
/// Priority order:
/// 1. File named by `{key}_FILE` (contents returned untrimmed)
/// 2. Direct variable `key`
/// 3. `None`
///
/// Empty values are treated as unset at both steps. An empty file counts as
/// unset too and does not fall through to `key`.
pub(crate) fn resolve<E: ReadEnv>(env: &E, key: &str) -> Result<Option<String>> {
    let file_var = file_var_name(key);
    if let Some(path) = read_var(env, &file_var)? {
        let contents = read_file(Path::new(&path))?;
        if contents.is_empty() {
            tracing::debug!(key, file_var = %file_var, "file is empty");
            return Ok(None);
        }
        tracing::debug!(key, file_var = %file_var, "resolved from file");
        return Ok(Some(contents));
    }

    let value = read_var(env, key)?;
    if value.is_some() {
        tracing::debug!(key, "resolved from environment");
    } else {
        tracing::debug!(key, "not set");
    }
    Ok(value)
}

fn read_var<E: ReadEnv>(env: &E, key: &str) -> Result<Option<String>> {
    match env.var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        // VarError's own message embeds the raw value
        Err(VarError::NotUnicode(_)) => Err(EnvError::type_mismatch::<String>(
            key,
            "value is not valid unicode",
        )),
    }
}

/// Read a whole file as UTF-8 text.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        tracing::debug!(path = %path.display(), error = %source, "failed to read file");
        EnvError::MissingSecretFile {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Parse using `FromStr`, reporting failures against `name`.
pub(crate) fn parse_value<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse::<T>()
        .map_err(|e| EnvError::type_mismatch::<T>(name, e))
}

/// Boolean grammar: `true`/`1` and `false`/`0`, nothing else.
pub(crate) fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(EnvError::type_mismatch::<bool>(
            name,
            "expected one of 'true', 'false', '1', '0'",
        )),
    }
}

/// Unsigned base-10 integer, no sign allowed.
pub(crate) fn parse_u64(name: &str, value: &str) -> Result<u64> {
    if value.starts_with('+') {
        return Err(EnvError::type_mismatch::<u64>(name, "sign not allowed"));
    }
    parse_value(name, value)
}

/// Split on `,` without trimming.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_owned).collect()
}
