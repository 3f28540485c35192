//! Typed environment variable lookups with file-based secrets support
//!
//! `envlookup` reads configuration values and secrets from environment
//! variables. Any value can instead be supplied through a file: when
//! `{KEY}_FILE` holds a path, the file's contents become the value of `KEY`.
//! This is how Kubernetes Secrets and Docker Secrets are usually mounted.
//!
//! # Resolution
//!
//! 1. `{KEY}_FILE` set to a non-empty path: the whole file, untrimmed
//! 2. `KEY` set to a non-empty value: that value
//! 3. Otherwise absent
//!
//! An empty variable counts as unset. A `{KEY}_FILE` pointing at an
//! unreadable file is always an error, even for lookups with a default.
//!
//! # Accessors
//!
//! | Type | With default | Required |
//! |------|--------------|----------|
//! | `String` | [`Env::get_or`] | [`Env::get_required`] |
//! | `bool` (`true`/`false`/`1`/`0`) | [`Env::get_bool_or`] | [`Env::get_bool_required`] |
//! | `isize` | [`Env::get_int_or`] | [`Env::get_int_required`] |
//! | `i32` | [`Env::get_i32_or`] | [`Env::get_i32_required`] |
//! | `i64` | [`Env::get_i64_or`] | [`Env::get_i64_required`] |
//! | `Vec<String>` (comma separated) | [`Env::get_slice_or`] | [`Env::get_slice_required`] |
//! | any `FromStr` | [`Env::get_parsed_or`] | [`Env::get_parsed_required`] |
//! | JSON | [`Env::get_json_or`] | [`Env::get_json_required`] |
//! | secret `String` | [`Env::get_secret_or`] | [`Env::get_secret_required`] |
//! | secret `u64` | [`Env::get_secret_u64_or`] | [`Env::get_secret_u64_required`] |
//!
//! A present value that fails to parse is an error in both columns.
//!
//! # Example
//!
//! ```rust
//! use envlookup::Env;
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! let env = Env::system();
//!
//! let database_url = env.get_required("DATABASE_URL")?;
//! let port = env.get_i32_or("PORT", 8080)?;
//! let debug = env.get_bool_or("DEBUG", false)?;
//!
//! assert_eq!(database_url, "postgres://localhost/db");
//! assert_eq!(port, 8080);
//! assert!(!debug);
//! #     Ok(())
//! # }
//! ```
//!
//! # Testing
//!
//! [`Env`] is generic over a [`ReadEnv`] source. Use [`MapEnv`] to test
//! without touching the process environment:
//!
//! ```rust
//! use envlookup::{Env, EnvError, MapEnv};
//!
//! let env = Env::new(MapEnv::new().with("HOSTS", "a,b,c"));
//! assert_eq!(env.get_slice_required("HOSTS").unwrap(), vec!["a", "b", "c"]);
//! assert!(matches!(
//!     env.get_required("MISSING"),
//!     Err(EnvError::MissingConfiguration { .. })
//! ));
//! ```
//!
//! # Logging
//!
//! Each resolution emits `tracing` debug events naming the key and where
//! the value came from. Values themselves are never logged.

mod config;
mod error;
mod resolve;
mod secret;
mod source;

pub use config::Env;
pub use error::{EnvError, Result};
pub use secret::{read_secret_from_file, read_secret_u64_from_file};
pub use source::{MapEnv, ReadEnv, SystemEnv};
