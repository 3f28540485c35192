//! Integration tests against the process environment

use envlookup::{Env, EnvError};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
#[serial]
fn test_get_or_prefers_set_value() {
    env::set_var("ENVLOOKUP_SERVER_ADDR", "0.0.0.0:9090");

    let value = Env::system()
        .get_or("ENVLOOKUP_SERVER_ADDR", "127.0.0.1:8080")
        .unwrap();
    assert_eq!(value, "0.0.0.0:9090");

    env::remove_var("ENVLOOKUP_SERVER_ADDR");
}

#[test]
#[serial]
fn test_get_or_default_when_unset() {
    env::remove_var("ENVLOOKUP_SERVER_ADDR");
    env::remove_var("ENVLOOKUP_SERVER_ADDR_FILE");

    let value = Env::system()
        .get_or("ENVLOOKUP_SERVER_ADDR", "127.0.0.1:8080")
        .unwrap();
    assert_eq!(value, "127.0.0.1:8080");
}

#[test]
#[serial]
fn test_missing_required() {
    env::remove_var("ENVLOOKUP_DATABASE_URL");
    env::remove_var("ENVLOOKUP_DATABASE_URL_FILE");

    let result = Env::system().get_required("ENVLOOKUP_DATABASE_URL");
    match result {
        Err(EnvError::MissingConfiguration { name }) => {
            assert_eq!(name, "ENVLOOKUP_DATABASE_URL");
        }
        _ => panic!("Expected MissingConfiguration error"),
    }
}

#[test]
#[serial]
fn test_file_based_value_is_exact() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "super_secret_key").unwrap();

    env::remove_var("ENVLOOKUP_SECRET_KEY");
    env::set_var("ENVLOOKUP_SECRET_KEY_FILE", temp_file.path());

    let value = Env::system()
        .get_secret_required("ENVLOOKUP_SECRET_KEY")
        .unwrap();
    assert_eq!(value, "super_secret_key\n");

    env::remove_var("ENVLOOKUP_SECRET_KEY_FILE");
}

#[test]
#[serial]
fn test_file_preferred_over_direct_var() {
    let temp_file = temp_file_with("file_value");

    env::set_var("ENVLOOKUP_SECRET_KEY", "direct_value");
    env::set_var("ENVLOOKUP_SECRET_KEY_FILE", temp_file.path());

    let value = Env::system().get_required("ENVLOOKUP_SECRET_KEY").unwrap();
    assert_eq!(value, "file_value");

    env::remove_var("ENVLOOKUP_SECRET_KEY");
    env::remove_var("ENVLOOKUP_SECRET_KEY_FILE");
}

#[test]
#[serial]
fn test_missing_file_fails_in_both_forms() {
    env::remove_var("ENVLOOKUP_SECRET_KEY");
    env::set_var("ENVLOOKUP_SECRET_KEY_FILE", "/nonexistent/file/path");

    let env = Env::system();
    assert!(matches!(
        env.get_required("ENVLOOKUP_SECRET_KEY"),
        Err(EnvError::MissingSecretFile { .. })
    ));
    assert!(matches!(
        env.get_or("ENVLOOKUP_SECRET_KEY", "default"),
        Err(EnvError::MissingSecretFile { .. })
    ));

    env::remove_var("ENVLOOKUP_SECRET_KEY_FILE");
}

#[test]
#[serial]
fn test_empty_file_var_falls_through() {
    env::set_var("ENVLOOKUP_TOKEN", "direct");
    env::set_var("ENVLOOKUP_TOKEN_FILE", "");

    let value = Env::system().get_required("ENVLOOKUP_TOKEN").unwrap();
    assert_eq!(value, "direct");

    env::remove_var("ENVLOOKUP_TOKEN");
    env::remove_var("ENVLOOKUP_TOKEN_FILE");
}

#[test]
#[serial]
fn test_round_trip_direct_and_file() {
    let cases = [
        ("ENVLOOKUP_RT_STR", "hello world"),
        ("ENVLOOKUP_RT_BOOL", "false"),
        ("ENVLOOKUP_RT_I32", "-2147483648"),
        ("ENVLOOKUP_RT_I64", "9223372036854775807"),
        ("ENVLOOKUP_RT_U64", "157816845615315818"),
        ("ENVLOOKUP_RT_LIST", "one,two,three,four"),
    ];

    let check = |env: &Env| {
        assert_eq!(env.get_required("ENVLOOKUP_RT_STR").unwrap(), "hello world");
        assert!(!env.get_bool_required("ENVLOOKUP_RT_BOOL").unwrap());
        assert_eq!(env.get_i32_required("ENVLOOKUP_RT_I32").unwrap(), i32::MIN);
        assert_eq!(env.get_i64_required("ENVLOOKUP_RT_I64").unwrap(), i64::MAX);
        assert_eq!(
            env.get_secret_u64_required("ENVLOOKUP_RT_U64").unwrap(),
            157_816_845_615_315_818
        );
        assert_eq!(
            env.get_slice_required("ENVLOOKUP_RT_LIST").unwrap(),
            vec!["one", "two", "three", "four"]
        );
    };

    for (key, value) in cases {
        env::set_var(key, value);
    }
    check(&Env::system());
    for (key, _) in cases {
        env::remove_var(key);
    }

    let files: Vec<NamedTempFile> = cases.iter().map(|(_, v)| temp_file_with(v)).collect();
    for ((key, _), file) in cases.iter().zip(&files) {
        env::set_var(format!("{key}_FILE"), file.path());
    }
    check(&Env::system());
    for (key, _) in cases {
        env::remove_var(format!("{key}_FILE"));
    }
}

#[test]
#[serial]
fn test_malformed_value_is_not_defaulted() {
    env::set_var("ENVLOOKUP_MAX_CONNECTIONS", "ten");

    let result = Env::system().get_i32_or("ENVLOOKUP_MAX_CONNECTIONS", 10);
    match result {
        Err(EnvError::TypeMismatch {
            name, type_name, ..
        }) => {
            assert_eq!(name, "ENVLOOKUP_MAX_CONNECTIONS");
            assert!(type_name.contains("i32"));
        }
        _ => panic!("Expected TypeMismatch error"),
    }

    env::remove_var("ENVLOOKUP_MAX_CONNECTIONS");
}

#[test]
#[serial]
fn test_error_message_does_not_leak_value() {
    env::set_var("ENVLOOKUP_NODE_KEY", "hunter2");

    let err = Env::system()
        .get_secret_u64_required("ENVLOOKUP_NODE_KEY")
        .unwrap_err();
    assert!(!err.to_string().contains("hunter2"));

    env::remove_var("ENVLOOKUP_NODE_KEY");
}
