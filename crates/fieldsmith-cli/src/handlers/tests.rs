// Tests for the command handlers
//
// Copyright (c) 2025 Fieldsmith Team
// Licensed under the Apache-2.0 license

use super::check::load_object;
use super::completions::write_completions;
use super::*;
use crate::cli::{CheckArgs, CompletionsArgs, ModeArg, Shell, UserArgs};
use crate::error::Error;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tempfile::TempDir;

const ID: &str = "5f0c3a0e-8d4b-4c1e-9a57-2f6d1b3e4a90";

#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn output(format: OutputFormat) -> (OutputWriter, SharedBuf) {
    let buf = SharedBuf::default();
    (
        OutputWriter::with_writer(format, false, false, Box::new(buf.clone())),
        buf,
    )
}

fn user_args(age: i64, mode: ModeArg) -> UserArgs {
    UserArgs {
        id: Some(ID.to_string()),
        name: Some("Alice".to_string()),
        age: Some(age),
        email: Some("alice@example.com".to_string()),
        mode: Some(mode),
    }
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_user_command_prints_record() {
    let (mut out, buf) = output(OutputFormat::Json);
    handle_user(user_args(25, ModeArg::Strict), &Config::default(), &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_str(buf.text().trim()).unwrap();
    assert_eq!(value["name"], "Alice");
    assert_eq!(value["age"], 25);
    assert_eq!(value["id"], ID);
}

#[test]
fn test_user_command_generates_id() {
    let mut args = user_args(25, ModeArg::Strict);
    args.id = None;
    let (mut out, buf) = output(OutputFormat::Json);
    handle_user(args, &Config::default(), &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_str(buf.text().trim()).unwrap();
    assert_eq!(value["id"].as_str().unwrap().len(), 36);
}

#[test]
fn test_user_command_strict_failure() {
    let (mut out, buf) = output(OutputFormat::Json);
    let err = handle_user(user_args(-5, ModeArg::Strict), &Config::default(), &mut out)
        .unwrap_err();

    assert_eq!(err.exit_code(), 2);
    let value: serde_json::Value = serde_json::from_str(buf.text().trim()).unwrap();
    assert_eq!(value["scope"]["name"], "age");
}

#[test]
fn test_user_command_permissive_failure_reports_warnings() {
    let (mut out, buf) = output(OutputFormat::Human);
    let err = handle_user(user_args(-5, ModeArg::Permissive), &Config::default(), &mut out)
        .unwrap_err();

    match err {
        Error::Validation(error) => {
            assert!(error.is_object());
            assert_eq!(error.field_name(), Some("age"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(buf.text().contains("Validation warning for age"));
}

#[test]
fn test_user_command_missing_fields() {
    let args = UserArgs {
        id: Some(ID.to_string()),
        name: None,
        age: None,
        email: None,
        mode: Some(ModeArg::Strict),
    };
    let (mut out, _buf) = output(OutputFormat::Human);
    let err = handle_user(args, &Config::default(), &mut out).unwrap_err();

    assert!(err.to_string().contains("name"));
}

#[test]
fn test_check_command_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "user.yaml",
        &format!("id: {}\nname: Bob\nage: 41\nemail: bob@example.com\n", ID),
    );

    let (mut out, buf) = output(OutputFormat::Human);
    let args = CheckArgs {
        file: path,
        mode: Some(ModeArg::Strict),
    };
    handle_check(args, &Config::default(), &mut out).unwrap();

    let text = buf.text();
    assert!(text.contains("name   Bob"));
    assert!(text.contains("✓ Record is valid"));
}

#[test]
fn test_check_command_unknown_key() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "user.json", r#"{"nickname": "Bobby"}"#);

    let (mut out, _buf) = output(OutputFormat::Human);
    let args = CheckArgs {
        file: path,
        mode: Some(ModeArg::Permissive),
    };
    let err = handle_check(args, &Config::default(), &mut out).unwrap_err();

    match err {
        Error::Validation(error) => assert_eq!(error.violations[0].rule, "unknown_field"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_check_respects_hidden_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "bad.json",
        &format!(r#"{{"id": "{}", "name": "", "age": 30, "email": "eve@example.com"}}"#, ID),
    );
    let mut config = Config::default();
    config.output.show_warnings = false;

    let (mut out, buf) = output(OutputFormat::Human);
    let args = CheckArgs {
        file: path,
        mode: Some(ModeArg::Permissive),
    };
    assert!(handle_check(args, &config, &mut out).is_err());
    assert!(!buf.text().contains("warning"));
}

#[test]
fn test_load_object_errors() {
    let dir = TempDir::new().unwrap();

    let missing = load_object(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(missing, Error::FileNotFound { .. }));

    let directory = load_object(dir.path()).unwrap_err();
    assert!(directory.should_show_help());

    let toml = write_file(&dir, "user.toml", "name = 'x'");
    assert!(matches!(load_object(&toml), Err(Error::InvalidFormat { .. })));

    let list = write_file(&dir, "list.json", "[1, 2]");
    assert!(matches!(load_object(&list), Err(Error::InvalidFormat { .. })));

    let broken = write_file(&dir, "broken.json", "{");
    assert!(matches!(load_object(&broken), Err(Error::Json(_))));

    let broken = write_file(&dir, "broken.yaml", "name: [");
    assert!(matches!(load_object(&broken), Err(Error::Yaml(_))));
}

#[test]
fn test_completions_for_bash() {
    let mut buf = Vec::new();
    write_completions(CompletionsArgs { shell: Shell::Bash }, &mut buf).unwrap();

    let script = String::from_utf8(buf).unwrap();
    assert!(script.contains("fieldsmith"));
}
