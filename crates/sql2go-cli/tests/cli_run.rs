use clap::Parser;
use sql2go_cli::Cli;
use sql2go_core::Error;

use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

fn cli(sql: &str, config: &str) -> Cli {
    Cli::parse_from([
        "sql2go",
        "-s",
        fixture(sql).as_str(),
        "-c",
        fixture(config).as_str(),
    ])
}

fn core_error(err: &anyhow::Error) -> &Error {
    err.downcast_ref::<Error>()
        .unwrap_or_else(|| panic!("expected a sql2go error; actual={err:?}"))
}

#[test]
fn default_flags() {
    let cli = Cli::parse_from(["sql2go"]);

    assert_eq!(cli.sql, PathBuf::from("my.sql"));
    assert_eq!(cli.config, PathBuf::from("default.yaml"));
    assert!(!cli.daemon);
}

#[test]
fn long_flags() {
    let cli = Cli::parse_from(["sql2go", "--sql", "a.sql", "--config", "b.yaml", "--daemon"]);

    assert_eq!(cli.sql, PathBuf::from("a.sql"));
    assert_eq!(cli.config, PathBuf::from("b.yaml"));
    assert!(cli.daemon);
}

#[test]
fn help_flag() {
    let err = Cli::try_parse_from(["sql2go", "-h"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn generates_users_struct() {
    let output = cli("users.sql", "default.yaml").run().unwrap();

    assert_eq!(
        output,
        r#"type Users struct {
    Id   uint32 `json:"id"`
    Name string `json:"name"` // user name
}
"#
    );
}

#[test]
fn daemon_flag_changes_nothing() {
    let plain = cli("users.sql", "default.yaml").run().unwrap();

    let mut daemon = cli("users.sql", "default.yaml");
    daemon.daemon = true;

    assert_eq!(daemon.run().unwrap(), plain);
}

#[test]
fn alter_table_is_rejected() {
    let err = cli("alter.sql", "default.yaml").run().unwrap_err();

    assert!(core_error(&err).is_unsupported_statement());
    assert_eq!(err.to_string(), "Only support DDL CREATE SQL");
}

#[test]
fn non_sql_input_is_rejected() {
    let err = cli("not_sql.txt", "default.yaml").run().unwrap_err();

    assert!(core_error(&err).is_sql_parse());
    assert_eq!(err.to_string(), "This may not be a SQL");
}

#[test]
fn missing_sql_file() {
    let err = cli("missing.sql", "default.yaml").run().unwrap_err();
    assert!(matches!(core_error(&err), Error::SqlRead { .. }), "{err:?}");
}

#[test]
fn missing_config_file() {
    let err = cli("users.sql", "missing.yaml").run().unwrap_err();
    assert!(matches!(core_error(&err), Error::ConfigRead { .. }), "{err:?}");
}

#[test]
fn broken_config_file() {
    let err = cli("users.sql", "broken.yaml").run().unwrap_err();
    assert!(matches!(core_error(&err), Error::ConfigParse(_)), "{err:?}");
}
