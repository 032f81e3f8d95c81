//! Loading proton.toml from the working directory
//!
//! Kept in its own test binary: it changes the process working directory
//! and environment.

use proton::config::{Config, DATABASE_URL_ENV};
use proton::Dialect;
use std::fs;

#[test]
fn test_load_default_reads_working_directory_and_env() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("proton.toml"),
        "[database]\ndriver = \"sqlite\"\nname = \"app.db\"\n\n[views]\ndir = \"templates\"\n",
    )
    .unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    std::env::remove_var(DATABASE_URL_ENV);
    let config = Config::load_default().unwrap();
    assert_eq!(config.views.dir, "templates");
    assert_eq!(config.database.driver, Dialect::Sqlite);
    assert_eq!(config.database.url().unwrap(), "sqlite:app.db");

    std::env::set_var(DATABASE_URL_ENV, "postgres://app@db.internal/site");
    let config = Config::load_default().unwrap();
    assert_eq!(config.database.driver, Dialect::Postgres);
    assert_eq!(config.database.url().unwrap(), "postgres://app@db.internal/site");
    std::env::remove_var(DATABASE_URL_ENV);
}
