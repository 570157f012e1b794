//! Integration tests for docdex

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn docdex() -> Command {
        cargo_bin_cmd!("docdex")
    }

    #[test]
    fn help_displays() {
        docdex()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("documentation page fetcher"));
    }

    #[test]
    fn version_displays() {
        docdex()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("docdex"));
    }

    #[test]
    fn config_path() {
        docdex()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        docdex()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[site]"))
            .stdout(predicate::str::contains("content/docs/"));
    }

    #[test]
    fn config_show_with_missing_file_uses_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        docdex()
            .args(["--config", path.to_str().unwrap(), "config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("content/docs/"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "site = 3").unwrap();

        docdex()
            .args(["--config", path.to_str().unwrap(), "config", "show"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    // The store recovers every failure into a document, so fetch succeeds
    // even when the site is unreachable and prints the fallback markup.
    #[test]
    fn fetch_unreachable_site_prints_error_document() {
        docdex()
            .args(["fetch", "guide/store", "--base", "http://127.0.0.1:1/"])
            .assert()
            .success()
            .stdout(predicate::str::contains("unable to retrieve"));
    }

    #[test]
    fn follow_with_empty_stdin_exits_cleanly() {
        docdex().arg("follow").write_stdin("").assert().success();
    }
}
