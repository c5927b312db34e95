//! End-to-end runs of the `goskel` binary in a scratch directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `goskel` with the working directory, home and config dir inside `dir`.
fn goskel(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("goskel").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("GOSKEL_TEMPLATES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag_exits_zero() {
    let temp = TempDir::new().unwrap();
    goskel(temp.path())
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Domain-Driven"))
        .stdout(predicate::str::contains("usecase"));
}

#[test]
fn version_flag_exits_zero() {
    let temp = TempDir::new().unwrap();
    goskel(temp.path())
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn usecase_writes_three_files() {
    let temp = TempDir::new().unwrap();

    goskel(temp.path())
        .args(["usecase", "Order"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Successfully created usecase Order in internal/usecase/Order",
        ));

    let root = temp.path().join("internal/usecase/Order");
    for file in ["service.go", "service_impl.go", "models.go"] {
        assert!(root.join(file).is_file(), "{file} missing");
    }
    let service = fs::read_to_string(root.join("service.go")).unwrap();
    assert!(service.contains("OrderService"));
}

#[test]
fn tests_with_mocks_after_usecase() {
    let temp = TempDir::new().unwrap();
    goskel(temp.path())
        .args(["usecase", "Order"])
        .assert()
        .success();

    goskel(temp.path())
        .args(["tests", "Order", "--with-mocks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated mocks for Order"))
        .stdout(predicate::str::contains(
            "Successfully created test stubs for Order in internal/usecase/Order",
        ));

    assert!(temp
        .path()
        .join("internal/usecase/Order/Order_test.go")
        .is_file());
    assert!(temp.path().join("internal/mocks/Order_mock.go").is_file());
}

#[test]
fn second_run_needs_force() {
    let temp = TempDir::new().unwrap();
    let entity = temp.path().join("internal/core/Order/entity.go");

    goskel(temp.path())
        .args(["domain", "Order"])
        .assert()
        .success();
    fs::write(&entity, "hand edited").unwrap();

    goskel(temp.path())
        .args(["domain", "Order"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File already exists"))
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&entity).unwrap(), "hand edited");

    goskel(temp.path())
        .args(["domain", "Order", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&entity)
        .unwrap()
        .starts_with("package Order"));
}

#[test]
fn overwrite_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("goskel.toml");
    fs::write(&config, "[generation]\noverwrite = true\n").unwrap();

    for _ in 0..2 {
        goskel(temp.path())
            .args(["handler", "payment", "--config"])
            .arg(&config)
            .assert()
            .success();
    }
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    goskel(temp.path())
        .args(["monorepo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("packages/shared/shared.go"))
        .stdout(predicate::str::contains("services/service1/"));

    assert!(!temp.path().join("packages").exists());
    assert!(!temp.path().join("services").exists());
}

#[test]
fn monorepo_creates_layout() {
    let temp = TempDir::new().unwrap();

    goskel(temp.path())
        .arg("monorepo")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Monorepo structure created successfully",
        ));

    assert!(temp.path().join("deploy").is_dir());
    assert!(temp.path().join("packages/config/config.go").is_file());
}

#[test]
fn init_without_prompts_uses_flags() {
    let temp = TempDir::new().unwrap();

    goskel(temp.path())
        .args(["init", "shop", "--router", "chi", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop/"));

    let root = temp.path().join("shop");
    assert_eq!(
        fs::read_to_string(root.join("go.mod")).unwrap(),
        "module shop\n\ngo 1.22\n"
    );
    assert!(fs::read_to_string(root.join("main.go"))
        .unwrap()
        .contains("go-chi/chi"));
    assert!(root.join("migrations").is_dir());
}

#[test]
fn list_shows_catalog_and_overrides() {
    let temp = TempDir::new().unwrap();
    let overrides = temp.path().join("tmpl");
    fs::create_dir(&overrides).unwrap();
    fs::write(
        overrides.join("entity.tmpl"),
        "package {{Domain}}\n\n// house style\n",
    )
    .unwrap();

    goskel(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("go-module"))
        .stdout(predicate::str::contains("overridden").not());

    goskel(temp.path())
        .args(["list", "--verbose"])
        .env("GOSKEL_TEMPLATES_DIR", &overrides)
        .assert()
        .success()
        .stdout(predicate::str::contains("overridden"))
        .stdout(predicate::str::contains("placeholders: Domain"));

    goskel(temp.path())
        .args(["domain", "Order"])
        .env("GOSKEL_TEMPLATES_DIR", &overrides)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(temp.path().join("internal/core/Order/entity.go")).unwrap(),
        "package Order\n\n// house style\n"
    );
}

#[test]
fn plugin_list_and_remove_are_noops() {
    let temp = TempDir::new().unwrap();

    goskel(temp.path())
        .args(["plugin", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed plugins:"));

    goskel(temp.path())
        .args(["plugin", "remove", "fancy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed plugin: fancy"));
}

#[test]
fn config_get_reads_environment() {
    let temp = TempDir::new().unwrap();

    goskel(temp.path())
        .args(["config", "get", "init.router"])
        .env("GOSKEL_INIT__ROUTER", "echo")
        .assert()
        .success()
        .stdout(predicate::str::diff("echo\n"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    goskel(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("goskel"));
}

#[test]
fn no_color_environment_value_is_accepted() {
    let temp = TempDir::new().unwrap();

    for value in ["1", "true", "yes"] {
        goskel(temp.path())
            .args(["monorepo", "--dry-run"])
            .env("NO_COLOR", value)
            .assert()
            .success()
            .stdout(predicate::str::contains("packages/shared/shared.go"))
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

#[test]
fn go_version_from_environment_is_kept_verbatim() {
    let temp = TempDir::new().unwrap();

    goskel(temp.path())
        .args(["config", "get", "init.go_version"])
        .env("GOSKEL_INIT__GO_VERSION", "1.20")
        .assert()
        .success()
        .stdout(predicate::str::diff("1.20\n"));

    goskel(temp.path())
        .args(["init", "shop", "--yes"])
        .env("GOSKEL_INIT__GO_VERSION", "1.20")
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(temp.path().join("shop/go.mod")).unwrap(),
        "module shop\n\ngo 1.20\n"
    );
}
