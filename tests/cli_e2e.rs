#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn catalog_cmd(data: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("catalog"));
    cmd.env_remove("CATALOG_DATA")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--data")
        .arg(data);
    cmd
}

fn create(data: &Path, code: &str, price: &str) {
    catalog_cmd(data)
        .args([
            "create",
            "--name",
            &format!("Product {}", code),
            "--quantity",
            "10",
            "--code",
            code,
            "--expiration",
            "15/12/2030",
            "--price",
            price,
            "--published",
        ])
        .assert()
        .success();
}

fn list_json(data: &Path) -> Value {
    let output = catalog_cmd(data)
        .args(["--json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn ids(listing: &Value) -> Vec<i64> {
    listing["listed_products"]
        .as_array()
        .map(|items| items.iter().map(|p| p["id"].as_i64().unwrap()).collect())
        .unwrap_or_default()
}

#[test]
fn init_then_crud_workflow() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");

    catalog_cmd(&data)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized catalog"));
    assert_eq!(
        fs::read_to_string(data.join("products.json")).unwrap(),
        "[]"
    );

    catalog_cmd(&data)
        .args([
            "create",
            "--name",
            "Oil - Margarine",
            "--quantity",
            "439",
            "--code",
            "S82254D",
            "--expiration",
            "15/12/2021",
            "--price",
            "71.42",
            "--published",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created product 1"));

    catalog_cmd(&data)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oil - Margarine"))
        .stdout(predicate::str::contains("71.42"));

    catalog_cmd(&data)
        .args(["patch", "1", "--quantity", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated product 1"));

    let listing = list_json(&data);
    assert_eq!(listing["listed_products"][0]["quantity"], 5);

    catalog_cmd(&data)
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted product 1"));

    catalog_cmd(&data)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));
}

#[test]
fn missing_collection_is_an_internal_error() {
    let temp = TempDir::new().unwrap();

    catalog_cmd(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: internal error"));
}

#[test]
fn duplicate_code_and_missing_product_fail() {
    let temp = TempDir::new().unwrap();
    catalog_cmd(temp.path()).arg("init").assert().success();
    create(temp.path(), "A", "10");

    catalog_cmd(temp.path())
        .args([
            "create",
            "--name",
            "Other",
            "--quantity",
            "1",
            "--code",
            "A",
            "--expiration",
            "01/01/2030",
            "--price",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("product already exists: A"));

    catalog_cmd(temp.path())
        .args(["delete", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("product not found: 9"));

    catalog_cmd(temp.path())
        .args(["get", "nine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid request"));
}

#[test]
fn search_uses_strictly_greater() {
    let temp = TempDir::new().unwrap();
    catalog_cmd(temp.path()).arg("init").assert().success();
    create(temp.path(), "A", "10");
    create(temp.path(), "B", "20");
    create(temp.path(), "C", "30");

    let output = catalog_cmd(temp.path())
        .args(["--json", "search", "--price-gt", "20"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let found: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ids(&found), vec![3]);
}

#[test]
fn empty_search_prints_a_single_notice() {
    let temp = TempDir::new().unwrap();
    catalog_cmd(temp.path()).arg("init").assert().success();
    create(temp.path(), "A", "10");

    catalog_cmd(temp.path())
        .args(["search", "--price-gt", "10"])
        .assert()
        .success()
        .stdout(predicate::eq("No products found.\n"));
}

#[test]
fn id_collision_and_doctor_fix() {
    let temp = TempDir::new().unwrap();
    catalog_cmd(temp.path()).arg("init").assert().success();
    create(temp.path(), "A", "10");
    create(temp.path(), "B", "20");
    catalog_cmd(temp.path()).args(["delete", "1"]).assert().success();
    create(temp.path(), "C", "30");

    assert_eq!(ids(&list_json(temp.path())), vec![2, 2]);

    catalog_cmd(temp.path())
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ids shared by several products: 2"));

    catalog_cmd(temp.path())
        .args(["doctor", "--fix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reassigned duplicate id 2 to 3"));

    assert_eq!(ids(&list_json(temp.path())), vec![2, 3]);
}

#[test]
fn config_changes_id_policy() {
    let temp = TempDir::new().unwrap();
    catalog_cmd(temp.path()).arg("init").assert().success();

    catalog_cmd(temp.path())
        .args(["config", "id-policy", "max-plus-one"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id-policy set to max-plus-one"));

    catalog_cmd(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("id_policy = max-plus-one"));

    create(temp.path(), "A", "10");
    create(temp.path(), "B", "20");
    catalog_cmd(temp.path()).args(["delete", "1"]).assert().success();
    create(temp.path(), "C", "30");

    assert_eq!(ids(&list_json(temp.path())), vec![2, 3]);
}

#[test]
fn finds_project_catalog_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    let nested = project.join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();
    fs::create_dir(project.join(".catalog")).unwrap();
    fs::write(project.join(".catalog").join("products.json"), "[]").unwrap();

    Command::new(cargo_bin("catalog"))
        .env_remove("CATALOG_DATA")
        .env("NO_COLOR", "1")
        .current_dir(&nested)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));
}

#[test]
fn unknown_config_key_fails() {
    let temp = TempDir::new().unwrap();

    catalog_cmd(temp.path())
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown config key: colour"));
    assert!(!temp.path().join("config.json").exists());
}
