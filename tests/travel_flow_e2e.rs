use assert_cmd::Command;
use image::RgbImage;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn mundua_cmd(home: &Path, data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mundua").unwrap();
    cmd.current_dir(home).env("MUNDUA_DATA_DIR", data_dir);
    cmd
}

fn write_seed(home: &Path) {
    fs::write(
        home.join("countries.json"),
        r#"[{"name":"Spain"},{"name":"France","status":"not visited"},{"name":"Germany"}]"#,
    )
    .unwrap();
}

#[test]
fn test_bootstrap_edit_and_photo_workflow() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let data_dir = temp.path().join("data");
    fs::create_dir_all(&home).unwrap();
    write_seed(&home);

    // 1. First list bootstraps from the seed file and mirrors it to the store
    mundua_cmd(&home, &data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spain"))
        .stdout(predicate::str::contains("Germany"));
    assert!(data_dir.join("countries.json").exists());

    // 2. Search narrows the listing, case-insensitively
    mundua_cmd(&home, &data_dir)
        .args(["list", "--search", "fra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("France"))
        .stdout(predicate::str::contains("Spain").not());

    // 3. Mark France visited and give it a date
    mundua_cmd(&home, &data_dir)
        .args(["status", "France", "visited"])
        .assert()
        .success()
        .stdout(predicate::str::contains("France is now visited"));

    mundua_cmd(&home, &data_dir)
        .args(["date", "France", "2023-06-01"])
        .assert()
        .success();

    // Dates are rejected for not-visited countries
    mundua_cmd(&home, &data_dir)
        .args(["date", "Germany", "2023-06-01"])
        .assert()
        .failure();

    // 4. Attach a photo
    let photo = home.join("trip.png");
    RgbImage::new(32, 32).save(&photo).unwrap();
    mundua_cmd(&home, &data_dir)
        .args(["photo", "France", photo.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo added to France (1/5)"));

    mundua_cmd(&home, &data_dir)
        .args(["photos", "France"])
        .assert()
        .success()
        .stdout(predicate::str::contains("image/jpeg"));

    // 5. The persisted collection round-trips the edits
    let saved = fs::read_to_string(data_dir.join("countries.json")).unwrap();
    assert!(saved.contains(r#""status": "visited""#));
    assert!(saved.contains("2023-06-01"));
    assert!(saved.contains("data:image/jpeg;base64,"));
}

#[test]
fn test_corrupt_store_falls_back_to_the_seed() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let data_dir = temp.path().join("data");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&data_dir).unwrap();
    write_seed(&home);

    fs::write(data_dir.join("countries.json"), "{not valid").unwrap();

    mundua_cmd(&home, &data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Discarded unreadable saved data"))
        .stdout(predicate::str::contains("Spain"));

    // The slot was rewritten with the fresh collection
    let saved = fs::read_to_string(data_dir.join("countries.json")).unwrap();
    serde_json::from_str::<serde_json::Value>(&saved).unwrap();
}

#[test]
fn test_missing_seed_leaves_an_empty_list() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let data_dir = temp.path().join("data");
    fs::create_dir_all(&home).unwrap();
    // No countries.json seed anywhere, and no store yet.

    mundua_cmd(&home, &data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load seed data"))
        .stdout(predicate::str::contains("No countries found."));

    // An empty collection never overwrites the (absent) store
    assert!(!data_dir.join("countries.json").exists());
}

#[test]
fn test_unknown_country_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let data_dir = temp.path().join("data");
    fs::create_dir_all(&home).unwrap();
    write_seed(&home);

    mundua_cmd(&home, &data_dir)
        .args(["status", "Atlantis", "visited"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Country not found: Atlantis"));
}
