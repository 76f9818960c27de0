//! Catalog integrity report.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vitjoy(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vitjoy").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn doctor_reports_findings_without_failing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("catalog.json"),
        r#"[
            {"id": "no-images", "title": "Bare", "price": 0},
            {"id": "bad-link", "title": "Bad link", "price": 1000,
             "kaspiUrl": "not a url",
             "images": [{"src": "/images/x/1.png", "alt": "x"}]}
        ]"#,
    )
    .unwrap();

    let output = vitjoy(&dir)
        .args(["--format", "json", "catalog", "doctor"])
        .output()
        .unwrap();
    assert!(output.status.success(), "doctor findings are never fatal");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let findings = json.as_array().unwrap();

    let about = |id: &str| -> Vec<&serde_json::Value> {
        findings
            .iter()
            .filter(|f| f["productId"] == id)
            .collect()
    };
    // Zero price, empty image list and a missing link for the first product.
    assert_eq!(about("no-images").len(), 3);
    // Malformed link for the second.
    assert_eq!(about("bad-link").len(), 1);
}

#[test]
fn doctor_flags_missing_assets_when_root_given() {
    let dir = TempDir::new().unwrap();
    let assets = TempDir::new().unwrap();

    vitjoy(&dir)
        .args(["catalog", "doctor"])
        .arg("--assets-root")
        .arg(assets.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("изображение не найдено"));
}

#[test]
fn doctor_flags_duplicate_titles() {
    let dir = TempDir::new().unwrap();
    // The built-in catalog carries two listings with the same title.
    vitjoy(&dir)
        .args(["catalog", "doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("название дублирует"));
}

#[test]
fn clean_catalog_reports_ok() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("catalog.json"),
        r#"[{"id": "zinc", "title": "Zinc", "price": 2990,
             "kaspiUrl": "https://kaspi.kz/shop/p/zinc-1/",
             "images": [{"src": "/images/zinc/1.png", "alt": "zinc"}]}]"#,
    )
    .unwrap();

    vitjoy(&dir)
        .args(["catalog", "doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Каталог в порядке"));
}
