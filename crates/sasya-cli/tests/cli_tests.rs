use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and an isolated
/// database for testing
fn sasya_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("sasya").expect("Failed to find sasya binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .env_remove("SASYA_SEED");
    cmd
}

#[test]
fn test_cli_lists_seeded_crops() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .arg("crops")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Crops"))
        .stdout(predicate::str::contains("| 1 | Pearl Millet | 200-600 |"))
        .stdout(predicate::str::contains("Cowpea"));
}

#[test]
fn test_cli_lists_trees() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .arg("trees")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gliricidia"))
        .stdout(predicate::str::contains("Mahogany"));
}

#[test]
fn test_cli_generate_default_report() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sasya Yojana Land Plan"))
        .stdout(predicate::str::contains("- **Primary crop**: Groundnut"))
        .stdout(predicate::str::contains("- **Intercrop**: Sorghum"))
        .stdout(predicate::str::contains("- **Boundary tree**: Gliricidia"))
        .stdout(predicate::str::contains("90 rows x 22 columns"));
}

#[test]
fn test_cli_generate_json() {
    let temp_dir = create_cli_test_environment();

    let output = sasya_cmd(&temp_dir)
        .args(["generate", "--json", "--area", "100", "--rainfall", "300"])
        .output()
        .expect("Failed to run sasya");
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(plan["input"]["area_m2"], 100.0);
    assert_eq!(plan["layout"]["rows"], 8);
    assert_eq!(plan["layout"]["cols"], 3);
}

#[test]
fn test_cli_generate_rejects_invalid_investment() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .args(["generate", "--investment", "lavish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("investment_level"));
}

#[test]
fn test_cli_generate_rejects_zero_area() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .args(["generate", "--area", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("area_m2"));
}

#[test]
fn test_cli_generate_and_save() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .args(["generate", "--area", "100", "--save", "--farmer-name", "Ramesh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan saved with ID: 1"))
        .stdout(predicate::str::contains("Stored 24 cell labels."));

    sasya_cmd(&temp_dir)
        .arg("plans")
        .assert()
        .success()
        .stdout(predicate::str::contains("| 1 | Ramesh |"))
        .stdout(predicate::str::contains("| 24 |"));
}

#[test]
fn test_cli_save_from_file_and_show() {
    let temp_dir = create_cli_test_environment();

    let output = sasya_cmd(&temp_dir)
        .args(["generate", "--json", "--area", "200"])
        .output()
        .expect("Failed to run sasya");
    let plan_path = temp_dir.path().join("plan.json");
    std::fs::write(&plan_path, &output.stdout).expect("Failed to write plan");

    sasya_cmd(&temp_dir)
        .arg("save")
        .arg(&plan_path)
        .args(["--farmer-name", "Latha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan saved with ID: 1"));

    sasya_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sasya Yojana Land Plan #1"))
        .stdout(predicate::str::contains("**Farmer**: Latha"))
        .stdout(predicate::str::contains("## Action Plan"));
}

#[test]
fn test_cli_save_from_stdin() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .arg("save")
        .write_stdin(r#"{"farmer_name": "Venu", "plan": {"note": "draft"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("No cell labels were stored."));

    sasya_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Saved Plan #1"))
        .stdout(predicate::str::contains("\"note\": \"draft\""));
}

#[test]
fn test_cli_save_rejects_invalid_json() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .arg("save")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_cli_show_missing_plan() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 42 not found"));
}

#[test]
fn test_cli_labels_for_saved_plan() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .args(["generate", "--area", "30", "--save"])
        .assert()
        .success();

    sasya_cmd(&temp_dir)
        .args(["labels", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Labels for plan 1"))
        .stdout(predicate::str::contains("| r0_c0 | tree | Gliricidia | 0 | 0 | 16 |"))
        .stdout(predicate::str::contains("| r1_c1 | crop |"))
        .stdout(predicate::str::contains("9 labels"));
}

#[test]
fn test_cli_default_lists_plans() {
    let temp_dir = create_cli_test_environment();

    sasya_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_seeded_advice_is_reproducible() {
    let temp_dir = create_cli_test_environment();

    let run = || {
        sasya_cmd(&temp_dir)
            .args(["--seed", "5", "advise", "--rainfall", "400"])
            .output()
            .expect("Failed to run sasya")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).contains("# Advisory Recommendation"));
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("sasya")
        .expect("Failed to find sasya binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("--database-file"));
}
