use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_default_run_reports_mean() {
    let temp = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("poptrim").unwrap();
    cmd.current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Trimmed mean:"))
        .stdout(predicate::str::contains("Size: 200"));
}

#[test]
fn test_same_seed_is_reproducible() {
    let temp = tempdir().unwrap();

    let first = Command::cargo_bin("poptrim")
        .unwrap()
        .current_dir(temp.path())
        .args(["50", "--seed", "7"])
        .output()
        .unwrap();
    let second = Command::cargo_bin("poptrim")
        .unwrap()
        .current_dir(temp.path())
        .args(["50", "--seed", "7"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_asymmetric_trim_flags() {
    let temp = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("poptrim").unwrap();
    cmd.current_dir(temp.path())
        .args(["--lower", "0.1", "--upper", "0.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lower: 0.1"))
        .stdout(predicate::str::contains("Upper: 0.2"));
}

#[test]
fn test_lower_requires_upper() {
    let temp = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("poptrim").unwrap();
    cmd.current_dir(temp.path())
        .args(["--lower", "0.1"])
        .assert()
        .failure();
}

#[test]
fn test_rejects_out_of_range_fraction() {
    let temp = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("poptrim").unwrap();
    cmd.current_dir(temp.path())
        .args(["--trim", "0.6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be in [0.0, 0.5)"));
}

#[test]
fn test_log_file_is_appended() {
    let temp = tempdir().unwrap();
    let log_path = temp.path().join("run.log");

    for _ in 0..2 {
        Command::cargo_bin("poptrim")
            .unwrap()
            .current_dir(temp.path())
            .args(["50", "--log"])
            .arg(&log_path)
            .assert()
            .success();
    }

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(
        content
            .lines()
            .filter(|line| line.starts_with("Population size: 50"))
            .count(),
        2
    );
    assert!(content.contains("Trimmed mean (5%):"));
}

#[test]
fn test_input_file_overrides_generation() {
    let temp = tempdir().unwrap();
    let input_path = temp.path().join("population.txt");
    std::fs::write(&input_path, "1, 2, 3, 4, 5").unwrap();

    let mut cmd = Command::cargo_bin("poptrim").unwrap();
    cmd.current_dir(temp.path())
        .args(["--trim", "0.0", "--input"])
        .arg(&input_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 5 values"))
        .stdout(predicate::str::contains("Trimmed mean: 3.0000"));
}

#[test]
fn test_input_rejects_non_numeric_values() {
    let temp = tempdir().unwrap();
    let input_path = temp.path().join("population.txt");
    std::fs::write(&input_path, "1, 2, banana").unwrap();

    let mut cmd = Command::cargo_bin("poptrim").unwrap();
    cmd.current_dir(temp.path())
        .arg("--input")
        .arg(&input_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not numeric"));
}

#[test]
fn test_export_json() {
    let temp = tempdir().unwrap();
    let output_path = temp.path().join("results.json");

    Command::cargo_bin("poptrim")
        .unwrap()
        .current_dir(temp.path())
        .args(["50", "--export", "json", "--output"])
        .arg(&output_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("\"trimmed_mean\""));
    assert!(content.contains("\"population\""));
}

#[test]
fn test_export_csv() {
    let temp = tempdir().unwrap();
    let output_path = temp.path().join("results.csv");

    Command::cargo_bin("poptrim")
        .unwrap()
        .current_dir(temp.path())
        .args(["50", "--export", "csv", "--output"])
        .arg(&output_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert!(content.starts_with("index,kind,value\n"));
    assert!(content.contains("trimmed_mean,,"));
}

#[test]
fn test_unknown_export_format_fails() {
    let temp = tempdir().unwrap();
    let output_path = temp.path().join("results.xml");

    Command::cargo_bin("poptrim")
        .unwrap()
        .current_dir(temp.path())
        .args(["50", "--export", "xml", "--output"])
        .arg(&output_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}
