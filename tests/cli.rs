use assert_cmd::Command;
use gridsq::GridLocator;

const BIN: &str = "gridsq";

#[test]
fn test_no_args_prints_usage() {
    let output = Command::cargo_bin(BIN).unwrap().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage"));
    assert!(stderr.contains("LON LAT"));
}

#[test]
fn test_one_arg_prints_usage() {
    let output = Command::cargo_bin(BIN)
        .unwrap()
        .arg("11.608")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage"));
}

#[test]
fn test_non_numeric_arg_fails() {
    let output = Command::cargo_bin(BIN)
        .unwrap()
        .args(["11.608", "north"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("decimal numbers"));
    assert!(stderr.contains("usage"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-h").assert().success();
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-V").assert().success();
}

#[test]
fn test_encode_origin() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["0", "0"]).assert().success().stdout("JJ00aa\n");
}

#[test]
fn test_encode_munich() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["11.608", "48.147"])
        .assert()
        .success()
        .stdout("JN58td\n");
}

#[test]
fn test_encode_negative_coordinates() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["-72.727260", "41.714775"])
        .assert()
        .success()
        .stdout("FN31pr\n");
}

#[test]
fn test_output_is_one_well_formed_line() {
    let output = Command::cargo_bin(BIN)
        .unwrap()
        .args(["151.2093", "-33.8688"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    // Parsing enforces the [A-R]{2}[0-9]{2}[a-x]{2} shape
    assert!(lines[0].parse::<GridLocator>().is_ok());
}

#[test]
fn test_out_of_range_is_permissive_by_default() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["200", "95"]).assert().success().stdout("RR99xx\n");
}

#[test]
fn test_strict_rejects_out_of_range() {
    let output = Command::cargo_bin(BIN)
        .unwrap()
        .args(["200", "95", "--strict"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid coordinates"));
}

#[test]
fn test_strict_accepts_valid_input() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["11.608", "48.147", "--strict"])
        .assert()
        .success()
        .stdout("JN58td\n");
}

#[test]
fn test_json_format() {
    let output = Command::cargo_bin(BIN)
        .unwrap()
        .args(["11.608", "48.147", "-f", "json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["locator"], "JN58td");
    assert_eq!(parsed["coords"]["lng"], 11.608);
}

#[test]
fn test_unknown_format_fails() {
    let output = Command::cargo_bin(BIN)
        .unwrap()
        .args(["0", "0", "-f", "gpx"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown format"));
}

#[test]
fn test_output_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locator.txt");

    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["0", "0", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "JJ00aa\n");
}
