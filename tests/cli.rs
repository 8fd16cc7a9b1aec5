use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn default_run_prints_wide_table() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("ixa-sir").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1 + 137);
    assert_eq!(lines[0], "t,s,i,r");
    assert!(lines[1].starts_with("1,0.99999873"));
    assert!(lines[137].starts_with("137,"));
}

#[test]
fn long_format() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("ixa-sir")
        .args(["--timesteps", "5", "--format", "long"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1 + 3 * 5);
    assert_eq!(lines[0], "t,variable,value,Population");
    assert!(lines[1].ends_with(",Susceptible"));
    assert!(lines[2].ends_with(",Infected"));
    assert!(lines[3].ends_with(",Recovered"));
}

#[test]
fn config_file() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("ixa-sir")
        .arg("--config")
        .arg(fixture("parameters.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1 + 20);
    assert!(stdout.contains("\n1,0.999,0.001,0.0\n"));
}

#[test]
fn zero_timesteps_is_rejected() {
    assert_cmd::cargo::cargo_bin_cmd!("ixa-sir")
        .args(["--timesteps", "0"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn empty_population_is_rejected() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("ixa-sir")
        .args(["--susceptible", "0", "--infected", "0", "--recovered", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: invalid simulation parameters"));
}

#[test]
fn malformed_config_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ \"beta\": 0.5 }").unwrap();

    let output = assert_cmd::cargo::cargo_bin_cmd!("ixa-sir")
        .arg("-c")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("invalid JSON"));
}

#[test]
fn verbose_logs_threshold_to_stderr() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("ixa-sir")
        .args(["-v", "--timesteps", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("R0 = 2.50 (growing epidemic)"));
    assert!(stderr.contains("herd immunity threshold: 60.0%"));

    // Log lines never end up in the table.
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 4);
    assert!(!stdout.contains("R0"));
}

#[test]
fn unconventional_rates_warn_but_run() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("ixa-sir")
        .args(["--beta", "1.5", "--gamma", "0.2", "--timesteps", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("outside the conventional range"));
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 11);
}

#[test]
fn module_log_levels() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("ixa-sir")
        .args([
            "--log-level",
            "error,ixa_sir::simulator=trace",
            "--timesteps",
            "3",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("TRACE ixa_sir::simulator - t = 3:"));
    assert!(!stderr.contains("R0 ="));
}
