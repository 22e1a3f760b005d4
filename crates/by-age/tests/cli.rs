use assert_cmd::Command;
use predicates::prelude::*;

const NOW: &str = "2026-02-18T12:00:00Z";

const PODS: &str = "\
CREATED               NAME
2026-02-17T00:00:00Z  web-1
2026-02-18T11:00:00Z  web-2
2026-01-01T00:00:00Z  db-0
2026-02-15T04:00:00Z  cache
";

fn by_age() -> Command {
    Command::cargo_bin("by-age").unwrap()
}

#[test]
fn test_no_flags_prints_everything_oldest_first() {
    by_age()
        .args(["--now", NOW])
        .write_stdin(PODS)
        .assert()
        .success()
        .stdout(
            "CREATED               NAME\n\
             2026-01-01T00:00:00Z  db-0\n\
             2026-02-15T04:00:00Z  cache\n\
             2026-02-17T00:00:00Z  web-1\n\
             2026-02-18T11:00:00Z  web-2\n",
        );
}

#[test]
fn test_min_and_max_age() {
    by_age()
        .args(["--now", NOW, "-m", "1d", "-M", "30d"])
        .write_stdin(PODS)
        .assert()
        .success()
        .stdout(
            "CREATED               NAME\n\
             2026-02-15T04:00:00Z  cache\n\
             2026-02-17T00:00:00Z  web-1\n",
        );
}

#[test]
fn test_long_flags_and_reverse_sort() {
    by_age()
        .args(["--now", NOW, "--min-age", "30m", "--reverse-sort"])
        .write_stdin(PODS)
        .assert()
        .success()
        .stdout(
            "CREATED               NAME\n\
             2026-02-18T11:00:00Z  web-2\n\
             2026-02-17T00:00:00Z  web-1\n\
             2026-02-15T04:00:00Z  cache\n\
             2026-01-01T00:00:00Z  db-0\n",
        );
}

#[test]
fn test_months_are_not_minutes() {
    // -m 1M: older than one month. -m 1m would keep web-2 as well.
    by_age()
        .args(["--now", NOW, "-m", "1M"])
        .write_stdin(PODS)
        .assert()
        .success()
        .stdout(predicate::str::contains("db-0"))
        .stdout(predicate::str::contains("web-1").not());
}

#[test]
fn test_field_selects_timestamp_column() {
    let input = "a 2026-02-10T00:00:00Z\nb 2026-02-17T00:00:00Z\n";
    by_age()
        .args(["--now", NOW, "-f", "2", "-m", "3d"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("a 2026-02-10T00:00:00Z\n");
}

#[test]
fn test_bad_record_is_skipped_with_warning() {
    let input = "2026-02-10T00:00:00Z a\ngarbage b\n";
    by_age()
        .args(["--now", NOW])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("2026-02-10T00:00:00Z a\n")
        .stderr(predicate::str::contains("skipping record"));
}

#[test]
fn test_invalid_expression_fails() {
    by_age()
        .args(["--now", NOW, "-M", "1x"])
        .write_stdin(PODS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parsing max-age"))
        .stderr(predicate::str::contains("'1x'"));
}

#[test]
fn test_overflowing_amount_fails() {
    by_age()
        .args(["--now", NOW, "-m", "99999999999999999999d"])
        .write_stdin(PODS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_explain_outputs_json() {
    let output = by_age()
        .args(["--now", "2023-01-10T00:00:00Z", "-m", "1y2M3d", "--explain"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["created_before"], "2021-11-07T00:00:00+00:00");
    assert_eq!(json["min_age"]["parsed"]["calendar"]["months"], 2);
    assert!(json["min_age"]["parsed"]["clock"].is_null());
}

#[test]
fn test_help_describes_units() {
    by_age()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("month (M)"));
}
