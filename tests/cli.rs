use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("mmsi-decode").unwrap();
    cmd.env_remove("MMSI_DECODE_FORMAT")
        .env_remove("MMSI_DECODE_STRICT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_decode_args() {
    cmd()
        .args(["211000000", "972123456", "900000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("211000000\tShip\tGermany\n"))
        .stdout(predicate::str::contains("972123456\tMOB Device\t\n"))
        .stdout(predicate::str::contains("900000000\tInvalid MMSI\t\n"));
}

#[test]
fn test_decode_stdin() {
    cmd()
        .write_stdin("# fleet list\n2110000\n\n970000500\n")
        .assert()
        .success()
        .stdout("002110000\tCoastal Station\tGermany\n970000500\tAIS SART\tUnknown Country ID\n");
}

#[test]
fn test_long_description() {
    cmd()
        .args(["--long", "974211000"])
        .assert()
        .success()
        .stdout("974211000\tEPIRB - Emergency Position Indicating Radio Beacon\t\n");
}

#[test]
fn test_json_output() {
    cmd()
        .args(["--format", "json", "257123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""owner":"Ship""#))
        .stdout(predicate::str::contains(r#""mid":257"#))
        .stdout(predicate::str::contains(r#""country":"Norway""#));
}

#[test]
fn test_format_from_env() {
    cmd()
        .env("MMSI_DECODE_FORMAT", "json")
        .arg("211000000")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_bad_input_is_skipped() {
    cmd()
        .args(["not-an-mmsi", "211000000"])
        .assert()
        .success()
        .stdout("211000000\tShip\tGermany\n");
}

#[test]
fn test_strict_fails_on_bad_input() {
    cmd()
        .args(["--strict", "not-an-mmsi", "211000000"])
        .assert()
        .failure()
        .stdout("211000000\tShip\tGermany\n");
}

#[test]
fn test_mid_lookup() {
    cmd()
        .args(["--mid", "351"])
        .assert()
        .success()
        .stdout("351\tPanama\n");

    cmd()
        .args(["--mid", "217"])
        .assert()
        .success()
        .stdout("217\tUnknown Country ID\n");
}

#[test]
fn test_list_mids() {
    cmd()
        .arg("--list-mids")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("201\tAlbania\n"))
        .stdout(predicate::str::ends_with("770\tUruguay\n"));
}
