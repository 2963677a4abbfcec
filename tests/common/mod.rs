use assert_cmd::Command;

/// Command for the binary, with config lookup pinned to a path that
/// never exists so a user's config cannot leak into tests.
pub fn fpa() -> Command {
    let mut cmd = Command::cargo_bin("fpa-finder").expect("binary builds");
    cmd.env("FPA_FINDER_CONFIG", "/nonexistent/fpa-finder-test.toml");
    cmd
}

/// Run the given args with `--json` and parse stdout.
pub fn json_output(args: &[&str]) -> serde_json::Value {
    let output = fpa()
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("valid JSON on stdout")
}
