use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn excerpt() -> PathBuf {
    fixture_path("ort_api_excerpt.h")
}

#[test]
fn reports_release_indices_by_default() {
    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(excerpt());

    cmd.assert().success().stdout(
        predicate::str::contains("Found 21 functions in struct OrtApi")
            .and(predicate::str::contains("ReleaseEnv: index 11\n"))
            .and(predicate::str::contains("ReleaseStatus: index 12\n"))
            .and(predicate::str::contains("ReleaseTensorTypeAndShapeInfo: index 18\n"))
            .and(predicate::str::contains("ReleaseSessionOptions: index 19\n")),
    );
}

#[test]
fn core_preset_covers_status_macros() {
    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(excerpt()).arg("--preset").arg("core");

    cmd.assert().success().stdout(
        predicate::str::contains("CreateStatus: index 0\n")
            .and(predicate::str::contains("CreateEnv: index 3\n"))
            .and(predicate::str::contains("Run: index 9\n"))
            .and(predicate::str::contains("SessionGetInputCount: not found\n")),
    );
}

#[test]
fn commented_pointer_is_not_counted() {
    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(excerpt()).arg("-t").arg("Bogus");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Bogus: not found\n"));
}

#[test]
fn context_and_range_views() {
    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(excerpt())
        .arg("-t")
        .arg("ReleaseEnv")
        .arg("--context")
        .arg("--range")
        .arg("10..12");

    cmd.assert().success().stdout(
        predicate::str::contains(
            "ReleaseEnv at index 11:\n  [10] CreateSessionOptions\n  [11] ReleaseEnv <---\n  [12] ReleaseStatus\n",
        )
        .and(predicate::str::contains(
            "Functions from index 10 to 12:\n10: CreateSessionOptions\n11: ReleaseEnv <--- requested\n12: ReleaseStatus\n",
        )),
    );
}

#[test]
fn json_report() {
    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(excerpt()).arg("-t").arg("Run").arg("--json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["struct_name"], "OrtApi");
    assert_eq!(value["total"], 21);
    assert_eq!(value["targets"][0]["index"], 9);
    assert_eq!(value["symbols"][9]["rule"], "status_macro");
    assert_eq!(value["symbols"][0]["rule"], "call_marker");
    assert_eq!(value["source"]["sha256"].as_str().unwrap().len(), 64);
}

#[test]
fn other_struct_in_same_header() {
    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(excerpt())
        .arg("--struct")
        .arg("OrtApiBase")
        .arg("-t")
        .arg("GetVersionString");

    cmd.assert().success().stdout(
        predicate::str::contains("Found 2 functions in struct OrtApiBase")
            .and(predicate::str::contains("GetVersionString: index 1\n")),
    );
}

#[test]
fn missing_header_fails() {
    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(fixture_path("does_not_exist.h"));

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("header not found"));
}

#[test]
fn missing_header_argument_prints_usage() {
    let mut cmd = cargo_bin_cmd!("vtable-index");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_struct_fails() {
    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(excerpt()).arg("--struct").arg("OrtTrainingApi");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("could not find struct OrtTrainingApi"));
}

#[test]
fn empty_struct_is_a_clean_zero_count() {
    let dir = tempfile::tempdir().unwrap();
    let header = dir.path().join("empty.h");
    fs::write(&header, "struct OrtApi {};\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(&header);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 0 functions in struct OrtApi"))
        .stderr(predicate::str::contains("no member declarations matched").not());
}

#[test]
fn empty_struct_passes_strict_mode() {
    let dir = tempfile::tempdir().unwrap();
    let header = dir.path().join("empty.h");
    fs::write(&header, "struct OrtApi {};\n").unwrap();
    let config = dir.path().join("no-targets.toml");
    fs::write(&config, "targets = []\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(&header)
        .arg("--config")
        .arg(&config)
        .arg("--strict");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 0 functions in struct OrtApi"))
        .stderr(predicate::str::contains("no member declarations matched").not());
}

#[test]
fn unmatched_members_warn_but_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let header = dir.path().join("version_only.h");
    fs::write(&header, "struct OrtApi {\n  uint32_t version;\n};\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(&header);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 0 functions in struct OrtApi"))
        .stderr(predicate::str::contains("no member declarations matched"));
}

#[test]
fn unmatched_members_fail_in_strict_mode() {
    let dir = tempfile::tempdir().unwrap();
    let header = dir.path().join("version_only.h");
    fs::write(&header, "struct OrtApi {\n  uint32_t version;\n};\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(&header).arg("--strict");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("no member declarations matched"));
}

#[test]
fn strict_mode_fails_on_missing_target() {
    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(excerpt()).arg("-t").arg("ReleaseNothing").arg("--strict");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("ReleaseNothing: not found"))
        .stderr(predicate::str::contains("targets not found: ReleaseNothing"));
}

#[test]
fn config_file_sets_rules_and_targets() {
    let dir = tempfile::tempdir().unwrap();
    let header = dir.path().join("api.h");
    fs::write(
        &header,
        "struct OrtApi { OrtStatus*(CALL* CreateStatus)(int code); MACRO(Env); };\n",
    )
    .unwrap();
    let config = dir.path().join("vtable-index.toml");
    fs::write(
        &config,
        "release_macro = \"MACRO\"\ncall_marker = \"CALL\"\ntargets = [\"CreateStatus\", \"ReleaseEnv\"]\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(&header).arg("--config").arg(&config).arg("--all");

    cmd.assert().success().stdout(
        predicate::str::contains("Found 2 functions in struct OrtApi")
            .and(predicate::str::contains("CreateStatus: index 0\n"))
            .and(predicate::str::contains("ReleaseEnv: index 1\n"))
            .and(predicate::str::contains("All functions:\n0: CreateStatus <--- requested\n1: ReleaseEnv <--- requested\n")),
    );
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "targets = [").unwrap();

    let mut cmd = cargo_bin_cmd!("vtable-index");
    cmd.arg(excerpt()).arg("--config").arg(&config);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}
