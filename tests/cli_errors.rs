use predicates::prelude::*;

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing sample data"));
}

#[test]
fn cli_computes_from_direct_flags() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");
    cmd.arg("--gas")
        .arg("methane")
        .arg("--x")
        .arg("2")
        .arg("--salinity")
        .arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mol/L"));
}

#[test]
fn cli_rejects_unknown_gas_by_name() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");
    cmd.arg("--gas").arg("helium").arg("--x").arg("2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown gas 'helium'"));
}

#[test]
fn cli_works_with_inline_sample_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");
    let sample = serde_json::json!({
        "x": 500000.0,
        "gas": "hydrogen",
    })
    .to_string();

    cmd.arg("--json").arg("--sample-json").arg(sample);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"dissolved_mol_per_l\""));
}

#[test]
fn cli_works_with_inline_conditions_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");
    let sample = serde_json::json!({"x": 9340.0, "gas": "argon"}).to_string();
    let conditions = serde_json::json!({"t_c": 10.0, "z_m": 30.0}).to_string();

    cmd.arg("--json")
        .arg("--sample-json")
        .arg(sample)
        .arg("--conditions-json")
        .arg(conditions);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"pressure_atm\": 4.0"));
}

#[test]
fn cli_works_with_stdin_input_document() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");

    let doc = serde_json::json!({
        "sample": {
            "x": 9340.0,
            "gas": "argon"
        },
        "conditions": {
            "t_c": 10.0
        }
    })
    .to_string();

    cmd.arg("--json").arg("--input").arg("-").write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"dissolved_mol_per_l\""));
}

#[test]
fn cli_reports_unknown_gas_inside_json_documents() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");
    let sample = serde_json::json!({"x": 2.0, "gas": "helium"}).to_string();

    cmd.arg("--sample-json").arg(sample);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant"));
}

#[test]
fn cli_reports_invalid_json_for_sample_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");
    cmd.arg("--sample-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --sample-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}

#[test]
fn cli_lists_the_gas_catalog() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("headspace_rs");
    cmd.arg("--list-gases");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("methane"))
        .stdout(predicate::str::contains("nitrous oxide"))
        .stdout(predicate::str::contains("carbon dioxide"));
}
