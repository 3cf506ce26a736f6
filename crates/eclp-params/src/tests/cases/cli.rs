//! Running the program through its command line surface.

use {
    crate::tests::{args, output},
    serde_json::{Value, json},
    std::io::Write,
};

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn json_report() {
    let report: Value = serde_json::from_str(&output(&["--format", "json"])).unwrap();

    assert_eq!(
        report["params"],
        json!({
            "alpha": "1.035905",
            "beta": "1.144947",
            "c": "1",
            "s": "0",
            "lambda": "50",
        })
    );
    assert_eq!(
        report["constants"],
        json!({
            "TAU_ALPHA_X": "99981367602332163269692323144458353703",
            "TAU_ALPHA_Y": "1930319239743647598374220090538386313",
            "TAU_BETA_X": "99984746838998994989324367248967173323",
            "TAU_BETA_Y": "1746539304247253278786255909644152494",
            "U": "0",
            "V": "1930319239743647598374220090538386313",
            "W": "0",
            "Z": "99984746838998994989324367248967173323",
            "D_SQ": "100000000000000000000000000000000000000",
        })
    );
    assert_eq!(report["derived"]["dSq"], "1");
    assert_eq!(report["derived"]["u"], "0");
    assert!(
        report["derived"]["tauAlpha"]["x"]
            .as_str()
            .unwrap()
            .starts_with("0.99981367602332163269692323144458353703985566859965583292")
    );
    assert_eq!(report["sanity"]["dSq"], "1");
    assert_eq!(report["sanity"]["warnings"], json!([]));
}

#[test]
fn decimal_and_wei_inputs_agree() {
    let decimal = output(&["--alpha", "1.035905", "--lambda", "50"]);
    let wei = output(&[
        "--unit",
        "wei18",
        "--alpha",
        "1035905000000000000",
        "--lambda",
        "50000000000000000000",
    ]);

    assert_eq!(decimal, wei);
    assert_eq!(decimal, output(&[]));
}

#[test]
fn config_file_parameters() {
    let file = config_file(
        r#"
        unit = "wei18"
        alpha = "50000000000020290"
        beta = "397316269897841178"
        c = "955157326174453500"
        s = "296124726434365040"
        lambda = "748956475000000000000000"
        "#,
    );
    let report = output(&["--config", file.path().to_str().unwrap()]);

    assert!(report.contains("lambda = 748956.475\n"));
    assert!(report.contains(
        "    int256 internal constant TAU_ALPHA_X = -100000768563214972648881340525613410584;\n"
    ));
    assert!(report.contains(
        "warning: dSq = 100001537135055888626974709163645160000 deviates from 1e38 by more than \
         100000000000000000000000\n"
    ));
}

#[test]
fn command_line_overrides_config_file() {
    let file = config_file(r#"beta = "1.5""#);
    let path = file.path().to_str().unwrap();

    assert!(output(&["--config", path]).contains("beta   = 1.5\n"));
    assert!(output(&["--config", path, "--beta", "1.25"]).contains("beta   = 1.25\n"));
}

#[test]
fn degenerate_rotation_fails() {
    let mut out = Vec::new();
    let err = crate::run(&args(&["--c", "0", "--s", "0"]), &mut out).unwrap_err();

    assert_eq!(
        format!("{err:#}"),
        "failed to derive E-CLP parameters: failed to compute tau(alpha): division by zero"
    );
    assert!(out.is_empty());
}

#[test]
fn invalid_parameter_fails() {
    let mut out = Vec::new();
    let err = crate::run(&args(&["--lambda", "fifty"]), &mut out).unwrap_err();

    assert_eq!(err.to_string(), "invalid lambda \"fifty\" (decimal)");
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pool.toml");
    let err = crate::run(&args(&["--config", path.to_str().unwrap()]), &mut Vec::new())
        .unwrap_err();

    assert!(err.to_string().starts_with("I/O error while reading"));
}
