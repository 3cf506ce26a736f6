//! The deployment pool: c = 1, s = 0, lambda = 50.

use {
    crate::{
        domain::Calculation,
        tests::{deployment_params, output},
    },
    num::BigInt,
    number::Context,
};

const TAU_ALPHA_X: &str = "99981367602332163269692323144458353703";
const TAU_ALPHA_Y: &str = "1930319239743647598374220090538386313";
const TAU_BETA_X: &str = "99984746838998994989324367248967173323";
const TAU_BETA_Y: &str = "1746539304247253278786255909644152494";
const ONE_XP: &str = "100000000000000000000000000000000000000";

fn int(value: &str) -> BigInt {
    value.parse().unwrap()
}

#[test]
fn matches_golden_constants() {
    let calculation = Calculation::compute(deployment_params(), &Context::default()).unwrap();
    let constants = &calculation.constants;

    assert_eq!(constants.tau_alpha_x, int(TAU_ALPHA_X));
    assert_eq!(constants.tau_alpha_y, int(TAU_ALPHA_Y));
    assert_eq!(constants.tau_beta_x, int(TAU_BETA_X));
    assert_eq!(constants.tau_beta_y, int(TAU_BETA_Y));
    assert_eq!(constants.u, int("0"));
    assert_eq!(constants.v, int(TAU_ALPHA_Y));
    assert_eq!(constants.w, int("0"));
    assert_eq!(constants.z, int(TAU_BETA_X));
    assert_eq!(constants.d_sq, int(ONE_XP));
    assert!(calculation.sanity.warnings.is_empty());
}

#[test]
fn matches_golden_full_precision_values() {
    let calculation = Calculation::compute(deployment_params(), &Context::default()).unwrap();

    assert_eq!(
        calculation.derived.tau_alpha.x.to_string(),
        "0.99981367602332163269692323144458353703985566859965583292150726601576629094927266175\
         395651222802010375102616677292628880143886546900699210471797981525968035667436069341766\
         871244484804985334618596905736"
    );
    assert_eq!(
        calculation.derived.tau_beta.y.to_string(),
        "0.01746539304247253278786255909644152494802162705540518671182652549331712535717155912\
         797501137671834946404898951722731230802809967829421539081496630055067208475478401638600\
         4288546368432341868526484394020"
    );
}

#[test]
fn prints_solidity_constants() {
    let report = output(&[]);

    let expected = format!(
        "=== Solidity Constants (38-decimal, int256) ===

    int256 internal constant TAU_ALPHA_X = {TAU_ALPHA_X};
    int256 internal constant TAU_ALPHA_Y = {TAU_ALPHA_Y};
    int256 internal constant TAU_BETA_X  = {TAU_BETA_X};
    int256 internal constant TAU_BETA_Y  = {TAU_BETA_Y};
    int256 internal constant U           = 0;
    int256 internal constant V           = {TAU_ALPHA_Y};
    int256 internal constant W           = 0;
    int256 internal constant Z           = {TAU_BETA_X};
    int256 internal constant D_SQ        = {ONE_XP};
"
    );
    assert!(report.contains(&expected), "{report}");
}

#[test]
fn prints_inputs_and_sanity_checks() {
    let report = output(&[]);
    let lines = report.lines().collect::<Vec<_>>();

    assert_eq!(
        lines[..10],
        [
            "=== E-CLP Derived Parameter Computation ===",
            "alpha  = 1.035905",
            "beta   = 1.144947",
            "c      = 1",
            "s      = 0",
            "lambda = 50",
            "",
            "dSq = 1",
            "d   = 1",
            "",
        ]
    );
    assert!(lines.contains(&"u = 0"));
    assert!(lines.contains(&"w = 0"));

    let sanity = &lines[lines.len() - 4..];
    assert_eq!(sanity[0], "=== Sanity Checks ===");
    assert!(sanity[1].starts_with("|tauAlpha| = 1.38966200156526945460901451996805157161971798348"));
    assert!(sanity[2].starts_with("|tauBeta|  = 1.32751453678142140364883435445651130130589775770"));
    assert_eq!(sanity[3], "dSq ~= 1?  1");
}

#[test]
fn output_is_reproducible() {
    assert_eq!(output(&[]), output(&[]));
    assert_eq!(output(&["--format", "json"]), output(&["--format", "json"]));
}

#[test]
fn raising_beta_moves_tau_beta_along_the_curve() {
    let ctx = Context::default();
    let mut params = deployment_params();
    let lower = Calculation::compute(params.clone(), &ctx).unwrap().constants;
    params.beta = crate::tests::dec("1.2");
    let higher = Calculation::compute(params, &ctx).unwrap().constants;

    // tau(p) = (p, 1/λ) / sqrt(p² + 1/λ²): x grows towards 1 while y shrinks.
    assert_eq!(higher.tau_beta_x, int("99986114003959996433207368132823726326"));
    assert_eq!(higher.tau_beta_y, int("1666435233399333273886789468880395438"));
    assert!(higher.tau_beta_x > lower.tau_beta_x);
    assert!(higher.tau_beta_y <= lower.tau_beta_y);
    assert_eq!(higher.tau_alpha_x, lower.tau_alpha_x);
}

#[test]
fn higher_precision_keeps_constants() {
    let default = Calculation::compute(deployment_params(), &Context::default())
        .unwrap()
        .constants;
    let report = output(&["--precision", "400"]);

    for (name, value) in default.named() {
        assert!(report.contains(&format!("{name:<11} = {value};")), "{name}");
    }
}
