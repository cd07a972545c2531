use regex::Regex;
use std::fs;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_autoyahtzee"))
        .args(args)
        .output()
        .expect("Failed to execute process")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn simulate_prints_a_summary() {
    let output = run(&["simulate", "--games", "2", "--seed", "3"]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = stdout_of(&output);
    assert!(stdout.contains("MaximizeGain"));
    assert!(stdout.contains("Balance"));
    let total_row = Regex::new(r"\|\s*Total\s*\|\s*\d+\s*\|").unwrap();
    assert!(total_row.is_match(&stdout), "{}", stdout);
}

#[test]
fn simulate_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("totals.csv");
    let output = run(&[
        "simulate",
        "--games",
        "2",
        "--seed",
        "8",
        "--csv",
        csv_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let content = fs::read_to_string(&csv_path).unwrap();
    let rows = Regex::new(r"(?m)^\d+,\d+,\d+,\d+,\d+$").unwrap();
    assert_eq!(content.lines().next(), Some("game,seed,upper,bonus,total"));
    assert_eq!(rows.find_iter(&content).count(), 2);
}

#[test]
fn advise_ranks_all_masks() {
    let output = run(&[
        "advise",
        "--dice",
        "6,6,6,6,6",
        "--assigned",
        "Ace=1,1,2,3,4",
        "--assigned",
        "Choice=1,2,3,4,5",
    ]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Reroll   : [-, -, -, -, -]"), "{}", stdout);
    assert!(stdout.contains("Category : Yahtzee"), "{}", stdout);
    let mask_rows = Regex::new(r"(?m)^\|\s*\d+\s*\|\s*\[[1-5\-, ]+\]").unwrap();
    assert_eq!(mask_rows.find_iter(&stdout).count(), 32);
}

#[test]
fn config_file_is_merged_under_cli_flags() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("cfg.json");
    let csv_path = dir.path().join("out.csv");
    fs::write(
        &cfg_path,
        format!(
            r#"{{ "game": {{ "games": 4, "seed": 1 }}, "output": {{ "csv": {:?} }} }}"#,
            csv_path.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = run(&[
        "simulate",
        "--config",
        cfg_path.to_str().unwrap(),
        "--games",
        "1",
    ]);
    assert!(output.status.success(), "{:?}", output);
    let content = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn bad_input_exits_non_zero() {
    let output = run(&["advise", "--dice", "1,2,3"]);
    assert!(!output.status.success());

    let output = run(&["advise", "--dice", "1,2,3,4,5", "--assigned", "Sevens=1,1,1,1,1"]);
    assert!(!output.status.success());

    let output = run(&["simulate", "--games", "0"]);
    assert!(!output.status.success());
}
