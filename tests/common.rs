#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use shiftsheet::models::employee::{Employee, Roster};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sst() -> Command {
    cargo_bin_cmd!("shiftsheet")
}

pub const ROSTER_YAML: &str = r#"
- id: 1
  name: Ivanov Ivan Ivanovich
  shift: 1
  role: Manager
  hours_target: 168.0
- id: 2
  name: Petrov Petr Petrovich
  shift: 2
  role: Operator
- id: 3
  name: Sidorova Anna Mikhaylovna
  shift: 0
  role: Accountant
"#;

/// Write the standard three-employee roster into the temp dir and return its path
pub fn setup_roster(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftsheet_roster.yaml", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, ROSTER_YAML).expect("write roster");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftsheet_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// The same roster as ROSTER_YAML, built in memory for library-level tests
pub fn test_roster() -> Roster {
    Roster::new(vec![
        Employee {
            id: 1,
            name: "Ivanov Ivan Ivanovich".to_string(),
            shift: 1,
            role: "Manager".to_string(),
            hours_target: Some(168.0),
        },
        Employee {
            id: 2,
            name: "Petrov Petr Petrovich".to_string(),
            shift: 2,
            role: "Operator".to_string(),
            hours_target: None,
        },
        Employee {
            id: 3,
            name: "Sidorova Anna Mikhaylovna".to_string(),
            shift: 0,
            role: "Accountant".to_string(),
            hours_target: None,
        },
    ])
}
