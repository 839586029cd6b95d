#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's config and without colors.
pub fn srp() -> Command {
    let mut cmd = cargo_bin_cmd!("shiftreport");
    cmd.env("NO_COLOR", "1")
        .args(["--config", &temp_path("unused", "conf")]);
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftreport.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a YAML report into a fresh temp file and return its path.
pub fn write_report(name: &str, yaml: &str) -> String {
    let p = temp_path(name, "yml");
    fs::write(&p, yaml).expect("write report");
    p
}

/// Two stops (1h + 30 min), a consistent vibrator group continuing the
/// previous day's reading, one liaison row and one complete stock entry.
pub const VALID_REPORT: &str = r#"
date: 2025-03-14
previous_day_end: "9341.0"
stops:
  - id: s1
    duration: "1h"
    nature: "Panne convoyeur"
  - id: s2
    duration: "30"
    nature: "Nettoyage"
vibrator:
  - id: v1
    shift: PREMIER
    start: "9341.0"
    end: "9348"
  - id: v2
    shift: DEUXIEME
    start: "9348"
    end: "9355.5"
liaison:
  - id: l1
    shift: PREMIER
    start: "100.5"
    end: "105.75"
stock:
  - id: k1
    shift: PREMIER
    park: PARK1
    product_type: NORMAL
    quantity: "12"
"#;

/// Same report with a broken continuity on v2 and a stock entry without shift.
pub const INVALID_REPORT: &str = r#"
previous_day_end: "9341.0"
stops: []
vibrator:
  - id: v1
    shift: PREMIER
    start: "9341.0"
    end: "9348"
  - id: v2
    shift: DEUXIEME
    start: "9347.9"
    end: "9350"
liaison: []
stock:
  - id: k1
    start_time: "06:45"
"#;
