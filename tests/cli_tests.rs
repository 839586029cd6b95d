use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{INVALID_REPORT, VALID_REPORT, srp, temp_path, write_report};

#[test]
fn test_check_valid_report() {
    let file = write_report("check_valid", VALID_REPORT);

    srp()
        .args(["check", &file, "--strict"])
        .assert()
        .success()
        .stdout(contains("Rapport d'activité du 14/03/2025"))
        .stdout(contains("Temps d'arrêt total: 1h 30m"))
        .stdout(contains("Temps de fonctionnement estimé: 22h 30m"))
        .stdout(contains("Total vibrator: 14h 30m"))
        .stdout(contains("Total liaison: 5h 15m"))
        .stdout(contains("Report can be submitted"));
}

#[test]
fn test_check_reports_row_errors() {
    let file = write_report("check_invalid", INVALID_REPORT);

    srp()
        .args(["check", &file])
        .assert()
        .success()
        .stdout(contains(
            "Début (9347.9) doit correspondre à Fin (9348.0) du 1er Poste.",
        ))
        .stdout(contains("Veuillez sélectionner un poste."))
        .stdout(contains("Submission blocked by: vibrator, stock"));
}

#[test]
fn test_check_strict_fails_when_blocked() {
    let file = write_report("check_strict", INVALID_REPORT);

    srp()
        .args(["check", &file, "--strict"])
        .assert()
        .failure()
        .stderr(contains("Report cannot be submitted: vibrator, stock"));
}

#[test]
fn test_new_creates_blank_report() {
    let file = temp_path("new_blank", "json");

    srp()
        .args(["new", &file, "--date", "2025-03-15", "--previous-end", "9360"])
        .assert()
        .success()
        .stdout(contains("Report created"));

    let content = fs::read_to_string(&file).expect("read report");
    assert!(content.contains("\"date\": \"2025-03-15\""));
    assert!(content.contains("\"previous_day_end\": \"9360\""));

    srp()
        .args(["check", &file, "--strict"])
        .assert()
        .success()
        .stdout(contains("Temps de fonctionnement estimé: 24h 0m"));

    // refuses to overwrite
    srp().args(["new", &file]).assert().failure();
}

#[test]
fn test_new_rejects_bad_date() {
    let file = temp_path("new_bad_date", "yml");

    srp()
        .args(["new", &file, "--date", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_set_fixes_continuity() {
    let file = write_report("set_fix", INVALID_REPORT);

    srp()
        .args([
            "set", &file, "--group", "vibrator", "--row", "v2", "--field", "start", "--value",
            "9348",
        ])
        .assert()
        .success()
        .stdout(contains("doit correspondre").not());

    srp()
        .args([
            "set", &file, "--group", "stock", "--row", "k1", "--field", "shift", "--value", "1",
        ])
        .assert()
        .success()
        .stdout(contains("Report can be submitted"));

    // selecting a shift reset the start time
    let content = fs::read_to_string(&file).expect("read report");
    assert!(!content.contains("06:45"));
}

#[test]
fn test_set_stock_park_cascade() {
    let file = write_report("set_cascade", VALID_REPORT);

    srp()
        .args([
            "set", &file, "--group", "stock", "--row", "k1", "--field", "park", "--value",
            "PARK 3",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&file).expect("read report");
    assert!(content.contains("park: PARK3"));
    assert!(content.contains("product_type: null"));
    assert!(!content.contains("quantity: '12'"));
}

#[test]
fn test_set_rejects_unknown_row_and_value() {
    let file = write_report("set_unknown", VALID_REPORT);

    srp()
        .args([
            "set", &file, "--group", "stops", "--row", "zz", "--field", "duration", "--value",
            "1h",
        ])
        .assert()
        .failure()
        .stderr(contains("No row with id zz in stops"));

    srp()
        .args([
            "set", &file, "--group", "liaison", "--row", "l1", "--field", "shift", "--value",
            "7",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid value for shift: 7"));
}

#[test]
fn test_add_and_del_rows() {
    let file = write_report("add_del", VALID_REPORT);

    srp()
        .args(["add", &file, "--group", "stops"])
        .assert()
        .success()
        .stdout(contains("Row added to stops"));

    srp()
        .args(["del", &file, "--group", "stops", "--row", "s1"])
        .assert()
        .success()
        .stdout(contains("Temps d'arrêt total: 0h 30m"))
        .stdout(contains("Row s1 deleted from stops"));

    srp()
        .args(["del", &file, "--group", "vibrator", "--row", "v1"])
        .assert()
        .success()
        .stdout(contains("Total vibrator: 7h 30m"));
}

#[test]
fn test_unsupported_extension() {
    let file = temp_path("bad_ext", "txt");
    fs::write(&file, "stops: []").expect("write");

    srp()
        .args(["check", &file])
        .assert()
        .failure()
        .stderr(contains("Unsupported report file"));
}

#[test]
fn test_daily_two_modules() {
    let file = write_report(
        "daily",
        r#"
module1:
  - duration: "2h"
    nature: "Maintenance"
module2:
  - duration: "1:15"
  - duration: "45"
"#,
    );

    srp()
        .args(["daily", &file])
        .assert()
        .success()
        .stdout(contains("Module 1 - Arrêts"))
        .stdout(contains("Arrêt: 2h 0m | Fonctionnement: 22h 0m"))
        .stdout(contains("Arrêt: 2h 0m | Fonctionnement: 22h 0m").count(2));
}

#[test]
fn test_config_file_limits_are_applied() {
    let conf = temp_path("limits", "conf");
    fs::write(&conf, "max_hours_per_shift: 6\n").expect("write config");
    let file = write_report("limits_report", VALID_REPORT);

    assert_cmd::cargo_bin_cmd!("shiftreport")
        .env("NO_COLOR", "1")
        .args(["--config", &conf, "check", &file])
        .assert()
        .success()
        .stdout(contains("Durée max (6 h) dépassée (7.00h)."));
}

#[test]
fn test_init_writes_config() {
    let conf = temp_path("init", "conf");

    assert_cmd::cargo_bin_cmd!("shiftreport")
        .args(["--config", &conf, "init"])
        .assert()
        .success();

    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("max_hours_per_shift: 8.0"));
    assert!(content.contains("period_minutes: 1440"));
}

#[test]
fn test_repeated_row_id_is_rejected() {
    let file = write_report(
        "dup_ids",
        r#"
vibrator:
  - id: a
    shift: PREMIER
    start: "0"
    end: "9"
  - id: a
    shift: DEUXIEME
    start: "9"
    end: "10"
"#,
    );

    srp()
        .args(["check", &file])
        .assert()
        .failure()
        .stderr(contains("Duplicate row id a in vibrator"));
}

#[test]
fn test_daily_module_rows_are_editable() {
    let file = temp_path("daily_edit", "yml");

    srp()
        .args(["new", &file, "--daily", "--date", "2025-03-15"])
        .assert()
        .success();

    srp()
        .args(["add", &file, "--group", "module2"])
        .assert()
        .success()
        .stdout(contains("Row added to module2"));

    fs::write(
        &file,
        "module1:\n  - id: m1\n    duration: '1h'\nmodule2:\n  - id: m2\n    duration: '30'\n",
    )
    .expect("write daily report");

    srp()
        .args([
            "set", &file, "--group", "module2", "--row", "m2", "--field", "duration", "--value",
            "2h",
        ])
        .assert()
        .success()
        .stdout(contains("Arrêt: 2h 0m | Fonctionnement: 22h 0m"));

    srp()
        .args(["del", &file, "--group", "module1", "--row", "m1"])
        .assert()
        .success()
        .stdout(contains("Arrêt: 0h 0m | Fonctionnement: 24h 0m"))
        .stdout(contains("Row m1 deleted from module1"));

    srp()
        .args(["del", &file, "--group", "module1", "--row", "m2"])
        .assert()
        .failure()
        .stderr(contains("No row with id m2 in module1"));
}
