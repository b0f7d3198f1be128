#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A Monday, pinned so due dates are stable across runs.
const TODAY: &str = "2025-03-03";

fn outreach(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("outreach").unwrap();
    cmd.current_dir(dir.path())
        .env("OUTREACH_ROOT", dir.path())
        .env("OUTREACH_TODAY", TODAY);
    cmd
}

fn init_project(dir: &TempDir) {
    outreach(dir).arg("init").assert().success();
}

fn add_acme(dir: &TempDir) {
    outreach(dir)
        .args([
            "target",
            "add",
            "Acme",
            "acme.com",
            "--contact",
            "Jane Doe",
            "--email",
            "jane@acme.com",
        ])
        .assert()
        .success();
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// outreach init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_data_files() {
    let dir = TempDir::new().unwrap();
    outreach(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("created: .outreach/settings.json"));

    for file in ["targets.json", "touches.json", "templates.json", "settings.json"] {
        assert!(dir.path().join(".outreach").join(file).exists(), "{file}");
    }
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    outreach(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists:  .outreach/targets.json"));
}

#[test]
fn init_starts_cadence_today() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let settings = json_stdout(outreach(&dir).args(["settings", "show", "--json"]));
    assert_eq!(settings["cadence_start"], TODAY);
    assert_eq!(settings["revenue_target"], 1_100_000.0);
}

// ---------------------------------------------------------------------------
// outreach cadence
// ---------------------------------------------------------------------------

#[test]
fn cadence_lists_eight_steps() {
    let dir = TempDir::new().unwrap();
    let steps = json_stdout(outreach(&dir).args(["cadence", "--json"]));
    let steps = steps.as_array().unwrap();
    assert_eq!(steps.len(), 8);
    assert_eq!(steps[0]["action"], "EMAIL_1_INTRO");
    assert_eq!(steps[7]["offset_days"], 45);
}

// ---------------------------------------------------------------------------
// outreach import
// ---------------------------------------------------------------------------

#[test]
fn import_merges_rows_by_company_and_domain() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let csv = dir.path().join("targets.csv");
    std::fs::write(
        &csv,
        "Company,Domain,Contact Name,Target Role,Email / Pattern\n\
         Acme,acme.com,Jane Doe,CFO,jane@acme.com\n\
         ACME ,Acme.com,nan,,first.last@acme.com\n\
         Globex,globex.com,,,\n\
         nan,nowhere.com,,,\n",
    )
    .unwrap();

    outreach(&dir)
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 rows into 2 targets (2 new)"));

    let acme = json_stdout(outreach(&dir).args(["target", "show", "acme::acme.com", "--json"]));
    assert_eq!(acme["target"]["email"], "jane@acme.com");
    assert_eq!(acme["target"]["contact_name"], "Jane Doe");
    assert_eq!(acme["target"]["status"], "NOT_CONTACTED");
}

#[test]
fn import_rejects_missing_columns() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    let csv = dir.path().join("bad.csv");
    std::fs::write(&csv, "Name,Website\nAcme,acme.com\n").unwrap();

    outreach(&dir)
        .arg("import")
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required columns: company, domain"));

    let targets = json_stdout(outreach(&dir).args(["target", "list", "--json"]));
    assert!(targets.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// outreach target
// ---------------------------------------------------------------------------

#[test]
fn target_add_and_list() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    outreach(&dir)
        .args(["target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme::acme.com"))
        .stdout(predicate::str::contains("Email 1: Intro"));
}

#[test]
fn target_add_rejects_duplicate() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    outreach(&dir)
        .args(["target", "add", "ACME", "acme.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target already exists"));
}

#[test]
fn target_edit_updates_status_and_value() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    outreach(&dir)
        .args([
            "target",
            "edit",
            "acme::acme.com",
            "--status",
            "won",
            "--actual",
            "40000",
        ])
        .assert()
        .success();

    let dash = json_stdout(outreach(&dir).args(["dashboard", "--json"]));
    assert_eq!(dash["metrics"]["secured"], 40_000.0);
}

#[test]
fn target_edit_without_fields_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    outreach(&dir)
        .args(["target", "edit", "acme::acme.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to change"));
}

#[test]
fn target_show_unknown_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    outreach(&dir)
        .args(["target", "show", "nobody::nowhere.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target not found"));
}

// ---------------------------------------------------------------------------
// outreach due / dashboard
// ---------------------------------------------------------------------------

#[test]
fn new_target_is_due_on_cadence_start() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    outreach(&dir)
        .arg("due")
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("Email 1: Intro"));

    let dash = json_stdout(outreach(&dir).args(["dashboard", "--json"]));
    assert_eq!(dash["metrics"]["due_today"], 1);
    assert_eq!(dash["metrics"]["projected"], 0.0);
    assert_eq!(dash["due"][0]["next"]["action"], "EMAIL_1_INTRO");
}

#[test]
fn future_cadence_start_means_nothing_due() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);
    outreach(&dir)
        .args(["settings", "set", "--cadence-start", "2025-03-10"])
        .assert()
        .success();

    outreach(&dir)
        .arg("due")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing due today."));
}

// ---------------------------------------------------------------------------
// outreach touch
// ---------------------------------------------------------------------------

#[test]
fn touch_log_advances_next_action() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    outreach(&dir)
        .args(["touch", "log", "acme::acme.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged Email 1: Intro (EMAIL_1_INTRO)"))
        .stdout(predicate::str::contains("Next: Email 2: Bump"));

    let shown = json_stdout(outreach(&dir).args(["target", "show", "acme::acme.com", "--json"]));
    assert_eq!(shown["target"]["status"], "IN_PLAY");
    assert_eq!(shown["next"]["action"], "EMAIL_2_BUMP");
    assert_eq!(shown["timeline"].as_array().unwrap().len(), 1);
}

#[test]
fn touch_log_out_of_order_keeps_earlier_gap() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    outreach(&dir)
        .args(["touch", "log", "acme::acme.com", "--action", "email_3_value"])
        .assert()
        .success();

    let shown = json_stdout(outreach(&dir).args(["target", "show", "acme::acme.com", "--json"]));
    assert_eq!(shown["next"]["action"], "EMAIL_1_INTRO");
}

#[test]
fn linkedin_touch_keeps_status() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    outreach(&dir)
        .args(["touch", "log", "acme::acme.com", "--action", "LINKEDIN_CONNECT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged LinkedIn: Connect"));

    let shown = json_stdout(outreach(&dir).args(["target", "show", "acme::acme.com", "--json"]));
    assert_eq!(shown["target"]["status"], "NOT_CONTACTED");
}

#[test]
fn touch_log_unknown_target_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    outreach(&dir)
        .args(["touch", "log", "nobody::nowhere.com", "--action", "EMAIL_1_INTRO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target not found"));
}

#[test]
fn touch_list_shows_logged_touches() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);
    outreach(&dir)
        .args(["touch", "log", "acme::acme.com"])
        .assert()
        .success();

    outreach(&dir)
        .args(["touch", "list", "--target", "acme::acme.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email 1: Intro"))
        .stdout(predicate::str::contains("EMAIL_1_INTRO"));
}

// ---------------------------------------------------------------------------
// outreach compose
// ---------------------------------------------------------------------------

#[test]
fn compose_builds_mailto_link() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    let draft = json_stdout(outreach(&dir).args(["compose", "acme::acme.com", "--json"]));
    assert_eq!(draft["action"], "EMAIL_1_INTRO");
    let body = draft["body"].as_str().unwrap();
    assert!(body.starts_with("Hi Jane — I’m Chris"));
    assert!(body.contains("the right person on your team"));
    let link = draft["link"].as_str().unwrap();
    assert!(link.starts_with("mailto:jane%40acme.com?subject="));
    assert!(!link.contains(' '));

    // Composing never logs a touch.
    let touches = json_stdout(outreach(&dir).args(["touch", "list", "--json"]));
    assert!(touches.as_array().unwrap().is_empty());
}

#[test]
fn compose_without_email_withholds_link() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    outreach(&dir)
        .args(["target", "add", "Globex", "globex.com", "--email", "first.last@"])
        .assert()
        .success();

    outreach(&dir)
        .args(["compose", "globex::globex.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi  — I’m Chris"))
        .stderr(predicate::str::contains("no valid email address"));
}

#[test]
fn compose_open_without_email_fails() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    outreach(&dir)
        .args(["target", "add", "Globex", "globex.com"])
        .assert()
        .success();

    outreach(&dir)
        .args(["compose", "globex::globex.com", "--open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid email address"));
}

#[test]
fn compose_linkedin_step_prints_reminder() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);
    for code in ["EMAIL_1_INTRO", "EMAIL_2_BUMP"] {
        outreach(&dir)
            .args(["touch", "log", "acme::acme.com", "--action", code])
            .assert()
            .success();
    }

    outreach(&dir)
        .args(["compose", "acme::acme.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next step is LinkedIn: Connect"))
        .stdout(predicate::str::contains("mailto:").not());
}

#[test]
fn compose_recycle_step_uses_template() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);
    for code in [
        "EMAIL_1_INTRO",
        "EMAIL_2_BUMP",
        "LINKEDIN_CONNECT",
        "EMAIL_3_VALUE",
        "EMAIL_4_SOCIAL",
        "EMAIL_5_RIGHT_PERSON",
        "EMAIL_6_CLOSE",
    ] {
        outreach(&dir)
            .args(["touch", "log", "acme::acme.com", "--action", code])
            .assert()
            .success();
    }

    let draft = json_stdout(outreach(&dir).args(["compose", "acme::acme.com", "--json"]));
    assert_eq!(draft["action"], "RECYCLE_Q4");
    assert_eq!(draft["subject"], "Quick check-in for Q4 gifting");
    assert!(draft["link"].as_str().unwrap().starts_with("mailto:"));
}

// ---------------------------------------------------------------------------
// outreach template / settings
// ---------------------------------------------------------------------------

#[test]
fn template_set_then_reset() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    outreach(&dir)
        .args(["template", "set", "EMAIL_2_BUMP", "--subject", "Following up, {{FirstName}}"])
        .assert()
        .success();
    outreach(&dir)
        .args(["template", "show", "EMAIL_2_BUMP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Following up, {{FirstName}}"));

    outreach(&dir).args(["template", "reset"]).assert().success();
    outreach(&dir)
        .args(["template", "show", "EMAIL_2_BUMP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Following up").not());
}

#[test]
fn template_set_rejects_linkedin_step() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    outreach(&dir)
        .args(["template", "set", "LINKEDIN_CONNECT", "--body", "hi"])
        .assert()
        .failure();
}

#[test]
fn settings_set_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);

    outreach(&dir)
        .args(["settings", "set", "--cadence-start", "03/10/2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

// ---------------------------------------------------------------------------
// outreach export
// ---------------------------------------------------------------------------

#[test]
fn export_tasks_writes_one_row_per_pending_target() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);

    outreach(&dir)
        .args(["export", "tasks"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Task Name,Due Date,Task Notes,Company Name,Company Domain",
        ))
        .stdout(predicate::str::contains("EMAIL_1_INTRO - Acme,2025-03-03"));
}

#[test]
fn export_targets_to_file() {
    let dir = TempDir::new().unwrap();
    init_project(&dir);
    add_acme(&dir);
    let out = dir.path().join("targets-out.csv");

    outreach(&dir)
        .args(["export", "targets", "--out"])
        .arg(&out)
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("id,company,domain"));
    assert!(content.contains("acme::acme.com,Acme,acme.com"));
}
