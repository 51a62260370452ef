use predicates::prelude::*;
use test_env::TestEnv;

const JOBS_JSON: &str = r#"{"jobs": [
    {"id": "a1b2", "task": "deploy-web", "type": "plan", "status": "success",
     "started_at": "2026-01-10T06:30:00Z", "finished_at": "2026-01-10T06:32:05Z"},
    {"id": "c3d4", "task": "nightly <backup>", "type": "cron", "status": "queued", "duration_sec": 42}
]}"#;

#[test]
fn test_jobs_table_from_file() {
    let env = TestEnv::new();
    let path = env.write_file("jobs.json", JOBS_JSON);
    env.cmd()
        .args(["--color", "never", "jobs", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("任务"))
        .stdout(predicate::str::contains("deploy-web"))
        .stdout(predicate::str::contains("计划"))
        .stdout(predicate::str::contains("成功"))
        .stdout(predicate::str::contains("2分5秒"))
        .stdout(predicate::str::contains("queued"))
        .stdout(predicate::str::contains("42秒"));
}

#[test]
fn test_jobs_table_from_stdin_english() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--locale", "en", "--color", "never", "jobs"])
        .write_stdin(JOBS_JSON)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID"))
        .stdout(predicate::str::contains("Duration"))
        .stdout(predicate::str::contains("2m5s"));
}

#[test]
fn test_jobs_html() {
    let env = TestEnv::new();
    env.cmd()
        .args(["jobs", "-", "--html"])
        .write_stdin(JOBS_JSON)
        .assert()
        .success()
        .stdout(predicate::str::contains("<span class=\"badge badge-plan\">计划</span>"))
        .stdout(predicate::str::contains("<span class=\"badge badge-task\">cron</span>"))
        .stdout(predicate::str::contains("<span class=\"status-badge queued\">queued</span>"))
        .stdout(predicate::str::contains("nightly &lt;backup&gt;"));
}

#[test]
fn test_jobs_json_fills_defaults() {
    let env = TestEnv::new();
    env.cmd()
        .args(["jobs", "--json"])
        .write_stdin(r#"[{"id": "x1", "task": "ping"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"task\""))
        .stdout(predicate::str::contains("\"status\": \"pending\""));
}

#[test]
fn test_jobs_invalid_input() {
    let env = TestEnv::new();
    env.cmd()
        .args(["jobs"])
        .write_stdin("not json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse job records"));

    let missing = env.temp_dir.path().join("missing.json");
    env.cmd()
        .args(["jobs", missing.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot open"));
}

#[test]
fn test_jobs_invalid_utf8_on_stdin_is_user_error() {
    let env = TestEnv::new();
    env.cmd()
        .args(["jobs"])
        .write_stdin(vec![b'[', 0xff, 0xfe, b']'])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse job records"))
        .stderr(predicate::str::contains("Internal error").not());
}

#[test]
fn test_jobs_empty_list() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--locale", "en", "jobs"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("No jobs.\n");
}
