//! Integration tests for the `eventdesk` CLI binary.
//!
//! Argument parsing, config handling and exit codes run without a service;
//! the rest talk to a wiremock server passed via `--server`.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `eventdesk` binary with env isolation.
///
/// Clears every `EVENTDESK_*` variable and points the config file into
/// `dir` so tests never touch the user's real configuration.
fn eventdesk_cmd(dir: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("eventdesk");
    cmd.env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("EVENTDESK_CONFIG", dir.path().join("config.toml"))
        .env_remove("EVENTDESK_PROFILE")
        .env_remove("EVENTDESK_SERVER")
        .env_remove("EVENTDESK_OUTPUT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn event_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "eventId": id,
        "eventName": name,
        "description": "Quarterly gathering",
        "startDateTime": "2030-06-15T10:30:00",
        "endDateTime": "2030-06-15T12:00:00",
        "location": "Hall A",
        "organizer": "Tanaka",
        "maxParticipants": 40,
        "currentParticipants": 12,
        "status": "ACTIVE"
    })
}

async fn mount_events(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [event_json(1, "Spring Meetup"), event_json(2, "Rust Night")]
        })))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let dir = tempfile::tempdir().unwrap();
    let output = eventdesk_cmd(&dir).output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    let dir = tempfile::tempdir().unwrap();
    eventdesk_cmd(&dir).arg("--help").assert().success().stdout(
        predicate::str::contains("events")
            .and(predicate::str::contains("participants"))
            .and(predicate::str::contains("dashboard")),
    );
}

#[test]
fn test_version_flag() {
    let dir = tempfile::tempdir().unwrap();
    eventdesk_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("eventdesk"));
}

#[test]
fn test_completions_zsh() {
    let dir = tempfile::tempdir().unwrap();
    eventdesk_cmd(&dir)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eventdesk"));
}

#[test]
fn test_unknown_view_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = eventdesk_cmd(&dir)
        .args(["--server", "http://127.0.0.1:1/api", "view", "settings"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("settings"));
}

#[test]
fn test_invalid_start_is_rejected_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let output = eventdesk_cmd(&dir)
        .args([
            "--server",
            "http://127.0.0.1:1/api",
            "events",
            "create",
            "--name",
            "Demo",
            "--start",
            "tomorrow",
            "--end",
            "2030-06-15T12:00",
            "--location",
            "Hall A",
            "--organizer",
            "Org",
            "--capacity",
            "10",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("start"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_env() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("config.toml");
    eventdesk_cmd(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    eventdesk_cmd(&dir)
        .args(["config", "init", "--server", "http://events.test:8080/api"])
        .assert()
        .success();
    assert!(dir.path().join("config.toml").exists());

    eventdesk_cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[profiles.default]")
                .and(predicate::str::contains("http://events.test:8080/api")),
        );

    // A second init refuses to overwrite
    let output = eventdesk_cmd(&dir)
        .args(["config", "init"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("--force"));
}

#[test]
fn test_config_use_unknown_profile() {
    let dir = tempfile::tempdir().unwrap();
    let output = eventdesk_cmd(&dir)
        .args(["config", "use", "staging"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("staging"));
}

// ── Service-backed commands ─────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_events_list_json() {
    let server = MockServer::start().await;
    mount_events(&server).await;
    let dir = tempfile::tempdir().unwrap();

    let output = eventdesk_cmd(&dir)
        .args(["--server", &format!("{}/api", server.uri())])
        .args(["-o", "json", "events", "list"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let events = parsed.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["name"], "Spring Meetup");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_events_list_renders_html_page() {
    let server = MockServer::start().await;
    mount_events(&server).await;
    let dir = tempfile::tempdir().unwrap();

    eventdesk_cmd(&dir)
        .args(["--server", &format!("{}/api", server.uri())])
        .args(["events", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("<!DOCTYPE html>")
                .and(predicate::str::contains("Spring Meetup"))
                .and(predicate::str::contains("Rust Night"))
                .and(predicate::str::contains(r#"class="nav-btn active" data-view="events""#)),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_without_terminal_is_declined() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    eventdesk_cmd(&dir)
        .args(["--server", &format!("{}/api", server.uri())])
        .args(["events", "delete", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cancelled"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_with_yes_refreshes_list() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/events/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    mount_events(&server).await;
    let dir = tempfile::tempdir().unwrap();

    eventdesk_cmd(&dir)
        .args(["--server", &format!("{}/api", server.uri())])
        .args(["-y", "-o", "table", "events", "delete", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust Night"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_maps_to_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/events/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Event not found"
        })))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let output = eventdesk_cmd(&dir)
        .args(["--server", &format!("{}/api", server.uri())])
        .args(["events", "show", "99"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
}

#[test]
fn test_connection_refused_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = eventdesk_cmd(&dir)
        .args(["--server", "http://127.0.0.1:1/api", "--timeout", "5"])
        .args(["events", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
}

async fn mount_delete(server: &MockServer) {
    Mock::given(method("DELETE"))
        .and(path("/api/events/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(server)
        .await;
    mount_events(server).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_color_default_from_config_is_applied() {
    let server = MockServer::start().await;
    mount_delete(&server).await;
    let dir = tempfile::tempdir().unwrap();

    let output = eventdesk_cmd(&dir)
        .env("EVENTDESK_DEFAULTS__COLOR", "always")
        .args(["--server", &format!("{}/api", server.uri())])
        .args(["-y", "-o", "json", "events", "delete", "3"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains('✓'), "Expected a toast on stderr:\n{stderr}");
    assert!(stderr.contains("\u{1b}["), "Expected ANSI color codes:\n{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_color_flag_overrides_config() {
    let server = MockServer::start().await;
    mount_delete(&server).await;
    let dir = tempfile::tempdir().unwrap();

    let output = eventdesk_cmd(&dir)
        .env("EVENTDESK_DEFAULTS__COLOR", "always")
        .args(["--server", &format!("{}/api", server.uri())])
        .args(["--color", "never", "-y", "-o", "json", "events", "delete", "3"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains('✓'), "Expected a toast on stderr:\n{stderr}");
    assert!(!stderr.contains("\u{1b}["), "Expected plain text:\n{stderr}");
}
