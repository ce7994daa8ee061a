//! Integration tests for the binary surface.
//!
//! These tests run the compiled `grafanactl` binary: flag validation exits,
//! settings precedence end-to-end, and rendered output. The child process
//! environment is cleared so host configuration cannot leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn grafanactl() -> Command {
    let mut cmd = Command::cargo_bin("grafanactl").unwrap();
    cmd.env_clear();
    cmd
}

async fn server_with_folders() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/folders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "uid": "a", "title": "A"},
            {"id": 2, "uid": "b", "title": "B"},
            {"id": 3, "uid": "c", "title": "C"},
        ])))
        .mount(&server)
        .await;
    server
}

mod validation {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn get_with_both_selectors_fails_without_client_call() {
        let server = MockServer::start().await;
        // Any request reaching the server fails the test on drop.
        Mock::given(method("GET"))
            .and(path("/api/folders/id/5"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        grafanactl()
            .env("URL", server.uri())
            .env("APIKEY", "k")
            .args(["folder", "get", "--id", "5", "--uid", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("only one of --id and --uid"));
    }

    #[test]
    fn get_with_no_selector_fails() {
        grafanactl()
            .args(["folder", "get"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("either --id or --uid"));
    }

    #[test]
    fn create_with_no_input_fails() {
        grafanactl()
            .args(["folder", "create"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("either --file or --title"));
    }

    #[test]
    fn create_with_file_and_title_fails() {
        grafanactl()
            .args([
                "folder", "create", "--file", "folder.json", "--title", "Production",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "--file cannot be combined with --title or --uid",
            ));
    }

    #[test]
    fn create_with_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let payload = dir.path().join("bad.json");
        fs::write(&payload, "not json at all").unwrap();

        grafanactl()
            .args(["folder", "create", "--file"])
            .arg(&payload)
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse"));
    }

    #[test]
    fn missing_endpoint_fails_at_client_construction() {
        grafanactl()
            .args(["folder", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no Grafana URL configured"));
    }

    #[test]
    fn unknown_output_format_fails() {
        grafanactl()
            .args(["folder", "list", "--output", "yaml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown output format"));
    }

    #[test]
    fn unknown_verbosity_fails() {
        grafanactl()
            .args(["folder", "list", "--verbosity", "loud"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown verbosity"));
    }

    #[test]
    fn missing_explicit_config_file_fails() {
        grafanactl()
            .args(["--config", "/nonexistent/grafanactl.yaml", "folder", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read config file"));
    }
}

mod precedence {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn flag_beats_env_and_file() {
        let server = server_with_folders().await;

        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("grafanactl.yaml");
        fs::write(&config, "url: http://file.invalid\napiKey: k\n").unwrap();

        grafanactl()
            .env("URL", "http://env.invalid")
            .arg("--config")
            .arg(&config)
            .arg("--url")
            .arg(server.uri())
            .args(["folder", "list", "--output", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"uid\": \"a\""));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn env_beats_file() {
        let server = server_with_folders().await;

        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("grafanactl.yaml");
        fs::write(&config, "url: http://file.invalid\napiKey: k\n").unwrap();

        grafanactl()
            .env("URL", server.uri())
            .arg("--config")
            .arg(&config)
            .args(["folder", "list", "--output", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"uid\": \"a\""));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn file_alone_configures_the_client() {
        let server = server_with_folders().await;

        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("grafanactl.yaml");
        fs::write(
            &config,
            format!("url: {}\napiKey: k\noutput: json\n", server.uri()),
        )
        .unwrap();

        grafanactl()
            .arg("--config")
            .arg(&config)
            .args(["folder", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"title\": \"A\""));
    }
}

mod output {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn table_lists_folders_in_order() {
        let server = server_with_folders().await;

        let assert = grafanactl()
            .env("URL", server.uri())
            .env("APIKEY", "k")
            .args(["folder", "list"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let lines: Vec<&str> = stdout.lines().filter(|l| !l.trim().is_empty()).collect();

        assert_eq!(
            lines[0].split_whitespace().collect::<Vec<_>>(),
            vec!["ID", "UID", "TITLE"]
        );
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["1", "a", "A"]
        );
        assert_eq!(
            lines[2].split_whitespace().collect::<Vec<_>>(),
            vec!["2", "b", "B"]
        );
        assert_eq!(
            lines[3].split_whitespace().collect::<Vec<_>>(),
            vec!["3", "c", "C"]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_folder_reports_uid() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/folders/prod"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": 7, "message": "Folder deleted", "title": "Production"}
            )))
            .mount(&server)
            .await;

        grafanactl()
            .env("URL", server.uri())
            .env("APIKEY", "k")
            .args(["folder", "delete", "--uid", "prod"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Folder prod deleted"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn create_dashboard_reports_id_and_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/dashboards/db"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 9,
                "uid": "req",
                "url": "/d/req/requests",
                "status": "success"
            })))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("dashboard.json");
        fs::write(
            &model,
            json!({"uid": "req", "title": "Requests"}).to_string(),
        )
        .unwrap();

        grafanactl()
            .env("URL", server.uri())
            .env("APIKEY", "k")
            .args(["dashboard", "create", "--file"])
            .arg(&model)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "dashboard id 9 created at /d/req/requests",
            ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn client_failure_exits_nonzero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/folders/ghost"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "folder not found"})),
            )
            .mount(&server)
            .await;

        grafanactl()
            .env("URL", server.uri())
            .env("APIKEY", "k")
            .args(["folder", "get", "--uid", "ghost"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("folder not found"));
    }

    #[test]
    fn version_flag_prints_version() {
        grafanactl()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
