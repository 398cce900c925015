use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn checker(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jira-version-checker").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("JIRA_CREDENTIALS", dir.path().join("credentials.json"))
        // Nothing listens on the discard port; a request attempt would surface as a transport error.
        .env("JIRA_BASE_URL", "http://127.0.0.1:9");
    cmd
}

#[test]
fn missing_arguments_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    checker(&dir)
        .arg("PAY")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("<VERSION>"));
}

#[test]
fn missing_credentials_file_fails_before_requesting() {
    let dir = tempfile::tempdir().unwrap();
    checker(&dir)
        .args(["PAY", "1.2.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error opening credentials file"))
        .stderr(predicate::str::contains("Error performing request").not());
}

#[test]
fn malformed_credentials_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("credentials.json"), "[]").unwrap();
    checker(&dir)
        .args(["--color", "never", "PAY", "1.2.0"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Error parsing credentials"));
}

#[test]
fn unreachable_server_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("credentials.json"),
        r#"{"user": "ana", "password": "pw"}"#,
    )
    .unwrap();
    checker(&dir)
        .args(["PAY", "1.2.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error performing request"));
}

#[tokio::test]
async fn prints_report_for_a_release() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/api/2/search/"))
        .and(query_param("jql", "project=PAY AND fixVersion=1.2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "issues": [
                { "key": "PAY-1", "fields": { "summary": "Refunds", "customfield_17840": "" } },
                { "key": "PAY-2", "fields": { "summary": "Invoices", "customfield_17840": "done" } }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("credentials.json"),
        r#"{"user": "ana", "password": "pw"}"#,
    )
    .unwrap();
    let base_url = mock_server.uri();

    // The child process blocks; the mock server keeps running on the test runtime.
    tokio::task::spawn_blocking(move || {
        checker(&dir)
            .env("JIRA_BASE_URL", &base_url)
            .args(["--color", "never", "PAY", "1.2.0"])
            .assert()
            .success()
            .stderr(predicate::str::is_empty())
            .stdout(predicate::str::contains("- [PAY-1] Refunds\n"))
            .stdout(predicate::str::contains("\t- Evidencia: Incompleta\n"))
            .stdout(predicate::str::contains("\t- Evidencia: Completa\n"))
            .stdout(predicate::str::contains(format!(
                "Issues sin evidencia (1):\n- [PAY-1] {}/browse/PAY-1\n",
                base_url
            )));
    })
    .await
    .unwrap();
}
