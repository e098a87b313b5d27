use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Nothing listens here, so every primary request fails fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

const ENV_OVERRIDES: [&str; 8] = [
    "GCADR_FORMAT",
    "GCADR_CONFIG",
    "GCADR_API_URL",
    "GCADR_SITE_HOST",
    "GCADR_STATIC_ROOT",
    "GCADR_TIMEOUT_MS",
    "GCADR_NO_CACHE",
    "GCADR_DEBUG",
];

fn gcadr(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gcadr"));
    for var in ENV_OVERRIDES {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG").arg("--config").arg(config);
    cmd
}

fn write_config(dir: &Path, api_url: &str, static_root: &Path) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "api_url: {api_url}\nstatic_root: {}\ntimeout_ms: 2000\n",
        static_root.display()
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn write_static(root: &Path, document: &str, body: &str) {
    let path = root.join("api").join(document);
    fs::create_dir_all(path.parent().expect("document has a parent")).expect("mkdir");
    fs::write(path, body).expect("failed to write static document");
}

const STATIC_TEAM: &str = r#"[
    { "id": "7f9c", "name": "Asha Rao", "role": "convenor", "role_display": "Convenor", "batch": "2021-26" },
    { "id": "81ab", "name": "Kabir Shah", "role": "student_member", "batch": "2022-27" }
]"#;

#[test]
fn version_prints_package_version() {
    let temp = tempdir().expect("tempdir");
    let config = write_config(temp.path(), UNREACHABLE_API, temp.path());

    let assert = gcadr(&config).arg("version").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&format!("gcadr version {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = tempdir().expect("tempdir");
    let missing = temp.path().join("nope.yaml");

    gcadr(&missing)
        .args(["team", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Configuration file not found"));
}

#[test]
fn team_list_falls_back_to_static_bundle() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let site = temp.path().join("public");
    write_static(&site, "team.json", STATIC_TEAM);
    let config = write_config(temp.path(), UNREACHABLE_API, &site);

    let assert = gcadr(&config)
        .args(["team", "list", "--format", "table"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Asha Rao"));
    assert!(stdout.contains("Convenor"));
    assert!(stdout.contains("Kabir Shah"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("showing static content"));

    Ok(())
}

#[test]
fn list_with_no_source_prints_empty_result() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), UNREACHABLE_API, &temp.path().join("empty"));

    let assert = gcadr(&config)
        .args(["leadership", "list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["meta"]["totalCount"], 0);
    assert_eq!(json["meta"]["source"], "degraded");

    Ok(())
}

#[test]
fn newsletter_subscribe_failure_exits_with_hint() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), UNREACHABLE_API, temp.path());

    let assert = gcadr(&config)
        .args(["newsletter", "subscribe", "asha@example.com"])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("gcadr@gnlu.ac.in"));
    assert!(stderr.contains("Error:"));

    Ok(())
}

#[test]
fn contact_validation_fails_before_sending() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), UNREACHABLE_API, temp.path());

    let assert = gcadr(&config)
        .args([
            "contact", "send", "--name", " ", "--email", "a@example.com", "--message", "Hi",
            "--yes",
        ])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("Missing required fields: name"));
    assert!(!stderr.contains("gcadr@gnlu.ac.in"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn team_http_500_serves_static_bundle() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let team = server
        .mock("GET", "/api/team/")
        .with_status(500)
        .expect(1)
        .create();

    let temp = tempdir()?;
    let site = temp.path().join("public");
    write_static(&site, "team.json", STATIC_TEAM);
    let config = write_config(temp.path(), &server.url(), &site);

    let assert = gcadr(&config)
        .args(["team", "list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"][0]["name"], "Asha Rao");
    assert_eq!(json["meta"]["totalCount"], 2);
    assert_eq!(json["meta"]["source"], "degraded");

    team.assert();

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn blog_list_reads_primary_page() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _blogs = server
        .mock("GET", "/api/blogs/")
        .match_query(mockito::Matcher::UrlEncoded(
            "category".into(),
            "mediation".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "count": 14,
                "results": [
                    { "id": "a1", "title": "Mediation 101", "slug": "mediation-101",
                      "category_name": "Mediation", "created_at": "2024-03-01T10:00:00Z" }
                ]
            }"#,
        )
        .create();

    let temp = tempdir()?;
    let config = write_config(temp.path(), &server.url(), temp.path());

    let assert = gcadr(&config)
        .args(["blog", "list", "--category", "mediation", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"][0]["slug"], "mediation-101");
    assert_eq!(json["meta"]["totalCount"], 14);
    assert_eq!(json["meta"]["source"], "primary");

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn rejected_contact_message_reports_field_errors() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _contact = server
        .mock("POST", "/api/contact/submit/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{ "email": ["Enter a valid email address."] }"#)
        .create();

    let temp = tempdir()?;
    let config = write_config(temp.path(), &server.url(), temp.path());

    let assert = gcadr(&config)
        .args([
            "contact", "send", "--name", "Asha", "--email", "not-an-email", "--message",
            "Hello", "--yes",
        ])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(stderr.contains("email: Enter a valid email address."));
    assert!(stderr.contains("gcadr@gnlu.ac.in"));

    Ok(())
}
