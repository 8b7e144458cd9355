//! Integration tests for the non-interactive commands

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// ikigai with an empty home so no user config or log leaks in
fn ikigai(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ikigai").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("XDG_CACHE_HOME", home.path().join(".cache"))
        .env_remove("IKIGAI_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    ikigai(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("suggest"));
}

#[test]
fn test_resolve_bare_domain() {
    let home = TempDir::new().unwrap();
    ikigai(&home)
        .args(["resolve", "example.com"])
        .assert()
        .success()
        .stdout("https://example.com\n");
}

#[test]
fn test_resolve_keeps_explicit_scheme() {
    let home = TempDir::new().unwrap();
    ikigai(&home)
        .args(["resolve", "http://a.io/x?y=1"])
        .assert()
        .success()
        .stdout("http://a.io/x?y=1\n");
}

#[test]
fn test_resolve_free_text_searches() {
    let home = TempDir::new().unwrap();
    ikigai(&home)
        .args(["resolve", "how", "to", "boil", "eggs"])
        .assert()
        .success()
        .stdout("https://google.com/search?q=how%20to%20boil%20eggs\n");
}

#[test]
fn test_resolve_with_search_url_flag() {
    let home = TempDir::new().unwrap();
    ikigai(&home)
        .args(["resolve", "rust lang", "--search-url", "https://duckduckgo.com/?q="])
        .assert()
        .success()
        .stdout("https://duckduckgo.com/?q=rust%20lang\n");
}

#[test]
fn test_resolve_blank_query_fails() {
    let home = TempDir::new().unwrap();
    ikigai(&home)
        .args(["resolve", "  "])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn test_resolve_reads_config_file() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("ikigai");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[search]\nfallback_search_url = \"https://search.example/?q=\"\n",
    )
    .unwrap();

    ikigai(&home)
        .args(["resolve", "cats"])
        .assert()
        .success()
        .stdout("https://search.example/?q=cats\n");
}

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.toml");
    std::fs::write(&config, "[search\n").unwrap();

    ikigai(&home)
        .args(["resolve", "cats", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout("https://google.com/search?q=cats\n")
        .stderr(predicate::str::contains("warning"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_suggest_prints_phrases() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ac/"))
        .and(query_param("q", "cat"))
        .and(query_param("type", "list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"phrase": "cat"},
            {"phrase": "cat videos"}
        ])))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let endpoint = format!("{}/ac/", server.uri());
    ikigai(&home)
        .args(["suggest", "cat", "--no-proxy", "--endpoint", &endpoint])
        .assert()
        .success()
        .stdout("cat\ncat videos\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_suggest_reports_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let endpoint = format!("{}/ac/", server.uri());
    ikigai(&home)
        .args(["suggest", "cat", "--no-proxy", "--endpoint", &endpoint])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("HTTP error! Status: 500"));
}
