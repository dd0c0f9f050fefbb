//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary with CF environment isolated from the developer's machine
fn usage_report(cf_home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("usage-report"));
    cmd.env_remove("CF_API")
        .env_remove("CF_TOKEN")
        .env_remove("RUST_LOG")
        .env("CF_HOME", cf_home.path());
    cmd
}

fn page(resources: serde_json::Value) -> serde_json::Value {
    let count = resources.as_array().map(|r| r.len()).unwrap_or(0);
    serde_json::json!({
        "total_results": count,
        "total_pages": 1,
        "prev_url": null,
        "next_url": null,
        "resources": resources
    })
}

async fn mount(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// One org, one space, two apps, three mysql instances
async fn mock_platform() -> MockServer {
    let server = MockServer::start().await;

    mount(
        &server,
        "/v2/services",
        page(serde_json::json!([{
            "metadata": {"guid": "svc-m"},
            "entity": {"label": "p-mysql", "service_plans_url": "/v2/services/svc-m/service_plans"}
        }])),
    )
    .await;
    mount(
        &server,
        "/v2/services/svc-m/service_plans",
        page(serde_json::json!([
            {"metadata": {"guid": "plan-1"}, "entity": {"name": "100mb"}},
            {"metadata": {"guid": "plan-2"}, "entity": {"name": "1gb"}}
        ])),
    )
    .await;
    mount(
        &server,
        "/v2/organizations",
        page(serde_json::json!([{
            "metadata": {"guid": "org-1", "url": "/v2/organizations/org-1"},
            "entity": {
                "name": "test-org",
                "quota_definition_url": "/v2/quota_definitions/q-1",
                "spaces_url": "/v2/organizations/org-1/spaces"
            }
        }])),
    )
    .await;
    mount(
        &server,
        "/v2/quota_definitions/q-1",
        serde_json::json!({"metadata": {"guid": "q-1"}, "entity": {"memory_limit": 4096}}),
    )
    .await;
    mount(
        &server,
        "/v2/organizations/org-1/memory_usage",
        serde_json::json!({"memory_usage_in_mb": 256}),
    )
    .await;
    mount(
        &server,
        "/v2/organizations/org-1/spaces",
        page(serde_json::json!([{
            "metadata": {"guid": "space-1"},
            "entity": {
                "name": "test-space",
                "apps_url": "/v2/spaces/space-1/apps",
                "service_instances_url": "/v2/spaces/space-1/service_instances"
            }
        }])),
    )
    .await;
    mount(
        &server,
        "/v2/spaces/space-1/apps",
        page(serde_json::json!([
            {"metadata": {"guid": "app-1"}, "entity": {"instances": 2, "memory": 128, "state": "STARTED"}},
            {"metadata": {"guid": "app-2"}, "entity": {"instances": 1, "memory": 128, "state": "STOPPED"}}
        ])),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces/space-1/service_instances"))
        .and(query_param("q", "service_plan_guid IN plan-1,plan-2"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(serde_json::json!([
            {"metadata": {"guid": "si-1"}, "entity": {"name": "my-mysql"}},
            {"metadata": {"guid": "si-2"}, "entity": {"name": "my-redis"}},
            {"metadata": {"guid": "si-3"}, "entity": {"name": "extra-mysql"}}
        ]))))
        .mount(&server)
        .await;

    server
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    let home = tempfile::tempdir().unwrap();
    usage_report(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Report AI and memory usage for orgs and spaces",
        ))
        .stdout(predicate::str::contains("--service-label"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    usage_report(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("usage-report 1.5.0"));
}

/// Unknown flags are usage errors
#[test]
fn test_unknown_flag_is_usage_error() {
    let home = tempfile::tempdir().unwrap();
    usage_report(&home)
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

/// No endpoint anywhere fails before any request
#[test]
fn test_missing_api_endpoint() {
    let home = tempfile::tempdir().unwrap();
    usage_report(&home)
        .args(["--token", "secret"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: No API endpoint set"));
}

/// Endpoint given but no token anywhere
#[test]
fn test_missing_token() {
    let home = tempfile::tempdir().unwrap();
    usage_report(&home)
        .args(["--api", "https://api.sys.example.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cf login"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_csv_report_end_to_end() {
    let server = mock_platform().await;
    let home = tempfile::tempdir().unwrap();

    usage_report(&home)
        .args(["--api", &server.uri(), "--token", "secret", "--service-label", "p-mysql"])
        .args(["-f", "csv"])
        .assert()
        .success()
        .stdout(
            "org_name,org_memory_quota_mb,org_memory_usage_mb,space_name,app_ram_mb,app_instances,app_memory_mb,app_running,service_instances\n\
             test-org,4096,256,test-space,128,2,256,true,my-mysql;my-redis;extra-mysql\n\
             test-org,4096,256,test-space,128,1,128,false,my-mysql;my-redis;extra-mysql\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_text_report_end_to_end() {
    let server = mock_platform().await;
    let home = tempfile::tempdir().unwrap();

    usage_report(&home)
        .args(["--api", &server.uri(), "--token", "secret", "--service-label", "p-mysql"])
        .assert()
        .success()
        .stdout(
            "Org test-org: using 256 MB of 4096 MB quota (6.25%)\n\
             \x20 Space test-space: 1 of 2 apps running\n\
             \x20   app 1: 2 x 128 MB = 256 MB (running)\n\
             \x20   app 2: 1 x 128 MB = 128 MB (stopped)\n\
             \x20   service instances: my-mysql, my-redis, extra-mysql\n\
             \x20   running memory: 256 MB\n\
             \x20 total running memory: 256 MB\n",
        );
}

/// Endpoint and token come from the CF CLI config file
#[tokio::test(flavor = "multi_thread")]
async fn test_report_uses_cf_config_file() {
    let server = mock_platform().await;
    let home = tempfile::tempdir().unwrap();
    let cf_dir = home.path().join(".cf");
    std::fs::create_dir_all(&cf_dir).unwrap();
    std::fs::write(
        cf_dir.join("config.json"),
        serde_json::json!({
            "Target": server.uri(),
            "AccessToken": "bearer secret",
            "SSLDisabled": false
        })
        .to_string(),
    )
    .unwrap();

    usage_report(&home)
        .args(["--service-label", "p-mysql", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "test-org,4096,256,test-space,128,2,256,true,",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_org_exits_with_error() {
    let server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(serde_json::json!([]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("q", "name:nope"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(serde_json::json!([]))))
        .mount(&server)
        .await;

    usage_report(&home)
        .args(["--api", &server.uri(), "--token", "secret", "-o", "nope"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: organization 'nope' not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_produces_no_partial_output() {
    let server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    usage_report(&home)
        .args(["--api", &server.uri(), "--token", "secret", "-f", "csv"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"));
}
