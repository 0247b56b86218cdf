use super::common::TestContext;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_api(releases: serde_json::Value) -> MockServer {
    mock_api_with_quota(releases, 4990).await
}

async fn mock_api_with_quota(releases: serde_json::Value, remaining: u64) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": {"core": {"limit": 5000, "remaining": remaining, "reset": 1700000000}}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(releases))
        .mount(&server)
        .await;

    server
}

fn sample_releases() -> serde_json::Value {
    json!([
        {"tag_name": "v1.0.0", "name": "Version 1.0.0", "body": "First stable",
         "draft": false, "prerelease": false},
        {"tag_name": "op-node/v1.10.2", "name": "op-node v1.10.2", "body": "Node notes",
         "draft": false, "prerelease": false},
        {"tag_name": "v2.0.0-rc1", "name": "RC", "body": null,
         "draft": false, "prerelease": true},
        {"tag_name": "v3.0.0", "name": "Unpublished", "body": "draft",
         "draft": true, "prerelease": false}
    ])
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_writes_release_tree() {
    let server = mock_api(sample_releases()).await;
    let ctx = TestContext::new();

    ctx.relnotes_against(&server.uri())
        .args(["--repos", "owner/repo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary for owner/repo:"))
        .stdout(predicate::str::contains("Files: 2 written, 0 unchanged"))
        .stdout(predicate::str::contains("Latest pre-release: v2.0.0-rc1"));

    let root = ctx.artifacts().join("owner/repo");
    assert_eq!(
        fs::read_to_string(root.join("v1.0.0.md")).unwrap(),
        "# owner/repo - v1.0.0 (Stable Release)\n\n## Release Notes\n\nFirst stable\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("v2.0.0-rc1.md")).unwrap(),
        "# owner/repo - v2.0.0-rc1 (Pre-release)\n\n## Release Notes\n\nNo release notes provided.\n"
    );
    assert!(fs::read_to_string(root.join("op-node/v1.10.2.md"))
        .unwrap()
        .starts_with("# owner/repo/op-node - op-node/v1.10.2 (Stable Release)\n"));
    assert!(!root.join("v3.0.0.md").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rerun_leaves_files_unchanged() {
    let server = mock_api(sample_releases()).await;
    let ctx = TestContext::new();

    ctx.relnotes_against(&server.uri())
        .args(["--repos", "owner/repo"])
        .assert()
        .success();

    ctx.relnotes_against(&server.uri())
        .args(["--repos", "owner/repo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files: 0 written, 2 unchanged"))
        .stdout(predicate::str::contains("Files: 0 written, 1 unchanged"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_file_and_env_layers() {
    let server = mock_api(sample_releases()).await;
    let ctx = TestContext::new();
    ctx.write_config(
        "repositories:\n  repos: owner/repo\nartifacts:\n  path: from-file\n  history: true\n",
    );

    // The environment overrides the file's artifacts path
    ctx.relnotes_against(&server.uri())
        .env("ARTIFACTS_PATH", "from-env")
        .assert()
        .success()
        .stdout(predicate::str::contains("Latest: v1.0.0"));

    assert!(ctx.path().join("from-env/owner/repo/v1.0.0.md").is_file());
    assert!(!ctx.path().join("from-file").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_monorepo_artifacts_from_env() {
    let server = mock_api(json!([
        {"tag_name": "v5.0.0", "name": "Batcher 5", "body": "op-batcher changes",
         "draft": false, "prerelease": false}
    ]))
    .await;
    let ctx = TestContext::new();

    ctx.relnotes_against(&server.uri())
        .args(["--repos", "owner/repo"])
        .env("MONOREPO_ARTIFACTS_OWNER_REPO", "op-batcher")
        .assert()
        .success()
        .stdout(predicate::str::contains("  op-batcher/"));

    assert!(ctx
        .artifacts()
        .join("owner/repo/op-batcher/v5.0.0.md")
        .is_file());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rate_limited_repository_continues_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/owner/limited/releases"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-RateLimit-Remaining", "0")
                .insert_header("X-RateLimit-Reset", "1700000000"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_releases()))
        .mount(&server)
        .await;
    let ctx = TestContext::new();

    ctx.relnotes_against(&server.uri())
        .args(["--repos", "owner/limited,owner/repo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("rate limit reached"))
        .stderr(predicate::str::contains("Could not check rate limit status"))
        .stdout(predicate::str::contains("Summary for owner/repo:"));

    assert!(ctx.artifacts().join("owner/repo/v1.0.0.md").is_file());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_low_quota_and_missing_token_are_reported() {
    let server = mock_api_with_quota(sample_releases(), 5).await;
    let ctx = TestContext::new();

    ctx.relnotes_against(&server.uri())
        .args(["--repos", "owner/repo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Only 5 API calls remaining"))
        .stderr(predicate::str::contains("No GITHUB_TOKEN found"))
        .stderr(predicate::str::contains(
            "Set GITHUB_TOKEN environment variable to increase rate limits",
        ));

    assert!(ctx.artifacts().join("owner/repo/v1.0.0.md").is_file());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_healthy_quota_with_token_is_quiet() {
    let server = mock_api(sample_releases()).await;
    let ctx = TestContext::new();

    ctx.relnotes_against(&server.uri())
        .args(["--repos", "owner/repo"])
        .env("GITHUB_TOKEN", "test-token")
        .assert()
        .success()
        .stderr(predicate::str::contains("API calls remaining").not())
        .stderr(predicate::str::contains("No GITHUB_TOKEN found").not());
}
