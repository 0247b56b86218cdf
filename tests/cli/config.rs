use super::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_missing_repositories_fails() {
    let ctx = TestContext::new();

    ctx.relnotes()
        .assert()
        .failure()
        .stderr(predicate::str::contains("No repositories specified"));
}

#[test]
fn test_empty_repository_env_counts_as_missing() {
    let ctx = TestContext::new();

    ctx.relnotes()
        .env("GITHUB_REPOS", "  ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--repos"));
}

#[test]
fn test_malformed_config_file_is_not_fatal() {
    let ctx = TestContext::new();
    ctx.write_config("repositories: [unclosed");

    // Still fails, but only because nothing names a repository
    ctx.relnotes()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read config file"))
        .stderr(predicate::str::contains("No repositories specified"));
}

#[test]
fn test_malformed_repository_is_skipped() {
    let ctx = TestContext::new();

    // Never reaches the network: the only identifier is rejected up front
    ctx.relnotes_against("http://127.0.0.1:1")
        .args(["--repos", "not-a-repo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing repository: not-a-repo"))
        .stderr(predicate::str::contains("Invalid repository format 'not-a-repo'"));
}

#[test]
fn test_unreachable_api_is_not_fatal() {
    let ctx = TestContext::new();

    ctx.relnotes_against("http://127.0.0.1:1")
        .args(["--repos", "owner/repo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error fetching releases for owner/repo"));

    assert!(!ctx.artifacts().join("owner/repo").exists());
}

#[test]
fn test_help_lists_flags() {
    let ctx = TestContext::new();

    ctx.relnotes()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--artifacts-path"))
        .stdout(predicate::str::contains("--monorepo"));
}
