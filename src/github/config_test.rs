use super::*;

// =============================================================================
// env_parse_u64 — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_u64_unset_returns_default() {
    assert_eq!(env_parse_u64("__TEST_EPU_SURELY_UNSET_17__", 8000), 8000);
}

#[test]
fn env_parse_u64_valid_value() {
    let key = "__TEST_EPU_VALID_291__";
    unsafe { std::env::set_var(key, "2500") };
    assert_eq!(env_parse_u64(key, 8000), 2500);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_invalid_falls_back_to_default() {
    let key = "__TEST_EPU_INVALID_448__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse_u64(key, 8000), 8000);
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// DispatchConfig / DispatchTarget
// =============================================================================

// No test in this binary sets GITHUB_PAT, so removing it here cannot race.
#[test]
fn from_env_without_token_is_missing_token() {
    unsafe { std::env::remove_var("GITHUB_PAT") };
    let err = DispatchConfig::from_env().unwrap_err();
    assert!(matches!(err, DispatchError::MissingToken { ref var } if var == "GITHUB_PAT"));
    assert!(err.to_string().contains("GITHUB_PAT"));
}

#[test]
fn review_rebuild_target_is_pinned_to_main() {
    let target = DispatchTarget::review_rebuild();
    assert_eq!(target.git_ref, "main");
    assert_eq!(target.workflow_file, "rebuild-review-decks.yml");
    assert_eq!(target.owner, "kotoba-app");
    assert_eq!(target.repo, "kotoba");
}

#[test]
fn default_timeout_is_eight_seconds() {
    assert_eq!(DEFAULT_DISPATCH_TIMEOUT_MS, 8000);
}
