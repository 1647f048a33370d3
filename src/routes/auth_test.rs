use super::*;
use crate::services::auth::AuthError;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_EB_INVALID_4410__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_4411__"), None);
}

#[test]
fn env_bool_whitespace_and_case_tolerant() {
    let key = "__TEST_EB_WS_4412__";
    unsafe { std::env::set_var(key, "  True  ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

// =============================================================================
// Cookie construction
// =============================================================================

#[test]
fn session_cookie_is_http_only_lax() {
    let cookie = session_cookie("tok".into(), false);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
}

#[test]
fn clear_cookie_expires_immediately() {
    let cookie = clear_session_cookie(true);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.secure(), Some(true));
}

// =============================================================================
// Error → status mapping
// =============================================================================

#[test]
fn auth_error_statuses() {
    assert_eq!(auth_error_to_status(&AuthError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(
        auth_error_to_status(&AuthError::Validation("x".into())),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(auth_error_to_status(&AuthError::EmailTaken), StatusCode::CONFLICT);
    assert_eq!(auth_error_to_status(&AuthError::UsernameTaken), StatusCode::CONFLICT);
    assert_eq!(
        auth_error_to_status(&AuthError::InvalidCredentials),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(auth_error_to_status(&AuthError::Banned), StatusCode::FORBIDDEN);
    assert_eq!(
        auth_error_to_status(&AuthError::Hash("x".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
