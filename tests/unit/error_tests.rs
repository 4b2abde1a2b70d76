//! Unit tests for `AppError` display format and error behavior.

use chatmux::AppError;

#[test]
fn host_error_display_starts_with_host_prefix() {
    let err = AppError::Host("kill-session failed".into());
    assert!(err.to_string().starts_with("host:"));
}

#[test]
fn host_error_display_includes_message() {
    let err = AppError::Host("kill-session failed".into());
    assert_eq!(err.to_string(), "host: kill-session failed");
}

#[test]
fn error_message_no_trailing_period() {
    let err = AppError::Config("session_name must not be empty".into());
    let s = err.to_string();
    assert!(
        !s.ends_with('.'),
        "error message must not end with a period: {s}"
    );
}

#[test]
fn host_error_is_distinct_from_io_error() {
    let host = AppError::Host("spawn failed".into());
    let io = AppError::Io("spawn failed".into());
    assert_ne!(host.to_string(), io.to_string());
    assert!(host.to_string().starts_with("host:"));
    assert!(io.to_string().starts_with("io:"));
}

#[test]
fn config_error_display_starts_with_config_prefix() {
    let err = AppError::Config("invalid config".into());
    assert!(err.to_string().starts_with("config:"));
}

#[test]
fn io_error_converts_via_from() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: AppError = io.into();
    assert!(matches!(err, AppError::Io(_)));
    assert!(err.to_string().contains("gone"));
}

#[test]
fn error_implements_std_error_trait() {
    fn assert_error<E: std::error::Error>(_err: &E) {}
    let err = AppError::Host("test".into());
    assert_error(&err);
}

#[test]
fn error_debug_representation_names_variant() {
    let err = AppError::Host("attach refused".into());
    let debug = format!("{err:?}");
    assert!(debug.contains("Host"));
    assert!(debug.contains("attach refused"));
}
