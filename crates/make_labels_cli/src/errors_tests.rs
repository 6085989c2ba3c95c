use super::*;

#[test]
fn test_config_error_display() {
    let error = Error::Config("Invalid GitHub API base URL".to_string());
    assert_eq!(
        error.to_string(),
        "Configuration error: Invalid GitHub API base URL"
    );
}

#[test]
fn test_invalid_arguments_error_display() {
    let error = Error::InvalidArguments("expected <owner>/<repository>".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid arguments: expected <owner>/<repository>"
    );
}

#[test]
fn test_core_error_is_transparent() {
    let core = make_labels_core::Error::GitHub(github_client::Error::RateLimitExceeded);
    let error: Error = core.into();

    assert_eq!(error.to_string(), "GitHub request failed: Rate limit exceeded");
}

#[test]
fn test_error_debug_format() {
    let error = Error::Config("test".to_string());
    let debug_output = format!("{:?}", error);
    assert!(debug_output.contains("Config"));
    assert!(debug_output.contains("test"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}

