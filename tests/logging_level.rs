use tasksort::cli::LogLevel;
use tasksort::logging::resolve_level;

#[test]
fn cli_flag_wins_over_environment() {
    assert_eq!(
        resolve_level(Some(LogLevel::Debug), Some("error")),
        tracing::Level::DEBUG
    );
}

#[test]
fn environment_value_is_parsed_loosely() {
    assert_eq!(resolve_level(None, Some(" Warning ")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("TRACE")), tracing::Level::TRACE);
}

#[test]
fn unknown_or_missing_value_defaults_to_info() {
    assert_eq!(resolve_level(None, Some("loud")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}
