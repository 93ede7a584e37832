use ihub_logger::{Logger, LoggerError};

#[test]
fn second_logger_cannot_replace_the_global_subscriber() {
    let _logger = Logger::builder()
        .name("ihub-first")
        .level_str("debug")
        .expect("debug is a level")
        .env_filter("ihub_items=trace,info")
        .init()
        .expect("first logger installs the subscriber");

    // Builder validation runs before the global subscriber is touched.
    let invalid = Logger::builder().name("ihub-invalid").console(false).init();
    assert!(matches!(invalid, Err(LoggerError::InvalidConfiguration { .. })));

    let second = Logger::builder()
        .name("ihub-second")
        .level_str("warn")
        .expect("warn is a level")
        .init();
    assert!(matches!(second, Err(LoggerError::Subscriber { .. })));
}
