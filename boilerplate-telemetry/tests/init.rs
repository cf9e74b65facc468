use boilerplate_config::{LogLevel, ObservabilityConfig, PRODUCTION};
use boilerplate_telemetry::{EventLogger, TelemetryError};

// Both cases live in one test: the subscriber is global to the test binary.
#[test]
fn init_installs_subscriber_once() {
    let mut invalid = ObservabilityConfig::default();
    invalid.logging.level = "verbose".into();
    assert!(matches!(
        EventLogger::init(&invalid),
        Err(TelemetryError::Config(_))
    ));

    let mut config = ObservabilityConfig::default();
    config.environment = PRODUCTION.into();
    config.logging.level.clear();
    let level = EventLogger::init(&config).expect("first init succeeds");
    assert_eq!(level, LogLevel::Info);

    assert!(matches!(
        EventLogger::init(&config),
        Err(TelemetryError::Subscriber(_))
    ));
}
