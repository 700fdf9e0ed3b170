//! Property-based tests for rust_logger_facade using proptest

use proptest::prelude::*;
use rust_logger_facade::engine::{observer, EngineLogger, Encoding};
use rust_logger_facade::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn any_environment() -> impl Strategy<Value = Environment> {
    prop_oneof![
        Just(Environment::Development),
        Just(Environment::Testing),
        Just(Environment::Staging),
        Just(Environment::Production),
    ]
}

/// Randomly upper-case characters of a level name
fn mixed_case(name: &str, mask: u32) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << i) != 0 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Any casing of a level name parses to that level
    #[test]
    fn test_level_parse_ignores_case(level in any_level(), mask in any::<u32>()) {
        let raw = mixed_case(level.as_lowercase(), mask);
        prop_assert_eq!(raw.parse::<LogLevel>().unwrap(), level);
    }

    /// Text that is not a level name never parses
    #[test]
    fn test_unknown_level_text_is_rejected(raw in "[a-zA-Z ]{0,12}") {
        let known = ["debug", "info", "warn", "error", "fatal"];
        prop_assume!(!known.contains(&raw.to_ascii_lowercase().as_str()));

        let is_invalid_level = matches!(
            raw.parse::<LogLevel>(),
            Err(LoggerError::InvalidLevel { .. })
        );
        prop_assert!(is_invalid_level);
    }
}

// ============================================================================
// Resolver Tests
// ============================================================================

proptest! {
    /// The resolved threshold is the parsed level, and only production is JSON
    #[test]
    fn test_resolver_profile(env in any_environment(), level in any_level(), mask in any::<u32>()) {
        let raw = mixed_case(level.as_lowercase(), mask);
        let config = resolve_config(env, &raw).unwrap();

        prop_assert_eq!(config.level, level);
        prop_assert_eq!(config.encoding == Encoding::Json, env == Environment::Production);
        prop_assert_eq!(config.disable_stacktrace, env == Environment::Production);
    }

    /// Records are emitted exactly when at or above the threshold
    #[test]
    fn test_threshold_suppression(min in any_level(), emitted in any_level()) {
        prop_assume!(emitted != LogLevel::Fatal);

        let (core, logs) = observer::new(min);
        let logger = FacadeLogger::new(EngineLogger::new(core));

        match emitted {
            LogLevel::Debug => logger.debug("m", &[]),
            LogLevel::Info => logger.info("m", &[]),
            LogLevel::Warn => logger.warn("m", &[]),
            LogLevel::Error => logger.error("m", &[]),
            LogLevel::Fatal => unreachable!(),
        }

        prop_assert_eq!(logs.len() == 1, emitted >= min);
    }

    /// Named derivation never changes the parent's records
    #[test]
    fn test_named_derivation_leaves_parent_untouched(name in "[a-z]{1,10}") {
        let (core, logs) = observer::new(LogLevel::Debug);
        let parent = FacadeLogger::new(EngineLogger::new(core));

        let child = parent.new_named_logger(&name);
        let _grandchild = child.new_named_logger("inner");
        parent.info("parent", &[]);
        child.info("child", &[]);

        let records = logs.all();
        prop_assert_eq!(records[0].logger_name.clone(), None);
        prop_assert_eq!(records[1].logger_name.clone(), Some(name));
    }
}
