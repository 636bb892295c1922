//! Property-based tests for rust_cloud_logger using proptest

use proptest::prelude::*;
use rust_cloud_logger::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Verbose),
        Just(LogLevel::Debug),
        Just(LogLevel::Silly),
    ]
}

fn any_environment() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("production".to_string())),
        Just(Some("staging".to_string())),
        Just(Some("development".to_string())),
        Just(Some("local".to_string())),
        Just(Some("default".to_string())),
        "[a-z]{1,12}".prop_map(Some),
    ]
}

fn any_signals() -> impl Strategy<Value = EnvSignals> {
    (any_environment(), proptest::option::of("[a-z]{1,8}")).prop_map(|(env, level)| {
        let mut signals = EnvSignals::new();
        if let Some(env) = env {
            signals = signals.with_environment(env);
        }
        if let Some(level) = level {
            signals = signals.with_log_level(level);
        }
        signals
    })
}

fn any_settings() -> impl Strategy<Value = LogSettings> {
    (
        any_level(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of("[a-z]{1,8}"),
        proptest::option::of("[a-z]{1,8}"),
    )
        .prop_map(
            |(level, use_stack_driver, use_console, key_filename, project_id)| LogSettings {
                level,
                use_stack_driver,
                use_console,
                key_filename,
                project_id,
            },
        )
}

fn resolve(partial: Option<&PartialLogSettings>, env: &EnvSignals) -> LogSettings {
    rust_cloud_logger::core::settings::resolve(partial, env)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Level names roundtrip through validation
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        prop_assert_eq!(LogLevel::validate(level.to_str()), Some(level));
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Gating agrees with the severity ordering
    #[test]
    fn test_permits_matches_ordering(record in any_level(), sink in any_level()) {
        prop_assert_eq!(record.permits(sink), record as u8 >= sink as u8);
    }
}

// ============================================================================
// Settings Resolution Tests
// ============================================================================

proptest! {
    /// A valid explicit level always wins
    #[test]
    fn test_valid_explicit_level_wins(level in any_level(), env in any_signals()) {
        let partial = PartialLogSettings::new().level(level.to_str());
        prop_assert_eq!(resolve(Some(&partial), &env).level, level);
    }

    /// An invalid explicit level resolves exactly like no level at all
    #[test]
    fn test_invalid_level_falls_through(
        bogus in "[A-Z0-9]{1,10}",
        env in any_signals(),
    ) {
        let partial = PartialLogSettings::new().level(bogus);
        prop_assert_eq!(
            resolve(Some(&partial), &env).level,
            resolve(None, &env).level
        );
    }

    /// At least one sink is always attached
    #[test]
    fn test_at_least_one_sink(
        env in any_signals(),
        use_stack_driver in proptest::option::of(any::<bool>()),
        use_console in proptest::option::of(any::<bool>()),
    ) {
        let partial = PartialLogSettings {
            use_stack_driver,
            use_console,
            ..PartialLogSettings::default()
        };
        let settings = resolve(Some(&partial), &env);
        prop_assert!(settings.use_console || settings.use_stack_driver);
    }

    /// Explicit cloud flag is always honored
    #[test]
    fn test_explicit_stack_driver_honored(flag in any::<bool>(), env in any_signals()) {
        let partial = PartialLogSettings::new().use_stack_driver(flag);
        prop_assert_eq!(resolve(Some(&partial), &env).use_stack_driver, flag);
    }

    /// Resolving already resolved settings changes nothing
    #[test]
    fn test_resolution_is_idempotent(env in any_signals(), partial_level in any_level()) {
        let first = resolve(Some(&PartialLogSettings::new().level(partial_level.to_str())), &env);
        let second = resolve(Some(&PartialLogSettings::from(&first)), &env);
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// Settings Equality Tests
// ============================================================================

proptest! {
    #[test]
    fn test_equality_reflexive(settings in any_settings()) {
        prop_assert!(are_settings_equal(Some(&settings), Some(&settings)));
        prop_assert!(!are_settings_equal(Some(&settings), None));
        prop_assert!(!are_settings_equal(None, Some(&settings)));
    }

    #[test]
    fn test_equality_symmetric(a in any_settings(), b in any_settings()) {
        prop_assert_eq!(
            are_settings_equal(Some(&a), Some(&b)),
            are_settings_equal(Some(&b), Some(&a))
        );
        prop_assert_eq!(are_settings_equal(Some(&a), Some(&b)), a == b);
    }

    /// Flipping any single field breaks equality
    #[test]
    fn test_equality_field_sensitive(a in any_settings(), other_level in any_level()) {
        let mut flipped = a.clone();
        flipped.use_stack_driver = !a.use_stack_driver;
        prop_assert!(!are_settings_equal(Some(&a), Some(&flipped)));

        let mut flipped = a.clone();
        flipped.use_console = !a.use_console;
        prop_assert!(!are_settings_equal(Some(&a), Some(&flipped)));

        let mut changed = a.clone();
        changed.key_filename = Some(format!("{}-changed", a.key_filename.clone().unwrap_or_default()));
        prop_assert!(!are_settings_equal(Some(&a), Some(&changed)));

        let mut changed = a.clone();
        changed.project_id = Some(format!("{}-changed", a.project_id.clone().unwrap_or_default()));
        prop_assert!(!are_settings_equal(Some(&a), Some(&changed)));

        if other_level != a.level {
            let changed = LogSettings { level: other_level, ..a.clone() };
            prop_assert!(!are_settings_equal(Some(&a), Some(&changed)));
        }
    }
}

// ============================================================================
// Message Tests
// ============================================================================

proptest! {
    /// Text messages are rendered verbatim after the prefix
    #[test]
    fn test_text_render(prefix in ".{0,8}", text in ".*") {
        let rendered = LogMessage::from(text.as_str()).render(&prefix);
        prop_assert_eq!(rendered, format!("{}{}", prefix, text));
    }

    /// Structured messages render as parseable JSON after the prefix
    #[test]
    fn test_structured_render(key in "[a-z]{1,8}", value in any::<i64>()) {
        let mut object = serde_json::Map::new();
        object.insert(key.clone(), value.into());
        let rendered = LogMessage::structured(&object).render("");
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        prop_assert_eq!(parsed[key.as_str()].as_i64(), Some(value));
    }

    /// Entries never carry raw line breaks
    #[test]
    fn test_text_output_is_single_line(message in ".*") {
        let entry = LogEntry::new(LogLevel::Info, &message);
        prop_assert_eq!(&entry.message, &message);

        let line = OutputFormat::Text.format(&entry, false);
        prop_assert!(!line.contains('\n'));
        prop_assert!(!line.contains('\r'));
        prop_assert!(!line.contains('\t'));
    }
}
