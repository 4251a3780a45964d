use super::settings::{apply_set, apply_unset, SettingError};
use super::*;

fn parse_args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv)
        .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
}

#[test]
fn test_no_subcommand_means_interactive() {
    let args = parse_args(&["emotion-ai"]);
    assert!(args.command.is_none());
    assert!(args.base_url.is_none());
}

#[test]
fn test_global_flags_parse_anywhere() {
    let cases: [&[&str]; 2] = [
        &["emotion-ai", "--base-url", "http://localhost:8000", "ui"],
        &["emotion-ai", "ui", "-u", "http://localhost:8000"],
    ];
    for argv in cases {
        let args = parse_args(argv);
        assert_eq!(
            args.base_url.as_deref(),
            Some("http://localhost:8000"),
            "argv={argv:?}"
        );
    }
}

#[test]
fn test_analyze_joins_words_and_keeps_hyphens() {
    let args = parse_args(&["emotion-ai", "analyze", "--json", "I'm", "so", "-excited-"]);
    match args.command {
        Some(Commands::Analyze { json, text }) => {
            assert!(json);
            assert_eq!(text.join(" "), "I'm so -excited-");
        }
        _ => panic!("expected analyze subcommand"),
    }
}

#[test]
fn test_analyze_without_text_parses_empty() {
    let args = parse_args(&["emotion-ai", "analyze"]);
    match args.command {
        Some(Commands::Analyze { json, text }) => {
            assert!(!json);
            assert!(text.is_empty());
        }
        _ => panic!("expected analyze subcommand"),
    }
}

#[test]
fn test_set_and_unset_parse() {
    let args = parse_args(&["emotion-ai", "set", "base-url", "http://x"]);
    assert!(matches!(
        args.command,
        Some(Commands::Set { ref key, value: Some(ref value) }) if key == "base-url" && value == "http://x"
    ));

    let args = parse_args(&["emotion-ai", "unset", "theme"]);
    assert!(matches!(args.command, Some(Commands::Unset { ref key }) if key == "theme"));
}

#[test]
fn test_set_base_url_normalizes_and_validates() {
    let mut config = Config::default();

    let message = apply_set(&mut config, "base-url", Some("http://localhost:8000/")).unwrap();
    assert_eq!(config.base_url.as_deref(), Some("http://localhost:8000"));
    assert!(message.contains("http://localhost:8000"));

    assert_eq!(
        apply_set(&mut config, "base-url", Some("localhost:8000")),
        Err(SettingError::InvalidUrl("localhost:8000".to_string()))
    );
    assert!(matches!(
        apply_set(&mut config, "base-url", None),
        Err(SettingError::MissingArgs { .. })
    ));
    assert_eq!(config.base_url.as_deref(), Some("http://localhost:8000"));
}

#[test]
fn test_set_theme_requires_known_name() {
    let mut config = Config::default();
    apply_set(&mut config, "theme", Some("Light")).unwrap();
    assert_eq!(config.theme.as_deref(), Some("light"));

    assert_eq!(
        apply_set(&mut config, "theme", Some("neon")),
        Err(SettingError::UnknownTheme {
            input: "neon".to_string()
        })
    );
}

#[test]
fn test_unset_clears_values_and_rejects_unknown_keys() {
    let mut config = Config {
        base_url: Some("http://x".to_string()),
        theme: Some("dark".to_string()),
    };
    apply_unset(&mut config, "base-url").unwrap();
    apply_unset(&mut config, "theme").unwrap();
    assert_eq!(config, Config::default());

    assert_eq!(
        apply_unset(&mut config, "model"),
        Err(SettingError::UnknownKey("model".to_string()))
    );
}

#[test]
fn test_theme_flag_beats_config() {
    let config = Config {
        base_url: None,
        theme: Some("light".to_string()),
    };
    assert!(!theme_for(Some("monochrome"), &config).emotion_colors);
    assert_eq!(
        theme_for(None, &config).background_color,
        Theme::light().background_color
    );
}
