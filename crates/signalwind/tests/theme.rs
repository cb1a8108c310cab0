use std::path::PathBuf;

use signalwind::config::ConfigError;
use signalwind::tokens::{is_hex6, COLOR_STEPS};
use signalwind::{Theme, ThemeConfig, TokenCategory};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn fixture_config_matches_builtin() {
    let loaded = ThemeConfig::load(&fixtures().join("signalwind.config.yaml")).unwrap();
    assert_eq!(loaded, ThemeConfig::signal());
}

#[test]
fn discover_finds_fixture_config() {
    let found = ThemeConfig::discover(&fixtures()).unwrap();
    assert!(found.ends_with("signalwind.config.yaml"));
}

#[test]
fn signal_and_purple_palettes_have_eleven_hex_steps() {
    let theme = Theme::resolve(&ThemeConfig::signal()).unwrap();
    for palette in ["signal", "purple"] {
        let steps: Vec<String> = COLOR_STEPS
            .iter()
            .map(|step| {
                theme
                    .value(TokenCategory::Colors, &format!("{}-{}", palette, step))
                    .unwrap()
            })
            .collect();
        assert_eq!(steps.len(), 11);
        assert!(steps.iter().all(|v| is_hex6(v)), "{}: {:?}", palette, steps);
    }
}

#[test]
fn extension_overrides_only_named_tokens() {
    let theme = Theme::resolve(&ThemeConfig::signal()).unwrap();
    // purple-700 is overridden, its neighbours keep the stock values.
    assert_eq!(theme.value(TokenCategory::Colors, "purple-700").as_deref(), Some("#7c3aed"));
    assert_eq!(theme.value(TokenCategory::Colors, "purple-600").as_deref(), Some("#9333ea"));
    // Base tokens the extension does not mention survive.
    assert_eq!(theme.value(TokenCategory::Colors, "pink-600").as_deref(), Some("#db2777"));
    assert_eq!(theme.value(TokenCategory::Spacing, "4").as_deref(), Some("1rem"));
    assert_eq!(theme.value(TokenCategory::Spacing, "18").as_deref(), Some("4.5rem"));
    assert_eq!(
        theme.value(TokenCategory::FontFamily, "mono").as_deref(),
        Some("\"JetBrains Mono\", ui-monospace, monospace")
    );
}

#[test]
fn every_animation_has_keyframes() {
    let theme = Theme::resolve(&ThemeConfig::signal()).unwrap();
    let animations = theme.table(TokenCategory::Animation).unwrap();
    for (name, _) in animations {
        if let Some(keyframes) = theme.animation_keyframes(name) {
            assert!(theme.keyframes(keyframes).is_some(), "{} -> {}", name, keyframes);
        }
    }
}

#[test]
fn duplicate_token_names_are_rejected() {
    let yaml = "theme:\n  extend:\n    colors:\n      bullish: '#10b981'\n      bullish: '#22c55e'\n";
    assert!(matches!(
        ThemeConfig::from_yaml_str(yaml),
        Err(ConfigError::ParseYaml(_))
    ));

    let json = r#"{"theme": {"extend": {"spacing": {"18": "4.5rem", "18": "5rem"}}}}"#;
    assert!(matches!(
        ThemeConfig::from_json_str(json),
        Err(ConfigError::ParseJson(_))
    ));
}

#[test]
fn flattened_palette_collision_is_rejected() {
    let yaml = "theme:\n  extend:\n    colors:\n      brand-500: '#111111'\n      brand:\n        500: '#222222'\n";
    let config = ThemeConfig::from_yaml_str(yaml).unwrap();
    assert!(matches!(
        Theme::resolve(&config),
        Err(ConfigError::DuplicateToken { .. })
    ));
}

#[test]
fn invalid_values_fail_resolution() {
    let cases = [
        "theme:\n  extend:\n    colors:\n      broken: '#12345'\n",
        "theme:\n  extend:\n    backgroundImage:\n      broken: 'url(a b)'\n",
        "theme:\n  extend:\n    spacing:\n      broken: '4px)'\n",
    ];
    for yaml in cases {
        let config = ThemeConfig::from_yaml_str(yaml).unwrap();
        assert!(
            matches!(Theme::resolve(&config), Err(ConfigError::InvalidToken { .. })),
            "{}",
            yaml
        );
    }
}

#[test]
fn animation_without_keyframes_fails() {
    let yaml = "theme:\n  extend:\n    animation:\n      wiggle: wiggle 1s ease-in-out infinite\n";
    let config = ThemeConfig::from_yaml_str(yaml).unwrap();
    match Theme::resolve(&config) {
        Err(ConfigError::UnknownKeyframes {
            animation,
            keyframes,
        }) => {
            assert_eq!(animation, "wiggle");
            assert_eq!(keyframes, "wiggle");
        }
        other => panic!("expected UnknownKeyframes, got {:?}", other),
    }
}
