use super::*;

#[test]
fn default_mode_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}

#[test]
fn storage_literals_parse_back() {
    for mode in ThemeMode::ALL {
        assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
        assert_eq!(mode.to_string(), mode.as_str());
    }
}

#[test]
fn parse_rejects_anything_else() {
    assert_eq!("Dark".parse::<ThemeMode>(), Err(ThemeParseError("Dark".to_owned())));
    assert!(" light".parse::<ThemeMode>().is_err());
    assert!("".parse::<ThemeMode>().is_err());
    assert!("true".parse::<ThemeMode>().is_err());
}

#[test]
fn parse_error_message_names_value() {
    let err = "sepia".parse::<ThemeMode>().unwrap_err();
    assert_eq!(err.to_string(), "unknown theme mode: \"sepia\"");
}

#[test]
fn is_dark_only_for_dark() {
    assert!(ThemeMode::Dark.is_dark());
    assert!(!ThemeMode::Light.is_dark());
}

#[test]
fn storage_key_is_fixed() {
    assert_eq!(STORAGE_KEY, "theme");
}
