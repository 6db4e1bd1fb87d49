use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #1e90FF "), Some((30, 144, 255)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("1e90ff"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#G00"), None);
}

#[test]
fn tint_formats_rgba() {
    assert_eq!(tint("#3B82F6", 0.2), "rgba(59, 130, 246, 0.20)");
    assert_eq!(tint("#000", 1.0), "rgba(0, 0, 0, 1.00)");
}

#[test]
fn tint_clamps_alpha_and_falls_back_to_brand() {
    assert_eq!(tint("blue", 2.0), "rgba(30, 144, 255, 1.00)");
    assert_eq!(tint("#fff", -1.0), "rgba(255, 255, 255, 0.00)");
}
