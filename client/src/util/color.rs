//! Accent color helpers for cards and shapes.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| channel(&c.to_string().repeat(2)));
            Some((digits.next()??, digits.next()??, digits.next()??))
        }
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Translucent `rgba(...)` version of an accent, for card backgrounds.
///
/// Unparseable colors fall back to the brand blue.
pub fn tint(hex: &str, alpha: f32) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or(BRAND_RGB);
    let alpha = alpha.clamp(0.0, 1.0);
    format!("rgba({r}, {g}, {b}, {alpha:.2})")
}

/// `#1e90ff`, the brand accent.
pub const BRAND_RGB: (u8, u8, u8) = (0x1e, 0x90, 0xff);
