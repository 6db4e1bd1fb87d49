//! The two precomputed page palettes.
//!
//! Page sections pick colors from here instead of branching on the mode
//! themselves; the active palette follows `ThemeHandle::mode`.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::theme::ThemeMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub border: &'static str,
    /// Hero backdrop gradient.
    pub hero_gradient: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    surface: "#f9fafb",
    text: "#111827",
    text_muted: "#4b5563",
    accent: "#1e90ff",
    border: "#e5e7eb",
    hero_gradient: "linear-gradient(135deg, #eff6ff 0%, #ffffff 50%, #eff6ff 100%)",
};

pub const DARK: Palette = Palette {
    background: "#0b1120",
    surface: "#111827",
    text: "#f9fafb",
    text_muted: "#9ca3af",
    accent: "#60a5fa",
    border: "#1f2937",
    hero_gradient: "linear-gradient(135deg, #111827 0%, #1e1b4b 50%, #0b1120 100%)",
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// Inline CSS custom properties for a section root.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg: {}; --surface: {}; --text: {}; --text-muted: {}; --accent: {}; --border: {}; --hero: {};",
            self.background, self.surface, self.text, self.text_muted, self.accent, self.border, self.hero_gradient
        )
    }
}
