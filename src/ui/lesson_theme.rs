//! Per-lesson tint lookup. Each lesson names a colour key; the key maps to a
//! fixed bundle of surface, border and accent colours.

use ratatui::style::Color;

pub const DEFAULT_THEME_KEY: &str = "cyan";

pub const THEME_KEYS: &[&str] = &[
    "cyan", "red", "amber", "orange", "yellow", "teal", "purple", "slate",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleBundle {
    pub surface: Color,
    pub border: Color,
    pub accent: Color,
}

const fn bundle(surface: u32, border: u32, accent: u32) -> StyleBundle {
    StyleBundle {
        surface: Color::from_u32(surface),
        border: Color::from_u32(border),
        accent: Color::from_u32(accent),
    }
}

/// Unknown keys resolve to the `DEFAULT_THEME_KEY` bundle.
pub fn resolve(key: &str) -> StyleBundle {
    match key {
        "red" => bundle(0x3b1518, 0xef4444, 0xf87171),
        "amber" => bundle(0x3a2a0e, 0xf59e0b, 0xfbbf24),
        "orange" => bundle(0x3b2010, 0xf97316, 0xfb923c),
        "yellow" => bundle(0x37300e, 0xeab308, 0xfacc15),
        "teal" => bundle(0x0f2f2c, 0x14b8a6, 0x2dd4bf),
        "purple" => bundle(0x2a1a3e, 0xa855f7, 0xc084fc),
        "slate" => bundle(0x1a202b, 0x64748b, 0x94a3b8),
        _ => bundle(0x0e2e36, 0x06b6d4, 0x22d3ee),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_matches_default() {
        assert_eq!(resolve("magenta"), resolve(DEFAULT_THEME_KEY));
        assert_eq!(resolve(""), resolve(DEFAULT_THEME_KEY));
    }

    #[test]
    fn test_known_keys_are_distinct() {
        for (i, a) in THEME_KEYS.iter().enumerate() {
            for b in &THEME_KEYS[i + 1..] {
                assert_ne!(resolve(a), resolve(b), "{a} and {b} share a bundle");
            }
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(resolve("Red"), resolve(DEFAULT_THEME_KEY));
        assert_ne!(resolve("red"), resolve(DEFAULT_THEME_KEY));
    }
}
