use serde::Serialize;
use ts_rs::TS;

use super::mode::ThemeMode;

/// Color table for one appearance mode. Static data, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub tab_bar: &'static str,
}

pub static LIGHT_PALETTE: Palette = Palette {
    background: "#F8F5F0",
    surface: "#FFFFFF",
    card: "#FFFFFF",
    text: "#1F2937",
    text_secondary: "#6B7280",
    border: "#E5E7EB",
    primary: "#C2410C",
    accent: "#0E7490",
    success: "#10B981",
    warning: "#F59E0B",
    error: "#EF4444",
    tab_bar: "#FFFFFF",
};

pub static DARK_PALETTE: Palette = Palette {
    background: "#111827",
    surface: "#1F2937",
    card: "#273244",
    text: "#F9FAFB",
    text_secondary: "#9CA3AF",
    border: "#374151",
    primary: "#FB923C",
    accent: "#22D3EE",
    success: "#34D399",
    warning: "#FBBF24",
    error: "#F87171",
    tab_bar: "#1F2937",
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light), &LIGHT_PALETTE);
        assert_eq!(Palette::for_mode(ThemeMode::Dark), &DARK_PALETTE);
        assert_ne!(LIGHT_PALETTE.background, DARK_PALETTE.background);
        assert_ne!(LIGHT_PALETTE.text, DARK_PALETTE.text);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(LIGHT_PALETTE).unwrap();
        assert_eq!(json["textSecondary"], "#6B7280");
        assert_eq!(json["tabBar"], "#FFFFFF");
    }
}
