//! Color theme for the catalog TUI.
//!
//! Mirrors the page palette: deep navy surfaces, green accent, amber
//! warnings. Views import from here instead of using inline colors.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::render::{placeholder_color, DEFAULT_PLACEHOLDER_COLOR};

// ── Palette ─────────────────────────────────────────────────────────────────

/// Accent for focused borders and acknowledgements.
pub const ACCENT: Color = Color::Rgb(0x4A, 0xDE, 0x80);
/// Page background.
pub const BG_BASE: Color = Color::Rgb(0x0B, 0x10, 0x20);
/// Card surface.
pub const BG_SURFACE: Color = Color::Rgb(0x12, 0x1A, 0x34);

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
/// Secondary labels.
pub const TEXT_MUTED: Color = Color::Rgb(0xCB, 0xD5, 0xE1);
/// Disabled items, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x64, 0x74, 0x8B);

/// Validation warnings.
pub const WARN: Color = Color::Rgb(0xF5, 0x9E, 0x0B);

// ── Placeholder tints ───────────────────────────────────────────────────────

/// Parse `#rrggbb`. Anything else yields `None`.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Swatch color for a card's image key.
pub fn swatch(image_key: &str) -> Color {
    hex_color(placeholder_color(image_key))
        .or_else(|| hex_color(DEFAULT_PLACEHOLDER_COLOR))
        .unwrap_or(ACCENT)
}

// ── Style helpers ───────────────────────────────────────────────────────────

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Selected card / focused control value.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn warning() -> Style {
    Style::default().fg(WARN).add_modifier(Modifier::BOLD)
}

pub fn tag() -> Style {
    Style::default().fg(TEXT_MUTED).bg(BG_SURFACE)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// Bordered block, accented when `focused`.
pub fn block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        border_focused()
    } else {
        border_default()
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#3b82f6"), Some(Color::Rgb(0x3b, 0x82, 0xf6)));
        assert_eq!(hex_color("3b82f6"), None);
        assert_eq!(hex_color("#3b82"), None);
        assert_eq!(hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_swatch_known_and_unknown() {
        assert_eq!(swatch("shop"), Color::Rgb(0xf5, 0x9e, 0x0b));
        assert_eq!(swatch("unknown"), Color::Rgb(0x4a, 0xde, 0x80));
    }

    #[test]
    fn test_style_helpers_return_non_default() {
        assert_ne!(title(), Style::default());
        assert_ne!(highlight(), Style::default());
        assert_ne!(warning(), Style::default());
        assert_ne!(muted(), Style::default());
    }
}
