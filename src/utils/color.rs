//! CSS colour values → terminal colours.
//!
//! Palette tokens are kept as the CSS strings the page publishes
//! (`#00ff88`, `rgba(0, 0, 0, 0.4)`, `linear-gradient(...)`). Widgets
//! resolve them here, compositing translucent values over a backdrop.

use std::sync::OnceLock;
use ratatui::style::Color;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Linear mix: `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(ch(self.0, other.0), ch(self.1, other.1), ch(self.2, other.2))
    }

    /// Terminal colour; falls back to the xterm 256-colour cube without truecolor.
    pub fn to_color(self, true_color: bool) -> Color {
        if true_color {
            Color::Rgb(self.0, self.1, self.2)
        } else {
            Color::Indexed(to_ansi256(self))
        }
    }
}

fn rgba_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)").ok()
    })
    .as_ref()
}

fn hex_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").ok()).as_ref()
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits: Vec<u8> = match hex.len() {
        3 => hex.chars()
            .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
            .collect::<Option<Vec<_>>>()?,
        6 => (0..3)
            .map(|i| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok())
            .collect::<Option<Vec<_>>>()?,
        _ => return None,
    };
    Some(Rgb(digits[0], digits[1], digits[2]))
}

/// Resolves a CSS colour value to an opaque colour over `backdrop`.
///
/// Gradients resolve to their first colour stop.
pub fn resolve(value: &str, backdrop: Rgb) -> Option<Rgb> {
    let value = value.trim();

    // First colour in the string wins, whichever syntax it uses
    let rgba = rgba_regex().and_then(|re| re.captures(value));
    let hex = hex_regex().and_then(|re| re.captures(value));
    let rgba_pos = rgba.as_ref().and_then(|c| c.get(0)).map(|m| m.start());
    let hex_pos = hex.as_ref().and_then(|c| c.get(0)).map(|m| m.start());

    let use_hex = match (rgba_pos, hex_pos) {
        (Some(r), Some(h)) => h < r,
        (None, Some(_)) => true,
        _ => false,
    };

    if use_hex {
        return hex.and_then(|c| parse_hex(&c[1]));
    }

    let caps = rgba?;
    let channel = |i: usize| caps[i].parse::<u16>().ok().map(|v| v.min(255) as u8);
    let color = Rgb(channel(1)?, channel(2)?, channel(3)?);
    let alpha = caps.get(4)
        .and_then(|m| m.as_str().parse::<f32>().ok())
        .unwrap_or(1.0);
    Some(backdrop.mix(color, alpha))
}

/// Alpha component of an `rgba(...)` value, 1.0 for anything else.
pub fn alpha(value: &str) -> f32 {
    rgba_regex()
        .and_then(|re| re.captures(value))
        .and_then(|c| c.get(4).and_then(|m| m.as_str().parse::<f32>().ok()))
        .unwrap_or(1.0)
}

fn to_ansi256(c: Rgb) -> u8 {
    let level = |v: u8| -> u8 {
        if v < 48 { 0 } else if v < 115 { 1 } else { ((v - 35) / 40).min(5) }
    };
    let (r, g, b) = (level(c.0), level(c.1), level(c.2));

    // Greys map better onto the 24-step ramp
    if r == g && g == b {
        let avg = (c.0 as u16 + c.1 as u16 + c.2 as u16) / 3;
        if avg < 8 {
            return 16;
        }
        if avg > 238 {
            return 231;
        }
        return 232 + ((avg - 8) / 10).min(23) as u8;
    }
    16 + 36 * r + 6 * g + b
}
