//! Shared style environment.
//!
//! The terminal counterpart of document-level CSS custom properties: the
//! theme store writes named values here and any widget can read them back
//! without knowing about the store.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use ratatui::style::{Color, Modifier, Style};
use supports_color::Stream;

use crate::utils::color::{self, Rgb};

pub const PRIMARY: &str = "--theme-primary";
pub const SECONDARY: &str = "--theme-secondary";
pub const ACCENT: &str = "--theme-accent";
pub const BACKGROUND: &str = "--theme-background";
pub const BACKGROUND_SOLID: &str = "--theme-background-solid";
pub const TEXT: &str = "--theme-text";
pub const CARD: &str = "--theme-card";
pub const BORDER: &str = "--theme-border";
pub const HOVER: &str = "--theme-hover";
pub const SHADOW: &str = "--theme-shadow";

/// Page background before any palette has been applied.
const BLANK_PAGE: Rgb = Rgb(0x0a, 0x0a, 0x0a);

#[derive(Debug, Clone, PartialEq)]
pub struct StyleEnvironment {
    properties: BTreeMap<String, String>,
    page_background: Option<String>,
    true_color: bool,
}

pub type SharedStyleEnv = Rc<RefCell<StyleEnvironment>>;

impl StyleEnvironment {
    pub fn new(true_color: bool) -> Self {
        Self {
            properties: BTreeMap::new(),
            page_background: None,
            true_color,
        }
    }

    /// Environment matching the colour depth of stdout.
    pub fn detect() -> Self {
        let true_color = supports_color::on(Stream::Stdout)
            .map(|support| support.has_16m)
            .unwrap_or(false);
        Self::new(true_color)
    }

    pub fn shared(self) -> SharedStyleEnv {
        Rc::new(RefCell::new(self))
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(|s| s.as_str())
    }

    #[cfg(test)]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn set_page_background(&mut self, value: &str) {
        self.page_background = Some(value.to_string());
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn page_background(&self) -> Option<&str> {
        self.page_background.as_deref()
    }

    fn page_rgb(&self) -> Rgb {
        self.page_background
            .as_deref()
            .and_then(|v| color::resolve(v, BLANK_PAGE))
            .unwrap_or(BLANK_PAGE)
    }

    /// Resolved colour of a property, composited over the page background.
    pub fn rgb(&self, name: &str) -> Option<Rgb> {
        let backdrop = self.page_rgb();
        self.property(name).and_then(|v| color::resolve(v, backdrop))
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        self.rgb(name).map(|c| c.to_color(self.true_color))
    }

    /// Colour of `name` faded toward the page background (`opacity` 0..1).
    pub fn faded(&self, name: &str, opacity: f32) -> Color {
        let page = self.page_rgb();
        let rgb = self.rgb(name).unwrap_or(Rgb(0xff, 0xff, 0xff));
        page.mix(rgb, opacity).to_color(self.true_color)
    }

    pub fn fade_rgb(&self, rgb: Rgb, opacity: f32) -> Color {
        self.page_rgb().mix(rgb, opacity).to_color(self.true_color)
    }

    pub fn page_color(&self) -> Color {
        self.page_rgb().to_color(self.true_color)
    }

    pub fn rgb_color(&self, rgb: Rgb) -> Color {
        rgb.to_color(self.true_color)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Style helpers
    // ═══════════════════════════════════════════════════════════════════════

    fn fg(&self, name: &str) -> Style {
        match self.color(name) {
            Some(c) => Style::default().fg(c),
            None => Style::default(),
        }
    }

    pub fn page_style(&self) -> Style {
        self.fg(TEXT).bg(self.page_color())
    }

    pub fn text_style(&self) -> Style {
        self.fg(TEXT)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.faded(TEXT, 0.6))
    }

    pub fn primary_style(&self) -> Style {
        self.fg(PRIMARY)
    }

    pub fn accent_style(&self) -> Style {
        self.fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn secondary_style(&self) -> Style {
        self.fg(SECONDARY)
    }

    pub fn title_style(&self) -> Style {
        self.fg(TEXT).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        self.fg(BORDER)
    }

    pub fn card_style(&self) -> Style {
        match self.color(CARD) {
            Some(bg) => self.fg(TEXT).bg(bg),
            None => self.fg(TEXT),
        }
    }

    /// Hovered interactive element.
    pub fn hover_style(&self) -> Style {
        let base = self.fg(PRIMARY).add_modifier(Modifier::BOLD);
        match self.color(HOVER) {
            Some(bg) => base.bg(bg),
            None => base,
        }
    }

    /// Pressed (tapped) interactive element.
    pub fn pressed_style(&self) -> Style {
        self.fg(PRIMARY).add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_environment() {
        let env = StyleEnvironment::new(true);
        assert_eq!(env.property(PRIMARY), None);
        assert_eq!(env.page_background(), None);
        assert_eq!(env.color(PRIMARY), None);
        assert_eq!(env.page_color(), Color::Rgb(0x0a, 0x0a, 0x0a));
    }

    #[test]
    fn test_property_overwrite() {
        let mut env = StyleEnvironment::new(true);
        env.set_property(PRIMARY, "#00ff88");
        env.set_property(PRIMARY, "#ff4444");
        assert_eq!(env.property(PRIMARY), Some("#ff4444"));
        assert_eq!(env.property_count(), 1);
    }

    #[test]
    fn test_translucent_composites_over_page() {
        let mut env = StyleEnvironment::new(true);
        env.set_page_background("#000000");
        env.set_property(HOVER, "rgba(255, 255, 255, 0.5)");
        assert_eq!(env.color(HOVER), Some(Color::Rgb(128, 128, 128)));
    }

    #[test]
    fn test_faded_endpoints() {
        let mut env = StyleEnvironment::new(true);
        env.set_page_background("#000000");
        env.set_property(TEXT, "#ffffff");
        assert_eq!(env.faded(TEXT, 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(env.faded(TEXT, 1.0), Color::Rgb(255, 255, 255));
    }
}
