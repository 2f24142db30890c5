//! Clickable screen regions, rebuilt on every frame.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::i18n::Locale;
use super::sections::projects::ProjectCategory;
use super::sections::SectionId;
use super::style_env::StyleEnvironment;
use super::theme::PaletteId;

/// Something the pointer can activate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Nav(SectionId),
    Cta(SectionId),
    ThemeMenu,
    Theme(PaletteId),
    LanguageMenu,
    Language(Locale),
    CompactMenu,
    Filter(ProjectCategory),
    Project(u32),
    Link(&'static str),
}

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, rect: Rect, target: Target) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, target));
        }
    }

    /// Topmost region under `(x, y)`; later pushes are drawn on top.
    pub fn target_at(&self, x: u16, y: u16) -> Option<&Target> {
        self.regions
            .iter()
            .rev()
            .find(|(r, _)| x >= r.x && x < r.right() && y >= r.y && y < r.bottom())
            .map(|(_, t)| t)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Pointer state relevant to styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interaction {
    pub hovered: Option<Target>,
    pub pressed: Option<Target>,
}

impl Interaction {
    pub fn is_hovered(&self, target: &Target) -> bool {
        self.hovered.as_ref() == Some(target)
    }

    pub fn is_pressed(&self, target: &Target) -> bool {
        self.pressed.as_ref() == Some(target)
    }

    /// `base`, or the hover / tap highlight when the pointer is on `target`.
    pub fn style(&self, target: &Target, base: Style, env: &StyleEnvironment) -> Style {
        if self.is_pressed(target) && self.is_hovered(target) {
            env.pressed_style()
        } else if self.is_hovered(target) {
            env.hover_style()
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_regions_win() {
        let mut map = HitMap::new();
        map.push(Rect::new(0, 0, 20, 5), Target::Project(1));
        map.push(Rect::new(2, 3, 6, 1), Target::Link("https://github.com"));

        assert_eq!(map.target_at(0, 0), Some(&Target::Project(1)));
        assert_eq!(map.target_at(3, 3), Some(&Target::Link("https://github.com")));
        assert_eq!(map.target_at(8, 3), Some(&Target::Project(1)));
        assert_eq!(map.target_at(20, 0), None);
    }

    #[test]
    fn test_empty_rects_are_skipped() {
        let mut map = HitMap::new();
        map.push(Rect::new(0, 0, 0, 1), Target::ThemeMenu);
        assert!(map.is_empty());
    }

    #[test]
    fn test_interaction_style() {
        let mut env = StyleEnvironment::new(true);
        env.set_property(crate::ui::style_env::PRIMARY, "#00ff88");
        let base = Style::default();
        let target = Target::Nav(SectionId::About);

        let mut interaction = Interaction::default();
        assert_eq!(interaction.style(&target, base, &env), base);

        interaction.hovered = Some(target.clone());
        assert_eq!(interaction.style(&target, base, &env), env.hover_style());

        interaction.pressed = Some(target.clone());
        assert_eq!(interaction.style(&target, base, &env), env.pressed_style());
    }
}
