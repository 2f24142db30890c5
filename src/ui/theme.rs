//! Colour palettes and the theme store.
//!
//! Four fixed palettes of ten tokens each. Every palette change is
//! propagated: the id is persisted, the ten tokens are written into the
//! shared [`StyleEnvironment`](super::style_env::StyleEnvironment) and the
//! page background is set to the palette's solid background.

use crate::services::storage::{SharedStorage, THEME_KEY};
use super::style_env::{self, SharedStyleEnv};

/// Available colour palettes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaletteId {
    #[default]
    Green,
    Red,
    Blue,
    Dark,
}

impl PaletteId {
    /// Palette used when nothing valid was persisted.
    pub const FALLBACK: PaletteId = PaletteId::Green;

    /// Identifier stored in the preference store.
    pub fn id(&self) -> &'static str {
        match self {
            PaletteId::Green => "green",
            PaletteId::Red => "red",
            PaletteId::Blue => "blue",
            PaletteId::Dark => "dark",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "green" => Some(PaletteId::Green),
            "red" => Some(PaletteId::Red),
            "blue" => Some(PaletteId::Blue),
            "dark" => Some(PaletteId::Dark),
            _ => None,
        }
    }

    /// Dictionary key of the palette's display name.
    pub fn label_key(&self) -> &'static str {
        match self {
            PaletteId::Green => "theme.green",
            PaletteId::Red => "theme.red",
            PaletteId::Blue => "theme.blue",
            PaletteId::Dark => "theme.dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PaletteId::Green => "🟢",
            PaletteId::Red => "🔴",
            PaletteId::Blue => "🔵",
            PaletteId::Dark => "⚫",
        }
    }

    /// Swatch shown next to the palette in the switcher menu.
    pub fn swatch(&self) -> &'static str {
        match self {
            PaletteId::Green => "#00ff88",
            PaletteId::Red => "#ff4444",
            PaletteId::Blue => "#4488ff",
            PaletteId::Dark => "#ffffff",
        }
    }

    pub fn all() -> &'static [PaletteId] {
        &[PaletteId::Green, PaletteId::Red, PaletteId::Blue, PaletteId::Dark]
    }

    pub fn next(&self) -> PaletteId {
        let all = Self::all();
        let idx = all.iter().position(|p| p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn colors(&self) -> &'static ThemeColors {
        match self {
            PaletteId::Green => &GREEN,
            PaletteId::Red => &RED,
            PaletteId::Blue => &BLUE,
            PaletteId::Dark => &DARK,
        }
    }
}

/// The ten colour tokens of a palette, as CSS values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub background_solid: &'static str,
    pub text: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub hover: &'static str,
    pub shadow: &'static str,
}

impl ThemeColors {
    /// `(property name, value)` for all ten tokens, in a fixed order.
    pub fn tokens(&self) -> [(&'static str, &'static str); 10] {
        [
            (style_env::PRIMARY, self.primary),
            (style_env::SECONDARY, self.secondary),
            (style_env::ACCENT, self.accent),
            (style_env::BACKGROUND, self.background),
            (style_env::BACKGROUND_SOLID, self.background_solid),
            (style_env::TEXT, self.text),
            (style_env::CARD, self.card),
            (style_env::BORDER, self.border),
            (style_env::HOVER, self.hover),
            (style_env::SHADOW, self.shadow),
        ]
    }
}

const GREEN: ThemeColors = ThemeColors {
    primary: "#00ff88",
    secondary: "#0088ff",
    accent: "#00ff88",
    background: "linear-gradient(135deg, rgba(0, 255, 136, 0.1) 0%, rgba(0, 136, 255, 0.05) 50%, rgba(0, 255, 136, 0.1) 100%)",
    background_solid: "#0a1a0f",
    text: "#ffffff",
    card: "rgba(0, 0, 0, 0.4)",
    border: "rgba(0, 255, 136, 0.3)",
    hover: "rgba(0, 255, 136, 0.1)",
    shadow: "rgba(0, 255, 136, 0.2)",
};

const RED: ThemeColors = ThemeColors {
    primary: "#ff4444",
    secondary: "#ff6666",
    accent: "#ff4444",
    background: "linear-gradient(135deg, rgba(255, 68, 68, 0.1) 0%, rgba(255, 102, 102, 0.05) 50%, rgba(255, 68, 68, 0.1) 100%)",
    background_solid: "#1a0a0a",
    text: "#ffffff",
    card: "rgba(0, 0, 0, 0.4)",
    border: "rgba(255, 68, 68, 0.3)",
    hover: "rgba(255, 68, 68, 0.1)",
    shadow: "rgba(255, 68, 68, 0.2)",
};

const BLUE: ThemeColors = ThemeColors {
    primary: "#4488ff",
    secondary: "#66aaff",
    accent: "#4488ff",
    background: "linear-gradient(135deg, rgba(68, 136, 255, 0.1) 0%, rgba(102, 170, 255, 0.05) 50%, rgba(68, 136, 255, 0.1) 100%)",
    background_solid: "#0a0f1a",
    text: "#ffffff",
    card: "rgba(0, 0, 0, 0.4)",
    border: "rgba(68, 136, 255, 0.3)",
    hover: "rgba(68, 136, 255, 0.1)",
    shadow: "rgba(68, 136, 255, 0.2)",
};

const DARK: ThemeColors = ThemeColors {
    primary: "#ffffff",
    secondary: "#cccccc",
    accent: "#ffffff",
    background: "linear-gradient(135deg, rgba(255, 255, 255, 0.02) 0%, rgba(204, 204, 204, 0.01) 50%, rgba(255, 255, 255, 0.02) 100%)",
    background_solid: "#000000",
    text: "#ffffff",
    card: "rgba(0, 0, 0, 0.6)",
    border: "rgba(255, 255, 255, 0.2)",
    hover: "rgba(255, 255, 255, 0.05)",
    shadow: "rgba(255, 255, 255, 0.1)",
};

/// Active palette plus its persistence and propagation.
pub struct ThemeStore {
    palette: PaletteId,
    storage: SharedStorage,
    env: SharedStyleEnv,
}

impl ThemeStore {
    pub fn new(storage: SharedStorage, env: SharedStyleEnv) -> Self {
        Self {
            palette: PaletteId::FALLBACK,
            storage,
            env,
        }
    }

    /// Recalls the persisted palette (if valid) and runs the initial propagation.
    pub fn load(&mut self) {
        let saved = self.storage.borrow().get(THEME_KEY);
        if let Some(id) = saved {
            match PaletteId::from_id(&id) {
                Some(palette) => self.palette = palette,
                None => tracing::warn!(id = %id, "ignoring unknown persisted palette"),
            }
        }
        self.propagate();
    }

    pub fn palette(&self) -> PaletteId {
        self.palette
    }

    pub fn colors(&self) -> &'static ThemeColors {
        self.palette.colors()
    }

    pub fn set_palette(&mut self, palette: PaletteId) {
        self.palette = palette;
        self.propagate();
        tracing::info!(palette = palette.id(), "palette changed");
    }

    /// Id-based setter; unknown ids are ignored and return `false`.
    pub fn set_palette_id(&mut self, id: &str) -> bool {
        match PaletteId::from_id(id) {
            Some(palette) => {
                self.set_palette(palette);
                true
            }
            None => {
                tracing::warn!(id, "ignoring unknown palette id");
                false
            }
        }
    }

    /// Switches to the next palette in menu order.
    pub fn cycle(&mut self) {
        self.set_palette(self.palette.next());
    }

    /// Persists the palette id and pushes its tokens into the style
    /// environment. Runs to completion in one call; repeating it with the
    /// same palette leaves the environment unchanged.
    pub fn propagate(&self) {
        if let Err(e) = self.storage.borrow_mut().set(THEME_KEY, self.palette.id()) {
            tracing::warn!(error = %e, "palette not persisted, keeping it for this session");
        }

        let colors = self.colors();
        let mut env = self.env.borrow_mut();
        for (name, value) in colors.tokens() {
            env.set_property(name, value);
        }
        env.set_page_background(colors.background_solid);
        tracing::debug!(palette = self.palette.id(), "palette propagated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::{MemoryStorage, PreferenceStore};
    use crate::ui::style_env::StyleEnvironment;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_with(pairs: &[(&str, &str)]) -> (ThemeStore, Rc<RefCell<MemoryStorage>>, SharedStyleEnv) {
        let storage = MemoryStorage::with(pairs).shared();
        let env = StyleEnvironment::new(true).shared();
        (ThemeStore::new(storage.clone(), env.clone()), storage, env)
    }

    #[test]
    fn test_every_palette_has_ten_nonempty_tokens() {
        for palette in PaletteId::all() {
            let tokens = palette.colors().tokens();
            assert_eq!(tokens.len(), 10);
            for (name, value) in tokens {
                assert!(name.starts_with("--theme-"));
                assert!(!value.is_empty(), "{name} empty for {palette:?}");
            }
        }
    }

    #[test]
    fn test_token_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            PaletteId::Green.colors().tokens().iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_id_roundtrip() {
        for palette in PaletteId::all() {
            assert_eq!(PaletteId::from_id(palette.id()), Some(*palette));
        }
        assert_eq!(PaletteId::from_id("purple"), None);
    }

    #[test]
    fn test_load_red_from_storage() {
        let (mut store, _, env) = store_with(&[(THEME_KEY, "red")]);
        store.load();
        assert_eq!(store.palette(), PaletteId::Red);
        assert_eq!(store.colors().primary, "#ff4444");
        assert_eq!(store.colors().background_solid, "#1a0a0a");
        assert_eq!(env.borrow().property(style_env::PRIMARY), Some("#ff4444"));
        assert_eq!(env.borrow().page_background(), Some("#1a0a0a"));
    }

    #[test]
    fn test_load_corrupted_value_falls_back() {
        let (mut store, storage, env) = store_with(&[(THEME_KEY, "{\"oops\"")]);
        store.load();
        assert_eq!(store.palette(), PaletteId::Green);
        assert_eq!(env.borrow().page_background(), Some("#0a1a0f"));
        // Initial propagation persists the fallback
        assert_eq!(storage.borrow().get(THEME_KEY), Some("green".to_string()));
    }

    #[test]
    fn test_load_with_nothing_persisted_propagates_fallback() {
        let (mut store, _, env) = store_with(&[]);
        store.load();
        assert_eq!(store.palette(), PaletteId::FALLBACK);
        assert_eq!(env.borrow().property(style_env::TEXT), Some("#ffffff"));
    }

    #[test]
    fn test_set_palette_updates_environment() {
        for palette in PaletteId::all() {
            let (mut store, storage, env) = store_with(&[]);
            store.load();
            store.set_palette(*palette);

            assert_eq!(store.palette(), *palette);
            assert_eq!(storage.borrow().get(THEME_KEY), Some(palette.id().to_string()));
            let env = env.borrow();
            for (name, value) in palette.colors().tokens() {
                assert_eq!(env.property(name), Some(value));
            }
            assert_eq!(env.page_background(), Some(palette.colors().background_solid));
            assert_eq!(env.property_count(), 10);
        }
    }

    #[test]
    fn test_propagate_is_idempotent() {
        let (mut store, _, env) = store_with(&[]);
        store.load();
        store.set_palette(PaletteId::Blue);
        let before = env.borrow().clone();
        store.propagate();
        store.propagate();
        assert_eq!(*env.borrow(), before);
    }

    #[test]
    fn test_rapid_changes_leave_last_palette() {
        let (mut store, _, env) = store_with(&[]);
        store.load();
        store.set_palette(PaletteId::Red);
        store.set_palette(PaletteId::Dark);
        store.set_palette(PaletteId::Blue);
        let env = env.borrow();
        for (name, value) in PaletteId::Blue.colors().tokens() {
            assert_eq!(env.property(name), Some(value));
        }
    }

    #[test]
    fn test_set_palette_id_rejects_unknown() {
        let (mut store, _, _) = store_with(&[]);
        store.load();
        assert!(!store.set_palette_id("neon"));
        assert_eq!(store.palette(), PaletteId::Green);
        assert!(store.set_palette_id("dark"));
        assert_eq!(store.palette(), PaletteId::Dark);
    }

    #[test]
    fn test_cycle_wraps() {
        let (mut store, _, _) = store_with(&[]);
        store.load();
        for _ in 0..PaletteId::all().len() {
            store.cycle();
        }
        assert_eq!(store.palette(), PaletteId::Green);
    }

    #[test]
    fn test_palette_survives_reload() {
        let (mut store, storage, _) = store_with(&[]);
        store.load();
        store.set_palette(PaletteId::Dark);

        let env = StyleEnvironment::new(true).shared();
        let mut reloaded = ThemeStore::new(storage.clone(), env);
        reloaded.load();
        assert_eq!(reloaded.palette(), PaletteId::Dark);
    }
}
