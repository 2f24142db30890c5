use std::collections::HashMap;
use std::hash::Hash;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

// ─── Generic key binding infrastructure ────────────────────────────────

/// A key combination (key code + modifiers).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Reverse-lookup map: KeyBind → Action.
pub struct ActionMap<A> {
    map: HashMap<KeyBind, A>,
}

impl<A: Copy + Eq + Hash> ActionMap<A> {
    /// Build an `ActionMap` by merging user overrides on top of defaults.
    ///
    /// - Actions present in `overrides` completely replace the default bindings
    ///   for that action.
    /// - Actions **not** present in `overrides` keep the default bindings.
    /// - An explicit `shift+<letter>` binding also owns the bare uppercase
    ///   letter, since some terminals report it without SHIFT.
    pub fn build(
        defaults: &HashMap<A, Vec<String>>,
        overrides: &HashMap<A, Vec<String>>,
    ) -> Self {
        let mut merged = defaults.clone();
        for (action, keys) in overrides {
            merged.insert(*action, keys.clone());
        }

        let mut map = HashMap::new();
        let mut shifted = Vec::new();
        for (action, key_strings) in &merged {
            for key_str in key_strings {
                for bind in parse_key(key_str) {
                    if let KeyCode::Char(ch) = bind.code {
                        if ch.is_ascii_uppercase() && bind.modifiers.contains(KeyModifiers::SHIFT) {
                            shifted.push((
                                KeyBind { code: bind.code, modifiers: bind.modifiers & !KeyModifiers::SHIFT },
                                *action,
                            ));
                        }
                    }
                    map.insert(bind, *action);
                }
            }
        }
        // Applied last so they win over the uppercase twin of a plain letter
        for (bind, action) in shifted {
            map.insert(bind, action);
        }

        Self { map }
    }

    /// Look up an action for the given key event.
    pub fn lookup(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<A> {
        let bind = KeyBind { code, modifiers };
        if let Some(action) = self.map.get(&bind) {
            return Some(*action);
        }
        // crossterm reports SHIFT for uppercase letters and shifted symbols
        if let KeyCode::Char(_) = code {
            if modifiers.contains(KeyModifiers::SHIFT) {
                let stripped = modifiers & !KeyModifiers::SHIFT;
                let bind2 = KeyBind { code, modifiers: stripped };
                return self.map.get(&bind2).copied();
            }
        }
        None
    }
}

// ─── Key string parsing ───────────────────────────────────────────────

/// Parse a key string like `"ctrl+c"`, `"shift+up"`, `"q"` into one or more
/// `KeyBind` values. Strings starting with `//` are comments.
///
/// Alphabetic characters produce both lowercase and uppercase variants;
/// [`ActionMap::build`] resolves clashes with explicit `shift+` bindings.
pub fn parse_key(s: &str) -> Vec<KeyBind> {
    let trimmed = s.trim();
    if trimmed.starts_with("//") {
        return Vec::new();
    }
    let s = trimmed.to_lowercase();
    let parts: Vec<&str> = s.split('+').collect();

    let mut modifiers = KeyModifiers::NONE;
    let key_part = if parts.len() == 1 {
        parts[0]
    } else {
        for &part in &parts[..parts.len() - 1] {
            match part {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                "alt" => modifiers |= KeyModifiers::ALT,
                _ => {}
            }
        }
        parts[parts.len() - 1]
    };

    let code = match key_part {
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" => Some(KeyCode::Char(' ')),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        f if f.len() > 1 && f.starts_with('f') => f[1..].parse::<u8>().ok().map(KeyCode::F),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    };

    let Some(code) = code else {
        return Vec::new();
    };

    if let KeyCode::Char(ch) = code {
        if ch.is_ascii_alphabetic() {
            return vec![
                KeyBind { code: KeyCode::Char(ch.to_ascii_lowercase()), modifiers },
                KeyBind { code: KeyCode::Char(ch.to_ascii_uppercase()), modifiers },
            ];
        }
    }

    vec![KeyBind { code, modifiers }]
}

// ─── Page context ─────────────────────────────────────────────────────

/// Every keyboard action on the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageAction {
    Quit,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    NextSection,
    PrevSection,
    GotoHero,
    GotoAbout,
    GotoSkills,
    GotoProjects,
    GotoContact,
    ThemeMenu,
    CycleTheme,
    LanguageMenu,
    ToggleLanguage,
    CompactMenu,
    NextFilter,
    PrevFilter,
    NextProject,
    PrevProject,
    ToggleProject,
    CloseMenus,
}

/// Default page keybindings.
pub fn default_page_keybindings() -> HashMap<PageAction, Vec<String>> {
    let mut m = HashMap::new();

    m.insert(PageAction::Quit, vec!["//Quit".into(), "q".into(), "ctrl+c".into()]);

    // Scrolling
    m.insert(PageAction::ScrollUp, vec!["up".into(), "k".into()]);
    m.insert(PageAction::ScrollDown, vec!["down".into(), "j".into()]);
    m.insert(PageAction::PageUp, vec!["pageup".into()]);
    m.insert(PageAction::PageDown, vec!["pagedown".into(), "space".into()]);
    m.insert(PageAction::Top, vec!["home".into(), "g".into()]);
    m.insert(PageAction::Bottom, vec!["end".into(), "shift+g".into()]);
    m.insert(PageAction::NextSection, vec!["//Jump to next section".into(), "tab".into()]);
    m.insert(PageAction::PrevSection, vec!["backtab".into(), "shift+backtab".into()]);

    // Anchors
    m.insert(PageAction::GotoHero, vec!["1".into()]);
    m.insert(PageAction::GotoAbout, vec!["2".into()]);
    m.insert(PageAction::GotoSkills, vec!["3".into()]);
    m.insert(PageAction::GotoProjects, vec!["4".into()]);
    m.insert(PageAction::GotoContact, vec!["5".into()]);

    // Navbar controls
    m.insert(PageAction::ThemeMenu, vec!["//Open theme switcher".into(), "t".into()]);
    m.insert(PageAction::CycleTheme, vec!["shift+t".into()]);
    m.insert(PageAction::LanguageMenu, vec!["//Open language selector".into(), "l".into()]);
    m.insert(PageAction::ToggleLanguage, vec!["shift+l".into()]);
    m.insert(PageAction::CompactMenu, vec!["m".into()]);
    m.insert(PageAction::CloseMenus, vec!["esc".into()]);

    // Projects
    m.insert(PageAction::NextFilter, vec!["right".into(), "f".into()]);
    m.insert(PageAction::PrevFilter, vec!["left".into()]);
    m.insert(PageAction::NextProject, vec!["]".into()]);
    m.insert(PageAction::PrevProject, vec!["[".into()]);
    m.insert(PageAction::ToggleProject, vec!["enter".into()]);

    m
}

/// Resolved keybindings for the page.
pub struct Keybindings {
    page: ActionMap<PageAction>,
}

impl Keybindings {
    pub fn new(overrides: &HashMap<PageAction, Vec<String>>) -> Self {
        Self {
            page: ActionMap::build(&default_page_keybindings(), overrides),
        }
    }

    pub fn page_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<PageAction> {
        self.page.lookup(code, modifiers)
    }
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::new(&HashMap::new())
    }
}
