//! Display language selection and string lookup.
//!
//! [`LocaleStore`] holds the active [`Locale`] and resolves dictionary keys
//! against it. A lookup miss returns the key itself so that a missing
//! translation shows up as visible text rather than a crash.

mod dictionary;

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::services::storage::{SharedStorage, LANGUAGE_KEY};

/// Supported display languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Locale used when nothing valid was persisted.
    pub const FALLBACK: Locale = Locale::En;

    /// Tag stored in the preference store ("en", "ru").
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Name of the language in the language itself.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ru => "Русский",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Ru => "🇷🇺",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ru]
    }

    /// The other language, for the two-way toggle shortcut.
    pub fn next(&self) -> Locale {
        let all = Self::all();
        let idx = all.iter().position(|l| l == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

type Table = HashMap<&'static str, &'static str>;

fn translations() -> &'static HashMap<Locale, Table> {
    static TABLES: OnceLock<HashMap<Locale, Table>> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut tables = HashMap::new();
        tables.insert(Locale::En, dictionary::EN.iter().copied().collect());
        tables.insert(Locale::Ru, dictionary::RU.iter().copied().collect());
        tables
    })
}

/// Translate `key` under `locale`, or return `key` unchanged.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    translations()
        .get(&locale)
        .and_then(|table| table.get(key).copied())
        .unwrap_or(key)
}

/// Active locale plus its persistence.
pub struct LocaleStore {
    locale: Locale,
    loaded: bool,
    storage: SharedStorage,
}

impl LocaleStore {
    /// Creates an unloaded store on the fallback locale. Call [`load`](Self::load)
    /// before rendering any section.
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            locale: Locale::FALLBACK,
            loaded: false,
            storage,
        }
    }

    /// Recalls the persisted locale, if any and if supported.
    pub fn load(&mut self) {
        let saved = self.storage.borrow().get(LANGUAGE_KEY);
        match saved.as_deref().map(|tag| (tag, Locale::from_tag(tag))) {
            Some((_, Some(locale))) => self.locale = locale,
            Some((tag, None)) => {
                tracing::warn!(tag, "ignoring unsupported persisted language");
            }
            None => {}
        }
        self.loaded = true;
        tracing::debug!(locale = self.locale.tag(), "locale store loaded");
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switches language and persists the choice (one write per call).
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        if let Err(e) = self.storage.borrow_mut().set(LANGUAGE_KEY, locale.tag()) {
            tracing::warn!(error = %e, "language not persisted, keeping it for this session");
        }
        tracing::info!(locale = locale.tag(), "language changed");
    }

    /// Tag-based setter; unsupported tags are ignored and return `false`.
    pub fn set_locale_tag(&mut self, tag: &str) -> bool {
        match Locale::from_tag(tag) {
            Some(locale) => {
                self.set_locale(locale);
                true
            }
            None => {
                tracing::warn!(tag, "ignoring unsupported language tag");
                false
            }
        }
    }

    /// Looks up `key` for the current locale; a miss returns `key`.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.locale, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::{MemoryStorage, PreferenceStore};
    use std::collections::HashSet;

    fn store_with(pairs: &[(&str, &str)]) -> (LocaleStore, std::rc::Rc<std::cell::RefCell<MemoryStorage>>) {
        let storage = MemoryStorage::with(pairs).shared();
        (LocaleStore::new(storage.clone()), storage)
    }

    #[test]
    fn test_every_key_resolves_in_every_locale() {
        for locale in Locale::all() {
            for (key, _) in dictionary::EN.iter().chain(dictionary::RU.iter()) {
                let value = translate(*locale, key);
                assert!(!value.is_empty(), "{key} empty under {locale:?}");
                assert_ne!(value, *key, "{key} missing under {locale:?}");
            }
        }
    }

    #[test]
    fn test_dictionaries_have_same_keys() {
        let en: HashSet<_> = dictionary::EN.iter().map(|(k, _)| *k).collect();
        let ru: HashSet<_> = dictionary::RU.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, ru);
        assert_eq!(en.len(), dictionary::EN.len(), "duplicate key in EN");
        assert_eq!(ru.len(), dictionary::RU.len(), "duplicate key in RU");
    }

    #[test]
    fn test_missing_key_returns_key() {
        for locale in Locale::all() {
            assert_eq!(translate(*locale, "hero.nonexistent"), "hero.nonexistent");
            assert_eq!(translate(*locale, ""), "");
        }
    }

    #[test]
    fn test_unloaded_store_uses_fallback() {
        let (store, _) = store_with(&[(LANGUAGE_KEY, "ru")]);
        assert!(!store.is_loaded());
        assert_eq!(store.locale(), Locale::En);
    }

    #[test]
    fn test_load_recalls_russian() {
        let (mut store, _) = store_with(&[(LANGUAGE_KEY, "ru")]);
        store.load();
        assert!(store.is_loaded());
        assert_eq!(store.locale(), Locale::Ru);
        assert_eq!(store.t("hero.title"), "IT-INTEL");
        assert_eq!(store.t("hero.subtitle"), "СОЗДАЮ БУДУЩЕЕ ВЕБ-РАЗРАБОТКИ");
        assert_ne!(store.t("hero.subtitle"), translate(Locale::En, "hero.subtitle"));
    }

    #[test]
    fn test_load_with_unsupported_value_falls_back() {
        let (mut store, _) = store_with(&[(LANGUAGE_KEY, "de")]);
        store.load();
        assert_eq!(store.locale(), Locale::En);
        assert!(store.is_loaded());
    }

    #[test]
    fn test_load_with_nothing_persisted() {
        let (mut store, storage) = store_with(&[]);
        store.load();
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(storage.borrow().writes(), 0);
    }

    #[test]
    fn test_set_locale_persists_across_reload() {
        let (mut store, storage) = store_with(&[]);
        store.load();
        store.set_locale(Locale::Ru);
        assert_eq!(storage.borrow().get(LANGUAGE_KEY), Some("ru".to_string()));

        let mut reloaded = LocaleStore::new(storage.clone());
        reloaded.load();
        assert_eq!(reloaded.locale(), Locale::Ru);
    }

    #[test]
    fn test_set_locale_writes_unconditionally() {
        let (mut store, storage) = store_with(&[]);
        store.load();
        store.set_locale(Locale::En);
        store.set_locale(Locale::En);
        assert_eq!(storage.borrow().writes(), 2);
    }

    #[test]
    fn test_lookup_has_no_side_effect() {
        let (mut store, storage) = store_with(&[]);
        store.load();
        let _ = store.t("nav.home");
        let _ = store.t("missing.key");
        assert_eq!(storage.borrow().writes(), 0);
    }

    #[test]
    fn test_set_locale_tag_rejects_unknown() {
        let (mut store, storage) = store_with(&[]);
        store.load();
        assert!(!store.set_locale_tag("fr"));
        assert_eq!(store.locale(), Locale::En);
        assert_eq!(storage.borrow().writes(), 0);
        assert!(store.set_locale_tag("ru"));
        assert_eq!(store.locale(), Locale::Ru);
    }

    #[test]
    fn test_locale_next_cycles() {
        assert_eq!(Locale::En.next(), Locale::Ru);
        assert_eq!(Locale::Ru.next(), Locale::En);
    }
}
