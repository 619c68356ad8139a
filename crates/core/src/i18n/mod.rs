mod catalog;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The closed set of display languages. Spanish is the primary language and
/// the process-wide default; the selection is session-scoped and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Spanish (primary)
    #[default]
    #[serde(rename = "es")]
    Es,
    /// English (secondary)
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// Both locales, primary first.
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// The two-letter language code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One catalog entry: the display string for each locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub es: String,
    pub en: String,
}

impl LocalizedText {
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
        }
    }

    /// The string for a locale. Empty means "not translated" and is treated
    /// as absent by the resolver.
    #[must_use]
    pub fn for_locale(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.es,
            Locale::En => &self.en,
        }
    }
}

/// Callback invoked with the new locale whenever the selection changes.
pub type LocaleListener = Box<dyn Fn(Locale) + Send + Sync>;

/// Key → locale-string resolver with an active-locale selector.
///
/// This is an explicit value object, not an ambient global: tests construct
/// isolated instances, and a host wires exactly one into its UI. Lookup
/// never fails — a key with no entry (or no translation for the active
/// locale) resolves to the key itself, so missing copy is visibly
/// detectable instead of silently blank.
pub struct Translator {
    locale: Locale,
    entries: HashMap<String, LocalizedText>,
    listeners: Vec<LocaleListener>,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("entries", &self.entries.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Translator {
    /// Resolver over the built-in site catalog, starting in the primary
    /// locale.
    pub fn new() -> Self {
        Self::with_locale(Locale::default())
    }

    /// Resolver over the built-in site catalog, starting in `locale`.
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            entries: catalog::builtin_catalog(),
            listeners: Vec::new(),
        }
    }

    /// Resolver over a caller-supplied table (isolated instances for tests
    /// or embedded sub-catalogs).
    pub fn with_entries(locale: Locale, entries: HashMap<String, LocalizedText>) -> Self {
        Self {
            locale,
            entries,
            listeners: Vec::new(),
        }
    }

    /// The currently active locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the active locale. Every listener is notified synchronously
    /// before this returns, so no rendered frame mixes locales. Setting the
    /// locale it already has is a no-op (no notification).
    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale == locale {
            return;
        }
        self.locale = locale;
        for listener in &self.listeners {
            listener(locale);
        }
    }

    /// Register a listener for locale changes.
    pub fn subscribe(&mut self, listener: LocaleListener) {
        self.listeners.push(listener);
    }

    /// Look up `key` in the active locale.
    ///
    /// Absence is not an error: an unknown key — or an entry whose string
    /// for the active locale is empty — resolves to the key itself.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(entry) => {
                let text = entry.for_locale(self.locale);
                if text.is_empty() {
                    key.to_string()
                } else {
                    text.to_string()
                }
            }
            None => key.to_string(),
        }
    }

    /// Map an ordered list of keys through `resolve`, preserving order.
    /// Used for locale-dependent lists (navigation labels, modal highlights).
    #[must_use]
    pub fn resolve_all<'a, I>(&self, keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        keys.into_iter().map(|k| self.resolve(k)).collect()
    }

    /// `true` if the catalog defines `key`.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys the built-in site catalog defines, in declaration order.
    #[must_use]
    pub fn builtin_keys() -> Vec<&'static str> {
        catalog::builtin_keys()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
