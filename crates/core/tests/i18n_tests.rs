// ═══════════════════════════════════════════════════════════════════
// Translation Resolver tests — Locale, Translator, catalog fallback
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cretum_site_core::i18n::{Locale, LocalizedText, Translator};

fn sample_table() -> HashMap<String, LocalizedText> {
    let mut entries = HashMap::new();
    entries.insert(
        "nav.inicio".to_string(),
        LocalizedText::new("Inicio", "Home"),
    );
    entries.insert(
        "nav.contacto".to_string(),
        LocalizedText::new("Contacto", "Contact"),
    );
    entries.insert(
        "gvv.download".to_string(),
        LocalizedText::new(
            "Descargar Carta Mensual de GVV",
            "Download GVV Monthly Letter",
        ),
    );
    entries
}

// ═══════════════════════════════════════════════════════════════════
//  Locale
// ═══════════════════════════════════════════════════════════════════

mod locale {
    use super::*;

    #[test]
    fn default_is_spanish() {
        assert_eq!(Locale::default(), Locale::Es);
    }

    #[test]
    fn codes() {
        assert_eq!(Locale::Es.code(), "es");
        assert_eq!(Locale::En.code(), "en");
        assert_eq!(Locale::En.to_string(), "en");
    }

    #[test]
    fn all_lists_primary_first() {
        assert_eq!(Locale::ALL, [Locale::Es, Locale::En]);
    }

    #[test]
    fn serde_round_trip_uses_codes() {
        let json = serde_json::to_string(&Locale::En).unwrap();
        assert_eq!(json, "\"en\"");
        let back: Locale = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(back, Locale::Es);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Lookup & fallback
// ═══════════════════════════════════════════════════════════════════

mod resolve {
    use super::*;

    #[test]
    fn returns_configured_string_for_every_key_and_locale() {
        let table = sample_table();
        for &locale in &Locale::ALL {
            let translator = Translator::with_entries(locale, table.clone());
            for (key, entry) in &table {
                assert_eq!(translator.resolve(key), entry.for_locale(locale));
            }
        }
    }

    #[test]
    fn builtin_catalog_spot_checks() {
        let mut t = Translator::new();
        assert_eq!(t.resolve("nav.inicio"), "Inicio");
        assert_eq!(t.resolve("gvv.noDoc"), "Carta Mensual no disponible aún");
        t.set_locale(Locale::En);
        assert_eq!(t.resolve("nav.inicio"), "Home");
        assert_eq!(t.resolve("gvv.noDoc"), "Monthly Letter not yet available");
    }

    #[test]
    fn builtin_catalog_is_complete_for_both_locales() {
        for &locale in &Locale::ALL {
            let translator = Translator::with_locale(locale);
            for key in Translator::builtin_keys() {
                let resolved = translator.resolve(key);
                assert!(!resolved.is_empty());
                // A resolution equal to the key would mean missing copy
                assert_ne!(resolved, key, "missing {locale} copy for '{key}'");
            }
        }
    }

    #[test]
    fn absent_key_falls_back_to_key_itself_in_every_locale() {
        for &locale in &Locale::ALL {
            let translator = Translator::with_locale(locale);
            assert_eq!(translator.resolve("no.such.key"), "no.such.key");
        }
    }

    #[test]
    fn empty_translation_falls_back_to_key() {
        let mut entries = HashMap::new();
        entries.insert("only.es".to_string(), LocalizedText::new("Hola", ""));
        let translator = Translator::with_entries(Locale::En, entries);
        assert_eq!(translator.resolve("only.es"), "only.es");
    }

    #[test]
    fn unknown_key_comes_back_verbatim_not_blank() {
        let translator = Translator::new();
        assert_eq!(translator.resolve("x"), "x");
        assert_eq!(translator.resolve("nav.inicio.typo"), "nav.inicio.typo");
    }

    #[test]
    fn resolve_all_preserves_key_order() {
        let translator = Translator::with_entries(Locale::Es, sample_table());
        let labels = translator.resolve_all(["nav.inicio", "nav.contacto", "missing.key"]);
        assert_eq!(labels, vec!["Inicio", "Contacto", "missing.key"]);
    }

    #[test]
    fn has_key_reflects_the_table() {
        let translator = Translator::with_entries(Locale::Es, sample_table());
        assert!(translator.has_key("nav.inicio"));
        assert!(!translator.has_key("nav.unknown"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Locale switching & subscribers
// ═══════════════════════════════════════════════════════════════════

mod switching {
    use super::*;

    #[test]
    fn switching_locale_swaps_the_full_string_set() {
        let table = sample_table();
        let mut translator = Translator::with_entries(Locale::Es, table.clone());

        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        let spanish = translator.resolve_all(keys.iter().copied());

        translator.set_locale(Locale::En);
        let english = translator.resolve_all(keys.iter().copied());

        for (i, key) in keys.iter().enumerate() {
            assert_eq!(english[i], table[*key].en);
            // No leftover previous-locale values
            assert_ne!(english[i], spanish[i], "stale Spanish value for '{key}'");
        }
    }

    #[test]
    fn subscriber_is_notified_synchronously_with_new_locale() {
        let seen: Arc<Mutex<Vec<Locale>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut translator = Translator::new();
        translator.subscribe(Box::new(move |locale| {
            sink.lock().unwrap().push(locale);
        }));

        translator.set_locale(Locale::En);
        assert_eq!(*seen.lock().unwrap(), vec![Locale::En]);

        translator.set_locale(Locale::Es);
        assert_eq!(*seen.lock().unwrap(), vec![Locale::En, Locale::Es]);
    }

    #[test]
    fn setting_the_same_locale_does_not_notify() {
        let seen: Arc<Mutex<Vec<Locale>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut translator = Translator::new();
        translator.subscribe(Box::new(move |locale| {
            sink.lock().unwrap().push(locale);
        }));

        translator.set_locale(Locale::Es); // already the default
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(translator.locale(), Locale::Es);
    }

    #[test]
    fn every_subscriber_is_notified() {
        let first: Arc<Mutex<Vec<Locale>>> = Arc::new(Mutex::new(Vec::new()));
        let second: Arc<Mutex<Vec<Locale>>> = Arc::new(Mutex::new(Vec::new()));

        let mut translator = Translator::new();
        let sink = Arc::clone(&first);
        translator.subscribe(Box::new(move |l| sink.lock().unwrap().push(l)));
        let sink = Arc::clone(&second);
        translator.subscribe(Box::new(move |l| sink.lock().unwrap().push(l)));

        translator.set_locale(Locale::En);
        assert_eq!(*first.lock().unwrap(), vec![Locale::En]);
        assert_eq!(*second.lock().unwrap(), vec![Locale::En]);
    }

    #[test]
    fn instances_are_isolated() {
        let mut a = Translator::with_entries(Locale::Es, sample_table());
        let b = Translator::with_entries(Locale::En, sample_table());

        a.set_locale(Locale::En);
        assert_eq!(a.locale(), Locale::En);
        assert_eq!(b.locale(), Locale::En);

        let mut c = Translator::with_entries(Locale::Es, sample_table());
        assert_eq!(c.resolve("nav.inicio"), "Inicio");
        c.set_locale(Locale::En);
        assert_eq!(b.resolve("nav.inicio"), "Home");
        assert_eq!(c.resolve("nav.inicio"), "Home");
    }
}
