use serde_json::Value;
use std::collections::HashMap;

pub const SUPPORTED_LOCALES: &[&str] = &["pt", "en"];
pub const FALLBACK_LOCALE: &str = "pt";

// Locale resources ship with the binary, one file per language.
const PT: &str = include_str!("../locales/pt.json");
const EN: &str = include_str!("../locales/en.json");

fn raw_catalog(locale: &str) -> &'static str {
    match locale {
        "en" => EN,
        _ => PT,
    }
}

/// Strings for the active locale, addressed by dotted keys
/// (`"loginPage.failed"`). Keys missing from the active catalog fall back
/// to the default locale; a key missing everywhere renders as itself so a
/// gap is visible instead of silent.
pub struct Catalog {
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Catalog {
    /// Load the catalog for `language`. Regional tags match on the primary
    /// subtag ("pt-BR" -> "pt"); unsupported languages use the fallback.
    pub fn load(language: &str) -> Self {
        let primary = language.split(['-', '_']).next().unwrap_or(language);
        let locale = SUPPORTED_LOCALES
            .iter()
            .find(|supported| **supported == primary)
            .copied()
            .unwrap_or(FALLBACK_LOCALE);

        Self {
            strings: flatten(raw_catalog(locale)),
            fallback: flatten(raw_catalog(FALLBACK_LOCALE)),
        }
    }

    pub fn text(&self, key: &str) -> String {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Lookup with `{name}`-style interpolation.
    pub fn text_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.text(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

fn flatten(raw: &str) -> HashMap<String, String> {
    let value: Value = serde_json::from_str(raw).expect("embedded locale file is valid JSON");
    let mut strings = HashMap::new();
    flatten_into(&mut strings, "", &value);
    strings
}

fn flatten_into(strings: &mut HashMap<String, String>, prefix: &str, value: &Value) {
    match value {
        Value::Object(entries) => {
            for (key, nested) in entries {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(strings, &path, nested);
            }
        }
        Value::String(text) => {
            strings.insert(prefix.to_string(), text.clone());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_lookup() {
        let catalog = Catalog::load("pt");
        assert_eq!(
            catalog.text("loginPage.failed"),
            "Login falhou. Verifique o seu nome de utilizador e password."
        );
    }

    #[test]
    fn test_english_lookup() {
        let catalog = Catalog::load("en");
        assert_eq!(catalog.text("moviePage.notFound"), "Movie not found.");
    }

    #[test]
    fn test_unsupported_language_falls_back() {
        let catalog = Catalog::load("fr");
        assert_eq!(catalog.text("moviePage.notFound"), "Filme não encontrado.");
    }

    #[test]
    fn test_regional_tag_matches_primary_subtag() {
        let catalog = Catalog::load("pt-BR");
        assert_eq!(catalog.text("homePage.popular"), "Populares");
    }

    #[test]
    fn test_missing_key_renders_as_key() {
        let catalog = Catalog::load("pt");
        assert_eq!(catalog.text("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_interpolation() {
        let catalog = Catalog::load("pt");
        assert_eq!(
            catalog.text_with("header.greeting", &[("name", "rita")]),
            "Olá, rita"
        );
    }

    #[test]
    fn test_catalogs_cover_the_same_keys() {
        let pt: Vec<_> = {
            let mut keys: Vec<_> = flatten(PT).into_keys().collect();
            keys.sort();
            keys
        };
        let en: Vec<_> = {
            let mut keys: Vec<_> = flatten(EN).into_keys().collect();
            keys.sort();
            keys
        };
        assert_eq!(pt, en);
    }
}
