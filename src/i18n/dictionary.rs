use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ContentError;
use crate::preferences::Language;

const EN_SOURCE: &str = include_str!("../../locales/en.json");
const DE_SOURCE: &str = include_str!("../../locales/de.json");

/// One locale's translation tree, addressed by dot-separated paths such as
/// `skills.items.programming`.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: Value,
}

impl Dictionary {
    pub fn parse(locale: Language, source: &str) -> Result<Self, ContentError> {
        serde_json::from_str(source)
            .map(|root| Self { root })
            .map_err(|source| ContentError::Parse { locale, source })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }

    pub fn text(&self, key: &str) -> Result<&str, ContentError> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(ContentError::WrongShape {
                key: key.to_string(),
                expected: "a string",
            }),
            None => Err(ContentError::MissingKey(key.to_string())),
        }
    }

    pub fn strings(&self, key: &str) -> Result<Vec<String>, ContentError> {
        self.records(key)
    }

    /// Deserialize a list of structured entries (projects, skill labels).
    pub fn records<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, ContentError> {
        let value = self
            .get(key)
            .ok_or_else(|| ContentError::MissingKey(key.to_string()))?;
        if !value.is_array() {
            return Err(ContentError::WrongShape {
                key: key.to_string(),
                expected: "a list",
            });
        }
        Vec::<T>::deserialize(value).map_err(|source| ContentError::Records {
            key: key.to_string(),
            source,
        })
    }
}

/// Every supported locale's dictionary.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    en: Dictionary,
    de: Dictionary,
}

impl Catalog {
    #[must_use]
    pub fn new(en: Dictionary, de: Dictionary) -> Self {
        Self { en, de }
    }

    /// The dictionaries compiled into the binary, parsed once per process.
    ///
    /// A locale that fails to parse is logged and left empty, so lookups fall
    /// back to their keys instead of taking the page down.
    pub fn embedded() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();

        CATALOG.get_or_init(|| {
            let load = |locale, source| {
                Dictionary::parse(locale, source).unwrap_or_else(|e| {
                    leptos::logging::error!("{e}");
                    Dictionary::default()
                })
            };
            Catalog::new(load(Language::En, EN_SOURCE), load(Language::De, DE_SOURCE))
        })
    }

    #[must_use]
    pub fn dictionary(&self, language: Language) -> &Dictionary {
        match language {
            Language::En => &self.en,
            Language::De => &self.de,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn fixture() -> Dictionary {
        Dictionary::parse(
            Language::En,
            r#"{
                "about": { "title": "About Me" },
                "skills": { "items": { "web": ["React", "Node.js"] } },
                "projects": {
                    "software": [
                        { "title": "A", "description": "a", "tech": ["Rust"], "link": "https://example.com/a" }
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    fn leaf_keys(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_keys(v, &path, out);
                }
            }
            _ => {
                out.insert(prefix.to_string());
            }
        }
    }

    #[test]
    fn text_resolves_dot_paths() {
        assert_eq!(fixture().text("about.title").unwrap(), "About Me");
    }

    #[test]
    fn text_reports_missing_keys() {
        let err = fixture().text("about.subtitle").unwrap_err();
        assert!(matches!(err, ContentError::MissingKey(k) if k == "about.subtitle"));
    }

    #[test]
    fn text_rejects_lists() {
        let err = fixture().text("skills.items.web").unwrap_err();
        assert!(matches!(err, ContentError::WrongShape { expected: "a string", .. }));
    }

    #[test]
    fn strings_returns_lists_in_order() {
        assert_eq!(
            fixture().strings("skills.items.web").unwrap(),
            vec!["React".to_string(), "Node.js".to_string()]
        );
    }

    #[test]
    fn records_rejects_scalars() {
        let err = fixture().strings("about.title").unwrap_err();
        assert!(matches!(err, ContentError::WrongShape { expected: "a list", .. }));
    }

    #[test]
    fn records_reports_malformed_entries() {
        let err = fixture().records::<u32>("skills.items.web").unwrap_err();
        assert!(matches!(err, ContentError::Records { .. }));
    }

    #[test]
    fn parse_error_names_the_locale() {
        let err = Dictionary::parse(Language::De, "{ not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid de dictionary"));
    }

    #[test]
    fn embedded_locales_share_the_same_keys() {
        let catalog = Catalog::embedded();
        let mut en = BTreeSet::new();
        let mut de = BTreeSet::new();
        leaf_keys(&catalog.dictionary(Language::En).root, "", &mut en);
        leaf_keys(&catalog.dictionary(Language::De).root, "", &mut de);

        assert!(!en.is_empty());
        assert_eq!(en, de);
    }

    #[test]
    fn embedded_locales_differ_in_content() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.dictionary(Language::En).text("nav.about").unwrap(), "About");
        assert_eq!(
            catalog.dictionary(Language::De).text("nav.about").unwrap(),
            "Über mich"
        );
    }
}
