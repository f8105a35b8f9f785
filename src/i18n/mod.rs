//! Translation provider.
//!
//! Text lives in `locales/<code>.json` and is embedded at compile time. Pages
//! read it through [`I18nContext`], which tracks the current language as a
//! signal so every lookup re-renders when the visitor switches locale.

mod dictionary;

pub use dictionary::{Catalog, Dictionary};

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::preferences::Language;

#[derive(Clone, Copy)]
pub struct I18nContext {
    language: ReadSignal<Language>,
    set_language: WriteSignal<Language>,
    catalog: &'static Catalog,
}

impl I18nContext {
    pub fn new(initial: Language, catalog: &'static Catalog) -> Self {
        let (language, set_language) = signal(initial);
        Self {
            language,
            set_language,
            catalog,
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    /// Switch to the other locale and return it.
    pub fn toggle(&self) -> Language {
        let next = self.language.get_untracked().toggle();
        self.set_language.set(next);
        next
    }

    /// The current language's dictionary. Reading it subscribes to language
    /// changes.
    pub fn dictionary(&self) -> &'static Dictionary {
        self.catalog.dictionary(self.language.get())
    }

    /// Look up a string. Missing keys render as the key itself.
    pub fn t(&self, key: &str) -> String {
        match self.dictionary().text(key) {
            Ok(text) => text.to_string(),
            Err(e) => {
                leptos::logging::warn!("{e}");
                key.to_string()
            }
        }
    }

    pub fn strings(&self, key: &str) -> Vec<String> {
        self.records(key)
    }

    pub fn records<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.dictionary().records(key).unwrap_or_else(|e| {
            leptos::logging::warn!("{e}");
            Vec::new()
        })
    }
}

pub fn provide_i18n(initial: Language) -> I18nContext {
    let context = I18nContext::new(initial, Catalog::embedded());
    provide_context(context);
    context
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}
