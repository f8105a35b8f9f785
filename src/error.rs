use thiserror::Error;

use crate::preferences::Language;

/// Problems with the embedded translation content.
///
/// None of these are fatal to rendering; callers log them and fall back to the
/// key or an empty list.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("invalid {locale} dictionary: {source}")]
    Parse {
        locale: Language,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing translation key: {0}")]
    MissingKey(String),

    #[error("translation key {key} is not {expected}")]
    WrongShape { key: String, expected: &'static str },

    #[error("translation key {key} holds malformed records: {source}")]
    Records {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
