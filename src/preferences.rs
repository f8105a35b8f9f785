//! Visitor preferences: display language and colour mode.
//!
//! Both are stored in cookies so the server can render the right variant on
//! the first request. When no language cookie is present the server falls back
//! to the `Accept-Language` header.

use std::fmt;
use std::str::FromStr;

pub const LANGUAGE_COOKIE: &str = "portfolio-lang";
pub const THEME_COOKIE: &str = "portfolio-theme";

/// Cookie lifetime in seconds (one year).
pub const COOKIE_MAX_AGE: u32 = 31_536_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }

    /// Name of the language in its own tongue.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }

    /// Upper-case code, used on the compact toggle and in download names.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::De => "DE",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Region subtags ("de-AT", "en_GB") collapse to the primary language.
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match primary.as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            _ => Err(format!("unsupported language: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => f.write_str("light"),
            ColorMode::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("unknown colour mode: {s}")),
        }
    }
}

/// The pair of preferences a page is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language: Language,
    pub theme: ColorMode,
}

impl Preferences {
    /// Resolve preferences from raw request headers.
    ///
    /// Cookies win over `Accept-Language`; anything unparseable falls back to
    /// the defaults.
    #[must_use]
    pub fn from_headers(cookie: Option<&str>, accept_language: Option<&str>) -> Self {
        let cookie_language =
            cookie.and_then(|c| cookie_value(c, LANGUAGE_COOKIE)).and_then(|v| v.parse().ok());
        let theme = cookie
            .and_then(|c| cookie_value(c, THEME_COOKIE))
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let language = cookie_language
            .or_else(|| accept_language.and_then(negotiate_language))
            .unwrap_or_default();

        Self { language, theme }
    }
}

/// Find a single cookie in a `Cookie` header value.
#[must_use]
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Build the `document.cookie` assignment for a preference.
#[must_use]
pub fn preference_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/; max-age={COOKIE_MAX_AGE}; samesite=lax")
}

/// Pick the best supported language from an `Accept-Language` header.
///
/// Entries without a `q` parameter weigh 1.0; ties keep header order. Weights
/// outside `0 < q <= 1` (including NaN and infinities) drop the entry.
#[must_use]
pub fn negotiate_language(header: &str) -> Option<Language> {
    let mut best: Option<(Language, f32)> = None;

    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let Some(tag) = parts.next() else { continue };
        let Ok(language) = tag.parse::<Language>() else {
            continue;
        };
        let quality = parts
            .find_map(|p| p.trim().strip_prefix("q="))
            .and_then(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        if quality.is_nan() || quality <= 0.0 || quality > 1.0 {
            continue;
        }
        if best.is_none_or(|(_, q)| quality > q) {
            best = Some((language, quality));
        }
    }

    best.map(|(language, _)| language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_toggle_flips_between_both_locales() {
        assert_eq!(Language::En.toggle(), Language::De);
        assert_eq!(Language::De.toggle(), Language::En);
    }

    #[test]
    fn language_double_toggle_is_identity() {
        for language in Language::ALL {
            assert_eq!(language.toggle().toggle(), language);
        }
    }

    #[test]
    fn color_mode_toggle_flips_between_both_modes() {
        assert_eq!(ColorMode::Light.toggle(), ColorMode::Dark);
        assert_eq!(ColorMode::Dark.toggle(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggle().toggle(), ColorMode::Light);
    }

    #[test]
    fn defaults_are_english_and_light() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(ColorMode::default(), ColorMode::Light);
    }

    #[test]
    fn language_from_str_accepts_region_tags() {
        assert_eq!("de-AT".parse::<Language>().unwrap(), Language::De);
        assert_eq!("en_GB".parse::<Language>().unwrap(), Language::En);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn color_mode_display_matches_from_str() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(mode.to_string().parse::<ColorMode>().unwrap(), mode);
        }
        assert!("sepia".parse::<ColorMode>().is_err());
    }

    #[test]
    fn language_labels() {
        assert_eq!(Language::En.toggle().short_label(), "DE");
        assert_eq!(Language::De.toggle().native_name(), "English");
    }

    #[test]
    fn cookie_value_finds_named_cookie() {
        let header = "session=abc; portfolio-lang=de ; portfolio-theme=dark";
        assert_eq!(cookie_value(header, LANGUAGE_COOKIE), Some("de"));
        assert_eq!(cookie_value(header, THEME_COOKIE), Some("dark"));
        assert_eq!(cookie_value(header, "missing"), None);
    }

    #[test]
    fn cookie_value_ignores_prefix_matches() {
        assert_eq!(cookie_value("xportfolio-lang=de", LANGUAGE_COOKIE), None);
    }

    #[test]
    fn preference_cookie_format() {
        assert_eq!(
            preference_cookie(THEME_COOKIE, "dark"),
            "portfolio-theme=dark; path=/; max-age=31536000; samesite=lax"
        );
    }

    #[test]
    fn negotiate_prefers_highest_quality() {
        assert_eq!(
            negotiate_language("fr-FR,fr;q=0.9,de;q=0.8,en;q=0.7"),
            Some(Language::De)
        );
        assert_eq!(
            negotiate_language("en;q=0.4, de-DE;q=0.6"),
            Some(Language::De)
        );
    }

    #[test]
    fn negotiate_keeps_header_order_on_ties() {
        assert_eq!(negotiate_language("de, en"), Some(Language::De));
        assert_eq!(negotiate_language("en-US,de"), Some(Language::En));
    }

    #[test]
    fn negotiate_skips_unsupported_and_rejected() {
        assert_eq!(negotiate_language("fr, es;q=0.5"), None);
        assert_eq!(negotiate_language("de;q=0, en;q=0.2"), Some(Language::En));
        assert_eq!(negotiate_language(""), None);
    }

    #[test]
    fn negotiate_drops_out_of_range_weights() {
        assert_eq!(negotiate_language("de;q=nan, en"), Some(Language::En));
        assert_eq!(negotiate_language("de;q=inf, en"), Some(Language::En));
        assert_eq!(negotiate_language("de;q=5, en;q=0.5"), Some(Language::En));
        assert_eq!(negotiate_language("de;q=-1"), None);
        assert_eq!(negotiate_language("de;q=1.0, en"), Some(Language::De));
    }

    #[test]
    fn from_headers_prefers_cookie_over_accept_language() {
        let prefs = Preferences::from_headers(
            Some("portfolio-lang=en; portfolio-theme=dark"),
            Some("de-DE,de;q=0.9"),
        );
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme, ColorMode::Dark);
    }

    #[test]
    fn from_headers_uses_accept_language_without_cookie() {
        let prefs = Preferences::from_headers(None, Some("de-CH,de;q=0.9,en;q=0.8"));
        assert_eq!(prefs.language, Language::De);
        assert_eq!(prefs.theme, ColorMode::Light);
    }

    #[test]
    fn from_headers_falls_back_to_defaults() {
        let prefs = Preferences::from_headers(Some("portfolio-lang=klingon"), None);
        assert_eq!(prefs, Preferences::default());
    }
}
