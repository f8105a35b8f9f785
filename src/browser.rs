//! Browser side effects: scrolling and preference cookies.
//!
//! Event handlers only ever run after hydration, so outside the `hydrate`
//! build these functions do nothing.
//!
//! Scrolls use the default behaviour, which follows the stylesheet's
//! `scroll-behavior`: smooth normally, instant under reduced motion.

use crate::preferences::{preference_cookie, ColorMode, Language, LANGUAGE_COOKIE, THEME_COOKIE};

#[cfg(feature = "hydrate")]
pub use dom::BrowserViewport;

#[cfg(feature = "hydrate")]
mod dom {
    use web_sys::Element;

    use crate::navigation::Viewport;

    pub struct BrowserViewport;

    impl Viewport for BrowserViewport {
        type Section = Element;

        fn section(&self, id: &str) -> Option<Element> {
            web_sys::window()?.document()?.get_element_by_id(id)
        }

        fn scroll_into_view(&self, section: &Element) {
            section.scroll_into_view();
        }

        fn scroll_to_top(&self) {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    }

    /// Read an attribute the server rendered onto `<html>`.
    pub fn root_attribute(name: &str) -> Option<String> {
        web_sys::window()?
            .document()?
            .document_element()?
            .get_attribute(name)
    }
}

/// Scroll to the section an anchor points at. Returns whether it was found.
#[cfg(feature = "hydrate")]
pub fn scroll_to(href: &str) -> bool {
    crate::navigation::scroll_to_section(&BrowserViewport, href)
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_to(_href: &str) -> bool {
    false
}

#[cfg(feature = "hydrate")]
pub fn scroll_to_top() {
    use crate::navigation::Viewport;

    BrowserViewport.scroll_to_top();
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_to_top() {}

/// Preferences as rendered by the server, so hydration starts from the same
/// state the markup was produced with.
#[cfg(feature = "hydrate")]
pub fn rendered_preferences() -> crate::preferences::Preferences {
    crate::preferences::Preferences {
        language: dom::root_attribute("lang")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default(),
        theme: dom::root_attribute("data-theme")
            .and_then(|v| v.parse().ok())
            .unwrap_or_default(),
    }
}

pub fn persist_language(language: Language) {
    write_cookie(&preference_cookie(LANGUAGE_COOKIE, language.code()));
}

pub fn persist_theme(mode: ColorMode) {
    write_cookie(&preference_cookie(THEME_COOKIE, &mode.to_string()));
}

fn write_cookie(cookie: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use leptos::wasm_bindgen::prelude::wasm_bindgen;

        #[wasm_bindgen(inline_js = "export function set_cookie(value) { document.cookie = value; }")]
        extern "C" {
            fn set_cookie(value: &str);
        }

        set_cookie(cookie);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = cookie;
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../style/main.scss");

    #[test]
    fn smooth_scrolling_comes_from_the_stylesheet() {
        let (normal, reduced) = STYLESHEET
            .split_once("@media (prefers-reduced-motion: reduce)")
            .unwrap();
        assert!(normal.contains("scroll-behavior: smooth"));
        assert!(reduced.contains("scroll-behavior: auto"));
    }
}
