use leptos::prelude::*;

use super::{Icon, IconSvg};
use crate::browser;
use crate::i18n::use_i18n;

/// Switches between English and German.
///
/// The compact form shows the other locale's code ("DE"); the full form shows
/// its native name ("Deutsch").
#[component]
pub fn LanguageToggle(#[prop(default = false)] full_name: bool) -> impl IntoView {
    let i18n = use_i18n();

    let toggle = move |_| {
        let next = i18n.toggle();
        browser::persist_language(next);
    };

    let label = move || {
        let other = i18n.language().toggle();
        if full_name {
            other.native_name()
        } else {
            other.short_label()
        }
    };

    view! {
        <button
            class="language-toggle"
            on:click=toggle
            aria-label=move || i18n.t("language.switch")
            title=move || i18n.t("language.switch")
        >
            <IconSvg icon=Icon::Globe size=16 />
            <span class="language-toggle__label">{label}</span>
        </button>
    }
}
