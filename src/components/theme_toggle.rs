use leptos::prelude::*;

use crate::app::ThemeContext;
use crate::browser;
use crate::i18n::use_i18n;

#[component]
pub fn ThemeToggle(
    /// Also show the target mode as text (mobile menu style)
    #[prop(default = false)]
    with_label: bool,
) -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    let i18n = use_i18n();

    let toggle = move |_| {
        let next = theme.mode.get_untracked().toggle();
        browser::persist_theme(next);
        theme.set_mode.set(next);
    };

    let is_dark = move || theme.mode.get().is_dark();

    let label = move || {
        if is_dark() {
            i18n.t("theme.switchToLight")
        } else {
            i18n.t("theme.switchToDark")
        }
    };

    view! {
        <button
            class=move || if is_dark() { "theme-toggle theme-toggle--dark" } else { "theme-toggle theme-toggle--light" }
            on:click=toggle
            aria-label=label
            title=label
        >
            <span class="theme-toggle__icon theme-toggle__icon--light" aria-hidden="true">
                <MoonIcon />
            </span>
            <span class="theme-toggle__icon theme-toggle__icon--dark" aria-hidden="true">
                <SunIcon />
            </span>
            {with_label.then(|| view! {
                <span class="theme-toggle__label">
                    {move || if is_dark() { i18n.t("theme.light") } else { i18n.t("theme.dark") }}
                </span>
            })}
        </button>
    }
}

#[component]
fn SunIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="12" cy="12" r="4"/>
            <path d="M12 2v2"/>
            <path d="M12 20v2"/>
            <path d="m4.93 4.93 1.41 1.41"/>
            <path d="m17.66 17.66 1.41 1.41"/>
            <path d="M2 12h2"/>
            <path d="M20 12h2"/>
            <path d="m6.34 17.66-1.41 1.41"/>
            <path d="m19.07 4.93-1.41 1.41"/>
        </svg>
    }
}

#[component]
fn MoonIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>
        </svg>
    }
}
