use std::time::Duration;

use leptos::{ev::MouseEvent, prelude::*};

use super::{Entrance, Icon, IconSvg, LanguageToggle, Reveal, ThemeToggle};
use crate::browser;
use crate::content::NAV_ITEMS;
use crate::i18n::use_i18n;

/// Length of the mobile panel's close animation (`menu-close`).
const MENU_CLOSE: Duration = Duration::from_millis(300);

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let (menu_open, set_menu_open) = signal(false);

    // Anchors keep working without JS; with it we scroll smoothly and close
    // the mobile menu whether or not the section exists.
    let navigate = move |ev: MouseEvent, href: &'static str| {
        ev.prevent_default();
        browser::scroll_to(href);
        set_menu_open.set(false);
    };

    let nav_links = move |class: &'static str| {
        NAV_ITEMS
            .into_iter()
            .map(|item| {
                let href = item.href;
                let key = item.label_key();
                view! {
                    <a class=class href=href on:click=move |ev| navigate(ev, href)>
                        {move || i18n.t(&key)}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="header" class=("header--open", move || menu_open.get())>
            <div class="header__bar container">
                <Reveal entrance=Entrance::left(20.0).duration(0.5) class="header__brand">
                    <a href="#home" on:click=move |ev| navigate(ev, "#home")>
                        {move || i18n.t("hero.name")}
                    </a>
                </Reveal>

                <nav class="header__nav">{nav_links("header__link")}</nav>

                <div class="header__controls">
                    <span class="header__desktop-only">
                        <LanguageToggle />
                    </span>
                    <span class="header__desktop-only">
                        <ThemeToggle />
                    </span>
                    <button
                        class="header__menu-button"
                        aria-label=move || i18n.t("language.menu")
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                            view! { <IconSvg icon=icon /> }
                        }}
                    </button>
                </div>
            </div>

            <AnimatedShow
                when=menu_open
                show_class="header__mobile header__mobile--open container"
                hide_class="header__mobile header__mobile--closing container"
                hide_delay=MENU_CLOSE
            >
                <nav class="header__mobile-nav">{nav_links("header__mobile-link")}</nav>
                <div class="header__mobile-controls">
                    <LanguageToggle full_name=true />
                    <ThemeToggle with_label=true />
                </div>
            </AnimatedShow>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ColorMode, ThemeContext};
    use crate::i18n::provide_i18n;
    use crate::preferences::Language;

    #[test]
    fn mobile_menu_starts_closed() {
        let owner = Owner::new();
        owner.with(|| {
            provide_i18n(Language::En);
            let (mode, set_mode) = signal(ColorMode::Light);
            provide_context(ThemeContext { mode, set_mode });

            let html = view! { <Header /> }.to_html();
            assert!(html.contains("header__nav"));
            assert!(html.contains(r#"aria-expanded="false""#));
            assert!(!html.contains("header__mobile-nav"));
        });
    }

    #[test]
    fn close_delay_matches_stylesheet() {
        let css = include_str!("../../style/main.scss");
        assert!(css.contains(&format!(
            "animation: menu-close {}s",
            MENU_CLOSE.as_secs_f32()
        )));
    }
}
