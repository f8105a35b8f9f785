use leptos::prelude::*;

use super::{Entrance, Icon, IconSvg, Reveal};
use crate::browser;
use crate::content::{cv_file_name, cv_href, BASE_PATH};
use crate::i18n::use_i18n;

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();

    // The download anchor follows the current language; a missing file is
    // left to the browser's own 404 handling.
    let cv_link = move || cv_href(BASE_PATH, i18n.language());
    let cv_name = move || cv_file_name(i18n.language());

    let rise = |delay: f32| Entrance::up(20.0).delay(delay);

    view! {
        <section id="home" class="hero">
            <div class="hero__backdrop" aria-hidden="true">
                <div class="hero__orb hero__orb--primary"></div>
                <div class="hero__orb hero__orb--secondary"></div>
            </div>

            <div class="hero__content container">
                <Reveal entrance=rise(0.2)>
                    <h1 class="hero__name">{move || i18n.t("hero.name")}</h1>
                </Reveal>
                <Reveal entrance=rise(0.4)>
                    <h2 class="hero__title">{move || i18n.t("hero.title")}</h2>
                </Reveal>
                <Reveal entrance=rise(0.6)>
                    <p class="hero__subtitle">{move || i18n.t("hero.subtitle")}</p>
                </Reveal>

                <Reveal entrance=rise(0.8) class="hero__actions">
                    <a class="button button--primary button--large" href=cv_link download=cv_name>
                        <IconSvg icon=Icon::Download />
                        <span>{move || i18n.t("hero.downloadCV")}</span>
                    </a>
                    <a
                        class="button button--outline button--large"
                        href="#contact"
                        on:click=move |ev| {
                            ev.prevent_default();
                            browser::scroll_to("#contact");
                        }
                    >
                        <IconSvg icon=Icon::Mail />
                        <span>{move || i18n.t("hero.contactMe")}</span>
                    </a>
                </Reveal>
            </div>

            <Reveal entrance=Entrance::fade().duration(1.0).delay(1.2) class="hero__scroll">
                <a
                    class="hero__scroll-button"
                    href="#about"
                    on:click=move |ev| {
                        ev.prevent_default();
                        browser::scroll_to("#about");
                    }
                >
                    <span>{move || i18n.t("hero.scrollDown")}</span>
                    <span class="hero__scroll-arrow">
                        <IconSvg icon=Icon::ArrowDown />
                    </span>
                </a>
            </Reveal>
        </section>
    }
}
