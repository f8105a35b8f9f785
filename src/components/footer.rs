use leptos::prelude::*;

use super::{Entrance, Icon, IconSvg, Reveal};
use crate::browser;
use crate::content::{FOOTER_LINKS, SOCIAL_LINKS};
use crate::i18n::use_i18n;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let lookup = move |key: &str| i18n.t(key);
    let to_top = move |_| browser::scroll_to_top();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer__columns">
                    <Reveal entrance=Entrance::up(20.0).duration(0.6) class="footer__brand">
                        <button class="footer__name" on:click=to_top>
                            {move || i18n.t("hero.name")}
                        </button>
                        <p>{move || i18n.t("footer.tagline")}</p>
                    </Reveal>

                    <Reveal entrance=Entrance::up(20.0).duration(0.6).delay(0.2) class="footer__social">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|link| view! {
                                <a
                                    class="footer__social-link"
                                    href=move || link.href.resolve(lookup)
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                >
                                    <IconSvg icon=link.icon />
                                </a>
                            })
                            .collect::<Vec<_>>()}
                    </Reveal>

                    <Reveal entrance=Entrance::up(20.0).duration(0.6).delay(0.4) class="footer__links">
                        {FOOTER_LINKS
                            .into_iter()
                            .map(|item| {
                                let key = item.label_key();
                                let href = item.href;
                                view! {
                                    <a
                                        href=href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            browser::scroll_to(href);
                                        }
                                    >
                                        {move || i18n.t(&key)}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </Reveal>
                </div>

                <Reveal entrance=Entrance::fade().duration(0.8).delay(0.6) class="footer__divider">
                    <hr />
                </Reveal>

                <Reveal entrance=Entrance::up(20.0).duration(0.6).delay(0.8) class="footer__bottom">
                    <p>{move || i18n.t("footer.copyright")}</p>
                    <p class="footer__built-with">
                        <span>{move || i18n.t("footer.builtWith")}</span>
                        <IconSvg icon=Icon::Heart size=16 class="footer__heart" />
                    </p>
                </Reveal>

                <Reveal entrance=Entrance::fade().duration(0.6).delay(1.0) class="footer__top">
                    <button class="footer__top-button" on:click=to_top>
                        <span>{move || i18n.t("footer.backToTop")}</span>
                        <span class="footer__top-arrow" aria-hidden="true">"↑"</span>
                    </button>
                </Reveal>
            </div>
        </footer>
    }
}
