use leptos::prelude::*;

use super::{Entrance, Icon, IconSvg, Reveal, SectionHeading};
use crate::content::{Href, CONTACT_INFO, CONTACT_METHODS, LINKEDIN_URL};
use crate::i18n::use_i18n;

#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();
    let lookup = move |key: &str| i18n.t(key);
    let mailto = move || Href::MailtoKey("contact.email").resolve(lookup);

    let methods = CONTACT_METHODS
        .into_iter()
        .enumerate()
        .map(|(index, method)| {
            let entrance = Entrance::up(30.0).duration(0.6).stagger(index, 0.1);
            view! {
                <Reveal entrance=entrance class="card card--hover contact-method">
                    <div class=format!("contact-method__icon {}", method.accent.class())>
                        <IconSvg icon=method.icon size=24 />
                    </div>
                    <h3>{move || method.label.resolve(lookup)}</h3>
                    <p>{move || method.value.resolve(lookup)}</p>
                    {method.href.map(|href| view! {
                        <a
                            class="button button--outline button--small button--block"
                            href=move || href.resolve(lookup)
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {move || i18n.t("contact.connect")}
                        </a>
                    })}
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="contact" class="section">
            <div class="container container--narrow">
                <SectionHeading title_key="contact.title" description_key="contact.description" />

                <div class="contact-methods">{methods}</div>

                <Reveal entrance=Entrance::up(30.0).delay(0.4) class="card callout">
                    <h3>{move || i18n.t("contact.cta.title")}</h3>
                    <p>{move || i18n.t("contact.cta.text")}</p>
                    <div class="callout__actions">
                        <a
                            class="button button--primary button--large"
                            href=mailto
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <IconSvg icon=Icon::Mail />
                            <span>{move || i18n.t("contact.cta.email")}</span>
                        </a>
                        <a
                            class="button button--outline button--large"
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <IconSvg icon=Icon::Linkedin />
                            <span>{move || i18n.t("contact.cta.linkedin")}</span>
                        </a>
                    </div>
                </Reveal>

                <Reveal entrance=Entrance::up(30.0).delay(0.6) class="info-strip">
                    {CONTACT_INFO
                        .into_iter()
                        .map(|key| {
                            let title = format!("contact.info.{key}.title");
                            let text = format!("contact.info.{key}.text");
                            view! {
                                <div class="info-strip__item">
                                    <h4>{move || i18n.t(&title)}</h4>
                                    <p>{move || i18n.t(&text)}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </Reveal>
            </div>
        </section>
    }
}
