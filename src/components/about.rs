use leptos::prelude::*;

use super::{Entrance, IconSvg, Reveal, SectionHeading};
use crate::content::{HIGHLIGHTS, WHY_POINTS};
use crate::i18n::use_i18n;

const PARAGRAPHS: [&str; 4] = [
    "about.description",
    "about.experience",
    "about.expertise",
    "about.passion",
];

#[component]
pub fn About() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="about" class="section section--muted">
            <div class="container">
                <SectionHeading title_key="about.title" />

                <div class="about__grid">
                    <Reveal entrance=Entrance::left(30.0).delay(0.2) class="about__text">
                        {PARAGRAPHS
                            .into_iter()
                            .map(|key| view! { <p>{move || i18n.t(key)}</p> })
                            .collect::<Vec<_>>()}
                    </Reveal>

                    <Reveal entrance=Entrance::right(30.0).delay(0.4) class="about__highlights">
                        {HIGHLIGHTS
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let title = item.title_key();
                                let subtitle = item.subtitle_key();
                                view! {
                                    <Reveal
                                        entrance=Entrance::up(20.0).duration(0.6).delay(0.6).stagger(index, 0.1)
                                        class="card card--hover highlight"
                                    >
                                        <div class=format!("highlight__icon {}", item.accent.class())>
                                            <IconSvg icon=item.icon size=24 />
                                        </div>
                                        <h3>{move || i18n.t(&title)}</h3>
                                        <p>{move || i18n.t(&subtitle)}</p>
                                    </Reveal>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </Reveal>
                </div>

                <Reveal entrance=Entrance::up(30.0).delay(0.8) class="card callout">
                    <h3>{move || i18n.t("about.why.title")}</h3>
                    <div class="callout__columns">
                        {WHY_POINTS
                            .into_iter()
                            .map(|point| {
                                let title = format!("about.why.{point}.title");
                                let text = format!("about.why.{point}.text");
                                view! {
                                    <div>
                                        <h4>{move || i18n.t(&title)}</h4>
                                        <p>{move || i18n.t(&text)}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
