use leptos::prelude::*;

use super::{Entrance, IconSvg, Reveal, SectionHeading};
use crate::content::{Proficiency, PROFICIENCIES, SKILL_CATEGORIES};
use crate::i18n::use_i18n;

// Circle with a circumference of 100 so dash lengths read as percentages.
const RING_PATH: &str =
    "M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831";

#[component]
pub fn Skills() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section id="skills" class="section">
            <div class="container">
                <SectionHeading title_key="skills.title" />

                <div class="card-grid">
                    {SKILL_CATEGORIES
                        .into_iter()
                        .enumerate()
                        .map(|(index, category)| {
                            let label = category.label_key();
                            let items_key = category.items_key();
                            let entrance = Entrance::up(30.0).duration(0.6).stagger(index, 0.1);
                            view! {
                                <Reveal entrance=entrance class="card card--hover skill-category">
                                    <div class="skill-category__header">
                                        <div class=format!("skill-category__icon {}", category.accent.class())>
                                            <IconSvg icon=category.icon size=24 />
                                        </div>
                                        <h3>{move || i18n.t(&label)}</h3>
                                    </div>
                                    <ul class="skill-category__items">
                                        {move || {
                                            i18n.strings(&items_key)
                                                .into_iter()
                                                .enumerate()
                                                .map(|(i, skill)| {
                                                    let style = Entrance::left(20.0)
                                                        .duration(0.4)
                                                        .delay(entrance.delay)
                                                        .stagger(i, 0.05)
                                                        .style();
                                                    view! {
                                                        <li class="skill" style=style>
                                                            <span class="skill__dot"></span>
                                                            <span>{skill}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        }}
                                    </ul>
                                </Reveal>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Reveal entrance=Entrance::up(30.0).delay(0.6) class="panel">
                    <h3>{move || i18n.t("skills.learning.title")}</h3>
                    <p>{move || i18n.t("skills.learning.text")}</p>
                </Reveal>

                <Reveal entrance=Entrance::up(30.0).delay(0.8) class="proficiency-grid">
                    {PROFICIENCIES
                        .into_iter()
                        .enumerate()
                        .map(|(index, proficiency)| view! { <ProficiencyRing proficiency=proficiency index=index /> })
                        .collect::<Vec<_>>()}
                </Reveal>
            </div>
        </section>
    }
}

/// Circular indicator that fills to the proficiency level once revealed.
#[component]
fn ProficiencyRing(proficiency: Proficiency, index: usize) -> impl IntoView {
    let i18n = use_i18n();
    let label = proficiency.label_key();
    let level = proficiency.level;
    let entrance = Entrance::fade().duration(1.5).stagger(index, 0.2);

    view! {
        <Reveal entrance=entrance class="proficiency">
            <div class="proficiency__ring">
                <svg viewBox="0 0 36 36">
                    <path class="proficiency__track" d=RING_PATH />
                    <path
                        class="proficiency__fill"
                        d=RING_PATH
                        style=format!("--level: {level};")
                    />
                </svg>
                <span class="proficiency__value">{format!("{level}%")}</span>
            </div>
            <p>{move || i18n.t(&label)}</p>
        </Reveal>
    }
}
