use leptos::prelude::*;

use super::Reveal;
use crate::i18n::use_i18n;

#[component]
pub fn SectionHeading(
    title_key: &'static str,
    #[prop(optional)] description_key: Option<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Reveal class="section-heading">
            <h2>{move || i18n.t(title_key)}</h2>
            <div class="section-heading__rule"></div>
            {description_key.map(|key| view! {
                <p class="section-heading__description">{move || i18n.t(key)}</p>
            })}
        </Reveal>
    }
}
