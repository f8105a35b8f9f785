use leptos::prelude::*;

use super::ProjectCard;
use crate::content::Project;
use crate::i18n::use_i18n;

#[component]
pub fn ProjectGrid(projects: Vec<Project>) -> impl IntoView {
    view! {
        <ul class="project-list">
            {projects
                .into_iter()
                .enumerate()
                .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn ProjectGridEmpty() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="project-empty">
            <svg viewBox="0 0 200 200" class="project-empty-art">
                <circle cx="100" cy="100" r="80" fill="none" stroke="currentColor" stroke-width="1"/>
                <circle cx="100" cy="100" r="60" fill="none" stroke="currentColor" stroke-width="1"/>
                <circle cx="100" cy="100" r="40" fill="none" stroke="currentColor" stroke-width="1"/>
                <line x1="20" y1="100" x2="180" y2="100" stroke="currentColor" stroke-width="1"/>
                <line x1="100" y1="20" x2="100" y2="180" stroke="currentColor" stroke-width="1"/>
            </svg>
            <p>{move || i18n.t("projects.empty")}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::provide_i18n;
    use crate::preferences::Language;

    #[test]
    fn empty_grid_explains_itself() {
        let owner = Owner::new();
        owner.with(|| {
            provide_i18n(Language::De);
            let html = view! { <ProjectGridEmpty /> }.to_html();
            assert!(html.contains("Hier gibt es noch keine Projekte."), "{html}");
        });
    }
}
