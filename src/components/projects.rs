use std::time::Duration;

use leptos::prelude::*;

use super::{Entrance, IconSvg, ProjectGrid, ProjectGridEmpty, Reveal, SectionHeading};
use crate::browser;
use crate::content::{ProjectTab, PROJECT_STATS};
use crate::i18n::use_i18n;

/// Length of the outgoing panel's exit animation (`panel-exit` in the
/// stylesheet). The next tab mounts once it has run.
const PANEL_EXIT: Duration = Duration::from_millis(300);

#[component]
pub fn Projects(
    /// Tab shown on first render
    #[prop(optional)]
    initial_tab: ProjectTab,
) -> impl IntoView {
    let i18n = use_i18n();

    // `selected` drives the tab buttons right away; `shown` follows it once
    // the current panel has finished leaving.
    let (selected, set_selected) = signal(initial_tab);
    let (shown, set_shown) = signal(initial_tab);
    let (leaving, set_leaving) = signal(false);

    let select = move |tab: ProjectTab| {
        if tab == selected.get_untracked() {
            return;
        }
        set_selected.set(tab);
        // A pending switch picks up the latest selection when it fires.
        if leaving.get_untracked() {
            return;
        }
        set_leaving.set(true);
        set_timeout(
            move || {
                set_shown.set(selected.get_untracked());
                set_leaving.set(false);
            },
            PANEL_EXIT,
        );
    };

    let tabs = ProjectTab::ALL
        .into_iter()
        .map(|tab| {
            let label = tab.label_key();
            let is_active = move || selected.get() == tab;
            view! {
                <button
                    class="tab"
                    class=("tab--active", is_active)
                    role="tab"
                    aria-selected=move || is_active().to_string()
                    on:click=move |_| select(tab)
                >
                    <span class=move || {
                        if is_active() { "tab__icon".to_string() } else { format!("tab__icon {}", tab.accent().class()) }
                    }>
                        <IconSvg icon=tab.icon() />
                    </span>
                    <span>{move || i18n.t(&label)}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    // A fresh panel per shown tab, so each one plays the enter animation.
    let panel = move || {
        let tab = shown.get();
        view! { <ProjectPanel tab=tab leaving=leaving /> }
    };

    view! {
        <section id="projects" class="section section--muted">
            <div class="container">
                <SectionHeading title_key="projects.title" />

                <Reveal entrance=Entrance::up(20.0).duration(0.6).delay(0.2) class="tabs">
                    <div class="tabs__list" role="tablist">{tabs}</div>
                </Reveal>

                {panel}

                <Reveal entrance=Entrance::up(30.0).delay(0.6) class="card callout callout--narrow">
                    <h3>{move || i18n.t("projects.cta.title")}</h3>
                    <p>{move || i18n.t("projects.cta.text")}</p>
                    <a
                        class="button button--primary button--large"
                        href="#contact"
                        on:click=move |ev| {
                            ev.prevent_default();
                            browser::scroll_to("#contact");
                        }
                    >
                        {move || i18n.t("projects.cta.button")}
                    </a>
                </Reveal>

                <Reveal entrance=Entrance::up(30.0).delay(0.8) class="stats">
                    {PROJECT_STATS
                        .into_iter()
                        .enumerate()
                        .map(|(index, stat)| {
                            let label = stat.label_key();
                            view! {
                                <div class="stat">
                                    <Reveal
                                        entrance=Entrance::fade().duration(0.6).stagger(index, 0.1)
                                        class="stat__value"
                                    >
                                        {stat.value}
                                    </Reveal>
                                    <p>{move || i18n.t(&label)}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </Reveal>
            </div>
        </section>
    }
}

/// The project list of one tab. Follows the language; `leaving` switches it to
/// the exit animation.
#[component]
fn ProjectPanel(tab: ProjectTab, leaving: ReadSignal<bool>) -> impl IntoView {
    let i18n = use_i18n();

    let grid = move || {
        let projects = tab.projects(i18n.dictionary()).unwrap_or_else(|e| {
            leptos::logging::warn!("{e}");
            Vec::new()
        });
        if projects.is_empty() {
            view! { <ProjectGridEmpty /> }.into_any()
        } else {
            view! { <ProjectGrid projects=projects /> }.into_any()
        }
    };

    view! {
        <div
            class="project-panel"
            class=("project-panel--leaving", move || leaving.get())
            role="tabpanel"
            data-tab=tab.key()
        >
            {grid}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Project;
    use crate::i18n::{provide_i18n, Catalog};
    use crate::preferences::Language;

    fn titles(tab: ProjectTab) -> Vec<String> {
        tab.projects(Catalog::embedded().dictionary(Language::En))
            .unwrap()
            .into_iter()
            .map(|Project { title, .. }| title)
            .collect()
    }

    fn render(tab: ProjectTab) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_i18n(Language::En);
            view! { <Projects initial_tab=tab /> }.to_html()
        })
    }

    #[test]
    fn default_tab_renders_only_software_projects() {
        let html = render(ProjectTab::default());
        for title in titles(ProjectTab::Software) {
            assert!(html.contains(&title), "missing {title}");
        }
        for title in titles(ProjectTab::Data) {
            assert!(!html.contains(&title), "unexpected {title}");
        }
    }

    #[test]
    fn data_tab_renders_exactly_the_data_projects() {
        let html = render(ProjectTab::Data);
        for title in titles(ProjectTab::Data) {
            assert!(html.contains(&title), "missing {title}");
        }
        for title in titles(ProjectTab::Software) {
            assert!(!html.contains(&title), "unexpected {title}");
        }
        assert!(html.contains(r#"data-tab="data""#));
    }

    #[test]
    fn panel_is_not_leaving_at_rest() {
        let html = render(ProjectTab::Data);
        assert!(html.contains("project-panel"));
        assert!(!html.contains("project-panel--leaving"));
    }

    #[test]
    fn exit_duration_matches_stylesheet() {
        let css = include_str!("../../style/main.scss");
        assert!(css.contains("@keyframes panel-exit"));
        assert!(css.contains(&format!(
            "animation: panel-exit {}s",
            PANEL_EXIT.as_secs_f32()
        )));
    }
}
