use leptos::prelude::*;
use url::Url;

use super::{Entrance, Icon, IconSvg, Reveal};
use crate::content::Project;
use crate::i18n::use_i18n;

/// Icon and title for a link to a known code forge.
fn forge_icon(link: &str) -> Option<(Icon, &'static str)> {
    let url = Url::parse(link).ok()?;
    match url.host_str()? {
        "github.com" | "www.github.com" => Some((Icon::Github, "GitHub")),
        host if host == "gitlab.com" || host.starts_with("gitlab.") => {
            Some((Icon::GitBranch, "GitLab"))
        }
        _ => None,
    }
}

#[component]
pub fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let i18n = use_i18n();
    let Project {
        title,
        description,
        tech,
        link,
    } = project;

    let (code_icon, code_title) = forge_icon(&link).unwrap_or((Icon::Code, ""));
    let entrance = Entrance::up(30.0).duration(0.6).stagger(index, 0.1);

    view! {
        <li class="project-card">
            <Reveal entrance=entrance class="card card--hover project-card__body">
                <h3>{title}</h3>
                <p class="project-card__description">{description}</p>
                <div class="project-card__tech">
                    {tech
                        .into_iter()
                        .map(|t| view! { <span class="badge">{t}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="project-card__links">
                    <a
                        class="button button--outline button--small"
                        href=link.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        title=code_title
                    >
                        <IconSvg icon=code_icon size=16 />
                        <span>{move || i18n.t("projects.code")}</span>
                    </a>
                    <a
                        class="button button--outline button--small"
                        href=link
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <IconSvg icon=Icon::ExternalLink size=16 />
                        <span>{move || i18n.t("projects.demo")}</span>
                    </a>
                </div>
            </Reveal>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forge_icon_recognises_github_and_gitlab() {
        assert_eq!(
            forge_icon("https://github.com/ahmed-elarosi"),
            Some((Icon::Github, "GitHub"))
        );
        assert_eq!(
            forge_icon("https://gitlab.example.org/group/repo"),
            Some((Icon::GitBranch, "GitLab"))
        );
    }

    #[test]
    fn forge_icon_ignores_other_hosts() {
        assert_eq!(forge_icon("https://example.com/demo"), None);
        assert_eq!(forge_icon("not a url"), None);
        // Substring matches in the path must not count.
        assert_eq!(forge_icon("https://example.com/github.com"), None);
    }
}
