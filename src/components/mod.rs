mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod icons;
mod language_toggle;
mod project_card;
mod project_grid;
mod projects;
mod reveal;
mod section_heading;
mod skills;
mod theme_toggle;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icons::{Icon, IconSvg};
pub use language_toggle::LanguageToggle;
pub use project_card::ProjectCard;
pub use project_grid::{ProjectGrid, ProjectGridEmpty};
pub use projects::Projects;
pub use reveal::{Entrance, Reveal};
pub use section_heading::SectionHeading;
pub use skills::Skills;
pub use theme_toggle::ThemeToggle;
